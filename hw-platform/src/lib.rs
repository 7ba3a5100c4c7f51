//! Host query primitives for hwinfo.
//!
//! Everything that actually talks to the operating system lives behind the
//! traits in [`traits`]. The rest of the workspace only sees an
//! `Arc<dyn PlatformProvider>` and never needs a `#[cfg]` of its own.

pub mod display;
pub mod providers;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use display::DisplayInfo;
pub use providers::{FixturePlatform, UnsupportedPlatform};
pub use registry::PlatformRegistry;
pub use traits::{AttributeSource, DisplaySource, PlatformProvider};
