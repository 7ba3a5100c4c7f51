//! Host provider implementations.

#[cfg(target_os = "macos")]
pub mod macos;

pub mod fixture;
pub mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::MacOSPlatform;

pub use fixture::FixturePlatform;
pub use unsupported::UnsupportedPlatform;
