//! Core traits for host abstraction.

use crate::display::DisplayInfo;
use std::io;

/// The named-attribute primitive of the host.
///
/// `query` copies the value stored under `key` into `out` and returns the
/// full length of the stored value. It must never write past `out.len()`:
/// when the stored value is longer, only the prefix that fits is copied and
/// the returned length is larger than `out.len()`.
pub trait AttributeSource: Send + Sync {
    fn query(&self, key: &str, out: &mut [u8]) -> io::Result<usize>;
}

/// Enumeration of attached displays.
pub trait DisplaySource: Send + Sync {
    /// Active displays in host order, or `None` when the host has no
    /// display service at all.
    fn active_displays(&self) -> Option<Vec<DisplayInfo>>;
}

/// A complete host: attributes plus displays.
pub trait PlatformProvider: AttributeSource + DisplaySource {
    /// Get the platform name (e.g., "macos", "unsupported", "fixture")
    fn name(&self) -> &'static str;
}
