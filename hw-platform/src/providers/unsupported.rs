use crate::display::DisplayInfo;
use crate::traits::{AttributeSource, DisplaySource, PlatformProvider};
use std::io;

/// Provider for hosts without a named-attribute interface.
///
/// Every query fails, so a report built on it contains section titles only.
pub struct UnsupportedPlatform;

impl PlatformProvider for UnsupportedPlatform {
    fn name(&self) -> &'static str {
        "unsupported"
    }
}

impl AttributeSource for UnsupportedPlatform {
    fn query(&self, key: &str, _out: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no attribute interface on this host for '{}'", key),
        ))
    }
}

impl DisplaySource for UnsupportedPlatform {
    fn active_displays(&self) -> Option<Vec<DisplayInfo>> {
        None
    }
}
