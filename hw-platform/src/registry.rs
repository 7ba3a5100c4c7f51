//! Platform registry for detecting and providing host implementations.

use crate::providers::UnsupportedPlatform;
use crate::traits::PlatformProvider;
use std::sync::Arc;

#[cfg(target_os = "macos")]
use crate::providers::MacOSPlatform;

/// Platform registry for detecting the current host and creating providers.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Get the provider for the current operating system.
    ///
    /// Hosts without a named-attribute interface get
    /// [`UnsupportedPlatform`], which answers every query with an error.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOSPlatform);

        #[cfg(not(target_os = "macos"))]
        return Arc::new(UnsupportedPlatform);
    }

    /// Get a provider by name ("macos", "darwin", "osx", "unsupported").
    ///
    /// Returns `None` for names this build cannot serve.
    pub fn for_name(name: &str) -> Option<Arc<dyn PlatformProvider>> {
        match name.to_lowercase().as_str() {
            "macos" | "darwin" | "osx" => {
                #[cfg(target_os = "macos")]
                return Some(Arc::new(MacOSPlatform));
                #[cfg(not(target_os = "macos"))]
                return None;
            }
            "unsupported" | "none" => Some(Arc::new(UnsupportedPlatform)),
            _ => None,
        }
    }

    pub fn current_platform_name() -> &'static str {
        Self::current().name()
    }

    /// Returns true when the current host exposes real attributes.
    pub fn has_attribute_interface() -> bool {
        Self::current_platform_name() != "unsupported"
    }

    /// List all names accepted by `for_name()` in this build.
    pub fn supported_platforms() -> Vec<&'static str> {
        let mut platforms = Vec::new();

        #[cfg(target_os = "macos")]
        {
            platforms.extend_from_slice(&["macos", "darwin", "osx"]);
        }

        platforms.extend_from_slice(&["unsupported", "none"]);
        platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_name() {
        let name = PlatformRegistry::current_platform_name();
        assert!(["macos", "unsupported"].contains(&name));
    }

    #[test]
    fn test_supported_platforms_contains_current() {
        let platforms = PlatformRegistry::supported_platforms();
        assert!(platforms.contains(&PlatformRegistry::current_platform_name()));
    }

    #[test]
    fn test_for_name() {
        let provider = PlatformRegistry::for_name("NONE").unwrap();
        assert_eq!(provider.name(), "unsupported");
        assert!(PlatformRegistry::for_name("windows").is_none());
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_non_macos_has_no_interface() {
        assert!(!PlatformRegistry::has_attribute_interface());
        assert!(PlatformRegistry::for_name("darwin").is_none());
    }
}
