use serde::{Deserialize, Serialize};

/// Geometry and identity of one active display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub id: u32,
    pub width: u64,
    pub height: u64,
    /// `None` when the host reports no fixed refresh rate (0 Hz).
    #[serde(default)]
    pub refresh_hz: Option<f64>,
    #[serde(default)]
    pub vendor: u32,
    #[serde(default)]
    pub model: u32,
    #[serde(default)]
    pub serial: u32,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub is_builtin: bool,
}
