//! Presentation of the hardware model.
//!
//! Sections are built declaratively as labelled lines whose value is either
//! present or absent; [`layout::render_sections`] drops absent lines. No
//! other code decides whether a field is shown.

pub mod formatter;
pub mod layout;
pub mod report;
pub mod units;

pub use formatter::{render, PresentationFormatter};
pub use layout::{Line, Section};
pub use report::{HardwareReport, ReportSection};
