//! Central registry for all user-facing message templates.
//!
//! - `report` - section titles and line labels of the hardware report
//! - `cli` - messages printed by the `hwinfo` binary itself
//!
//! ```rust
//! use hw_messages::MESSAGES;
//!
//! let title = MESSAGES.report.processor_title;
//! let err = MESSAGES.cli.error_generic;
//! ```

mod cli;
mod report;

pub use cli::{CliMessages, CLI_MESSAGES};
pub use report::{ReportMessages, REPORT_MESSAGES};

pub struct Messages {
    pub report: ReportMessages,
    pub cli: CliMessages,
}

pub const MESSAGES: Messages = Messages {
    report: REPORT_MESSAGES,
    cli: CLI_MESSAGES,
};
