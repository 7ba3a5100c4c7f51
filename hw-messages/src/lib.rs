//! hw-messages
//!
//! Centralized messaging for the hwinfo CLI.
//! Every section title, line label and CLI message lives here so the
//! report layout can be changed without touching the formatter.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
