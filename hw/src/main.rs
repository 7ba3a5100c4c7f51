// Standard library
use std::io;

// External crates
use clap::Parser;
use tracing::{debug, Level};

// Internal imports
use hw_core::{hw_error, hw_error_hint, hw_warning, HwError};
use hw_logging::{init_subscriber, LogConfig};
use hw_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod driver;

use cli::Args;
use driver::ReportDriver;

fn main() {
    let args = Args::parse();

    // Tests expect clean stderr, so the subscriber stays off in test mode
    let _log_guard = if std::env::var("HWINFO_TEST_MODE").is_err() {
        let default_level = if args.debug { Level::DEBUG } else { Level::WARN };
        match init_subscriber(&LogConfig::from_env(default_level)) {
            Ok(guard) => guard,
            Err(e) => {
                hw_warning!("{}", msg!(MESSAGES.cli.logging_init_failed, error = e.to_string()));
                None
            }
        }
    } else {
        None
    };

    debug!(?args, "starting hwinfo");

    if let Err(e) = run(&args) {
        hw_error!("{}", msg!(MESSAGES.cli.error_generic, error = e.to_string()));
        if matches!(e, HwError::Fixture(_)) {
            hw_error_hint!("{}", MESSAGES.cli.fixture_hint);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> hw_core::Result<()> {
    let driver = ReportDriver::from_args(args)?;
    driver.run(&mut io::stdout().lock())
}
