//! Tracing setup for hwinfo.
//!
//! stdout carries the report, so console logs always go to stderr.
//!
//! Environment:
//! - `RUST_LOG` - standard filter directives, wins over everything else
//! - `LOG_LEVEL` - plain level used when `RUST_LOG` is unset
//! - `LOG_FORMAT` - `human` (default), `compact` or `json`
//! - `LOG_OUTPUT` - `console` (default), `file` or `both`
//! - `LOG_FILE_PATH` - log file for `file`/`both` (default `/tmp/hwinfo.log`)

use hw_core::error::{HwError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter, Layer,
};

const DEFAULT_LOG_FILE: &str = "/tmp/hwinfo.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

impl LogOutput {
    fn console(self) -> bool {
        matches!(self, LogOutput::Console | LogOutput::Both)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogConfig {
    /// Read `LOG_*` variables, falling back to `default_level` for the level.
    pub fn from_env(default_level: Level) -> Self {
        Self::from_lookup(default_level, |key| env::var(key).ok())
    }

    fn from_lookup(default_level: Level, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = lookup("LOG_LEVEL").unwrap_or_else(|| default_level.to_string().to_lowercase());
        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Human,
        };
        let output = match lookup("LOG_OUTPUT").as_deref() {
            Some("file") => LogOutput::File,
            Some("both") => LogOutput::Both,
            _ => LogOutput::Console,
        };
        let file_path = lookup("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            level,
            format,
            output,
            file_path,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Human => layer.pretty().boxed(),
    }
}

/// Installs the global subscriber.
///
/// Returns the file writer guard when logging to a file; keep it alive for
/// the whole run or buffered lines are lost. Returns `Err` if a global
/// subscriber is already set.
pub fn init_subscriber(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let mut guard = None;

    let console_layer = config
        .output
        .console()
        .then(|| format_layer(config.format, std::io::stderr, true));

    let file_layer = if config.output.file() {
        let log_dir = config.file_path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let log_name = config
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "hwinfo.log".into());
        let appender = tracing_appender::rolling::daily(log_dir, log_name);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(appender);
        guard = Some(file_guard);
        Some(format_layer(config.format, non_blocking, false))
    } else {
        None
    };

    registry()
        .with(config.env_filter())
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| HwError::Internal(format!("Failed to initialize tracing: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LogConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogConfig::from_lookup(Level::WARN, |key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Human);
        assert_eq!(config.output, LogOutput::Console);
        assert_eq!(config.file_path, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("LOG_LEVEL", "trace"),
            ("LOG_FORMAT", "json"),
            ("LOG_OUTPUT", "both"),
            ("LOG_FILE_PATH", "/var/tmp/hwinfo-debug.log"),
        ]);
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.output, LogOutput::Both);
        assert_eq!(config.file_path, PathBuf::from("/var/tmp/hwinfo-debug.log"));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = config_from(&[("LOG_FORMAT", "xml"), ("LOG_OUTPUT", "syslog")]);
        assert_eq!(config.format, LogFormat::Human);
        assert_eq!(config.output, LogOutput::Console);
    }

    #[test]
    fn test_output_routing() {
        assert!(LogOutput::Console.console() && !LogOutput::Console.file());
        assert!(!LogOutput::File.console() && LogOutput::File.file());
        assert!(LogOutput::Both.console() && LogOutput::Both.file());
    }

    #[test]
    fn test_file_output_returns_guard() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = config_from(&[("LOG_OUTPUT", "file")]);
        config.file_path = dir.path().join("hwinfo.log");

        // Only one global subscriber may exist per test binary.
        let guard = init_subscriber(&config).unwrap();
        assert!(guard.is_some());
        tracing::warn!("file logging works");
    }
}
