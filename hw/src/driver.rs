//! One hwinfo run: pick the attribute source, collect, render, write.

use crate::cli::{Args, OutputFormat};
use anyhow::Context;
use hw_core::error::Result;
use hw_core::hw_warning;
use hw_messages::{msg, MESSAGES};
use hw_platform::{FixturePlatform, PlatformProvider, PlatformRegistry};
use hw_report::{HardwareReport, PresentationFormatter, ReportSection};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, info_span};
use uuid::Uuid;

pub struct ReportDriver {
    platform: Arc<dyn PlatformProvider>,
    sections: Vec<ReportSection>,
    format: OutputFormat,
}

impl ReportDriver {
    pub fn from_args(args: &Args) -> Result<Self> {
        let platform: Arc<dyn PlatformProvider> = match &args.fixture {
            Some(path) => Arc::new(load_fixture(path)?),
            None => {
                if !PlatformRegistry::has_attribute_interface() {
                    hw_warning!("{}", msg!(MESSAGES.cli.unsupported_host, platform = std::env::consts::OS));
                }
                PlatformRegistry::current()
            }
        };

        Ok(Self {
            platform,
            sections: args.report_sections(),
            format: args.format,
        })
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform.name()
    }

    /// Collects every requested section in fetch order and renders once.
    pub fn render(&self) -> Result<String> {
        let run_id = Uuid::new_v4();
        let span = info_span!("report", run_id = %run_id, platform = self.platform_name());
        let _enter = span.enter();

        info!(sections = ?self.sections, format = ?self.format, "collecting report");
        let report = HardwareReport::collect(self.platform.as_ref(), &self.sections);

        let output = match self.format {
            OutputFormat::Text => PresentationFormatter::default().render(&report),
            OutputFormat::Json => report.to_json()? + "\n",
        };
        info!(bytes = output.len(), "report rendered");
        Ok(output)
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let output = self.render()?;
        out.write_all(output.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn load_fixture(path: &Path) -> Result<FixturePlatform> {
    debug!(path = %path.display(), "loading fixture");
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture '{}'", path.display()))?;
    FixturePlatform::from_json(&text)
}
