// CLI argument parsing and definitions

use clap::{Parser, ValueEnum};
use hw_report::ReportSection;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-indented sections
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report, unavailable fields as null
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Processor,
    Memory,
    Os,
    Displays,
}

impl From<SectionArg> for ReportSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Processor => ReportSection::Processor,
            SectionArg::Memory => ReportSection::Memory,
            SectionArg::Os => ReportSection::Os,
            SectionArg::Displays => ReportSection::Displays,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "hwinfo")]
#[command(about = "Report CPU topology, caches, memory, OS and display facts of this host")]
#[command(version)]
pub struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only report these sections (repeatable; default is all)
    #[arg(short, long = "section", value_enum)]
    pub sections: Vec<SectionArg>,

    /// Skip display enumeration
    #[arg(long)]
    pub no_displays: bool,

    /// Read attributes from a JSON fixture instead of the host
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Requested sections in fetch order, without duplicates.
    pub fn report_sections(&self) -> Vec<ReportSection> {
        ReportSection::ALL
            .into_iter()
            .filter(|section| {
                self.sections.is_empty()
                    || self.sections.iter().any(|arg| ReportSection::from(*arg) == *section)
            })
            .filter(|section| !(self.no_displays && *section == ReportSection::Displays))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hwinfo").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.fixture.is_none());
        assert_eq!(args.report_sections(), ReportSection::ALL.to_vec());
    }

    #[test]
    fn test_sections_keep_fetch_order() {
        let args = parse(&["--section", "displays", "--section", "memory", "-s", "memory"]);
        assert_eq!(
            args.report_sections(),
            vec![ReportSection::Memory, ReportSection::Displays]
        );
    }

    #[test]
    fn test_no_displays_wins() {
        let args = parse(&["--no-displays", "--section", "displays", "--section", "os"]);
        assert_eq!(args.report_sections(), vec![ReportSection::Os]);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let argv = ["hwinfo", "--format", "yaml"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
