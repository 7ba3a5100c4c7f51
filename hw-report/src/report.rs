//! Collection of one complete report.

use hw_core::error::Result;
use hw_model::{AttributeFetcher, MemoryProfile, OsProfile, Topology};
use hw_platform::{DisplayInfo, PlatformProvider};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportSection {
    Processor,
    Memory,
    Os,
    Displays,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Processor,
        ReportSection::Memory,
        ReportSection::Os,
        ReportSection::Displays,
    ];
}

/// Everything one run gathered. Sections that were not requested are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HardwareReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Topology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<OsProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displays: Option<Vec<DisplayInfo>>,
}

impl HardwareReport {
    /// Fetches the requested sections in fixed order: processor, memory,
    /// OS, displays.
    pub fn collect<P: PlatformProvider + ?Sized>(platform: &P, sections: &[ReportSection]) -> Self {
        let wants = |section| sections.contains(&section);
        let fetcher = AttributeFetcher::new(platform);

        let report = Self {
            processor: wants(ReportSection::Processor).then(|| Topology::discover(&fetcher)),
            memory: wants(ReportSection::Memory).then(|| MemoryProfile::collect(&fetcher)),
            os: wants(ReportSection::Os).then(|| OsProfile::collect(&fetcher)),
            displays: if wants(ReportSection::Displays) {
                platform.active_displays()
            } else {
                None
            },
        };

        info!(
            platform = platform.name(),
            levels = report.processor.as_ref().map_or(0, |t| t.levels.len()),
            displays = report.displays.as_ref().map_or(0, Vec::len),
            "report collected"
        );
        report
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
