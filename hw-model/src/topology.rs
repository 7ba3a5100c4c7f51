//! Processor topology: flat package-wide fields plus one record per
//! performance level.
//!
//! Level ordinals follow the host: level 0 is the highest-performance tier
//! (e.g. the "Performance" cluster on Apple silicon), higher ordinals are
//! progressively more efficient.

use crate::attribute::AttributeResult;
use crate::fetcher::{AttributeFetcher, DEFAULT_TEXT_CAPACITY};
use crate::keys::{self, perflevel, perflevel_key};
use hw_platform::AttributeSource;
use serde::Serialize;
use tracing::{debug, warn};

/// More levels than any shipping part; guards against a corrupt count.
pub const MAX_PERF_LEVELS: u32 = 64;

const LEVEL_NAME_CAPACITY: usize = 64;

/// Current (enabled in this power mode) and maximum core counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CoreCounts {
    pub current: AttributeResult<u32>,
    pub max: AttributeResult<u32>,
}

impl CoreCounts {
    fn fetch<S: AttributeSource + ?Sized>(
        fetcher: &AttributeFetcher<'_, S>,
        current_key: &str,
        max_key: &str,
    ) -> Self {
        Self {
            current: fetcher.fetch_i32(current_key).non_negative(),
            max: fetcher.fetch_i32(max_key).non_negative(),
        }
    }

    /// Cores present but not enabled: `max - current`.
    pub fn inactive(&self) -> AttributeResult<u32> {
        self.max
            .zip(self.current)
            .and_then(|(max, current)| max.checked_sub(current).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrequencyRange {
    pub current: AttributeResult<u64>,
    pub min: AttributeResult<u64>,
    pub max: AttributeResult<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceLevel {
    pub index: usize,
    pub name: AttributeResult<String>,
    pub physical: CoreCounts,
    pub logical: CoreCounts,
    pub l1d_cache: AttributeResult<u64>,
    pub l1i_cache: AttributeResult<u64>,
    pub l2_cache: AttributeResult<u64>,
    pub cpus_per_l2: AttributeResult<u32>,
    /// Many efficiency tiers have no L3 at all.
    pub l3_cache: AttributeResult<u64>,
    pub cpus_per_l3: AttributeResult<u32>,
}

impl PerformanceLevel {
    fn fetch<S: AttributeSource + ?Sized>(fetcher: &AttributeFetcher<'_, S>, index: usize) -> Self {
        let key = |field: &str| perflevel_key(index, field);
        let size = |field: &str| fetcher.fetch_i32(&key(field)).non_negative().map(u64::from);
        let count = |field: &str| fetcher.fetch_i32(&key(field)).non_negative();

        Self {
            index,
            name: fetcher.fetch_text(&key(perflevel::NAME), LEVEL_NAME_CAPACITY),
            physical: CoreCounts::fetch(
                fetcher,
                &key(perflevel::PHYSICAL_CPU),
                &key(perflevel::PHYSICAL_CPU_MAX),
            ),
            logical: CoreCounts::fetch(
                fetcher,
                &key(perflevel::LOGICAL_CPU),
                &key(perflevel::LOGICAL_CPU_MAX),
            ),
            l1d_cache: size(perflevel::L1D_CACHE_SIZE),
            l1i_cache: size(perflevel::L1I_CACHE_SIZE),
            l2_cache: size(perflevel::L2_CACHE_SIZE),
            cpus_per_l2: count(perflevel::CPUS_PER_L2),
            l3_cache: size(perflevel::L3_CACHE_SIZE),
            cpus_per_l3: count(perflevel::CPUS_PER_L3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Topology {
    pub brand: AttributeResult<String>,
    pub machine: AttributeResult<String>,
    pub model: AttributeResult<String>,
    pub packages: AttributeResult<u32>,
    pub physical: CoreCounts,
    pub logical: CoreCounts,
    pub active_cpus: AttributeResult<u32>,
    pub byte_order: AttributeResult<i32>,
    pub cpu_type: AttributeResult<i32>,
    pub cpu_subtype: AttributeResult<i32>,
    pub thread_type: AttributeResult<i32>,
    pub family: AttributeResult<u32>,
    pub subfamily: AttributeResult<i32>,
    pub cpu64_capable: AttributeResult<bool>,
    pub frequency: FrequencyRange,
    /// Level count as reported; `levels` is empty when this is unavailable.
    pub level_count: AttributeResult<u32>,
    pub levels: Vec<PerformanceLevel>,
}

impl Topology {
    /// Never fails: the worst case is every field unavailable and no levels.
    pub fn discover<S: AttributeSource + ?Sized>(fetcher: &AttributeFetcher<'_, S>) -> Self {
        let mut topology = Self {
            brand: fetcher.fetch_text(keys::BRAND_STRING, DEFAULT_TEXT_CAPACITY),
            machine: fetcher.fetch_text(keys::MACHINE, DEFAULT_TEXT_CAPACITY),
            model: fetcher.fetch_text(keys::MODEL, DEFAULT_TEXT_CAPACITY),
            packages: fetcher.fetch_i32(keys::PACKAGES).non_negative(),
            physical: CoreCounts::fetch(fetcher, keys::PHYSICAL_CPU, keys::PHYSICAL_CPU_MAX),
            logical: CoreCounts::fetch(fetcher, keys::LOGICAL_CPU, keys::LOGICAL_CPU_MAX),
            active_cpus: fetcher.fetch_i32(keys::ACTIVE_CPU).non_negative(),
            byte_order: fetcher.fetch_i32(keys::BYTE_ORDER),
            cpu_type: fetcher.fetch_i32(keys::CPU_TYPE),
            cpu_subtype: fetcher.fetch_i32(keys::CPU_SUBTYPE),
            thread_type: fetcher.fetch_i32(keys::CPU_THREAD_TYPE),
            family: fetcher.fetch_u32(keys::CPU_FAMILY),
            subfamily: fetcher.fetch_i32(keys::CPU_SUBFAMILY),
            cpu64_capable: fetcher.fetch_i32(keys::CPU_64BIT_CAPABLE).map(|v| v != 0),
            frequency: FrequencyRange {
                current: fetcher.fetch_i64(keys::CPU_FREQUENCY).non_negative(),
                min: fetcher.fetch_i64(keys::CPU_FREQUENCY_MIN).non_negative(),
                max: fetcher.fetch_i64(keys::CPU_FREQUENCY_MAX).non_negative(),
            },
            level_count: fetcher.fetch_i32(keys::PERF_LEVEL_COUNT).non_negative(),
            levels: Vec::new(),
        };

        // The per-level namespace is only walked once the count is known.
        topology.levels = (0..Self::clamp_level_count(topology.level_count) as usize)
            .map(|index| PerformanceLevel::fetch(fetcher, index))
            .collect();
        debug!(levels = topology.levels.len(), "discovered performance levels");
        topology
    }

    fn clamp_level_count(count: AttributeResult<u32>) -> u32 {
        let count = count.unwrap_or(0);
        if count > MAX_PERF_LEVELS {
            warn!(count, max = MAX_PERF_LEVELS, "clamping performance level count");
            MAX_PERF_LEVELS
        } else {
            count
        }
    }

    /// Cores per package times package count.
    pub fn total_physical_cores(&self) -> AttributeResult<u32> {
        Self::across_packages(self.physical.max, self.packages)
    }

    pub fn total_logical_cores(&self) -> AttributeResult<u32> {
        Self::across_packages(self.logical.max, self.packages)
    }

    fn across_packages(
        per_package: AttributeResult<u32>,
        packages: AttributeResult<u32>,
    ) -> AttributeResult<u32> {
        per_package
            .zip(packages)
            .and_then(|(cores, packages)| cores.checked_mul(packages).into())
    }
}
