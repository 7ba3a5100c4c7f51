use crate::attribute::AttributeResult;
use crate::fetcher::{AttributeFetcher, DEFAULT_TEXT_CAPACITY};
use crate::keys;
use hw_platform::AttributeSource;
use serde::Serialize;

/// Memory and cache sizes as seen by the core running this process.
///
/// The cache sizes here are the calling core's view and may differ from
/// the per-level values in [`crate::Topology`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MemoryProfile {
    pub total: AttributeResult<u64>,
    pub page_size: AttributeResult<u64>,
    pub cache_line: AttributeResult<u64>,
    pub l1d_cache: AttributeResult<u64>,
    pub l1i_cache: AttributeResult<u64>,
    pub l2_cache: AttributeResult<u64>,
    pub l3_cache: AttributeResult<u64>,
}

impl MemoryProfile {
    pub fn collect<S: AttributeSource + ?Sized>(fetcher: &AttributeFetcher<'_, S>) -> Self {
        let size = |key: &str| fetcher.fetch_i64(key).non_negative();
        Self {
            total: size(keys::MEM_SIZE),
            page_size: size(keys::PAGE_SIZE),
            cache_line: size(keys::CACHE_LINE_SIZE),
            l1d_cache: size(keys::L1D_CACHE_SIZE),
            l1i_cache: size(keys::L1I_CACHE_SIZE),
            l2_cache: size(keys::L2_CACHE_SIZE),
            l3_cache: size(keys::L3_CACHE_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OsProfile {
    pub kernel_version: AttributeResult<String>,
    pub product_version: AttributeResult<String>,
    pub build: AttributeResult<String>,
    pub stack_size: AttributeResult<u64>,
    /// Base of all OS timing services, in Hz.
    pub timebase_frequency: AttributeResult<u64>,
    pub virtual_address_bits: AttributeResult<u32>,
}

impl OsProfile {
    pub fn collect<S: AttributeSource + ?Sized>(fetcher: &AttributeFetcher<'_, S>) -> Self {
        let text = |key: &str| fetcher.fetch_text(key, DEFAULT_TEXT_CAPACITY);
        Self {
            kernel_version: text(keys::OS_RELEASE),
            product_version: text(keys::OS_PRODUCT_VERSION),
            build: text(keys::OS_BUILD),
            stack_size: fetcher.fetch_i32(keys::STACK_SIZE).non_negative().map(u64::from),
            timebase_frequency: fetcher.fetch_i64(keys::TIMEBASE_FREQUENCY).non_negative(),
            virtual_address_bits: fetcher.fetch_i32(keys::VIRTUAL_ADDRESS_BITS).non_negative(),
        }
    }

    /// Highest address of a `virtual_address_bits`-wide space.
    pub fn max_virtual_address(&self) -> AttributeResult<u64> {
        self.virtual_address_bits.map(|bits| match bits {
            0 => 0,
            1..=63 => (1u64 << bits) - 1,
            _ => u64::MAX,
        })
    }
}
