//! Dotted keys of the host attribute namespace.

// Flat processor topology
pub const PACKAGES: &str = "hw.packages";
pub const PHYSICAL_CPU: &str = "hw.physicalcpu";
pub const PHYSICAL_CPU_MAX: &str = "hw.physicalcpu_max";
pub const LOGICAL_CPU: &str = "hw.logicalcpu";
pub const LOGICAL_CPU_MAX: &str = "hw.logicalcpu_max";
pub const ACTIVE_CPU: &str = "hw.activecpu";
pub const BYTE_ORDER: &str = "hw.byteorder";
pub const CPU_TYPE: &str = "hw.cputype";
pub const CPU_SUBTYPE: &str = "hw.cpusubtype";
pub const CPU_THREAD_TYPE: &str = "hw.cputhreadtype";
pub const CPU_FAMILY: &str = "hw.cpufamily";
pub const CPU_SUBFAMILY: &str = "hw.cpusubfamily";
pub const CPU_64BIT_CAPABLE: &str = "hw.cpu64bit_capable";
pub const CPU_FREQUENCY: &str = "hw.cpufrequency";
pub const CPU_FREQUENCY_MIN: &str = "hw.cpufrequency_min";
pub const CPU_FREQUENCY_MAX: &str = "hw.cpufrequency_max";
pub const MACHINE: &str = "hw.machine";
pub const MODEL: &str = "hw.model";
pub const BRAND_STRING: &str = "machdep.cpu.brand_string";
pub const PERF_LEVEL_COUNT: &str = "hw.nperflevels";

// Memory, as seen from the calling core
pub const MEM_SIZE: &str = "hw.memsize";
pub const PAGE_SIZE: &str = "hw.pagesize";
pub const CACHE_LINE_SIZE: &str = "hw.cachelinesize";
pub const L1D_CACHE_SIZE: &str = "hw.l1dcachesize";
pub const L1I_CACHE_SIZE: &str = "hw.l1icachesize";
pub const L2_CACHE_SIZE: &str = "hw.l2cachesize";
pub const L3_CACHE_SIZE: &str = "hw.l3cachesize";

// OS
pub const OS_RELEASE: &str = "kern.osrelease";
pub const OS_PRODUCT_VERSION: &str = "kern.osproductversion";
pub const OS_BUILD: &str = "kern.osversion";
pub const STACK_SIZE: &str = "kern.stack_size";
pub const TIMEBASE_FREQUENCY: &str = "hw.tbfrequency";
pub const VIRTUAL_ADDRESS_BITS: &str = "machdep.virtual_address_size";

/// Fields under `hw.perflevel<N>.`
pub mod perflevel {
    pub const NAME: &str = "name";
    pub const PHYSICAL_CPU: &str = "physicalcpu";
    pub const PHYSICAL_CPU_MAX: &str = "physicalcpu_max";
    pub const LOGICAL_CPU: &str = "logicalcpu";
    pub const LOGICAL_CPU_MAX: &str = "logicalcpu_max";
    pub const L1D_CACHE_SIZE: &str = "l1dcachesize";
    pub const L1I_CACHE_SIZE: &str = "l1icachesize";
    pub const L2_CACHE_SIZE: &str = "l2cachesize";
    pub const CPUS_PER_L2: &str = "cpusperl2";
    pub const L3_CACHE_SIZE: &str = "l3cachesize";
    pub const CPUS_PER_L3: &str = "cpusperl3";
}

/// `hw.perflevel<level>.<field>`
pub fn perflevel_key(level: usize, field: &str) -> String {
    format!("hw.perflevel{}.{}", level, field)
}
