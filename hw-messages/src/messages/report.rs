//! Section titles and line labels for the hardware report.
//!
//! Labels carry no trailing colon or padding; the formatter adds both.

pub struct ReportMessages {
    // ============================================================================
    // Sections
    // ============================================================================
    pub processor_title: &'static str,
    pub memory_title: &'static str,
    pub os_title: &'static str,
    pub displays_title: &'static str,
    pub core_type_title: &'static str,
    pub core_type_named_title: &'static str,
    pub display_title: &'static str,

    // ============================================================================
    // Processor
    // ============================================================================
    pub brand: &'static str,
    pub machine: &'static str,
    pub model: &'static str,
    pub packages: &'static str,
    pub physical_cores: &'static str,
    pub physical_enabled: &'static str,
    pub physical_inactive: &'static str,
    pub physical_total: &'static str,
    pub logical_cores: &'static str,
    pub logical_enabled: &'static str,
    pub logical_inactive: &'static str,
    pub logical_total: &'static str,
    pub active_cpus: &'static str,
    pub cpu_type: &'static str,
    pub cpu_subtype: &'static str,
    pub cpu_family: &'static str,
    pub cpu_subfamily: &'static str,
    pub thread_type: &'static str,
    pub cpu64_capable: &'static str,
    pub byte_order: &'static str,
    pub frequency: &'static str,
    pub frequency_min: &'static str,
    pub frequency_max: &'static str,
    pub perf_levels: &'static str,

    // ============================================================================
    // Caches (per level and per process)
    // ============================================================================
    pub l1d_cache: &'static str,
    pub l1i_cache: &'static str,
    pub l2_cache: &'static str,
    pub l2_sharing: &'static str,
    pub l3_cache: &'static str,
    pub l3_sharing: &'static str,

    // ============================================================================
    // Memory
    // ============================================================================
    pub total_memory: &'static str,
    pub page_size: &'static str,
    pub cache_line: &'static str,

    // ============================================================================
    // OS
    // ============================================================================
    pub kernel_version: &'static str,
    pub os_version: &'static str,
    pub os_build: &'static str,
    pub stack_size: &'static str,
    pub timebase: &'static str,
    pub address_bits: &'static str,
    pub address_range: &'static str,

    // ============================================================================
    // Displays
    // ============================================================================
    pub resolution: &'static str,
    pub refresh_rate: &'static str,
    pub vendor: &'static str,
    pub display_model: &'static str,
    pub serial: &'static str,
    pub main_display: &'static str,
    pub builtin_display: &'static str,

    // ============================================================================
    // Values
    // ============================================================================
    pub little_endian: &'static str,
    pub big_endian: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

pub const REPORT_MESSAGES: ReportMessages = ReportMessages {
    // Sections
    processor_title: "Processor",
    memory_title: "Memory",
    os_title: "OS",
    displays_title: "Displays",
    core_type_title: "Core type {index}",
    core_type_named_title: "Core type {index} ({name})",
    display_title: "Display {id}",

    // Processor
    brand: "CPU brand",
    machine: "Machine",
    model: "Model",
    packages: "Packages",
    physical_cores: "Physical cores",
    physical_enabled: "Physical cores enabled",
    physical_inactive: "Physical cores inactive",
    physical_total: "Physical cores total",
    logical_cores: "Logical cores",
    logical_enabled: "Logical cores enabled",
    logical_inactive: "Logical cores inactive",
    logical_total: "Logical cores total",
    active_cpus: "Active CPUs",
    cpu_type: "CPU type",
    cpu_subtype: "CPU subtype",
    cpu_family: "CPU family",
    cpu_subfamily: "CPU subfamily",
    thread_type: "CPU thread type",
    cpu64_capable: "64-bit capable",
    byte_order: "Byte order",
    frequency: "CPU frequency",
    frequency_min: "CPU frequency min",
    frequency_max: "CPU frequency max",
    perf_levels: "Performance levels",

    // Caches
    l1d_cache: "L1 data cache",
    l1i_cache: "L1 instruction cache",
    l2_cache: "L2 cache",
    l2_sharing: "CPUs per L2",
    l3_cache: "L3 cache",
    l3_sharing: "CPUs per L3",

    // Memory
    total_memory: "Total physical",
    page_size: "Page size",
    cache_line: "Cache line size",

    // OS
    kernel_version: "Kernel version",
    os_version: "OS version",
    os_build: "OS build",
    stack_size: "Stack size",
    timebase: "Time base frequency",
    address_bits: "Virtual address bits",
    address_range: "Virtual address range",

    // Displays
    resolution: "Resolution",
    refresh_rate: "Refresh rate",
    vendor: "Vendor",
    display_model: "Model",
    serial: "Serial number",
    main_display: "main",
    builtin_display: "built-in",

    // Values
    little_endian: "Little Endian",
    big_endian: "Big Endian",
    yes: "yes",
    no: "no",
};
