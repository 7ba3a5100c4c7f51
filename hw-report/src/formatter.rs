//! Model → sections. Every field goes through [`Section::field`] with an
//! `AttributeResult`, derived values included, so an unavailable input
//! can never leak into the output.

use crate::layout::{render_sections, Section};
use crate::report::HardwareReport;
use crate::units::{format_bytes, format_hz, ByteUnit};
use hw_messages::{msg, MESSAGES};
use hw_model::names::cpu_type;
use hw_model::{
    AttributeResult, CoreCounts, MemoryProfile, NameResolver, OsProfile, PerformanceLevel,
    Topology,
};
use hw_platform::DisplayInfo;

const LITTLE_ENDIAN: i32 = 1234;

const SMALL_CACHE: &[ByteUnit] = &[ByteUnit::Kb];
const LARGE_CACHE: &[ByteUnit] = &[ByteUnit::Kb, ByteUnit::Mb];
const MEMORY: &[ByteUnit] = &[ByteUnit::Mb, ByteUnit::Gb];

fn bytes(value: AttributeResult<u64>, units: &[ByteUnit]) -> AttributeResult<String> {
    value.map(|b| format_bytes(b, units))
}

fn plain<T: ToString>(value: AttributeResult<T>) -> AttributeResult<String> {
    value.map(|v| v.to_string())
}

fn text(value: &AttributeResult<String>) -> AttributeResult<String> {
    value.clone()
}

fn yes_no(value: AttributeResult<bool>) -> AttributeResult<String> {
    let m = &MESSAGES.report;
    value.map(|b| (if b { m.yes } else { m.no }).to_string())
}

/// `Little Endian (1234)`; any other present value is big endian.
pub fn byte_order_label(value: i32) -> String {
    let m = &MESSAGES.report;
    let label = if value == LITTLE_ENDIAN {
        m.little_endian
    } else {
        m.big_endian
    };
    format!("{} ({})", label, value)
}

pub struct PresentationFormatter {
    names: NameResolver,
}

impl Default for PresentationFormatter {
    fn default() -> Self {
        Self::new(NameResolver::new())
    }
}

impl PresentationFormatter {
    pub fn new(names: NameResolver) -> Self {
        Self { names }
    }

    pub fn render(&self, report: &HardwareReport) -> String {
        render_sections(&self.sections(report))
    }

    pub fn sections(&self, report: &HardwareReport) -> Vec<Section> {
        let mut sections = Vec::new();
        if let Some(topology) = &report.processor {
            sections.push(self.processor_section(topology));
        }
        if let Some(memory) = &report.memory {
            sections.push(self.memory_section(memory));
        }
        if let Some(os) = &report.os {
            sections.push(self.os_section(os));
        }
        if let Some(displays) = report.displays.as_deref().filter(|d| !d.is_empty()) {
            sections.push(self.displays_section(displays));
        }
        sections
    }

    fn core_counts(section: Section, physical: &CoreCounts, logical: &CoreCounts) -> Section {
        let m = &MESSAGES.report;
        section
            .field(m.physical_cores, plain(physical.max))
            .field(m.physical_enabled, plain(physical.current))
            .field(m.physical_inactive, plain(physical.inactive()))
            .field(m.logical_cores, plain(logical.max))
            .field(m.logical_enabled, plain(logical.current))
            .field(m.logical_inactive, plain(logical.inactive()))
    }

    pub fn processor_section(&self, t: &Topology) -> Section {
        let m = &MESSAGES.report;
        let names = &self.names;

        let cpu_type = t
            .cpu_type
            .map(|code| format!("{} ({})", names.cpu_type_name(code), code));
        // Without a CPU type only the type-independent codes resolve.
        let type_code = t.cpu_type.unwrap_or(cpu_type::ANY);
        let cpu_subtype = t
            .cpu_subtype
            .map(|code| format!("{} ({})", names.cpu_sub_type_name(code, type_code), code));
        let thread_type = t
            .thread_type
            .map(|code| format!("{} ({})", names.thread_type_name(code, type_code), code));
        let family = t
            .family
            .map(|code| format!("{} (0x{:08x})", names.family_name(code), code));
        let subfamily = t
            .subfamily
            .map(|code| format!("{} ({})", names.sub_family_name(code), code));

        let mut section = Section::new(m.processor_title)
            .field(m.brand, text(&t.brand))
            .field(m.machine, text(&t.machine))
            .field(m.model, text(&t.model))
            .field(m.packages, plain(t.packages));
        section = Self::core_counts(section, &t.physical, &t.logical)
            .field(m.physical_total, plain(t.total_physical_cores()))
            .field(m.logical_total, plain(t.total_logical_cores()))
            .field(m.active_cpus, plain(t.active_cpus))
            .field(m.cpu_type, cpu_type)
            .field(m.cpu_subtype, cpu_subtype)
            .field(m.cpu_family, family)
            .field(m.cpu_subfamily, subfamily)
            .field(m.thread_type, thread_type)
            .field(m.cpu64_capable, yes_no(t.cpu64_capable))
            .field(m.byte_order, t.byte_order.map(byte_order_label))
            .field(m.frequency, t.frequency.current.map(format_hz))
            .field(m.frequency_min, t.frequency.min.map(format_hz))
            .field(m.frequency_max, t.frequency.max.map(format_hz))
            .field(m.perf_levels, plain(t.level_count));

        for level in &t.levels {
            section = section.child(self.level_section(level));
        }
        section
    }

    pub fn level_section(&self, level: &PerformanceLevel) -> Section {
        let m = &MESSAGES.report;
        let index = level.index.to_string();
        let title = match level.name.as_ref().present() {
            Some(name) => msg!(m.core_type_named_title, index = index, name = name.as_str()),
            None => msg!(m.core_type_title, index = index),
        };

        Self::core_counts(Section::new(title), &level.physical, &level.logical)
            .field(m.l1d_cache, bytes(level.l1d_cache, SMALL_CACHE))
            .field(m.l1i_cache, bytes(level.l1i_cache, SMALL_CACHE))
            .field(m.l2_cache, bytes(level.l2_cache, LARGE_CACHE))
            .field(m.l2_sharing, plain(level.cpus_per_l2))
            .field(m.l3_cache, bytes(level.l3_cache, LARGE_CACHE))
            .field(m.l3_sharing, plain(level.cpus_per_l3))
    }

    pub fn memory_section(&self, memory: &MemoryProfile) -> Section {
        let m = &MESSAGES.report;
        Section::new(m.memory_title)
            .field(m.total_memory, bytes(memory.total, MEMORY))
            .field(m.page_size, bytes(memory.page_size, SMALL_CACHE))
            .field(m.cache_line, bytes(memory.cache_line, &[]))
            .field(m.l1d_cache, bytes(memory.l1d_cache, SMALL_CACHE))
            .field(m.l1i_cache, bytes(memory.l1i_cache, SMALL_CACHE))
            .field(m.l2_cache, bytes(memory.l2_cache, LARGE_CACHE))
            .field(m.l3_cache, bytes(memory.l3_cache, LARGE_CACHE))
    }

    pub fn os_section(&self, os: &OsProfile) -> Section {
        let m = &MESSAGES.report;
        Section::new(m.os_title)
            .field(m.kernel_version, text(&os.kernel_version))
            .field(m.os_version, text(&os.product_version))
            .field(m.os_build, text(&os.build))
            .field(m.stack_size, bytes(os.stack_size, SMALL_CACHE))
            .field(m.timebase, os.timebase_frequency.map(format_hz))
            .field(m.address_bits, plain(os.virtual_address_bits))
            .field(
                m.address_range,
                os.max_virtual_address().map(|max| format!("0x0 - 0x{:x}", max)),
            )
    }

    pub fn displays_section(&self, displays: &[DisplayInfo]) -> Section {
        let m = &MESSAGES.report;
        displays
            .iter()
            .fold(Section::new(m.displays_title), |section, display| {
                section.child(Self::display_section(display))
            })
    }

    fn display_section(display: &DisplayInfo) -> Section {
        let m = &MESSAGES.report;
        let mut tags = Vec::new();
        if display.is_main {
            tags.push(m.main_display);
        }
        if display.is_builtin {
            tags.push(m.builtin_display);
        }
        let mut title = msg!(m.display_title, id = display.id.to_string());
        if !tags.is_empty() {
            title = format!("{} ({})", title, tags.join(", "));
        }

        Section::new(title)
            .field(
                m.resolution,
                AttributeResult::Present(format!("{} x {}", display.width, display.height)),
            )
            .field(
                m.refresh_rate,
                AttributeResult::from(display.refresh_hz)
                    .filter(|hz| *hz > 0.0)
                    .map(|hz| format!("{} Hz", hz)),
            )
            .field(m.vendor, AttributeResult::Present(format!("0x{:04x}", display.vendor)))
            .field(m.display_model, AttributeResult::Present(format!("0x{:04x}", display.model)))
            .field(
                m.serial,
                AttributeResult::Present(display.serial)
                    .filter(|s| *s != 0)
                    .map(|s| s.to_string()),
            )
    }
}

/// Text for the three attribute-backed sections.
pub fn render(
    topology: &Topology,
    memory: &MemoryProfile,
    os: &OsProfile,
    names: &NameResolver,
) -> String {
    let report = HardwareReport {
        processor: Some(topology.clone()),
        memory: Some(memory.clone()),
        os: Some(os.clone()),
        displays: None,
    };
    PresentationFormatter::new(*names).render(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_model::AttributeResult::{Present, Unavailable};

    #[test]
    fn test_byte_order_label() {
        assert_eq!(byte_order_label(1234), "Little Endian (1234)");
        assert_eq!(byte_order_label(4321), "Big Endian (4321)");
        assert_eq!(byte_order_label(0), "Big Endian (0)");
    }

    #[test]
    fn test_level_title_with_and_without_name() {
        let formatter = PresentationFormatter::default();
        let mut level = PerformanceLevel {
            index: 1,
            name: Present("Efficiency".to_string()),
            physical: CoreCounts::default(),
            logical: CoreCounts::default(),
            l1d_cache: Unavailable,
            l1i_cache: Unavailable,
            l2_cache: Unavailable,
            cpus_per_l2: Unavailable,
            l3_cache: Unavailable,
            cpus_per_l3: Unavailable,
        };
        assert_eq!(formatter.level_section(&level).title, "Core type 1 (Efficiency)");

        level.name = Unavailable;
        let section = formatter.level_section(&level);
        assert_eq!(section.title, "Core type 1");
        assert_eq!(section.visible_lines().count(), 0);
    }

    #[test]
    fn test_subtype_without_type_is_unknown() {
        let formatter = PresentationFormatter::default();
        let topology = Topology {
            cpu_subtype: Present(2),
            ..Topology::default()
        };
        let section = formatter.processor_section(&topology);
        let lines: Vec<_> = section.visible_lines().collect();
        assert_eq!(lines, vec![("CPU subtype", "Unknown (2)")]);
    }

    #[test]
    fn test_display_section() {
        let formatter = PresentationFormatter::default();
        let display = DisplayInfo {
            id: 1,
            width: 3024,
            height: 1964,
            refresh_hz: Some(120.0),
            vendor: 0x610,
            model: 0xa050,
            serial: 0,
            is_main: true,
            is_builtin: true,
        };
        let section = formatter.displays_section(&[display]);
        let child = &section.children[0];

        assert_eq!(child.title, "Display 1 (main, built-in)");
        let lines: Vec<_> = child.visible_lines().collect();
        assert!(lines.contains(&("Resolution", "3024 x 1964")));
        assert!(lines.contains(&("Refresh rate", "120 Hz")));
        assert!(lines.contains(&("Vendor", "0x0610")));
        assert!(!lines.iter().any(|(label, _)| *label == "Serial number"));
    }

    #[test]
    fn test_thread_type_none_without_cpu_type() {
        let formatter = PresentationFormatter::default();
        let topology = Topology {
            thread_type: Present(0),
            ..Topology::default()
        };
        let section = formatter.processor_section(&topology);
        let lines: Vec<_> = section.visible_lines().collect();
        assert_eq!(lines, vec![("CPU thread type", "None (0)")]);

        let topology = Topology {
            thread_type: Present(1),
            ..Topology::default()
        };
        let section = formatter.processor_section(&topology);
        assert_eq!(section.visible_lines().next(), Some(("CPU thread type", "Unknown (1)")));
    }

    #[test]
    fn test_zero_refresh_rate_is_omitted() {
        let display = DisplayInfo {
            id: 2,
            width: 1920,
            height: 1080,
            refresh_hz: Some(0.0),
            vendor: 0x10ac,
            model: 0x4123,
            serial: 42,
            is_main: false,
            is_builtin: false,
        };
        let section = PresentationFormatter::display_section(&display);

        assert_eq!(section.title, "Display 2");
        let labels: Vec<_> = section.visible_lines().map(|(label, _)| label).collect();
        assert!(!labels.contains(&"Refresh rate"));
        assert!(labels.contains(&"Serial number"));
    }

    #[test]
    fn test_render_three_profiles() {
        let topology = Topology {
            byte_order: Present(1234),
            ..Topology::default()
        };
        let memory = MemoryProfile {
            page_size: Present(16_384),
            ..MemoryProfile::default()
        };
        let os = OsProfile {
            kernel_version: Present("23.1.0".to_string()),
            ..OsProfile::default()
        };

        let text = render(&topology, &memory, &os, &NameResolver::new());
        let expected = format!(
            "Processor:\n\t{:<24} Little Endian (1234)\nMemory:\n\t{:<24} 16384 bytes (16 KB)\nOS:\n\t{:<24} 23.1.0\n",
            "Byte order:", "Page size:", "Kernel version:"
        );
        assert_eq!(text, expected);
    }
}
