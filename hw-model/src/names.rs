//! Display names for numeric hardware codes.
//!
//! The codes come from the vendor ABI (`<mach/machine.h>`). Every lookup is
//! total: anything not in a table resolves to [`UNKNOWN`].
//!
//! Sub-type codes are only meaningful together with their CPU type. The
//! same integer names unrelated chips across architectures, e.g. `8` is
//! `x86_64h` (Haswell) for x86_64, Pentium III for i386 and XScale for
//! 32-bit ARM, and `5` is Pentium for i386 but ARMv4T for ARM. Sub-type
//! lookup therefore always dispatches on the type first.

pub const UNKNOWN: &str = "Unknown";

pub mod cpu_type {
    pub const ABI64: i32 = 0x0100_0000;
    pub const ABI64_32: i32 = 0x0200_0000;

    pub const ANY: i32 = -1;
    pub const VAX: i32 = 1;
    pub const MC680X0: i32 = 6;
    pub const X86: i32 = 7;
    pub const X86_64: i32 = X86 | ABI64;
    pub const MC98000: i32 = 10;
    pub const HPPA: i32 = 11;
    pub const ARM: i32 = 12;
    pub const ARM64: i32 = ARM | ABI64;
    pub const ARM64_32: i32 = ARM | ABI64_32;
    pub const MC88000: i32 = 13;
    pub const SPARC: i32 = 14;
    pub const I860: i32 = 15;
    pub const POWERPC: i32 = 18;
    pub const POWERPC64: i32 = POWERPC | ABI64;
}

/// Capability bits carried in the top byte of a sub-type (e.g. LIB64,
/// pointer-auth ABI). They are not part of the sub-type identity.
pub const CPU_SUBTYPE_MASK: u32 = 0xff00_0000;

const CPU_TYPES: &[(i32, &str)] = &[
    (cpu_type::ANY, "Any"),
    (cpu_type::VAX, "VAX"),
    (cpu_type::MC680X0, "MC680x0"),
    (cpu_type::X86, "x86"),
    (cpu_type::X86_64, "x86_64"),
    (cpu_type::MC98000, "MC98000"),
    (cpu_type::HPPA, "HPPA"),
    (cpu_type::ARM, "ARM"),
    (cpu_type::ARM64, "ARM64"),
    (cpu_type::ARM64_32, "ARM64_32"),
    (cpu_type::MC88000, "MC88000"),
    (cpu_type::SPARC, "SPARC"),
    (cpu_type::I860, "i860"),
    (cpu_type::POWERPC, "PowerPC"),
    (cpu_type::POWERPC64, "PowerPC64"),
];

const I386_SUBTYPES: &[(u32, &str)] = &[
    (3, "i386"),
    (4, "i486"),
    (132, "i486SX"),
    (5, "Pentium"),
    (22, "Pentium Pro"),
    (54, "Pentium II M3"),
    (86, "Pentium II M5"),
    (103, "Celeron"),
    (119, "Celeron Mobile"),
    (8, "Pentium III"),
    (24, "Pentium III M"),
    (40, "Pentium III Xeon"),
    (9, "Pentium M"),
    (10, "Pentium 4"),
    (26, "Pentium 4 M"),
    (11, "Itanium"),
    (27, "Itanium 2"),
    (12, "Xeon"),
    (28, "Xeon MP"),
];

const X86_64_SUBTYPES: &[(u32, &str)] = &[
    (3, "x86_64 (all)"),
    (4, "x86 Arch1"),
    (8, "x86_64h (Haswell)"),
];

const ARM_SUBTYPES: &[(u32, &str)] = &[
    (0, "ARM (all)"),
    (5, "ARMv4T"),
    (6, "ARMv6"),
    (7, "ARMv5TEJ"),
    (8, "XScale"),
    (9, "ARMv7"),
    (10, "ARMv7F"),
    (11, "ARMv7S"),
    (12, "ARMv7K"),
    (13, "ARMv8"),
    (14, "ARMv6-M"),
    (15, "ARMv7-M"),
    (16, "ARMv7E-M"),
    (17, "ARMv8-M"),
];

const ARM64_SUBTYPES: &[(u32, &str)] = &[(0, "ARM64 (all)"), (1, "ARM64 v8"), (2, "ARM64E")];

const ARM64_32_SUBTYPES: &[(u32, &str)] = &[(0, "ARM64_32 (all)"), (1, "ARM64_32 v8")];

const POWERPC_SUBTYPES: &[(u32, &str)] = &[
    (0, "PowerPC (all)"),
    (1, "PowerPC 601"),
    (2, "PowerPC 602"),
    (3, "PowerPC 603"),
    (4, "PowerPC 603e"),
    (5, "PowerPC 603ev"),
    (6, "PowerPC 604"),
    (7, "PowerPC 604e"),
    (8, "PowerPC 620"),
    (9, "PowerPC 750"),
    (10, "PowerPC 7400"),
    (11, "PowerPC 7450"),
    (100, "PowerPC 970"),
];

const FAMILIES: &[(u32, &str)] = &[
    (0xcee4_1549, "PowerPC G3"),
    (0x77c1_84ae, "PowerPC G4"),
    (0xed76_d8aa, "PowerPC G5"),
    (0x73d6_7300, "Intel Yonah"),
    (0x426f_69ef, "Intel Merom"),
    (0x78ea_4fbc, "Intel Penryn"),
    (0x6b5a_4cd2, "Intel Nehalem"),
    (0x573b_5eec, "Intel Westmere"),
    (0x5490_b78c, "Intel Sandy Bridge"),
    (0x1f65_e835, "Intel Ivy Bridge"),
    (0x10b2_82dc, "Intel Haswell"),
    (0x582e_d09c, "Intel Broadwell"),
    (0x37fc_219f, "Intel Skylake"),
    (0x0f81_7246, "Intel Kaby Lake"),
    (0x3843_5547, "Intel Ice Lake"),
    (0x1cf8_a03e, "Intel Comet Lake"),
    (0xe732_83ae, "ARM9"),
    (0x8ff6_20d8, "ARM11"),
    (0x53b0_05f5, "ARM XScale"),
    (0xbd1b_0ae9, "ARM12"),
    (0x0cc9_0e64, "ARM13"),
    (0x9607_7ef1, "ARM14"),
    (0xa851_1bca, "ARM15"),
    (0x1e2d_6381, "Swift (A6)"),
    (0x37a0_9642, "Cyclone (A7)"),
    (0x2c91_a47e, "Typhoon (A8)"),
    (0x92fb_37c8, "Twister (A9)"),
    (0x67ce_ee93, "Hurricane (A10)"),
    (0xe81e_7ef6, "Monsoon/Mistral (A11)"),
    (0x07d3_4b9f, "Vortex/Tempest (A12)"),
    (0x4625_04d2, "Lightning/Thunder (A13)"),
    (0x1b58_8bb3, "Firestorm/Icestorm (A14/M1)"),
    (0xda33_d83d, "Blizzard/Avalanche (A15/M2)"),
    (0x8765_edea, "Everest/Sawtooth (A16)"),
    (0x2876_f5b5, "Coll (A17 Pro)"),
    (0xfa33_415e, "Ibiza (M3)"),
    (0x5f4d_ea93, "Lobos (M3 Pro)"),
    (0x7201_5832, "Palma (M3 Max)"),
    (0x6f51_29ac, "Donan (M4)"),
    (0x17d5_b93a, "Brava (M4 Max)"),
    (0x2045_26d0, "Tupai (A18)"),
    (0x75d4_acb9, "Tahiti (A18 Pro)"),
];

const SUBFAMILIES: &[(i32, &str)] = &[
    (0, UNKNOWN),
    (1, "ARM HP (phone)"),
    (2, "ARM HG (TV)"),
    (3, "ARM M (Mac)"),
    (4, "ARM HS (Watch)"),
    (5, "ARM HC/HD (Mac high-end)"),
    (6, "ARM HA (Vision)"),
];

fn lookup<K: PartialEq + Copy>(table: &[(K, &'static str)], code: K) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN)
}

/// Vendor code → label tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver;

impl NameResolver {
    pub fn new() -> Self {
        Self
    }

    /// `hw.cpufamily`
    pub fn family_name(&self, code: u32) -> &'static str {
        lookup(FAMILIES, code)
    }

    /// `hw.cpusubfamily`
    pub fn sub_family_name(&self, code: i32) -> &'static str {
        lookup(SUBFAMILIES, code)
    }

    /// `hw.cputype`, matched with its ABI flag bits.
    pub fn cpu_type_name(&self, code: i32) -> &'static str {
        lookup(CPU_TYPES, code)
    }

    /// `hw.cpusubtype`, disambiguated by the accompanying `hw.cputype`.
    pub fn cpu_sub_type_name(&self, code: i32, type_code: i32) -> &'static str {
        let subtype = (code as u32) & !CPU_SUBTYPE_MASK;
        let table = match type_code {
            cpu_type::X86 => I386_SUBTYPES,
            cpu_type::X86_64 => X86_64_SUBTYPES,
            cpu_type::ARM => ARM_SUBTYPES,
            cpu_type::ARM64 => ARM64_SUBTYPES,
            cpu_type::ARM64_32 => ARM64_32_SUBTYPES,
            cpu_type::POWERPC | cpu_type::POWERPC64 => POWERPC_SUBTYPES,
            _ => return UNKNOWN,
        };
        lookup(table, subtype)
    }

    /// `hw.cputhreadtype`; only x86 defines a thread type (HTT).
    pub fn thread_type_name(&self, code: i32, type_code: i32) -> &'static str {
        match (type_code, code) {
            (_, 0) => "None",
            (cpu_type::X86 | cpu_type::X86_64, 1) => "Intel HTT",
            _ => UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_type_names() {
        let names = NameResolver::new();
        assert_eq!(names.cpu_type_name(0x0100_000c), "ARM64");
        assert_eq!(names.cpu_type_name(0x0100_0007), "x86_64");
        assert_eq!(names.cpu_type_name(7), "x86");
        assert_eq!(names.cpu_type_name(-1), "Any");
    }

    #[test]
    fn test_unknown_codes() {
        let names = NameResolver::new();
        assert_eq!(names.cpu_type_name(0x0FFF_FFFF), UNKNOWN);
        assert_eq!(names.family_name(0xdead_beef), UNKNOWN);
        assert_eq!(names.sub_family_name(42), UNKNOWN);
        assert_eq!(names.cpu_sub_type_name(99, cpu_type::ARM64), UNKNOWN);
        assert_eq!(names.cpu_sub_type_name(2, 0x0FFF_FFFF), UNKNOWN);
    }

    #[test]
    fn test_colliding_subtype_resolved_by_type() {
        let names = NameResolver::new();
        assert_eq!(names.cpu_sub_type_name(8, cpu_type::X86_64), "x86_64h (Haswell)");
        assert_eq!(names.cpu_sub_type_name(8, cpu_type::ARM), "XScale");
        assert_eq!(names.cpu_sub_type_name(8, cpu_type::X86), "Pentium III");
        assert_eq!(names.cpu_sub_type_name(5, cpu_type::X86), "Pentium");
        assert_eq!(names.cpu_sub_type_name(5, cpu_type::ARM), "ARMv4T");
    }

    #[test]
    fn test_subtype_capability_bits_ignored() {
        let names = NameResolver::new();
        // arm64e with the pointer-auth ABI bit set
        assert_eq!(names.cpu_sub_type_name(0x8000_0002_u32 as i32, cpu_type::ARM64), "ARM64E");
        // x86_64 with LIB64
        assert_eq!(names.cpu_sub_type_name(0x8000_0003_u32 as i32, cpu_type::X86_64), "x86_64 (all)");
    }

    #[test]
    fn test_family_and_subfamily() {
        let names = NameResolver::new();
        assert_eq!(names.family_name(0x1b58_8bb3), "Firestorm/Icestorm (A14/M1)");
        assert_eq!(names.family_name(0x37fc_219f), "Intel Skylake");
        assert_eq!(names.sub_family_name(3), "ARM M (Mac)");
        assert_eq!(names.sub_family_name(0), UNKNOWN);
    }

    #[test]
    fn test_thread_type() {
        let names = NameResolver::new();
        assert_eq!(names.thread_type_name(1, cpu_type::X86_64), "Intel HTT");
        assert_eq!(names.thread_type_name(0, cpu_type::ARM64), "None");
        assert_eq!(names.thread_type_name(1, cpu_type::ARM64), UNKNOWN);
    }
}
