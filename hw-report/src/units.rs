//! Unit conversions shown next to raw values. The raw value is always kept.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUnit {
    Kb,
    Mb,
    Gb,
}

impl ByteUnit {
    pub fn divisor(self) -> u64 {
        match self {
            ByteUnit::Kb => 1024,
            ByteUnit::Mb => 1024 * 1024,
            ByteUnit::Gb => 1024 * 1024 * 1024,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ByteUnit::Kb => "KB",
            ByteUnit::Mb => "MB",
            ByteUnit::Gb => "GB",
        }
    }

    /// Truncating integer conversion.
    pub fn convert(self, bytes: u64) -> u64 {
        bytes / self.divisor()
    }
}

/// `65536 bytes (64 KB)`, `17179869184 bytes (16384 MB, 16 GB)`
pub fn format_bytes(bytes: u64, units: &[ByteUnit]) -> String {
    if units.is_empty() {
        return format!("{} bytes", bytes);
    }
    let converted = units
        .iter()
        .map(|unit| format!("{} {}", unit.convert(bytes), unit.suffix()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} bytes ({})", bytes, converted)
}

/// `24000000 Hz (24 MHz)`
pub fn format_hz(hz: u64) -> String {
    format!("{} Hz ({} MHz)", hz, hz / 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_truncate() {
        let b = 3 * 1024 * 1024 * 1024 + 1023;
        assert_eq!(ByteUnit::Kb.convert(b), b / 1024);
        assert_eq!(ByteUnit::Mb.convert(b), 3 * 1024);
        assert_eq!(ByteUnit::Gb.convert(b), 3);
        assert_eq!(ByteUnit::Kb.convert(1023), 0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(128, &[]), "128 bytes");
        assert_eq!(format_bytes(65536, &[ByteUnit::Kb]), "65536 bytes (64 KB)");
        assert_eq!(
            format_bytes(17_179_869_184, &[ByteUnit::Mb, ByteUnit::Gb]),
            "17179869184 bytes (16384 MB, 16 GB)"
        );
    }

    #[test]
    fn test_format_hz() {
        assert_eq!(format_hz(24_000_000), "24000000 Hz (24 MHz)");
        assert_eq!(format_hz(999_999), "999999 Hz (0 MHz)");
    }
}
