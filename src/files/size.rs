//! Byte size labels

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Formats a byte count on the Bytes/KB/MB/GB ladder.
///
/// Values are rounded to two decimals with trailing zeros dropped, so `1536`
/// becomes `1.5 KB` and `1048576` becomes `1 MB`. Anything past GB stays in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < UNITS.len() && bytes >= divisor * STEP {
        divisor *= STEP;
        unit += 1;
    }

    let rounded = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_ladder() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1 MB");
        assert_eq!(format_size(1073741824), "1 GB");
    }

    #[test]
    fn test_format_size_rounding() {
        assert_eq!(format_size(1234), "1.21 KB");
        assert_eq!(format_size(2_500_000), "2.38 MB");
        // just under the next unit rounds up within the current one
        assert_eq!(format_size(1_048_575), "1024 KB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(1024 * 1024 * 1024 * 1024), "1024 GB");
    }
}
