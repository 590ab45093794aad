//! Human-readable formatting for file sizes

/// Formats a file size in bytes to a human-readable string with appropriate units
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    // Choose precision based on unit and size
    if unit_index == 0 {
        // Bytes - no decimal places
        format!("{:.0}{}", size, UNITS[unit_index])
    } else if size >= 10.0 {
        format!("{:.1}{}", size, UNITS[unit_index])
    } else {
        format!("{:.2}{}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0B");
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(1024), "1.00KB");
        assert_eq!(format_bytes(1536), "1.50KB");
        assert_eq!(format_bytes(1048576), "1.00MB");
        assert_eq!(format_bytes(10485760), "10.0MB");
        assert_eq!(format_bytes(104857600), "100.0MB");
        assert_eq!(format_bytes(1073741824), "1.00GB");
        assert_eq!(format_bytes(1503238553), "1.40GB");
    }
}
