//! Pure formatting helpers for console and CSV output.

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with 1024-based units and one decimal place.
///
/// Values never roll over below 1024 (`1023` is `"1023.0 B"`); anything past
/// the petabyte range stays in `PB`.
pub fn human_bytes(num_bytes: u64) -> String {
    let mut value = num_bytes as f64;
    let last = BYTE_UNITS.len() - 1;
    for (index, unit) in BYTE_UNITS.iter().enumerate() {
        if value < 1024.0 || index == last {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{num_bytes} B")
}

/// Share of `free` in `total` as a percentage in `[0, 100]`; `0` when `total` is `0`.
pub fn free_percent(free: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (free as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Shorten `value` to at most `width` characters, ending in `...` when cut.
pub fn truncate_display(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut shortened: String = value.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}
