/// Format a byte count for display
///
/// Zero bytes renders as an empty string; otherwise the value is scaled by
/// 1024 through B/KB/MB/GB and rendered with one decimal place.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}
