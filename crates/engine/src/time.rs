/// Parses one raw bound field into seconds.
///
/// Returns `None` for blank input and for anything that does not parse as a
/// finite number. Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use engine::time::parse_seconds;
///
/// assert_eq!(parse_seconds(" 12.5 "), Some(12.5));
/// assert_eq!(parse_seconds(""), None);
/// assert_eq!(parse_seconds("abc"), None);
/// ```
pub fn parse_seconds(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats seconds as `HH:MM:SS.mmm` for the playhead readout.
///
/// Negative input is treated as zero. Hours do not wrap at 24.
///
/// # Example
/// ```
/// use engine::time::format_timestamp;
///
/// assert_eq!(format_timestamp(3_725.25), "01:02:05.250");
/// assert_eq!(format_timestamp(0.0), "00:00:00.000");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1_000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = total_ms / 60_000 % 60;
    let secs = total_ms / 1_000 % 60;
    let millis = total_ms % 1_000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}
