/// Format seconds as `m:ss`. Minutes are not padded and never roll over
/// into hours; fractional seconds are truncated.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
