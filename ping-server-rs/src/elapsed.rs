use chrono::Duration;

/// Renders a duration as a Japanese elapsed-time string, e.g. `1分30秒経過`.
///
/// Hours and minutes appear once non-zero (zero minutes are kept when hours
/// are present), seconds always appear with up to millisecond precision, and
/// the string ends with the 経過 marker. A negative duration renders with a
/// leading `-` and is never clamped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.num_milliseconds();
    let millis = total_ms.unsigned_abs();

    let hours = millis / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;
    let seconds = (millis % 60_000) / 1000;
    let fraction = millis % 1000;

    let mut out = String::new();
    if total_ms < 0 {
        out.push('-');
    }
    if hours > 0 {
        out.push_str(&hours.to_string());
        out.push_str("時間");
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&minutes.to_string());
        out.push_str("分");
    }
    out.push_str(&seconds.to_string());
    if fraction > 0 {
        let frac = format!(".{fraction:03}");
        out.push_str(frac.trim_end_matches('0'));
    }
    out.push_str("秒経過");
    out
}
