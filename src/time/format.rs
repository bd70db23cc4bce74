use chrono::{TimeZone, Utc};

use crate::model::Millis;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// Renders elapsed milliseconds as `<m>m <s>s <ms>ms`.
///
/// Minutes are omitted under a minute and seconds under a second. Past one
/// second the millisecond part is `(seconds * 1000) & 1000`, which is not
/// the true remainder; existing reports are compared against these exact
/// strings, so it is kept as-is.
pub fn format_duration(elapsed: Millis) -> String {
    let mut format = String::new();
    let mut seconds = elapsed as f64 / 1000.0;
    if seconds >= 60.0 {
        format.push_str(&format!("{}m ", seconds as i64 / 60));
        seconds %= 60.0;
    }
    if seconds >= 1.0 {
        format.push_str(&format!("{}s ", seconds as i64));
        let fraction = (seconds * 1000.0) as i64 & 1000;
        if fraction >= 1 {
            format.push_str(&format!("{}ms", fraction));
        }
    } else {
        format.push_str(&format!("{}ms", (seconds * 1000.0) as i64));
    }
    format
}

pub fn format_duration_between(start: Millis, end: Millis) -> String {
    format_duration(end - start)
}

/// Epoch milliseconds as a UTC wall-clock string; out-of-range values fall
/// back to the raw number.
pub fn format_timestamp(millis: Millis) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(date) => date.format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}
