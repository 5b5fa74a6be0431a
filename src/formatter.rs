//! Turns byte counts into the short strings shown by the display.

use crate::constants::*;

/// Returns a string for the given amount of bytes, scaled to B, KB or MB.
///
/// If `as_rate` is true, the string is a per-second rate (e.g. `512KB/s`).
/// Otherwise it is a cumulative total wrapped in parentheses (e.g. `(512KB)`).
///
/// Values up to ten units get a single decimal place, larger values are
/// truncated to an integer.
pub fn format_traffic(bytes: u64, as_rate: bool) -> String {
    let (value, unit) = if bytes > DECIMAL_MEBI_CEILING {
        ((bytes / MEBI_LIMIT).to_string(), "MB")
    } else if bytes > MEBI_LIMIT {
        (format!("{:.1}", bytes as f32 / MEBI_LIMIT_F32), "MB")
    } else if bytes > DECIMAL_KIBI_CEILING {
        ((bytes / KIBI_LIMIT).to_string(), "KB")
    } else if bytes > KIBI_LIMIT {
        (format!("{:.1}", bytes as f32 / KIBI_LIMIT_F32), "KB")
    } else {
        (bytes.to_string(), "B")
    };

    if as_rate {
        format!("{value}{unit}/s")
    } else {
        format!("({value}{unit})")
    }
}
