//! Counter arithmetic and the padding/saturation rule shared by all rules.

use serde::{Deserialize, Serialize};

/// Whether a rule returns the next unused value or the last value used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Next unused counter value.
    #[default]
    Next,
    /// Most recently used counter value.
    Last,
}

/// Counter value for a given mode: `Next` increments the current maximum,
/// `Last` returns it as-is.
pub fn counter_value(current: i64, mode: Mode) -> i64 {
    match mode {
        Mode::Next => current + 1,
        Mode::Last => current,
    }
}

/// Format a counter against a field of `width` digits.
///
/// The value is zero-padded to `width` unless the current maximum already
/// saturates the field (`current >= 10^width - 1`), in which case the value
/// is formatted unpadded and simply keeps growing. The saturation test uses
/// the pre-increment value, so the last padded value a 3-digit field emits
/// is `999` and the one after it is `1000`.
pub fn format_counter(current: i64, mode: Mode, width: u32) -> String {
    let value = counter_value(current, mode);
    if saturated(current, width) {
        value.to_string()
    } else {
        format!("{value:0width$}", width = width as usize)
    }
}

fn saturated(current: i64, width: u32) -> bool {
    // A field too wide for i64 can never saturate.
    match 10i64.checked_pow(width) {
        Some(limit) => current >= limit - 1,
        None => false,
    }
}
