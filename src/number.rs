//! Conversions between the display buffer and `f64` values.
//!
//! Every mutation of the display that goes through arithmetic is re-derived
//! from [`format_number`], so the buffer stays parseable without any
//! validation on the way back in.

/// Formats a value as the shortest decimal string that round-trips to the
/// same `f64` (the standard library `Display` guarantees this). Non-finite
/// values render as their literal names and negative zero collapses to `"0"`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    n.to_string()
}

/// Parses the display buffer back into an `f64`.
///
/// `f64::from_str` accepts everything [`format_number`] emits, including the
/// `NaN` and `Infinity` literals, plus partial entries like `"0."`. A buffer
/// that still fails to parse is treated as NaN rather than an error, matching
/// the fail-soft policy for arithmetic anomalies.
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(f64::NAN)
}
