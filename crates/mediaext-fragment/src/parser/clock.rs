//! Clock-style rendering of positions, the inverse of the `mm:ss` grammar.

/// Render `seconds` as `hh:mm:ss[.mmm]`, dropping a zero hour.
///
/// Milliseconds are appended only when non-zero. Negative and non-finite
/// input renders as `00:00`.
///
/// # Examples
///
/// ```
/// use mediaext_fragment::format_clock;
///
/// assert_eq!(format_clock(5.0), "00:05");
/// assert_eq!(format_clock(75.5), "01:15.500");
/// assert_eq!(format_clock(3725.0), "01:02:05");
/// ```
pub fn format_clock(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let (hours, minutes, secs) = (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60);

    let mut out = if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    };
    if ms > 0 {
        out.push_str(&format!(".{ms:03}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_time_value;

    #[test]
    fn test_format() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.999), "00:59.999");
        assert_eq!(format_clock(60.0), "01:00");
        assert_eq!(format_clock(3600.0), "01:00:00");
        assert_eq!(format_clock(360000.0), "100:00:00");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_formatted_clock_parses_back() {
        for seconds in [0.0, 5.0, 75.5, 3725.0, 4000.125] {
            let span = parse_time_value(&format_clock(seconds)).unwrap();
            assert_eq!(span.start(), seconds, "{seconds}");
        }
    }
}
