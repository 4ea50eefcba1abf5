//! Temporal range of a media resource.

use std::fmt;

/// A `{start, end}` range in seconds, parsed from a `t=` fragment value.
///
/// `start` is never negative and `end`, when present, is never smaller than
/// `start`. An absent `end` means "until the end of the media".
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSpan {
    start: f64,
    end: Option<f64>,
    raw: String,
}

impl TimeSpan {
    /// Create a span, rejecting negative, non-finite or inverted bounds.
    ///
    /// The raw text is the canonical serialization of the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediaext_fragment::TimeSpan;
    ///
    /// let span = TimeSpan::new(10.0, Some(20.0)).unwrap();
    /// assert_eq!(span.raw(), "10,20");
    ///
    /// assert!(TimeSpan::new(20.0, Some(10.0)).is_none());
    /// assert!(TimeSpan::new(-1.0, None).is_none());
    /// ```
    pub fn new(start: f64, end: Option<f64>) -> Option<Self> {
        let mut span = Self::with_raw(start, end, String::new())?;
        span.raw = span.to_string();
        Some(span)
    }

    /// Create a span that remembers the text it was parsed from.
    pub(crate) fn with_raw(start: f64, end: Option<f64>, raw: String) -> Option<Self> {
        if !start.is_finite() || start < 0.0 {
            return None;
        }
        if let Some(end) = end {
            if !end.is_finite() || end < start {
                return None;
            }
        }
        Some(Self { start, end, raw })
    }

    /// Start of the range in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the range in seconds, or `None` when unspecified.
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// The `t=` value this span was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `position` lies inside `[start, end]`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && !self.is_past_end(position)
    }

    /// Whether `position` is beyond a specified end.
    pub fn is_past_end(&self, position: f64) -> bool {
        self.end.is_some_and(|end| position > end)
    }
}

/// Spans compare by their bounds; the raw text is ignored.
impl PartialEq for TimeSpan {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

/// Serializes to the `t=` value grammar: `start` or `start,end`.
impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{},{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bounds() {
        assert!(TimeSpan::new(0.0, None).is_some());
        assert!(TimeSpan::new(5.0, Some(5.0)).is_some());
        assert!(TimeSpan::new(5.0, Some(4.9)).is_none());
        assert!(TimeSpan::new(f64::NAN, None).is_none());
        assert!(TimeSpan::new(0.0, Some(f64::INFINITY)).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeSpan::new(10.0, None).unwrap().to_string(), "10");
        assert_eq!(
            TimeSpan::new(1.5, Some(20.25)).unwrap().to_string(),
            "1.5,20.25"
        );
    }

    #[test]
    fn test_contains() {
        let span = TimeSpan::new(10.0, Some(20.0)).unwrap();
        assert!(span.contains(10.0));
        assert!(span.contains(20.0));
        assert!(!span.contains(9.99));
        assert!(!span.contains(20.01));
        assert!(span.is_past_end(25.0));

        let open = TimeSpan::new(10.0, None).unwrap();
        assert!(open.contains(1e9));
        assert!(!open.is_past_end(1e9));
    }

    #[test]
    fn test_equality_ignores_raw() {
        let parsed = TimeSpan::with_raw(90.0, None, "1:30".into()).unwrap();
        assert_eq!(parsed, TimeSpan::new(90.0, None).unwrap());
        assert_eq!(parsed.raw(), "1:30");
    }
}
