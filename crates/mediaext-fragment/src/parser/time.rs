//! Winnow grammar for the `t=` value.
//!
//! ```text
//! value   = ["npt:"] [time] ["," time]
//! time    = decimal *2(":" decimal)
//! decimal = 1*(DIGIT / ".")
//! ```
//!
//! A clock value with more than one component reads as `mm:ss` or
//! `hh:mm:ss`; only the last component may carry a fraction and every
//! component after the first must be below 60.

use winnow::combinator::{opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::model::TimeSpan;

/// Parse a `t=` value into a span.
///
/// Returns `None` for malformed text, for a value with neither bound, and for
/// an end that precedes the start.
///
/// # Examples
///
/// ```
/// use mediaext_fragment::parse_time_value;
///
/// let span = parse_time_value("10,20").unwrap();
/// assert_eq!((span.start(), span.end()), (10.0, Some(20.0)));
///
/// let span = parse_time_value(",20").unwrap();
/// assert_eq!(span.start(), 0.0);
///
/// assert!(parse_time_value("20,10").is_none());
/// assert!(parse_time_value("ten").is_none());
/// ```
pub fn parse_time_value(raw: &str) -> Option<TimeSpan> {
    let (start, end) = bounds.parse(raw).ok()?;
    if start.is_none() && end.is_none() {
        return None;
    }
    TimeSpan::with_raw(start.unwrap_or(0.0), end, raw.to_string())
}

fn bounds(input: &mut &str) -> PResult<(Option<f64>, Option<f64>)> {
    let _ = opt("npt:").parse_next(input)?;
    let start = opt(time).parse_next(input)?;
    let end = opt(preceded(',', time)).parse_next(input)?;
    Ok((start, end))
}

fn time(input: &mut &str) -> PResult<f64> {
    separated(1..=3, decimal, ':')
        .verify_map(|parts: Vec<f64>| clock_seconds(&parts))
        .parse_next(input)
}

fn decimal(input: &mut &str) -> PResult<f64> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.')
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

/// Fold `[hh, mm, ss]`-style components into seconds.
fn clock_seconds(parts: &[f64]) -> Option<f64> {
    let (last, leading) = parts.split_last()?;
    if leading.iter().any(|part| part.fract() != 0.0) {
        return None;
    }
    if parts.iter().skip(1).any(|part| *part >= 60.0) {
        return None;
    }
    let seconds = leading.iter().fold(0.0, |acc, part| (acc + part) * 60.0) + last;
    seconds.is_finite().then_some(seconds)
}
