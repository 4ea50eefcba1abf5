//! # mediaext-fragment
//!
//! Parser and serializer for media fragments: the `#t=10,20&loop` suffix that
//! selects a time range of an audio/video resource and carries playback
//! directives.
//!
//! ## Quick Start
//!
//! ```
//! use mediaext_fragment::parse_fragment;
//!
//! let directives = parse_fragment("#t=10,20&loop");
//!
//! let span = directives.time_span.as_ref().unwrap();
//! assert_eq!(span.start(), 10.0);
//! assert_eq!(span.end(), Some(20.0));
//! assert!(directives.looping);
//! assert!(!directives.autoplay);
//! ```
//!
//! ## Totality
//!
//! Parsing never fails. Malformed time values simply produce no
//! [`TimeSpan`]; unknown keys are ignored.
//!
//! ```
//! use mediaext_fragment::parse_fragment;
//!
//! let directives = parse_fragment("t=abc&muted&foo=bar");
//! assert!(directives.time_span.is_none());
//! assert!(directives.muted);
//! ```

pub mod model;
mod parser;

pub use model::{PlaybackDirectives, TimeSpan};
pub use parser::{format_clock, parse_time_value};

/// Parse a URL fragment (leading `#` optional) into playback directives.
///
/// # Examples
///
/// ```
/// use mediaext_fragment::parse_fragment;
///
/// let directives = parse_fragment("t=1:30&autoplay");
/// assert_eq!(directives.time_span.unwrap().start(), 90.0);
/// assert!(directives.autoplay);
/// ```
pub fn parse_fragment(fragment: &str) -> PlaybackDirectives {
    parser::parse_directives(fragment)
}

/// Parse only the time range of a fragment.
///
/// Shorthand for `parse_fragment(fragment).time_span`.
pub fn parse_time_span(fragment: &str) -> Option<TimeSpan> {
    parser::parse_directives(fragment).time_span
}
