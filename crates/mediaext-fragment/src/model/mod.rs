//! Data model types for parsed media fragments.

mod directives;
mod time_span;

pub use directives::PlaybackDirectives;
pub use time_span::TimeSpan;
