//! Fragment parsing.
//!
//! The fragment is split as a form-urlencoded query (`key=value` pairs joined
//! by `&`). Keys are matched exactly; the `t` value goes through the winnow
//! grammar in [`time`].

mod clock;
mod time;

pub use clock::format_clock;
pub use time::parse_time_value;

use url::form_urlencoded;

use crate::model::PlaybackDirectives;

/// Parse fragment text into directives. Never fails.
pub(crate) fn parse_directives(fragment: &str) -> PlaybackDirectives {
    let fragment = fragment
        .strip_prefix('#')
        .or_else(|| fragment.strip_prefix('?'))
        .unwrap_or(fragment);

    let mut directives = PlaybackDirectives::default();
    let mut seen_time = false;

    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "t" => {
                // First occurrence wins, even when it is malformed.
                if !seen_time {
                    seen_time = true;
                    directives.time_span = parse_time_value(&value);
                }
            }
            "loop" => directives.looping = true,
            "autoplay" => directives.autoplay = true,
            "muted" => directives.muted = true,
            _ => {}
        }
    }

    directives
}
