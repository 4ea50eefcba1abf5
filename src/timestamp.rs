//! Links that reopen media at a given position.

use mediaext_fragment::format_clock;

use crate::resolve::{without_fragment, DirectMedia, HostMedia, VideoInfo};

/// Build a markdown link to `info` at `seconds`.
///
/// Vault files become wiki links, `[[<linktext>#t=<clock>]]`. Everything
/// else becomes `[<clock>](<url>#t=<seconds>)` with the fractional part of
/// the label dropped, pointing at the URL as it was referenced.
///
/// # Examples
///
/// ```
/// use mediaext::resolve::resolve_url;
/// use mediaext::timestamp::timestamp_link;
/// use url::Url;
///
/// let info = resolve_url(&Url::parse("https://youtu.be/dQw4w9WgXcQ#t=5").unwrap()).unwrap();
/// assert_eq!(
///     timestamp_link(&info, 75.5, "unused"),
///     "[01:15](https://youtu.be/dQw4w9WgXcQ#t=75.5)"
/// );
/// ```
pub fn timestamp_link(info: &VideoInfo, seconds: f64, linktext: &str) -> String {
    let clock = format_clock(seconds);
    match info {
        VideoInfo::Internal(_) => format!("[[{linktext}#t={clock}]]"),
        VideoInfo::Direct(DirectMedia { link, .. })
        | VideoInfo::Host(HostMedia { src: link, .. }) => {
            let label = clock.split_once('.').map_or(clock.as_str(), |(whole, _)| whole);
            let seconds = if seconds.is_finite() && seconds > 0.0 {
                seconds
            } else {
                0.0
            };
            format!("[{label}]({}#t={seconds})", without_fragment(link))
        }
    }
}
