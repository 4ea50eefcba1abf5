//! Classification of video page URLs.
//!
//! Recognized shapes:
//!
//! | Host     | Hostname           | Path / query                    |
//! |----------|--------------------|---------------------------------|
//! | Bilibili | `www.bilibili.com` | `/video/<BV…or av…>[/]`, `?p=N` |
//! | YouTube  | `www.youtube.com`  | `/watch?v=<id>`                 |
//! | YouTube  | `youtu.be`         | `/<id>` or `/watch?v=<id>`      |
//! | Vimeo    | `vimeo.com`        | `/<digits>`                     |
//!
//! Anything else is a negative classification, not an error the caller
//! needs to act on.

use mediaext_common::{Error, Result, VideoHost};
use tracing::debug;
use url::Url;

use super::{embed_url, HostVideo};

/// Classify `url`, returning `None` for anything that is not an embeddable
/// video page.
///
/// # Examples
///
/// ```
/// use mediaext::host::resolve_host;
/// use mediaext_common::VideoHost;
/// use url::Url;
///
/// let url = Url::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// let video = resolve_host(&url).unwrap();
/// assert_eq!(video.host, VideoHost::YouTube);
/// assert_eq!(video.iframe.as_str(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
/// ```
pub fn resolve_host(url: &Url) -> Option<HostVideo> {
    match classify(url) {
        Ok(video) => Some(video),
        Err(e) => {
            debug!(url = %url, error = %e, "not an embeddable video url");
            None
        }
    }
}

/// Classify `url`, reporting why it was rejected.
///
/// Every rejection is [`Error::UnsupportedHost`].
pub fn classify(url: &Url) -> Result<HostVideo> {
    let hostname = url
        .host_str()
        .ok_or_else(|| Error::unsupported_host(format!("no hostname in {url}")))?;
    let host = VideoHost::from_hostname(hostname)
        .ok_or_else(|| Error::unsupported_host(hostname.to_string()))?;

    let (id, page) = match host {
        VideoHost::Bilibili => bilibili_id(url)?,
        VideoHost::YouTube => (youtube_id(url)?, None),
        VideoHost::Vimeo => (vimeo_id(url)?, None),
    };

    let iframe = embed_url(host, &id, page.as_deref())?;
    Ok(HostVideo { host, id, iframe })
}

/// `/video/<id>[/]` plus an optional `p` page number.
fn bilibili_id(url: &Url) -> Result<(String, Option<String>)> {
    let rest = url
        .path()
        .strip_prefix("/video/")
        .ok_or_else(|| Error::unsupported_host(format!("bilibili path not supported: {url}")))?;
    let id = rest.strip_suffix('/').unwrap_or(rest);
    if id.is_empty() || id.contains('/') {
        return Err(Error::unsupported_host(format!(
            "bilibili video id missing: {url}"
        )));
    }

    let page = query_value(url, "p").filter(|page| !page.is_empty());
    Ok((decode_segment(id), page))
}

fn youtube_id(url: &Url) -> Result<String> {
    if url.path() == "/watch" {
        return query_value(url, "v")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::unsupported_host(format!("youtube video id missing: {url}")));
    }

    if url.host_str() == Some("youtu.be") {
        let id = url
            .path()
            .strip_prefix('/')
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .ok_or_else(|| Error::unsupported_host(format!("youtu.be path not supported: {url}")))?;
        return Ok(decode_segment(id));
    }

    Err(Error::unsupported_host(format!(
        "youtube path not supported: {url}"
    )))
}

/// Vimeo pages are `/<digits>` exactly; channels, showcases etc. are rejected.
fn vimeo_id(url: &Url) -> Result<String> {
    url.path()
        .strip_prefix('/')
        .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .ok_or_else(|| Error::unsupported_host(format!("vimeo path not supported: {url}")))
}

/// Percent-decode a path segment, keeping it as written when it is not
/// valid UTF-8 once decoded.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
