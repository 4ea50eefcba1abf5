//! Iframe player URLs for each video host.

use mediaext_common::{Error, Result, VideoHost};
use url::Url;

const BILIBILI_PLAYER: &str = "https://player.bilibili.com/player.html";
const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";
const VIMEO_PLAYER: &str = "https://player.vimeo.com/video/";

/// Build the embeddable player URL for video `id` on `host`.
///
/// `page` is only meaningful for Bilibili multi-part videos and is ignored
/// by the other hosts.
///
/// # Examples
///
/// ```
/// use mediaext::host::embed_url;
/// use mediaext_common::VideoHost;
///
/// let url = embed_url(VideoHost::Vimeo, "76979871", None).unwrap();
/// assert_eq!(url.as_str(), "https://player.vimeo.com/video/76979871");
/// ```
pub fn embed_url(host: VideoHost, id: &str, page: Option<&str>) -> Result<Url> {
    if id.is_empty() {
        return Err(Error::unsupported_host(format!("{host} video id is empty")));
    }

    match host {
        VideoHost::Bilibili => bilibili_player(id, page),
        VideoHost::YouTube => join(YOUTUBE_EMBED, id),
        VideoHost::Vimeo => join(VIMEO_PLAYER, id),
    }
}

fn bilibili_player(id: &str, page: Option<&str>) -> Result<Url> {
    let (prefix, rest) = match (id.get(..2), id.get(2..)) {
        (Some(prefix), Some(rest)) if !rest.is_empty() => (prefix.to_ascii_lowercase(), rest),
        _ => {
            return Err(Error::unsupported_host(format!(
                "bilibili id too short: {id}"
            )))
        }
    };
    let (key, value) = match prefix.as_str() {
        "bv" => ("bvid", id),
        "av" => ("aid", rest),
        _ => {
            return Err(Error::unsupported_host(format!(
                "bilibili id must start with BV or av: {id}"
            )))
        }
    };

    let mut url = parse(BILIBILI_PLAYER)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(key, value);
        if let Some(page) = page.filter(|p| !p.is_empty()) {
            query.append_pair("page", page);
        }
        query
            .append_pair("high_quality", "1")
            .append_pair("danmaku", "0");
    }
    Ok(url)
}

fn join(base: &str, id: &str) -> Result<Url> {
    parse(&format!("{base}{}", urlencoding::encode(id)))
}

fn parse(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::unsupported_host(format!("bad player url {raw}: {e}")))
}
