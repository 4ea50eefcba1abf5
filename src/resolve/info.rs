//! The normalized descriptor produced by reference resolution.

use mediaext_common::{MediaKind, VideoHost};
use mediaext_fragment::{parse_fragment, PlaybackDirectives};
use serde::Serialize;
use url::Url;

use super::vault::{FileRef, TrackBundle};
use crate::host::HostVideo;

/// A resolved media resource.
///
/// Built once per resolution and never mutated; a new reference produces a
/// new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VideoInfo {
    /// A file inside the vault.
    Internal(InternalMedia),
    /// A URL pointing straight at a media file.
    Direct(DirectMedia),
    /// A video page on a third-party host.
    Host(HostMedia),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalMedia {
    pub file: FileRef,
    pub filename: String,
    pub kind: MediaKind,
    /// Playable URL with the reference's fragment attached.
    pub src: Url,
    pub tracks: Option<TrackBundle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectMedia {
    pub filename: String,
    pub kind: MediaKind,
    /// The URL as referenced, fragment included.
    pub link: Url,
    /// Safe-to-embed URL; `file:` URLs are already rewritten.
    pub src: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostMedia {
    #[serde(flatten)]
    pub video: HostVideo,
    /// The page URL the video was resolved from.
    pub src: Url,
}

impl VideoInfo {
    /// The URL carrying this media's fragment.
    pub fn src(&self) -> &Url {
        match self {
            Self::Internal(media) => &media.src,
            Self::Direct(media) => &media.src,
            Self::Host(media) => &media.src,
        }
    }

    /// Fragment of [`src`](Self::src) without the `#`, or `""`.
    pub fn fragment(&self) -> &str {
        self.src().fragment().unwrap_or_default()
    }

    /// Playback directives parsed from the fragment.
    pub fn directives(&self) -> PlaybackDirectives {
        parse_fragment(self.fragment())
    }

    /// Media kind. Hosted videos are always video.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Internal(media) => media.kind,
            Self::Direct(media) => media.kind,
            Self::Host(_) => MediaKind::Video,
        }
    }

    /// Video host, for hosted media.
    pub fn host(&self) -> Option<VideoHost> {
        match self {
            Self::Host(media) => Some(media.video.host),
            Self::Internal(_) | Self::Direct(_) => None,
        }
    }

    /// Whether `other` is the same media, differing at most in fragment.
    ///
    /// Local files compare by vault path, direct URLs by URL without fragment,
    /// hosted videos by host and id.
    pub fn is_same_media(&self, other: &VideoInfo) -> bool {
        match (self, other) {
            (Self::Internal(a), Self::Internal(b)) => a.file == b.file,
            (Self::Direct(a), Self::Direct(b)) => {
                without_fragment(&a.src) == without_fragment(&b.src)
            }
            (Self::Host(a), Self::Host(b)) => {
                a.video.host == b.video.host && a.video.id == b.video.id
            }
            _ => false,
        }
    }

    /// Title shown for this media: the file name, or `<Host>: <id>`.
    pub fn display_text(&self) -> String {
        match self {
            Self::Internal(media) => media.filename.clone(),
            Self::Direct(media) => media.filename.clone(),
            Self::Host(media) => format!("{}: {}", media.video.host, media.video.id),
        }
    }

    /// Object URLs that must be revoked when this media is released.
    pub fn object_urls(&self) -> &[String] {
        match self {
            Self::Internal(media) => media
                .tracks
                .as_ref()
                .map(|bundle| bundle.object_urls.as_slice())
                .unwrap_or_default(),
            Self::Direct(_) | Self::Host(_) => &[],
        }
    }
}

/// `url` with its fragment removed.
pub fn without_fragment(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::resolve_host;

    fn direct(raw: &str) -> VideoInfo {
        let link = Url::parse(raw).unwrap();
        VideoInfo::Direct(DirectMedia {
            filename: "a.mp4".into(),
            kind: MediaKind::Video,
            src: link.clone(),
            link,
        })
    }

    fn hosted(raw: &str) -> VideoInfo {
        let src = Url::parse(raw).unwrap();
        VideoInfo::Host(HostMedia {
            video: resolve_host(&src).unwrap(),
            src,
        })
    }

    #[test]
    fn test_fragment_and_directives() {
        let info = direct("https://example.com/a.mp4#t=10,20&loop");
        assert_eq!(info.fragment(), "t=10,20&loop");
        let directives = info.directives();
        assert!(directives.looping);
        assert_eq!(directives.time_span.unwrap().end(), Some(20.0));

        assert_eq!(direct("https://example.com/a.mp4").fragment(), "");
    }

    #[test]
    fn test_same_media_ignores_fragment() {
        let a = direct("https://example.com/a.mp4#t=1");
        let b = direct("https://example.com/a.mp4#t=2");
        let c = direct("https://example.com/b.mp4");
        assert!(a.is_same_media(&b));
        assert!(!a.is_same_media(&c));
    }

    #[test]
    fn test_same_hosted_video_across_url_shapes() {
        let long = hosted("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let short = hosted("https://youtu.be/dQw4w9WgXcQ#t=30");
        assert!(long.is_same_media(&short));
        assert!(!long.is_same_media(&direct("https://example.com/a.mp4")));
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            hosted("https://vimeo.com/76979871").display_text(),
            "Vimeo: 76979871"
        );
        assert_eq!(direct("https://example.com/a.mp4").display_text(), "a.mp4");
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(hosted("https://vimeo.com/76979871")).unwrap();
        assert_eq!(json["type"], "host");
        assert_eq!(json["host"], "vimeo");
        assert_eq!(json["id"], "76979871");
        assert_eq!(json["iframe"], "https://player.vimeo.com/video/76979871");
    }
}
