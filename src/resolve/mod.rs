//! Media reference resolution.
//!
//! A [`MediaReference`] (vault file, URL, or free text) is turned into a
//! [`VideoInfo`]:
//!
//! 1. The media kind comes only from the extension of the final path segment.
//! 2. A vault file with a media extension becomes [`VideoInfo::Internal`].
//! 3. A URL with a media extension becomes [`VideoInfo::Direct`].
//! 4. A URL without one is classified by [`crate::host`] into
//!    [`VideoInfo::Host`].
//!
//! Everything else resolves to `None`. The only error surfaced to callers is
//! [`Error::MissingDependency`]; other failures are logged and collapsed.

mod info;
mod vault;

pub use info::{without_fragment, DirectMedia, HostMedia, InternalMedia, VideoInfo};
pub use vault::{
    local_resource_url, FileRef, FsVault, SubtitleTrack, TrackBundle, Vault,
    LOCAL_RESOURCE_PREFIX,
};

use std::sync::Arc;

use mediaext_common::{paths, Error, Result};
use tracing::{debug, warn};
use url::Url;

use crate::host;

/// What the user pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaReference {
    /// A vault file plus the `#...` suffix of the link (possibly empty).
    File { file: FileRef, hash: String },
    /// An already parsed URL.
    Url(Url),
    /// Unparsed text, expected to be a URL.
    Raw(String),
}

impl MediaReference {
    /// A vault file link such as `notes/video.mp4#t=10,20`.
    pub fn file_link(link: &str) -> Self {
        let (path, hash) = match link.split_once('#') {
            Some((path, hash)) => (path, format!("#{hash}")),
            None => (link, String::new()),
        };
        Self::File {
            file: FileRef::new(path),
            hash,
        }
    }
}

/// Resolves [`MediaReference`]s, optionally against a vault.
#[derive(Clone, Default)]
pub struct MediaResolver {
    vault: Option<Arc<dyn Vault>>,
}

impl MediaResolver {
    /// A resolver without a vault. File references fail with
    /// [`Error::MissingDependency`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vault(vault: Arc<dyn Vault>) -> Self {
        Self { vault: Some(vault) }
    }

    pub fn vault(&self) -> Option<&Arc<dyn Vault>> {
        self.vault.as_ref()
    }

    /// Resolve `reference`, returning `Ok(None)` when it is not playable.
    pub async fn resolve(&self, reference: &MediaReference) -> Result<Option<VideoInfo>> {
        match self.try_resolve(reference).await {
            Ok(info) => Ok(info),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!(reference = ?reference, error = %e, "reference did not resolve");
                Ok(None)
            }
        }
    }

    async fn try_resolve(&self, reference: &MediaReference) -> Result<Option<VideoInfo>> {
        match reference {
            MediaReference::File { file, hash } => self.resolve_file(file, hash).await,
            MediaReference::Url(url) => resolve_url(url).map(Some),
            MediaReference::Raw(raw) => {
                let url = Url::parse(raw.trim())
                    .map_err(|e| Error::invalid_reference(format!("{raw}: {e}")))?;
                resolve_url(&url).map(Some)
            }
        }
    }

    async fn resolve_file(&self, file: &FileRef, hash: &str) -> Result<Option<VideoInfo>> {
        let Some(kind) = paths::media_kind_of(file.path()) else {
            return Err(Error::unresolvable_local(format!(
                "{} has no playable extension",
                file.path()
            )));
        };
        let vault = self.vault.as_ref().ok_or_else(|| {
            Error::missing_dependency(format!("a vault is required to resolve {}", file.path()))
        })?;

        let mut src = vault.resource_url(file).await?;
        let fragment = hash.trim_start_matches('#');
        src.set_fragment((!fragment.is_empty()).then_some(fragment));

        let tracks = match vault.subtitle_tracks(file).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!(file = %file.path(), error = %e, "failed to load subtitle tracks");
                None
            }
        };

        Ok(Some(VideoInfo::Internal(InternalMedia {
            file: file.clone(),
            filename: file.name().to_string(),
            kind,
            src,
            tracks,
        })))
    }
}

impl std::fmt::Debug for MediaResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaResolver")
            .field("vault", &self.vault.is_some())
            .finish()
    }
}

/// Resolve a URL without touching any vault.
///
/// A media extension on the final path segment yields
/// [`VideoInfo::Direct`]; otherwise the host classifier decides.
///
/// # Examples
///
/// ```
/// use mediaext::resolve::{resolve_url, VideoInfo};
/// use url::Url;
///
/// let url = Url::parse("https://cdn.example.com/talks/My%20Talk.webm#t=5").unwrap();
/// match resolve_url(&url).unwrap() {
///     VideoInfo::Direct(media) => assert_eq!(media.filename, "My Talk.webm"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn resolve_url(url: &Url) -> Result<VideoInfo> {
    let last_segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    if let Some(kind) = paths::media_kind_of(last_segment) {
        let filename = urlencoding::decode(last_segment)
            .map(|name| name.into_owned())
            .unwrap_or_else(|_| last_segment.to_string());
        return Ok(VideoInfo::Direct(DirectMedia {
            filename,
            kind,
            link: url.clone(),
            src: local_resource_url(url)?,
        }));
    }

    let video = host::classify(url)?;
    Ok(VideoInfo::Host(HostMedia {
        video,
        src: url.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaext_common::{MediaKind, VideoHost};

    #[test]
    fn test_file_link_split() {
        assert_eq!(
            MediaReference::file_link("notes/video.mp4#t=10,20"),
            MediaReference::File {
                file: FileRef::new("notes/video.mp4"),
                hash: "#t=10,20".into(),
            }
        );
        assert_eq!(
            MediaReference::file_link("a.mp3"),
            MediaReference::File {
                file: FileRef::new("a.mp3"),
                hash: String::new(),
            }
        );
    }

    #[test]
    fn test_resolve_url_direct() {
        let url = Url::parse("https://example.com/a/Song.FLAC?dl=1#t=3").unwrap();
        let VideoInfo::Direct(media) = resolve_url(&url).unwrap() else {
            panic!("expected direct media");
        };
        assert_eq!(media.kind, MediaKind::Audio);
        assert_eq!(media.filename, "Song.FLAC");
        assert_eq!(media.src, url);
    }

    #[test]
    fn test_resolve_url_file_scheme_rewritten() {
        let url = Url::parse("file:///media/clip.ogv").unwrap();
        let info = resolve_url(&url).unwrap();
        assert_eq!(info.src().as_str(), "app://local/media/clip.ogv");
        assert_matches::assert_matches!(&info, VideoInfo::Direct(media) => {
            assert_eq!(media.link, url);
        });
    }

    #[test]
    fn test_extension_only_from_last_segment() {
        let url = Url::parse("https://example.com/video.mp4/page").unwrap();
        assert!(resolve_url(&url).is_err());
    }

    #[test]
    fn test_resolve_url_host() {
        let url = Url::parse("https://vimeo.com/76979871").unwrap();
        let info = resolve_url(&url).unwrap();
        assert_eq!(info.host(), Some(VideoHost::Vimeo));
    }
}
