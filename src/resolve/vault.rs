//! Access to the note vault that owns local media files.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use mediaext_common::{paths, Error, Result};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Scheme and host under which local files are served to the player.
pub const LOCAL_RESOURCE_PREFIX: &str = "app://local/";

/// Sidecar subtitle extensions recognized by [`FsVault`].
const SUBTITLE_EXTENSIONS: &[&str] = &["vtt", "srt"];

// ---------------------------------------------------------------------------
// File references
// ---------------------------------------------------------------------------

/// A vault-relative file path, always `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    /// Wrap a vault-relative path. Backslashes and leading slashes are
    /// normalized away.
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref().replace('\\', "/");
        Self(path.trim_start_matches('/').to_string())
    }

    /// The vault-relative path.
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Final path segment, e.g. `video.mp4`.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// File name without its extension.
    pub fn stem(&self) -> &str {
        let name = self.name();
        match paths::extension_of(name) {
            Some(ext) => &name[..name.len() - ext.len() - 1],
            None => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Subtitle tracks
// ---------------------------------------------------------------------------

/// One subtitle/caption track for a local media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleTrack {
    /// Human-readable label.
    pub label: String,
    /// BCP-47 language tag, when the sidecar name carries one.
    pub language: Option<String>,
    /// URL the player loads the track from.
    pub src: String,
}

/// Subtitle tracks plus any object URLs created to serve them.
///
/// Object URLs must be handed back to [`Vault::revoke_object_url`] once the
/// player no longer shows this media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackBundle {
    pub tracks: Vec<SubtitleTrack>,
    pub object_urls: Vec<String>,
}

// ---------------------------------------------------------------------------
// Vault trait
// ---------------------------------------------------------------------------

/// The storage a local [`FileRef`] is resolved against.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Playable URL for `file`, without a fragment.
    async fn resource_url(&self, file: &FileRef) -> Result<Url>;

    /// Subtitle tracks belonging to `file`, if any.
    async fn subtitle_tracks(&self, file: &FileRef) -> Result<Option<TrackBundle>>;

    /// Release an object URL handed out in a [`TrackBundle`].
    fn revoke_object_url(&self, _url: &str) {}
}

/// Rewrite a `file:` URL to the local resource scheme. Other URLs are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use mediaext::resolve::local_resource_url;
/// use url::Url;
///
/// let url = Url::parse("file:///home/me/clip.mp4#t=3").unwrap();
/// assert_eq!(
///     local_resource_url(&url).unwrap().as_str(),
///     "app://local/home/me/clip.mp4#t=3"
/// );
/// ```
pub fn local_resource_url(url: &Url) -> Result<Url> {
    if url.scheme() != "file" {
        return Ok(url.clone());
    }

    let mut raw = format!(
        "{LOCAL_RESOURCE_PREFIX}{}",
        url.path().trim_start_matches('/')
    );
    if let Some(query) = url.query() {
        raw.push('?');
        raw.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        raw.push('#');
        raw.push_str(fragment);
    }
    Url::parse(&raw).map_err(|e| Error::invalid_reference(format!("{url}: {e}")))
}

// ---------------------------------------------------------------------------
// Filesystem vault
// ---------------------------------------------------------------------------

/// A vault rooted at a directory on disk.
///
/// Subtitles are sidecar files next to the media sharing its stem:
/// `clip.vtt`, `clip.en.vtt`, `clip.zh-CN.srt`.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `file`, refusing references that escape the root.
    fn locate(&self, file: &FileRef) -> Result<PathBuf> {
        let relative = Path::new(file.path());
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if file.path().is_empty() || escapes {
            return Err(Error::unresolvable_local(format!(
                "{} is not inside the vault",
                file.path()
            )));
        }
        Ok(self.root.join(relative))
    }

    fn file_url(&self, path: &Path) -> Result<Url> {
        let absolute = std::path::absolute(path)?;
        let url = Url::from_file_path(&absolute)
            .map_err(|()| Error::vault(format!("not an absolute path: {}", absolute.display())))?;
        local_resource_url(&url)
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn resource_url(&self, file: &FileRef) -> Result<Url> {
        let path = self.locate(file)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => self.file_url(&path),
            Ok(_) => Err(Error::unresolvable_local(format!(
                "{} is not a file",
                file.path()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                Error::unresolvable_local(format!("{} not found in vault", file.path())),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn subtitle_tracks(&self, file: &FileRef) -> Result<Option<TrackBundle>> {
        let path = self.locate(file)?;
        let Some(dir) = path.parent() else {
            return Ok(None);
        };

        let stem = file.stem();
        let mut tracks = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(language) = sidecar_language(name, stem) else {
                continue;
            };
            let src = self.file_url(&entry.path())?;
            debug!(track = %name, "found subtitle sidecar");
            tracks.push(SubtitleTrack {
                label: language.clone().unwrap_or_else(|| name.to_string()),
                language,
                src: src.to_string(),
            });
        }

        if tracks.is_empty() {
            return Ok(None);
        }
        tracks.sort_by(|a, b| a.src.cmp(&b.src));
        Ok(Some(TrackBundle {
            tracks,
            object_urls: Vec::new(),
        }))
    }
}

/// `Some(language)` when `name` is a subtitle sidecar of `stem`.
fn sidecar_language(name: &str, stem: &str) -> Option<Option<String>> {
    let ext = paths::extension_of(name)?;
    if !SUBTITLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    let base = &name[..name.len() - ext.len() - 1];
    if base == stem {
        return Some(None);
    }
    let language = base.strip_prefix(stem)?.strip_prefix('.')?;
    if language.is_empty() || language.contains('.') {
        return None;
    }
    Some(Some(language.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ref_normalization() {
        let file = FileRef::new("\\notes\\media\\clip.final.mp4");
        assert_eq!(file.path(), "notes/media/clip.final.mp4");
        assert_eq!(file.name(), "clip.final.mp4");
        assert_eq!(file.stem(), "clip.final");

        assert_eq!(FileRef::new("README").stem(), "README");
    }

    #[test]
    fn test_local_resource_url_passthrough() {
        let url = Url::parse("https://example.com/a.mp4").unwrap();
        assert_eq!(local_resource_url(&url).unwrap(), url);
    }

    #[test]
    fn test_local_resource_url_keeps_query_and_fragment() {
        let url = Url::parse("file:///a/clip.mp4?v=2#t=3").unwrap();
        assert_eq!(
            local_resource_url(&url).unwrap().as_str(),
            "app://local/a/clip.mp4?v=2#t=3"
        );
    }

    #[test]
    fn test_sidecar_language() {
        assert_eq!(sidecar_language("clip.vtt", "clip"), Some(None));
        assert_eq!(
            sidecar_language("clip.en.vtt", "clip"),
            Some(Some("en".to_string()))
        );
        assert_eq!(
            sidecar_language("clip.zh-CN.SRT", "clip"),
            Some(Some("zh-CN".to_string()))
        );
        assert_eq!(sidecar_language("clip.mp4", "clip"), None);
        assert_eq!(sidecar_language("clipper.vtt", "clip"), None);
        assert_eq!(sidecar_language("clip.a.b.vtt", "clip"), None);
    }

    #[test]
    fn test_locate_rejects_escapes() {
        let vault = FsVault::new("/vault");
        assert!(vault.locate(&FileRef::new("../etc/passwd")).is_err());
        assert!(vault.locate(&FileRef::new("")).is_err());
        assert_eq!(
            vault.locate(&FileRef::new("a/b.mp4")).unwrap(),
            PathBuf::from("/vault/a/b.mp4")
        );
    }

    #[tokio::test]
    async fn test_fs_vault_resource_and_tracks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("notes")).unwrap();
        std::fs::write(dir.path().join("notes/clip.mp4"), b"").unwrap();
        std::fs::write(dir.path().join("notes/clip.en.vtt"), b"WEBVTT").unwrap();
        std::fs::write(dir.path().join("notes/other.vtt"), b"WEBVTT").unwrap();

        let vault = FsVault::new(dir.path());
        let file = FileRef::new("notes/clip.mp4");

        let url = vault.resource_url(&file).await.unwrap();
        assert_eq!(url.scheme(), "app");
        assert!(url.path().ends_with("/notes/clip.mp4"));

        let bundle = vault.subtitle_tracks(&file).await.unwrap().unwrap();
        assert_eq!(bundle.tracks.len(), 1);
        assert_eq!(bundle.tracks[0].language.as_deref(), Some("en"));
        assert!(bundle.object_urls.is_empty());
    }

    #[tokio::test]
    async fn test_fs_vault_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FsVault::new(dir.path());
        let err = vault
            .resource_url(&FileRef::new("missing.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvableLocalReference(_)));
    }
}
