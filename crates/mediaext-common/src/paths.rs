//! Extension tables for detecting playable media.
//!
//! Only the extension of the final path segment is consulted. Query strings
//! and fragments must already be stripped by the caller (a parsed URL path
//! never contains them).

use crate::types::MediaKind;

/// Audio extensions the embedded player can handle.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "3gp", "flac"];

/// Video extensions the embedded player can handle.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogv"];

/// Return the extension of the last `/`-separated segment of `path`.
///
/// Dot-files without a further dot (`.hidden`) have no extension.
///
/// # Examples
///
/// ```
/// use mediaext_common::paths::extension_of;
///
/// assert_eq!(extension_of("/media/clip.final.mp4"), Some("mp4"));
/// assert_eq!(extension_of("/media.d/clip"), None);
/// ```
pub fn extension_of(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Classify an extension (without the dot) against the allow-lists.
pub fn media_kind_for_extension(ext: &str) -> Option<MediaKind> {
    let ext = ext.to_ascii_lowercase();
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Audio)
    } else {
        None
    }
}

/// Classify a path by the extension of its final segment.
///
/// # Examples
///
/// ```
/// use mediaext_common::MediaKind;
/// use mediaext_common::paths::media_kind_of;
///
/// assert_eq!(media_kind_of("notes/video.mp4"), Some(MediaKind::Video));
/// assert_eq!(media_kind_of("podcast/ep1.flac"), Some(MediaKind::Audio));
/// assert_eq!(media_kind_of("notes/readme.md"), None);
/// ```
pub fn media_kind_of(path: &str) -> Option<MediaKind> {
    extension_of(path).and_then(media_kind_for_extension)
}

/// Get the list of audio file extensions.
#[must_use]
pub fn audio_extensions() -> &'static [&'static str] {
    AUDIO_EXTENSIONS
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}
