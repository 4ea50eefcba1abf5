//! Thumbnail lookup for hosted videos.

use async_trait::async_trait;
use mediaext_common::VideoHost;

use super::HostVideo;

/// Source of preview images for hosted videos.
#[async_trait]
pub trait ThumbnailSource: Send + Sync {
    /// URL of a preview image for `video`, if one can be determined.
    async fn thumbnail(&self, video: &HostVideo) -> Option<String>;
}

/// Thumbnails derivable from the video id alone.
///
/// Bilibili and Vimeo only expose thumbnails through their web APIs, so
/// they yield `None` here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultThumbnails;

#[async_trait]
impl ThumbnailSource for DefaultThumbnails {
    async fn thumbnail(&self, video: &HostVideo) -> Option<String> {
        match video.host {
            VideoHost::YouTube => Some(format!(
                "https://i.ytimg.com/vi/{}/maxresdefault.jpg",
                urlencoding::encode(&video.id)
            )),
            VideoHost::Bilibili => None,
            VideoHost::Vimeo => None,
        }
    }
}
