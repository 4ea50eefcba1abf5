//! Third-party video host support.
//!
//! This module classifies URLs that point at a video page on one of the
//! known [`VideoHost`]s and builds the URL of the host's embeddable player.
//!
//! ## Structure
//!
//! - [`resolver`]: hostname/path classification into a [`HostVideo`]
//! - [`embed`]: iframe player URL construction
//! - [`thumbnail`]: per-host thumbnail lookup seam
//!
//! Every function here that branches on [`VideoHost`] matches all members
//! without a wildcard arm, so a new host cannot be added without the
//! compiler pointing at each of them.

pub mod embed;
pub mod resolver;
pub mod thumbnail;

pub use embed::embed_url;
pub use resolver::{classify, resolve_host};
pub use thumbnail::{DefaultThumbnails, ThumbnailSource};

use mediaext_common::VideoHost;
use serde::Serialize;
use url::Url;

/// A video on a third-party host, ready to embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVideo {
    /// Which platform hosts the video.
    pub host: VideoHost,
    /// Host-specific video id, percent-decoded from the page URL.
    pub id: String,
    /// URL of the host's iframe player for this video.
    pub iframe: Url,
}
