//! Core type definitions for media kinds and video hosts.
//!
//! Both enums are closed. Code that branches on [`VideoHost`] must match every
//! member explicitly (no wildcard arms) so that adding a host fails to compile
//! until every consumer handles it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable media kind, derived only from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio-only media.
    Audio,
    /// Video media.
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Third-party video platform embedded through its own iframe player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoHost {
    /// youtube.com / youtu.be
    YouTube,
    /// bilibili.com
    Bilibili,
    /// vimeo.com
    Vimeo,
}

impl VideoHost {
    /// Every host, in declaration order.
    pub const ALL: [VideoHost; 3] = [Self::YouTube, Self::Bilibili, Self::Vimeo];

    /// Hostnames recognized for this video host.
    pub fn hostnames(self) -> &'static [&'static str] {
        match self {
            Self::YouTube => &["www.youtube.com", "youtu.be"],
            Self::Bilibili => &["www.bilibili.com"],
            Self::Vimeo => &["vimeo.com"],
        }
    }

    /// Look up the host owning `hostname` (exact match).
    pub fn from_hostname(hostname: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|host| host.hostnames().contains(&hostname))
    }

    /// Provider name understood by the embedded player, if it can play this
    /// host natively. Bilibili is only available through its iframe.
    pub fn player_provider(self) -> Option<&'static str> {
        match self {
            Self::YouTube => Some("youtube"),
            Self::Vimeo => Some("vimeo"),
            Self::Bilibili => None,
        }
    }
}

impl fmt::Display for VideoHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YouTube => write!(f, "YouTube"),
            Self::Bilibili => write!(f, "Bilibili"),
            Self::Vimeo => write!(f, "Vimeo"),
        }
    }
}

impl std::str::FromStr for VideoHost {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Ok(Self::YouTube),
            "bilibili" => Ok(Self::Bilibili),
            "vimeo" => Ok(Self::Vimeo),
            _ => Err(format!("Invalid video host: {}", s)),
        }
    }
}
