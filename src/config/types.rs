use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feature switches and defaults for mediaext.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Apply `#t=`/`#loop` fragments to embedded vault media
    #[serde(default = "default_true")]
    pub media_fragments_embed: bool,

    /// Turn `[[file.mp4#t=10]]` links into timestamp links
    #[serde(default)]
    pub timestamp_link: bool,

    /// Embed external media written with image syntax
    #[serde(default)]
    pub extended_image_embed_syntax: bool,

    /// Play Bilibili videos in the internal player instead of the iframe
    #[serde(default)]
    pub internal_bili_playback: bool,

    /// Vault used by the CLI when `--vault` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            media_fragments_embed: true,
            timestamp_link: false,
            extended_image_embed_syntax: false,
            internal_bili_playback: false,
            vault: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Names of the boolean switches, as written in the config file.
pub const FLAG_NAMES: [&str; 4] = [
    "media_fragments_embed",
    "timestamp_link",
    "extended_image_embed_syntax",
    "internal_bili_playback",
];

impl Settings {
    /// Every boolean switch with its current value.
    pub fn flags(&self) -> [(&'static str, bool); 4] {
        [
            (FLAG_NAMES[0], self.media_fragments_embed),
            (FLAG_NAMES[1], self.timestamp_link),
            (FLAG_NAMES[2], self.extended_image_embed_syntax),
            (FLAG_NAMES[3], self.internal_bili_playback),
        ]
    }

    /// Set a switch by name. Returns `false` for an unknown name.
    pub fn set_flag(&mut self, name: &str, value: bool) -> bool {
        let slot = match name {
            "media_fragments_embed" => &mut self.media_fragments_embed,
            "timestamp_link" => &mut self.timestamp_link,
            "extended_image_embed_syntax" => &mut self.extended_image_embed_syntax,
            "internal_bili_playback" => &mut self.internal_bili_playback,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// A place in the editor where mediaext hooks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    /// `![[clip.mp4#t=10]]`
    InternalEmbeds,
    /// `[[clip.mp4#t=10]]`
    InternalLinks,
    /// `![](https://...)`
    ExternalEmbeds,
}

/// How Bilibili videos are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiliPlayback {
    Iframe,
    Internal,
}

/// Entry points enabled by a [`Settings`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoints {
    pub enabled: Vec<EntryPoint>,
    pub bili_playback: BiliPlayback,
}

impl EntryPoints {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut enabled = Vec::with_capacity(3);
        if settings.media_fragments_embed {
            enabled.push(EntryPoint::InternalEmbeds);
        }
        if settings.timestamp_link {
            enabled.push(EntryPoint::InternalLinks);
        }
        if settings.extended_image_embed_syntax {
            enabled.push(EntryPoint::ExternalEmbeds);
        }

        let bili_playback = if settings.internal_bili_playback {
            BiliPlayback::Internal
        } else {
            BiliPlayback::Iframe
        };

        Self {
            enabled,
            bili_playback,
        }
    }

    pub fn contains(&self, entry: EntryPoint) -> bool {
        self.enabled.contains(&entry)
    }
}
