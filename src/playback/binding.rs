//! A player bound to the media currently shown in a view.

use std::sync::Arc;

use mediaext_fragment::{parse_fragment, PlaybackDirectives};
use tracing::{debug, warn};

use super::controller::{Reaction, RangeController};
use super::player::{MediaPlayer, MediaSource, PlayerEvent};
use crate::resolve::{Vault, VideoInfo};

/// Text shown when nothing is loaded.
pub const NO_MEDIA: &str = "No Media";

/// Outcome of [`PlayerBinding::retarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// The new media was loaded.
    Loaded,
    /// Already showing this media; nothing changed. Use
    /// [`PlayerBinding::set_fragment`] to move within it.
    SameMedia,
    /// The player cannot show this media; the previous media stays.
    Unsupported,
}

/// Owns a player, the media it shows and the controller enforcing that
/// media's fragment. Each loaded source gets its own controller.
pub struct PlayerBinding<P: MediaPlayer> {
    player: P,
    controller: RangeController,
    info: Option<VideoInfo>,
    vault: Option<Arc<dyn Vault>>,
}

impl<P: MediaPlayer> PlayerBinding<P> {
    /// Bind an empty player. `vault` receives object URL revocations.
    pub fn new(mut player: P, vault: Option<Arc<dyn Vault>>) -> Self {
        let controller = RangeController::attach(&mut player, &PlaybackDirectives::default());
        Self {
            player,
            controller,
            info: None,
            vault,
        }
    }

    /// Show `info` in the player.
    pub fn retarget(&mut self, info: VideoInfo) -> Retarget {
        if self
            .info
            .as_ref()
            .is_some_and(|current| current.is_same_media(&info))
        {
            debug!(media = %info.display_text(), "already showing media");
            return Retarget::SameMedia;
        }

        let Some(source) = player_source(&info) else {
            warn!(media = %info.display_text(), "media not supported by the player");
            return Retarget::Unsupported;
        };

        self.revoke_object_urls();
        std::mem::take(&mut self.controller).detach(&mut self.player);
        self.player.set_source(source);
        self.controller = RangeController::attach(&mut self.player, &info.directives());
        debug!(media = %info.display_text(), fragment = %info.fragment(), "loaded media");
        self.info = Some(info);
        Retarget::Loaded
    }

    /// Re-parse `hash` and apply it to the current media.
    pub fn set_fragment(&mut self, hash: &str) -> PlaybackDirectives {
        let directives = parse_fragment(hash);
        self.controller.apply(&mut self.player, &directives);
        directives
    }

    /// Forward a player event to the controller.
    pub fn handle(&mut self, event: PlayerEvent) -> Reaction {
        self.controller.handle(&mut self.player, event)
    }

    /// `No Media`, the file name, or `<Host>: <id>`.
    pub fn display_text(&self) -> String {
        self.info
            .as_ref()
            .map(VideoInfo::display_text)
            .unwrap_or_else(|| NO_MEDIA.to_string())
    }

    /// Picture-in-picture is available for media the player fetches itself.
    pub fn supports_pip(&self) -> bool {
        matches!(
            self.info,
            Some(VideoInfo::Internal(_)) | Some(VideoInfo::Direct(_))
        )
    }

    pub fn info(&self) -> Option<&VideoInfo> {
        self.info.as_ref()
    }

    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Current position of the player, in seconds.
    pub fn current_time(&self) -> f64 {
        self.player.current_time()
    }

    /// Release object URLs and give the player back.
    pub fn teardown(self) -> P {
        self.revoke_object_urls();
        let Self {
            mut player,
            controller,
            ..
        } = self;
        controller.detach(&mut player);
        player
    }

    fn revoke_object_urls(&self) {
        let (Some(info), Some(vault)) = (&self.info, &self.vault) else {
            return;
        };
        for url in info.object_urls() {
            vault.revoke_object_url(url);
        }
    }
}

/// What the player is asked to load for `info`, or `None` when it has no
/// way to play it.
fn player_source(info: &VideoInfo) -> Option<MediaSource> {
    match info {
        VideoInfo::Internal(media) => Some(MediaSource::Url {
            src: media.src.clone(),
            kind: media.kind,
            tracks: media
                .tracks
                .as_ref()
                .map(|bundle| bundle.tracks.clone())
                .unwrap_or_default(),
        }),
        VideoInfo::Direct(media) => Some(MediaSource::Url {
            src: media.src.clone(),
            kind: media.kind,
            tracks: Vec::new(),
        }),
        VideoInfo::Host(media) => {
            let provider = media.video.host.player_provider()?;
            Some(MediaSource::Provider {
                provider,
                id: media.video.id.clone(),
            })
        }
    }
}
