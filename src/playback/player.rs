//! The player surface the range controller drives.

use mediaext_common::MediaKind;
use url::Url;

use crate::resolve::SubtitleTrack;

/// Player events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    /// Playback started or resumed, including after a seek while playing.
    Playing,
    /// The playback position advanced.
    TimeUpdate,
}

impl PlayerEvent {
    pub const ALL: [PlayerEvent; 2] = [Self::Playing, Self::TimeUpdate];
}

/// Handle returned by [`MediaPlayer::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    event: PlayerEvent,
}

impl Subscription {
    pub fn new(id: u64, event: PlayerEvent) -> Self {
        Self { id, event }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn event(&self) -> PlayerEvent {
        self.event
    }
}

/// What a player is asked to load.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    /// A URL the player fetches itself, with optional subtitle tracks.
    Url {
        src: Url,
        kind: MediaKind,
        tracks: Vec<SubtitleTrack>,
    },
    /// A video played through a provider integration (e.g. `youtube`).
    Provider { provider: &'static str, id: String },
}

/// An audio/video player.
///
/// Implementations deliver the events they were subscribed to by calling
/// back into the owner of the controller; the controller itself never
/// blocks or performs I/O.
pub trait MediaPlayer {
    /// Current position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Total duration, once known.
    fn duration(&self) -> Option<f64>;

    fn play(&mut self);
    fn pause(&mut self);
    fn paused(&self) -> bool;

    fn set_muted(&mut self, muted: bool);
    fn looping(&self) -> bool;
    fn set_looping(&mut self, looping: bool);
    fn set_autoplay(&mut self, autoplay: bool);

    /// Replace what the player is showing.
    fn set_source(&mut self, source: MediaSource);

    fn subscribe(&mut self, event: PlayerEvent) -> Subscription;
    fn unsubscribe(&mut self, subscription: Subscription);
}
