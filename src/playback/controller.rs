//! Play-range enforcement.
//!
//! A [`RangeController`] keeps a playing player inside a [`TimeSpan`]:
//!
//! - on `Playing`, a position outside `[start, end]` seeks back to `start`;
//! - on `TimeUpdate`, a position past `end` restarts from `start` when the
//!   player loops, and pauses it otherwise.
//!
//! Without a span every event is ignored. A controller serves one source;
//! the owner of the player detaches it and attaches a new one when the
//! source changes.

use mediaext_fragment::{PlaybackDirectives, TimeSpan};
use tracing::trace;

use super::player::{MediaPlayer, PlayerEvent, Subscription};

/// Whether a range is being enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RangeState {
    #[default]
    Unbounded,
    Bounded(TimeSpan),
}

impl RangeState {
    pub fn span(&self) -> Option<&TimeSpan> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(span) => Some(span),
        }
    }
}

/// What the controller did in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing to enforce.
    None,
    /// The position was moved back to the range start.
    SeekedToStart,
    /// The end was reached while looping; playback restarted at the start.
    Restarted,
    /// The end was reached; the player was paused.
    Paused,
}

/// Enforces one play range on the player it was attached to.
///
/// The default value is detached: no subscriptions, nothing enforced.
#[derive(Debug, Default)]
pub struct RangeController {
    state: RangeState,
    subscriptions: Vec<Subscription>,
}

impl RangeController {
    /// Subscribe to `player`'s events and apply `directives`.
    pub fn attach(player: &mut impl MediaPlayer, directives: &PlaybackDirectives) -> Self {
        let subscriptions = PlayerEvent::ALL
            .into_iter()
            .map(|event| player.subscribe(event))
            .collect();
        let mut controller = Self {
            state: RangeState::Unbounded,
            subscriptions,
        };
        controller.apply(player, directives);
        controller
    }

    /// Release every subscription held on `player`.
    pub fn detach(self, player: &mut impl MediaPlayer) {
        for subscription in self.subscriptions {
            player.unsubscribe(subscription);
        }
    }

    /// Apply loop/autoplay/muted and the time span.
    pub fn apply(&mut self, player: &mut impl MediaPlayer, directives: &PlaybackDirectives) {
        player.set_looping(directives.looping);
        player.set_autoplay(directives.autoplay);
        player.set_muted(directives.muted);
        self.set_time_span(player, directives.time_span.clone());
    }

    /// Replace the enforced span. A span different from the current one
    /// moves the player to its start.
    pub fn set_time_span(&mut self, player: &mut impl MediaPlayer, span: Option<TimeSpan>) {
        match span {
            Some(span) => {
                if self.state.span() != Some(&span) {
                    player.set_current_time(span.start());
                }
                self.state = RangeState::Bounded(span);
            }
            None => self.state = RangeState::Unbounded,
        }
    }

    /// React to an event fired by `player`.
    pub fn handle(&mut self, player: &mut impl MediaPlayer, event: PlayerEvent) -> Reaction {
        let RangeState::Bounded(span) = &self.state else {
            return Reaction::None;
        };
        let position = player.current_time();

        let reaction = match event {
            PlayerEvent::Playing if !span.contains(position) => {
                player.set_current_time(span.start());
                Reaction::SeekedToStart
            }
            PlayerEvent::TimeUpdate if span.is_past_end(position) => {
                if player.looping() {
                    player.set_current_time(span.start());
                    Reaction::Restarted
                } else if !player.paused() {
                    player.pause();
                    Reaction::Paused
                } else {
                    Reaction::None
                }
            }
            PlayerEvent::Playing | PlayerEvent::TimeUpdate => Reaction::None,
        };

        if reaction != Reaction::None {
            trace!(?event, position, ?reaction, "enforced play range");
        }
        reaction
    }

    pub fn state(&self) -> &RangeState {
        &self.state
    }

    pub fn time_span(&self) -> Option<&TimeSpan> {
        self.state.span()
    }

    /// Handles currently held on the player.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::MediaSource;
    use mediaext_fragment::parse_fragment;

    /// Minimal in-memory player.
    #[derive(Debug, Default)]
    struct StubPlayer {
        position: f64,
        paused: bool,
        looping: bool,
        muted: bool,
        next_id: u64,
        live: Vec<Subscription>,
        pauses: usize,
    }

    impl MediaPlayer for StubPlayer {
        fn current_time(&self) -> f64 {
            self.position
        }
        fn set_current_time(&mut self, seconds: f64) {
            self.position = seconds;
        }
        fn duration(&self) -> Option<f64> {
            None
        }
        fn play(&mut self) {
            self.paused = false;
        }
        fn pause(&mut self) {
            self.paused = true;
            self.pauses += 1;
        }
        fn paused(&self) -> bool {
            self.paused
        }
        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }
        fn looping(&self) -> bool {
            self.looping
        }
        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }
        fn set_autoplay(&mut self, _autoplay: bool) {}
        fn set_source(&mut self, _source: MediaSource) {
            self.position = 0.0;
        }
        fn subscribe(&mut self, event: PlayerEvent) -> Subscription {
            self.next_id += 1;
            let subscription = Subscription::new(self.next_id, event);
            self.live.push(subscription);
            subscription
        }
        fn unsubscribe(&mut self, subscription: Subscription) {
            self.live.retain(|s| *s != subscription);
        }
    }

    #[test]
    fn test_unbounded_ignores_events() {
        let mut player = StubPlayer::default();
        let mut controller = RangeController::attach(&mut player, &parse_fragment(""));
        player.position = 1e6;
        assert_eq!(controller.handle(&mut player, PlayerEvent::Playing), Reaction::None);
        assert_eq!(controller.handle(&mut player, PlayerEvent::TimeUpdate), Reaction::None);
        assert_eq!(player.position, 1e6);
    }

    #[test]
    fn test_attach_seeks_to_start() {
        let mut player = StubPlayer::default();
        let controller = RangeController::attach(&mut player, &parse_fragment("#t=10,20"));
        assert_eq!(player.position, 10.0);
        assert_eq!(player.live.len(), 2);
        assert_eq!(controller.subscriptions(), player.live.as_slice());
    }

    #[test]
    fn test_same_span_does_not_seek() {
        let mut player = StubPlayer::default();
        let mut controller = RangeController::attach(&mut player, &parse_fragment("#t=10,20"));
        player.position = 15.0;
        controller.set_time_span(&mut player, TimeSpan::new(10.0, Some(20.0)));
        assert_eq!(player.position, 15.0);

        controller.set_time_span(&mut player, TimeSpan::new(12.0, Some(20.0)));
        assert_eq!(player.position, 12.0);
    }

    #[test]
    fn test_pause_only_when_playing() {
        let mut player = StubPlayer::default();
        let mut controller = RangeController::attach(&mut player, &parse_fragment("#t=10,20"));
        player.position = 25.0;
        assert_eq!(controller.handle(&mut player, PlayerEvent::TimeUpdate), Reaction::Paused);
        assert_eq!(controller.handle(&mut player, PlayerEvent::TimeUpdate), Reaction::None);
        assert_eq!(player.pauses, 1);
    }

    #[test]
    fn test_playing_before_start_seeks() {
        let mut player = StubPlayer::default();
        let mut controller = RangeController::attach(&mut player, &parse_fragment("#t=10"));
        player.position = 3.0;
        assert_eq!(
            controller.handle(&mut player, PlayerEvent::Playing),
            Reaction::SeekedToStart
        );
        assert_eq!(player.position, 10.0);

        // Open-ended spans never pause.
        player.position = 1e6;
        assert_eq!(controller.handle(&mut player, PlayerEvent::TimeUpdate), Reaction::None);
    }

    #[test]
    fn test_clearing_span_stops_enforcement() {
        let mut player = StubPlayer::default();
        let mut controller = RangeController::attach(&mut player, &parse_fragment("#t=10,20"));
        controller.set_time_span(&mut player, None);
        player.position = 25.0;
        assert_eq!(controller.handle(&mut player, PlayerEvent::TimeUpdate), Reaction::None);
        assert_eq!(controller.state(), &RangeState::Unbounded);
    }

    #[test]
    fn test_detach_unsubscribes() {
        let mut player = StubPlayer::default();
        let controller = RangeController::attach(&mut player, &parse_fragment("#t=10,20&muted"));
        assert_eq!(controller.subscriptions().len(), 2);
        controller.detach(&mut player);
        assert!(player.live.is_empty());
        assert!(player.muted);
    }

    #[test]
    fn test_default_is_detached() {
        let controller = RangeController::default();
        assert!(controller.subscriptions().is_empty());
        assert_eq!(controller.state(), &RangeState::Unbounded);
    }
}
