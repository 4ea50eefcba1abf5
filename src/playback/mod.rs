//! Playback control for embedded players.
//!
//! - [`player`]: the [`MediaPlayer`] trait a host player implements
//! - [`controller`]: [`RangeController`], which keeps playback inside a
//!   fragment's time span
//! - [`binding`]: [`PlayerBinding`], which swaps media on a player and
//!   re-attaches a fresh controller for each source

pub mod binding;
pub mod controller;
pub mod player;

pub use binding::{PlayerBinding, Retarget, NO_MEDIA};
pub use controller::{RangeController, RangeState, Reaction};
pub use player::{MediaPlayer, MediaSource, PlayerEvent, Subscription};
