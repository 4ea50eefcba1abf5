//! Mediaext - media references, fragments and play ranges
//!
//! This library crate exposes the core functionality for integration testing
//! and for embedding in editor hosts.
//!
//! - [`resolve`]: turns a vault link or URL into a [`resolve::VideoInfo`]
//! - [`host`]: third-party video host classification and embed URLs
//! - [`playback`]: keeps a player inside the fragment's time range
//! - [`timestamp`]: links that reopen media at a position
//! - [`config`]: feature switches persisted as TOML

pub mod config;
pub mod host;
pub mod playback;
pub mod resolve;
pub mod timestamp;
