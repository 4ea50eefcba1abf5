//! Shared fixtures for integration tests.
//!
//! Provides [`FakePlayer`], an in-memory [`MediaPlayer`] that records what it
//! was asked to do, and [`MemoryVault`], a [`Vault`] backed by a fixed file
//! list that records revoked object URLs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mediaext::playback::{MediaPlayer, MediaSource, PlayerEvent, Subscription};
use mediaext::resolve::{FileRef, SubtitleTrack, TrackBundle, Vault};
use mediaext_common::{Error, Result};
use url::Url;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakePlayer {
    pub position: f64,
    pub paused: bool,
    pub looping: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub source: Option<MediaSource>,
    pub pause_calls: usize,
    pub seeks: Vec<f64>,
    pub subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl FakePlayer {
    /// A player that is currently playing at `position`.
    pub fn playing_at(position: f64) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl MediaPlayer for FakePlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds;
        self.seeks.push(seconds);
    }

    fn duration(&self) -> Option<f64> {
        Some(3600.0)
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pause_calls += 1;
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

    fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    fn set_source(&mut self, source: MediaSource) {
        self.source = Some(source);
    }

    fn subscribe(&mut self, event: PlayerEvent) -> Subscription {
        self.next_id += 1;
        let subscription = Subscription::new(self.next_id, event);
        self.subscriptions.push(subscription);
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|s| *s != subscription);
    }
}

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

/// In-memory vault. Files listed in `tracks` get one subtitle track served
/// through an object URL.
#[derive(Debug, Default)]
pub struct MemoryVault {
    pub files: Vec<String>,
    pub tracks: HashMap<String, String>,
    pub failing_tracks: bool,
    pub revoked: Mutex<Vec<String>>,
}

impl MemoryVault {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn revoked(&self) -> Vec<String> {
        self.revoked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn resource_url(&self, file: &FileRef) -> Result<Url> {
        if !self.files.iter().any(|f| f == file.path()) {
            return Err(Error::unresolvable_local(file.path()));
        }
        Url::parse(&format!("app://local/vault/{}", file.path()))
            .map_err(|e| Error::vault(e.to_string()))
    }

    async fn subtitle_tracks(&self, file: &FileRef) -> Result<Option<TrackBundle>> {
        if self.failing_tracks {
            return Err(Error::vault("subtitle index unavailable"));
        }
        Ok(self.tracks.get(file.path()).map(|object_url| TrackBundle {
            tracks: vec![SubtitleTrack {
                label: "English".into(),
                language: Some("en".into()),
                src: object_url.clone(),
            }],
            object_urls: vec![object_url.clone()],
        }))
    }

    fn revoke_object_url(&self, url: &str) {
        self.revoked.lock().unwrap().push(url.to_string());
    }
}
