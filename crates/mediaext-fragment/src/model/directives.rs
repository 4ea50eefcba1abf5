//! Playback directives carried by a media fragment.

use super::TimeSpan;

/// Everything a fragment asks of the player.
///
/// Flags are presence-based: `#loop` and `#loop=0` both enable looping.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlaybackDirectives {
    /// Requested time range, if the fragment had a valid `t=` value.
    pub time_span: Option<TimeSpan>,
    /// Restart from the range start when the end is reached.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Start playing as soon as the player is ready.
    pub autoplay: bool,
    /// Start with audio muted.
    pub muted: bool,
}

impl PlaybackDirectives {
    /// Serialize back to fragment text (without the leading `#`).
    ///
    /// Absent parts are omitted, so an empty value serializes to `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediaext_fragment::{PlaybackDirectives, TimeSpan};
    ///
    /// let directives = PlaybackDirectives {
    ///     time_span: TimeSpan::new(10.0, Some(20.0)),
    ///     looping: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(directives.to_fragment(), "t=10,20&loop");
    /// ```
    pub fn to_fragment(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(span) = &self.time_span {
            parts.push(format!("t={span}"));
        }
        if self.looping {
            parts.push("loop".to_string());
        }
        if self.autoplay {
            parts.push("autoplay".to_string());
        }
        if self.muted {
            parts.push("muted".to_string());
        }
        parts.join("&")
    }

    /// Whether the fragment asked for nothing at all.
    pub fn is_empty(&self) -> bool {
        self.time_span.is_none() && !self.looping && !self.autoplay && !self.muted
    }
}
