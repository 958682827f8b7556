// SPDX-License-Identifier: MPL-2.0
//! Video playback status.
//!
//! This module defines the statuses a native player moves through.

use serde::Serialize;

/// Represents the current playback status of a native video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlaybackStatus {
    /// No source attached.
    #[default]
    Idle,
    /// Source attached, waiting for metadata.
    Loading,
    /// Metadata known, not playing.
    Ready,
    /// Platform confirmed playback.
    Playing,
    /// Paused at the current position.
    Paused,
    /// Waiting for the platform to finish a seek.
    Seeking,
    /// Reached the end of the media.
    Ended,
    /// Platform reported a failure; terminal until a new attach.
    Error,
}

impl PlaybackStatus {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if a play request may be issued from this status.
    #[must_use]
    pub fn accepts_play(self) -> bool {
        matches!(
            self,
            Self::Loading | Self::Ready | Self::Paused | Self::Ended | Self::Seeking
        )
    }

    /// Returns true if a seek may be issued from this status.
    #[must_use]
    pub fn accepts_seek(self) -> bool {
        matches!(
            self,
            Self::Ready | Self::Playing | Self::Paused | Self::Seeking | Self::Ended
        )
    }
}
