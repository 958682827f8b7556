// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or platform concerns.

pub mod newtypes;
pub mod playback;
pub mod record;
pub mod source;

// Re-export commonly used types
pub use newtypes::{Generation, PlaybackRate, Volume};
pub use playback::PlaybackStatus;
pub use record::Video;
pub use source::{VideoKind, VideoSource};
