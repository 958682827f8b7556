// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types shared by the classifier and the player.
//!
//! Nothing in here talks to a platform; types only depend on `std`, `serde`
//! for presentation output and `chrono` for record dates.
//!
//! # Modules
//!
//! - [`error`]: Playback error taxonomy ([`ErrorInfo`](error::ErrorInfo),
//!   [`ErrorCode`](error::ErrorCode), [`MediaErrorKind`](error::MediaErrorKind))
//! - [`video`]: Video types ([`VideoSource`](video::VideoSource),
//!   [`PlaybackStatus`](video::PlaybackStatus), [`Volume`](video::Volume),
//!   [`PlaybackRate`](video::PlaybackRate), [`Generation`](video::Generation))

pub mod error;
pub mod video;
