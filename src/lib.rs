// SPDX-License-Identifier: MPL-2.0
//! `clipdeck` resolves user-supplied video references into a playback
//! strategy and drives native playback through an explicit state machine.
//!
//! YouTube and Vimeo references resolve to a provider embed target and stop
//! there. Local and direct references are attached to a
//! [`PlaybackController`](video_player::PlaybackController), which reconciles
//! user commands with asynchronous platform events and discards results that
//! belong to a previously attached source.

#![doc(html_root_url = "https://docs.rs/clipdeck/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod tracing_setup;
pub mod video_player;

#[cfg(test)]
mod test_utils;
