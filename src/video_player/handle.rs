// SPDX-License-Identifier: MPL-2.0
//! Boundary between the engine and the platform's native media element.
//!
//! A [`MediaHandle`] receives imperative commands and publishes
//! [`MediaEvent`]s on an unbounded channel. Requests whose outcome is only
//! known later (play, fullscreen) carry a [`RequestTicket`]; the platform
//! answers with [`MediaEvent::RequestSettled`] or through
//! [`PlaybackController::settle`](super::PlaybackController::settle).

use crate::domain::error::MediaErrorKind;
use crate::domain::video::{Generation, PlaybackRate, Volume};
use tokio::sync::mpsc;

/// Asynchronous request issued to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Play,
    EnterFullscreen,
    ExitFullscreen,
}

/// Identifies an outstanding asynchronous request.
///
/// Captures the generation active when the request was issued so that a
/// late answer for a previous source can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub generation: Generation,
    pub kind: RequestKind,
}

impl RequestTicket {
    #[must_use]
    pub fn new(generation: Generation, kind: RequestKind) -> Self {
        Self { generation, kind }
    }
}

/// How the platform answered a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Fulfilled,
    Rejected(String),
}

/// Discrete notification published by a media handle.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    LoadStart,
    LoadedMetadata { duration_secs: f64 },
    LoadedData,
    CanPlay,
    TimeUpdate { position_secs: f64 },
    Play,
    Pause,
    Seeked,
    Ended,
    Error {
        kind: MediaErrorKind,
        message: Option<String>,
    },
    /// Buffering; informational only.
    Stalled,
    RequestSettled {
        ticket: RequestTicket,
        outcome: RequestOutcome,
    },
}

pub type MediaEventSender = mpsc::UnboundedSender<MediaEvent>;
pub type MediaEventReceiver = mpsc::UnboundedReceiver<MediaEvent>;

/// The platform's playable resource.
///
/// Implementations must not block: `request_play` and the fullscreen
/// requests only start the operation.
pub trait MediaHandle {
    /// Points the element at a source and starts loading it.
    fn load(&mut self, src: &str);

    /// Opens a new event subscription. Dropping the receiver unsubscribes.
    fn subscribe(&mut self) -> MediaEventReceiver;

    fn request_play(&mut self, ticket: RequestTicket);

    fn pause(&mut self);

    fn seek(&mut self, position_secs: f64);

    fn set_volume(&mut self, volume: Volume);

    fn set_playback_rate(&mut self, rate: PlaybackRate);

    fn request_fullscreen(&mut self, ticket: RequestTicket);

    fn exit_fullscreen(&mut self, ticket: RequestTicket);
}
