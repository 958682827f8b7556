// SPDX-License-Identifier: MPL-2.0
//! Headless media handle driven by hand.
//!
//! [`ScriptedHandle`] records every command it receives and lets the paired
//! [`ScriptedPlatform`] publish media events to its subscribers. It backs
//! the CLI `inspect` command and the test suites, where no real media
//! element exists.

use super::handle::{
    MediaEvent, MediaEventReceiver, MediaEventSender, MediaHandle, RequestOutcome, RequestTicket,
};
use crate::domain::video::{PlaybackRate, Volume};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Command received by a [`ScriptedHandle`].
#[derive(Debug, Clone, PartialEq)]
pub enum HandleCommand {
    Load(String),
    RequestPlay(RequestTicket),
    Pause,
    Seek(f64),
    SetVolume(f32),
    SetPlaybackRate(f64),
    RequestFullscreen(RequestTicket),
    ExitFullscreen(RequestTicket),
}

#[derive(Debug, Default)]
struct Shared {
    commands: Vec<HandleCommand>,
    subscribers: Vec<MediaEventSender>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Media handle with no backing element.
#[derive(Debug)]
pub struct ScriptedHandle {
    shared: Arc<Mutex<Shared>>,
}

/// Platform side of a [`ScriptedHandle`].
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    shared: Arc<Mutex<Shared>>,
}

impl ScriptedHandle {
    /// Creates a handle and the platform that drives it.
    #[must_use]
    pub fn pair() -> (Self, ScriptedPlatform) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        (
            Self {
                shared: Arc::clone(&shared),
            },
            ScriptedPlatform { shared },
        )
    }

    fn record(&self, command: HandleCommand) {
        lock(&self.shared).commands.push(command);
    }
}

impl MediaHandle for ScriptedHandle {
    fn load(&mut self, src: &str) {
        self.record(HandleCommand::Load(src.to_string()));
    }

    fn subscribe(&mut self) -> MediaEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.shared).subscribers.push(tx);
        rx
    }

    fn request_play(&mut self, ticket: RequestTicket) {
        self.record(HandleCommand::RequestPlay(ticket));
    }

    fn pause(&mut self) {
        self.record(HandleCommand::Pause);
    }

    fn seek(&mut self, position_secs: f64) {
        self.record(HandleCommand::Seek(position_secs));
    }

    fn set_volume(&mut self, volume: Volume) {
        self.record(HandleCommand::SetVolume(volume.value()));
    }

    fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.record(HandleCommand::SetPlaybackRate(rate.value()));
    }

    fn request_fullscreen(&mut self, ticket: RequestTicket) {
        self.record(HandleCommand::RequestFullscreen(ticket));
    }

    fn exit_fullscreen(&mut self, ticket: RequestTicket) {
        self.record(HandleCommand::ExitFullscreen(ticket));
    }
}

impl ScriptedPlatform {
    /// Publishes `event` to every live subscriber.
    ///
    /// Returns how many subscribers received it. Subscribers whose receiver
    /// was dropped are forgotten.
    pub fn emit(&self, event: MediaEvent) -> usize {
        let mut shared = lock(&self.shared);
        shared
            .subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
        shared.subscribers.len()
    }

    /// Answers an asynchronous request.
    pub fn settle(&self, ticket: RequestTicket, outcome: RequestOutcome) -> usize {
        self.emit(MediaEvent::RequestSettled { ticket, outcome })
    }

    /// Every command received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<HandleCommand> {
        lock(&self.shared).commands.clone()
    }

    #[must_use]
    pub fn last_command(&self) -> Option<HandleCommand> {
        lock(&self.shared).commands.last().cloned()
    }

    /// Number of subscriptions whose receiver is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared)
            .subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_closed())
            .count()
    }
}
