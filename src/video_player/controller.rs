// SPDX-License-Identifier: MPL-2.0
//! Playback controller: owns the media handle and the playback state.
//!
//! Every state change goes through [`transition`]. Commands compute their
//! effect on the state first, then forward the (clamped) command to the
//! handle. Play and fullscreen requests are asynchronous: the controller
//! hands out a [`RequestTicket`] and only trusts the platform's later
//! answer if the ticket's generation is still current.

use super::handle::{
    MediaEventReceiver, MediaHandle, RequestKind, RequestOutcome, RequestTicket,
};
use super::state::{transition, PlaybackEvent, PlaybackState};
use crate::domain::error::ErrorInfo;
use crate::domain::video::{Generation, PlaybackRate, PlaybackStatus, VideoSource, Volume};
use crate::error::{Error, Result};

/// Native player controller.
///
/// Holds at most one attached handle. Attaching a new source replaces the
/// previous handle and starts a new generation.
pub struct PlaybackController<H: MediaHandle> {
    state: PlaybackState,
    handle: Option<H>,
    source: Option<VideoSource>,
}

impl<H: MediaHandle> PlaybackController<H> {
    /// Creates an idle controller with the given user preferences.
    #[must_use]
    pub fn new(volume: Volume, playback_rate: PlaybackRate) -> Self {
        Self {
            state: PlaybackState::idle(volume, playback_rate),
            handle: None,
            source: None,
        }
    }

    /// Returns the current playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Returns the attached source, if any.
    pub fn source(&self) -> Option<&VideoSource> {
        self.source.as_ref()
    }

    /// Returns the attached handle, if any.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.state.generation()
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Attaches a native source, replacing any previous one.
    ///
    /// The new state starts `Loading` under a fresh generation, which makes
    /// every outstanding request of the previous source stale. The user's
    /// volume and rate are re-applied to the new handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmbeddedSource`] for YouTube and Vimeo sources; those
    /// are rendered by the provider and never reach the native player.
    pub fn attach(&mut self, source: &VideoSource, mut handle: H) -> Result<Generation> {
        if source.is_embedded() {
            return Err(Error::EmbeddedSource {
                kind: source.kind(),
            });
        }

        self.handle = None;
        self.state = PlaybackState::attached(&self.state);

        handle.load(source.original_reference());
        handle.set_volume(self.state.volume());
        handle.set_playback_rate(self.state.playback_rate());

        tracing::debug!(
            generation = %self.state.generation(),
            kind = %source.kind(),
            src = source.original_reference(),
            "Attached media source"
        );

        self.handle = Some(handle);
        self.source = Some(source.clone());
        Ok(self.state.generation())
    }

    /// Opens an event subscription on the attached handle.
    pub fn subscribe(&mut self) -> Option<MediaEventReceiver> {
        self.handle.as_mut().map(MediaHandle::subscribe)
    }

    /// Detaches the current source and returns its handle.
    pub fn detach(&mut self) -> Option<H> {
        let handle = self.handle.take()?;
        tracing::debug!(generation = %self.state.generation(), "Detached media source");
        self.state = PlaybackState::detached(&self.state);
        self.source = None;
        Some(handle)
    }

    /// Asks the platform to start playback.
    ///
    /// The status only becomes `Playing` once the platform confirms with its
    /// play event. Returns the ticket of the issued request, or `None` when
    /// nothing was issued (already playing, failed, or not attached).
    pub fn play(&mut self) -> Option<RequestTicket> {
        let status = self.state.status();
        let Some(handle) = self.handle.as_mut() else {
            tracing::debug!("Ignoring play: no media source attached");
            return None;
        };

        match status {
            PlaybackStatus::Playing => None,
            PlaybackStatus::Error => {
                tracing::warn!(
                    generation = %self.state.generation(),
                    "Ignoring play: player is in error state"
                );
                None
            }
            status if status.accepts_play() => {
                let ticket = RequestTicket::new(self.state.generation(), RequestKind::Play);
                handle.request_play(ticket);
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Pauses playback. No-op unless playing.
    pub fn pause(&mut self) {
        if self.state.status() != PlaybackStatus::Playing {
            return;
        }
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
            self.apply(PlaybackEvent::PauseRequested);
        }
    }

    /// Pauses when playing, otherwise asks to play.
    pub fn toggle_play(&mut self) -> Option<RequestTicket> {
        if self.state.status().is_playing() {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// Seeks to `target_secs`, clamped to `[0, duration]`.
    ///
    /// Ignored while idle, loading or failed.
    pub fn seek(&mut self, target_secs: f64) {
        if self.handle.is_none() || !self.state.status().accepts_seek() {
            return;
        }
        self.apply(PlaybackEvent::SeekRequested { target_secs });
        let position = self.state.current_time();
        if let Some(handle) = self.handle.as_mut() {
            handle.seek(position);
        }
    }

    /// Sets the volume, clamped to `[0, 1]`. Always valid.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = Volume::new(volume);
        self.apply(PlaybackEvent::VolumeChanged(volume));
        if let Some(handle) = self.handle.as_mut() {
            handle.set_volume(volume);
        }
    }

    /// Sets the playback rate if it is one of the accepted rates.
    ///
    /// Returns `false` and changes nothing for any other value.
    pub fn set_playback_rate(&mut self, rate: f64) -> bool {
        let Some(rate) = PlaybackRate::new(rate) else {
            tracing::debug!(rate, "Rejected playback rate outside the accepted set");
            return false;
        };
        self.apply(PlaybackEvent::RateChanged(rate));
        if let Some(handle) = self.handle.as_mut() {
            handle.set_playback_rate(rate);
        }
        true
    }

    /// Asks the platform to enter or leave fullscreen.
    ///
    /// Does not touch `is_fullscreen`: only the platform's fullscreen-change
    /// notification does, since the platform may refuse the request.
    pub fn toggle_fullscreen(&mut self) -> Option<RequestTicket> {
        let generation = self.state.generation();
        let entering = !self.state.is_fullscreen();
        let handle = self.handle.as_mut()?;

        if entering {
            let ticket = RequestTicket::new(generation, RequestKind::EnterFullscreen);
            handle.request_fullscreen(ticket);
            Some(ticket)
        } else {
            let ticket = RequestTicket::new(generation, RequestKind::ExitFullscreen);
            handle.exit_fullscreen(ticket);
            Some(ticket)
        }
    }

    /// Applies the platform's answer to an asynchronous request.
    ///
    /// Answers for a previous generation, or arriving after detach, are
    /// discarded. Returns whether the answer was accepted.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: RequestOutcome) -> bool {
        if self.handle.is_none() || ticket.generation != self.state.generation() {
            tracing::debug!(
                ticket_generation = %ticket.generation,
                current_generation = %self.state.generation(),
                kind = ?ticket.kind,
                "Discarding stale request result"
            );
            return false;
        }

        match (ticket.kind, outcome) {
            (_, RequestOutcome::Fulfilled) => {
                tracing::trace!(kind = ?ticket.kind, "Request fulfilled");
            }
            (RequestKind::Play, RequestOutcome::Rejected(reason)) => {
                tracing::error!(
                    reason = %reason,
                    src = self.source.as_ref().map(VideoSource::original_reference),
                    "Play request failed"
                );
                self.apply(PlaybackEvent::Failed(ErrorInfo::playback_rejected(&reason)));
            }
            (kind, RequestOutcome::Rejected(reason)) => {
                tracing::error!(kind = ?kind, reason = %reason, "Fullscreen request failed");
            }
        }
        true
    }

    /// Applies a bridged platform event to the state.
    pub fn handle_event(&mut self, event: PlaybackEvent) {
        if self.handle.is_none() && !matches!(event, PlaybackEvent::FullscreenChanged { .. }) {
            return;
        }
        self.apply(event);
    }

    fn apply(&mut self, event: PlaybackEvent) {
        let next = transition(&self.state, &event);
        if next.status() != self.state.status() {
            tracing::debug!(
                generation = %next.generation(),
                from = ?self.state.status(),
                to = ?next.status(),
                "Playback status changed"
            );
        }
        self.state = next;
    }
}

impl<H: MediaHandle> Default for PlaybackController<H> {
    fn default() -> Self {
        Self::new(Volume::default(), PlaybackRate::default())
    }
}

impl<H: MediaHandle> std::fmt::Debug for PlaybackController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("source", &self.source)
            .field("attached", &self.handle.is_some())
            .finish()
    }
}
