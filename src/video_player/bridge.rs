// SPDX-License-Identifier: MPL-2.0
//! Event bridge between a media handle and the playback controller.
//!
//! The bridge owns two subscriptions: the attached handle's media events
//! and the platform-wide fullscreen notifications. Dropping the bridge
//! drops both receivers, which unsubscribes it; the session does this
//! before attaching a new source so a replaced handle can never reach the
//! controller.
//!
//! Events are received in the order the platform emitted them. The bridge
//! can be driven synchronously with [`EventBridge::pump`] or as an async
//! task with [`EventBridge::run`].

use super::controller::PlaybackController;
use super::handle::{MediaEvent, MediaEventReceiver, MediaHandle, RequestOutcome, RequestTicket};
use super::state::PlaybackEvent;
use crate::domain::error::ErrorInfo;
use crate::domain::video::Generation;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError as BroadcastTryRecvError};

/// Buffered fullscreen notifications per subscriber.
const FULLSCREEN_CHANNEL_CAPACITY: usize = 16;

/// Platform-wide fullscreen-change notifications.
///
/// The platform calls [`notify`](Self::notify) with the confirmed state
/// every time the document enters or leaves fullscreen.
#[derive(Debug, Clone)]
pub struct FullscreenNotifier {
    sender: broadcast::Sender<bool>,
}

impl FullscreenNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FULLSCREEN_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes the confirmed fullscreen state. Returns the number of
    /// subscribers reached.
    pub fn notify(&self, is_fullscreen: bool) -> usize {
        self.sender.send(is_fullscreen).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<bool> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for FullscreenNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// What a media event means for the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Bridged {
    Transition(PlaybackEvent),
    Settle(RequestTicket, RequestOutcome),
    /// Logged, no state change.
    Informational,
}

/// Maps a media event to its effect on the controller.
#[must_use]
pub fn translate(event: MediaEvent) -> Bridged {
    match event {
        MediaEvent::LoadedMetadata { duration_secs } => {
            tracing::debug!(duration_secs, "Media metadata loaded");
            Bridged::Transition(PlaybackEvent::MetadataLoaded { duration_secs })
        }
        MediaEvent::TimeUpdate { position_secs } => {
            Bridged::Transition(PlaybackEvent::TimeUpdate { position_secs })
        }
        MediaEvent::Play => Bridged::Transition(PlaybackEvent::Played),
        MediaEvent::Pause => Bridged::Transition(PlaybackEvent::Paused),
        MediaEvent::Seeked => Bridged::Transition(PlaybackEvent::Seeked),
        MediaEvent::Ended => Bridged::Transition(PlaybackEvent::Ended),
        MediaEvent::Error { kind, message } => {
            let info = ErrorInfo::from_media_error(kind, message.as_deref());
            tracing::error!(kind = ?kind, code = %info.code, message = %info.message, "Media error");
            Bridged::Transition(PlaybackEvent::Failed(info))
        }
        MediaEvent::RequestSettled { ticket, outcome } => Bridged::Settle(ticket, outcome),
        MediaEvent::Stalled => {
            tracing::warn!("Media stalled while buffering");
            Bridged::Informational
        }
        MediaEvent::LoadStart => {
            tracing::debug!("Media load started");
            Bridged::Informational
        }
        MediaEvent::LoadedData => {
            tracing::debug!("Media data loaded");
            Bridged::Informational
        }
        MediaEvent::CanPlay => {
            tracing::debug!("Media can play");
            Bridged::Informational
        }
    }
}

/// Live subscriptions for one attached source.
#[derive(Debug)]
pub struct EventBridge {
    generation: Generation,
    media: MediaEventReceiver,
    fullscreen: Option<broadcast::Receiver<bool>>,
}

impl EventBridge {
    /// Subscribes to the controller's attached handle and to `notifier`.
    ///
    /// Returns `None` when no source is attached.
    pub fn connect<H: MediaHandle>(
        controller: &mut PlaybackController<H>,
        notifier: &FullscreenNotifier,
    ) -> Option<Self> {
        let media = controller.subscribe()?;
        Some(Self {
            generation: controller.generation(),
            media,
            fullscreen: Some(notifier.subscribe()),
        })
    }

    /// Generation of the source this bridge listens to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Delivers every queued event without waiting. Returns how many events
    /// were received.
    pub fn pump<H: MediaHandle>(&mut self, controller: &mut PlaybackController<H>) -> usize {
        let mut received = 0;

        while let Ok(event) = self.media.try_recv() {
            Self::dispatch(self.generation, controller, event);
            received += 1;
        }

        while let Some(fullscreen) = self.fullscreen.as_mut() {
            match fullscreen.try_recv() {
                Ok(is_fullscreen) => {
                    controller.handle_event(PlaybackEvent::FullscreenChanged { is_fullscreen });
                    received += 1;
                }
                Err(BroadcastTryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Missed fullscreen notifications");
                }
                Err(BroadcastTryRecvError::Empty) => break,
                Err(BroadcastTryRecvError::Closed) => self.fullscreen = None,
            }
        }

        received
    }

    /// Delivers events as they arrive until the media handle closes its
    /// channel. Returns how many events were received.
    pub async fn run<H: MediaHandle>(&mut self, controller: &mut PlaybackController<H>) -> usize {
        let mut received = 0;

        loop {
            let fullscreen_open = self.fullscreen.is_some();
            tokio::select! {
                biased;

                event = self.media.recv() => match event {
                    Some(event) => {
                        Self::dispatch(self.generation, controller, event);
                        received += 1;
                    }
                    None => break,
                },
                notification = recv_fullscreen(&mut self.fullscreen), if fullscreen_open => {
                    match notification {
                        Ok(is_fullscreen) => {
                            controller.handle_event(PlaybackEvent::FullscreenChanged { is_fullscreen });
                            received += 1;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Missed fullscreen notifications");
                        }
                        Err(RecvError::Closed) => self.fullscreen = None,
                    }
                }
            }
        }

        tracing::debug!(generation = %self.generation, received, "Media event stream closed");
        received
    }

    fn dispatch<H: MediaHandle>(
        generation: Generation,
        controller: &mut PlaybackController<H>,
        event: MediaEvent,
    ) {
        if controller.generation() != generation || !controller.is_attached() {
            tracing::debug!(
                bridge_generation = %generation,
                current_generation = %controller.generation(),
                "Dropping event from a replaced source"
            );
            return;
        }

        match translate(event) {
            Bridged::Transition(event) => controller.handle_event(event),
            Bridged::Settle(ticket, outcome) => {
                controller.settle(ticket, outcome);
            }
            Bridged::Informational => {}
        }
    }
}

async fn recv_fullscreen(receiver: &mut Option<broadcast::Receiver<bool>>) -> Result<bool, RecvError> {
    match receiver {
        Some(receiver) => receiver.recv().await,
        None => Err(RecvError::Closed),
    }
}
