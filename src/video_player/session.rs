// SPDX-License-Identifier: MPL-2.0
//! Player session: picks the render strategy for a video and wires the
//! native player together.
//!
//! Embedded sources end here: the presentation layer gets the provider's
//! embed target and no controller is involved. Native sources are
//! attached to the session's [`PlaybackController`] and connected to an
//! [`EventBridge`], which is replaced on every attach.

use super::bridge::{EventBridge, FullscreenNotifier};
use super::controller::PlaybackController;
use super::handle::MediaHandle;
use super::surface::{ControlSurface, SurfaceView};
use crate::config::Config;
use crate::domain::video::{Generation, Video, VideoSource};
use crate::error::{Error, Result};
use crate::media::SourceCache;
use serde::Serialize;
use std::sync::Arc;

/// How a video is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum Playback {
    /// Provider iframe; the engine's job ends with the embed target.
    #[serde(rename_all = "camelCase")]
    Embedded { embed_target: String },
    /// Native media element driven by the controller.
    Native { generation: Generation },
}

/// Owns the controller, its event bridge and the source cache for one view.
pub struct PlayerSession<H: MediaHandle> {
    controller: PlaybackController<H>,
    bridge: Option<EventBridge>,
    notifier: FullscreenNotifier,
    sources: SourceCache,
}

impl<H: MediaHandle> PlayerSession<H> {
    /// Creates a session using the configured preferences and cache size.
    #[must_use]
    pub fn new(config: &Config, notifier: FullscreenNotifier) -> Self {
        Self {
            controller: PlaybackController::new(config.volume(), config.playback_rate()),
            bridge: None,
            notifier,
            sources: SourceCache::new(config.source_cache_capacity()),
        }
    }

    /// Classifies a reference through the session's cache.
    pub fn resolve(&mut self, reference: &str) -> Arc<VideoSource> {
        self.sources.resolve(reference)
    }

    /// Opens `video`, replacing whatever the session showed before.
    ///
    /// `make_handle` is only called for native sources.
    ///
    /// # Errors
    ///
    /// Propagates attach failures from the controller.
    pub fn open<F>(&mut self, video: &Video, make_handle: F) -> Result<Playback>
    where
        F: FnOnce(&VideoSource) -> H,
    {
        let source = self.sources.resolve(&video.video_url);
        tracing::info!(video_id = %video.id, kind = %source.kind(), "Opening video");

        if let Some(embed_target) = source.embed_target() {
            self.close();
            return Ok(Playback::Embedded {
                embed_target: embed_target.to_string(),
            });
        }

        let handle = make_handle(&*source);
        let generation = self.attach(&*source, handle)?;
        Ok(Playback::Native { generation })
    }

    /// Attaches a native source and connects a fresh event bridge.
    ///
    /// The previous bridge is dropped, which unsubscribes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmbeddedSource`] for provider-hosted sources.
    pub fn attach(&mut self, source: &VideoSource, handle: H) -> Result<Generation> {
        let generation = self.controller.attach(source, handle)?;
        self.bridge = EventBridge::connect(&mut self.controller, &self.notifier);
        Ok(generation)
    }

    /// Tears down the native player and returns its handle.
    pub fn close(&mut self) -> Option<H> {
        self.bridge = None;
        self.controller.detach()
    }

    /// Delivers queued platform events. Returns `0` when nothing is attached.
    pub fn pump(&mut self) -> usize {
        match self.bridge.as_mut() {
            Some(bridge) => bridge.pump(&mut self.controller),
            None => 0,
        }
    }

    /// Delivers platform events until the attached handle goes away.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAttached`] when no native source is attached.
    pub async fn run(&mut self) -> Result<usize> {
        let bridge = self.bridge.as_mut().ok_or(Error::NotAttached)?;
        Ok(bridge.run(&mut self.controller).await)
    }

    pub fn controller(&self) -> &PlaybackController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController<H> {
        &mut self.controller
    }

    pub fn surface(&mut self) -> ControlSurface<'_, H> {
        ControlSurface::new(&mut self.controller)
    }

    pub fn view(&self) -> SurfaceView {
        SurfaceView::project(self.controller.state())
    }

    pub fn sources(&self) -> &SourceCache {
        &self.sources
    }

    pub fn notifier(&self) -> &FullscreenNotifier {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaybackConfig;
    use crate::domain::video::PlaybackStatus;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::video_player::handle::MediaEvent;
    use crate::video_player::scripted::{HandleCommand, ScriptedHandle, ScriptedPlatform};

    fn video(url: &str) -> Video {
        Video {
            id: "v1".to_string(),
            title: "Knots".to_string(),
            description: "Three knots".to_string(),
            video_url: url.to_string(),
            user_id: "u1".to_string(),
            created_at: None,
            num_comments: None,
        }
    }

    fn session() -> PlayerSession<ScriptedHandle> {
        PlayerSession::new(&Config::default(), FullscreenNotifier::new())
    }

    fn open_native(
        session: &mut PlayerSession<ScriptedHandle>,
        url: &str,
    ) -> (Playback, ScriptedPlatform) {
        let mut platform = None;
        let playback = session
            .open(&video(url), |_| {
                let (handle, scripted) = ScriptedHandle::pair();
                platform = Some(scripted);
                handle
            })
            .expect("open succeeds");
        (playback, platform.expect("native source builds a handle"))
    }

    #[test]
    fn embedded_video_bypasses_controller() {
        let mut session = session();
        let playback = session
            .open(&video("https://youtu.be/dQw4w9WgXcQ"), |_| {
                panic!("embedded sources never build a handle")
            })
            .expect("open succeeds");

        assert_eq!(
            playback,
            Playback::Embedded {
                embed_target: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()
            }
        );
        assert!(!session.controller().is_attached());
        assert_eq!(session.controller().state().status(), PlaybackStatus::Idle);
    }

    #[test]
    fn native_video_is_attached_and_bridged() {
        let mut session = session();
        let (playback, platform) = open_native(&mut session, "/videos/intro.mp4");

        assert_eq!(
            playback,
            Playback::Native {
                generation: Generation::INITIAL.next()
            }
        );
        assert_eq!(platform.subscriber_count(), 1);

        platform.emit(MediaEvent::LoadedMetadata {
            duration_secs: 42.0,
        });
        assert_eq!(session.pump(), 1);
        assert_eq!(session.view().formatted_duration, "0:42");
    }

    #[test]
    fn reopening_unsubscribes_previous_handle() {
        let mut session = session();
        let (_, first) = open_native(&mut session, "/videos/a.mp4");
        let (_, second) = open_native(&mut session, "https://cdn.example.com/b.mp4");

        assert_eq!(first.subscriber_count(), 0);
        assert_eq!(second.subscriber_count(), 1);
        assert_eq!(first.emit(MediaEvent::Play), 0);
        assert_eq!(session.controller().generation().value(), 2);
    }

    #[test]
    fn configured_preferences_reach_the_handle() {
        let config = Config {
            playback: PlaybackConfig {
                default_volume: Some(0.4),
                default_playback_rate: Some(1.5),
                source_cache_capacity: None,
            },
            ..Config::default()
        };
        let mut session = PlayerSession::new(&config, FullscreenNotifier::new());
        let (_, platform) = open_native(&mut session, "/videos/a.mp4");

        assert!(platform.commands().contains(&HandleCommand::SetVolume(0.4)));
        assert!(platform
            .commands()
            .contains(&HandleCommand::SetPlaybackRate(1.5)));
        assert_abs_diff_eq!(session.controller().state().volume().value(), 0.4);
    }

    #[test]
    fn switching_to_embed_closes_native_player() {
        let mut session = session();
        let (_, platform) = open_native(&mut session, "/videos/a.mp4");
        session
            .open(&video("https://vimeo.com/76979871"), |_| unreachable!())
            .expect("open succeeds");

        assert!(!session.controller().is_attached());
        assert_eq!(platform.subscriber_count(), 0);
        assert_eq!(session.pump(), 0);
    }

    #[tokio::test]
    async fn run_without_source_is_an_error() {
        let mut session = session();
        assert!(matches!(session.run().await, Err(Error::NotAttached)));
    }
}
