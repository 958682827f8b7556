// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the native video player.
//!
//! [`PlaybackState`] is an immutable snapshot; [`transition`] computes the
//! next snapshot from the current one and a [`PlaybackEvent`]. Nothing here
//! touches a media handle, so every rule can be tested without a platform.
//!
//! Status lifecycle:
//! - Idle: no source attached
//! - Loading: source attached, metadata pending
//! - Ready: metadata known, not playing
//! - Playing: platform confirmed playback
//! - Paused: playback paused at current position
//! - Seeking: waiting for the platform to finish a seek
//! - Ended: reached the end of the media
//! - Error: platform failure, terminal until the next attach

use crate::domain::error::ErrorInfo;
use crate::domain::video::{Generation, PlaybackRate, PlaybackStatus, Volume};
use serde::Serialize;

/// Input to the state machine.
///
/// Platform events arrive through the event bridge; command effects are
/// produced by the controller before it forwards the command to the handle.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// Platform loaded metadata and knows the duration.
    MetadataLoaded { duration_secs: f64 },
    /// Platform reported a new playback position.
    TimeUpdate { position_secs: f64 },
    /// Platform confirmed playback started.
    Played,
    /// Platform confirmed playback paused.
    Paused,
    /// Platform finished the pending seek.
    Seeked,
    /// Platform reached the end of the media.
    Ended,
    /// Platform media failure or rejected play request.
    Failed(ErrorInfo),
    /// Confirmed platform fullscreen state.
    FullscreenChanged { is_fullscreen: bool },
    /// User paused.
    PauseRequested,
    /// User sought to a position.
    SeekRequested { target_secs: f64 },
    /// User changed the volume.
    VolumeChanged(Volume),
    /// User changed the playback rate.
    RateChanged(PlaybackRate),
}

/// Snapshot of the native player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    status: PlaybackStatus,
    current_time: f64,
    /// `None` until metadata loads, or when the platform reports a
    /// non-finite duration (live streams).
    duration: Option<f64>,
    volume: Volume,
    playback_rate: PlaybackRate,
    is_fullscreen: bool,
    last_error: Option<ErrorInfo>,
    generation: Generation,
    /// Whether the pending seek returns to `Playing` (otherwise `Ready`).
    #[serde(skip)]
    resume_after_seek: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::idle(Volume::default(), PlaybackRate::default())
    }
}

impl PlaybackState {
    /// Creates an unattached state with the given user preferences.
    #[must_use]
    pub fn idle(volume: Volume, playback_rate: PlaybackRate) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            current_time: 0.0,
            duration: None,
            volume,
            playback_rate,
            is_fullscreen: false,
            last_error: None,
            generation: Generation::INITIAL,
            resume_after_seek: false,
        }
    }

    /// Fresh state for a newly attached source.
    ///
    /// Starts `Loading` under the next generation. Volume, playback rate and
    /// the platform fullscreen flag carry over; everything else is reset.
    #[must_use]
    pub fn attached(previous: &PlaybackState) -> Self {
        Self {
            status: PlaybackStatus::Loading,
            generation: previous.generation.next(),
            is_fullscreen: previous.is_fullscreen,
            ..Self::idle(previous.volume, previous.playback_rate)
        }
    }

    /// State after the source has been detached. Keeps the generation so
    /// results from the detached source stay stale.
    #[must_use]
    pub fn detached(previous: &PlaybackState) -> Self {
        Self {
            generation: previous.generation,
            is_fullscreen: previous.is_fullscreen,
            ..Self::idle(previous.volume, previous.playback_rate)
        }
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Current position in seconds.
    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration in seconds, `None` while unknown.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Duration in seconds, `0.0` while unknown.
    #[must_use]
    pub fn duration_or_zero(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
    }

    /// Platform-confirmed fullscreen state.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// The failure behind the `Error` status.
    #[must_use]
    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Clamps a position to `[0, duration]`; `0` while the duration is unknown.
    #[must_use]
    pub fn clamp_position(&self, position_secs: f64) -> f64 {
        if position_secs.is_nan() {
            return 0.0;
        }
        position_secs.clamp(0.0, self.duration_or_zero())
    }
}

/// Computes the state that follows `event`.
///
/// Events that are not valid in the current status leave the state
/// unchanged. Repeated events of the same type are idempotent.
#[must_use]
pub fn transition(state: &PlaybackState, event: &PlaybackEvent) -> PlaybackState {
    let mut next = state.clone();

    // Preferences and fullscreen are orthogonal to playback health.
    match event {
        PlaybackEvent::VolumeChanged(volume) => {
            next.volume = *volume;
            return next;
        }
        PlaybackEvent::RateChanged(rate) => {
            next.playback_rate = *rate;
            return next;
        }
        PlaybackEvent::FullscreenChanged { is_fullscreen } => {
            next.is_fullscreen = *is_fullscreen;
            return next;
        }
        _ => {}
    }

    if matches!(state.status, PlaybackStatus::Idle | PlaybackStatus::Error) {
        return next;
    }

    match event {
        PlaybackEvent::MetadataLoaded { duration_secs } => {
            next.duration = (duration_secs.is_finite() && *duration_secs >= 0.0)
                .then_some(*duration_secs);
            next.current_time = next.clamp_position(state.current_time);
            if state.status == PlaybackStatus::Loading {
                next.status = PlaybackStatus::Ready;
            }
        }
        PlaybackEvent::TimeUpdate { position_secs } => {
            next.current_time = state.clamp_position(*position_secs);
        }
        PlaybackEvent::Played => {
            next.status = PlaybackStatus::Playing;
            next.resume_after_seek = false;
        }
        PlaybackEvent::Paused => match state.status {
            PlaybackStatus::Playing => next.status = PlaybackStatus::Paused,
            PlaybackStatus::Seeking => next.resume_after_seek = false,
            _ => {}
        },
        PlaybackEvent::PauseRequested => {
            if state.status == PlaybackStatus::Playing {
                next.status = PlaybackStatus::Paused;
            }
        }
        PlaybackEvent::SeekRequested { target_secs } => {
            if state.status.accepts_seek() {
                next.resume_after_seek = match state.status {
                    PlaybackStatus::Playing => true,
                    // Chained seeks keep the original intent.
                    PlaybackStatus::Seeking => state.resume_after_seek,
                    _ => false,
                };
                next.current_time = state.clamp_position(*target_secs);
                next.status = PlaybackStatus::Seeking;
            }
        }
        PlaybackEvent::Seeked => {
            if state.status == PlaybackStatus::Seeking {
                next.status = if state.resume_after_seek {
                    PlaybackStatus::Playing
                } else {
                    PlaybackStatus::Ready
                };
                next.resume_after_seek = false;
            }
        }
        PlaybackEvent::Ended => {
            if matches!(
                state.status,
                PlaybackStatus::Ready
                    | PlaybackStatus::Playing
                    | PlaybackStatus::Paused
                    | PlaybackStatus::Seeking
            ) {
                next.status = PlaybackStatus::Ended;
                next.resume_after_seek = false;
                if let Some(duration) = state.duration {
                    next.current_time = duration;
                }
            }
        }
        PlaybackEvent::Failed(info) => {
            next.status = PlaybackStatus::Error;
            next.last_error = Some(info.clone());
            next.resume_after_seek = false;
        }
        PlaybackEvent::VolumeChanged(_)
        | PlaybackEvent::RateChanged(_)
        | PlaybackEvent::FullscreenChanged { .. } => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ErrorCode, MediaErrorKind};
    use crate::test_utils::assert_abs_diff_eq;

    fn loading() -> PlaybackState {
        PlaybackState::attached(&PlaybackState::default())
    }

    fn apply(state: PlaybackState, events: &[PlaybackEvent]) -> PlaybackState {
        events.iter().fold(state, |state, event| transition(&state, event))
    }

    fn ready(duration_secs: f64) -> PlaybackState {
        apply(loading(), &[PlaybackEvent::MetadataLoaded { duration_secs }])
    }

    fn playing(duration_secs: f64) -> PlaybackState {
        apply(ready(duration_secs), &[PlaybackEvent::Played])
    }

    fn network_failure() -> PlaybackEvent {
        PlaybackEvent::Failed(ErrorInfo::from_media_error(MediaErrorKind::Network, None))
    }

    #[test]
    fn default_state_is_idle_generation_zero() {
        let state = PlaybackState::default();
        assert_eq!(state.status(), PlaybackStatus::Idle);
        assert_eq!(state.generation(), Generation::INITIAL);
        assert!(state.duration().is_none());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn attach_starts_loading_under_next_generation() {
        let first = loading();
        assert_eq!(first.status(), PlaybackStatus::Loading);
        assert_eq!(first.generation().value(), 1);

        let second = PlaybackState::attached(&first);
        assert_eq!(second.generation().value(), 2);
    }

    #[test]
    fn attach_keeps_preferences_and_resets_the_rest() {
        let prefs = apply(
            playing(120.0),
            &[
                PlaybackEvent::VolumeChanged(Volume::new(0.3)),
                PlaybackEvent::RateChanged(PlaybackRate::new(1.5).unwrap()),
                PlaybackEvent::TimeUpdate { position_secs: 40.0 },
                network_failure(),
            ],
        );
        let fresh = PlaybackState::attached(&prefs);

        assert_eq!(fresh.status(), PlaybackStatus::Loading);
        assert_abs_diff_eq!(fresh.volume().value(), 0.3);
        assert_abs_diff_eq!(fresh.playback_rate().value(), 1.5);
        assert_abs_diff_eq!(fresh.current_time(), 0.0);
        assert!(fresh.duration().is_none());
        assert!(fresh.last_error().is_none());
    }

    #[test]
    fn metadata_moves_loading_to_ready() {
        let state = ready(120.0);
        assert_eq!(state.status(), PlaybackStatus::Ready);
        assert_eq!(state.duration(), Some(120.0));
    }

    #[test]
    fn non_finite_duration_stays_unknown() {
        let state = ready(f64::INFINITY);
        assert_eq!(state.status(), PlaybackStatus::Ready);
        assert!(state.duration().is_none());
        assert_abs_diff_eq!(state.duration_or_zero(), 0.0);
    }

    #[test]
    fn played_event_confirms_playback() {
        assert_eq!(playing(10.0).status(), PlaybackStatus::Playing);
        let from_loading = apply(loading(), &[PlaybackEvent::Played]);
        assert_eq!(from_loading.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn pause_request_only_valid_while_playing() {
        let paused = transition(&playing(10.0), &PlaybackEvent::PauseRequested);
        assert_eq!(paused.status(), PlaybackStatus::Paused);

        let idle = transition(&PlaybackState::default(), &PlaybackEvent::PauseRequested);
        assert_eq!(idle.status(), PlaybackStatus::Idle);

        let ready_state = transition(&ready(10.0), &PlaybackEvent::PauseRequested);
        assert_eq!(ready_state.status(), PlaybackStatus::Ready);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let low = transition(
            &playing(120.0),
            &PlaybackEvent::SeekRequested { target_secs: -10.0 },
        );
        assert_abs_diff_eq!(low.current_time(), 0.0);
        assert_eq!(low.status(), PlaybackStatus::Seeking);

        let high = transition(
            &playing(120.0),
            &PlaybackEvent::SeekRequested { target_secs: 500.0 },
        );
        assert_abs_diff_eq!(high.current_time(), 120.0);
    }

    #[test]
    fn seek_from_playing_resumes_playing() {
        let state = apply(
            playing(120.0),
            &[
                PlaybackEvent::SeekRequested { target_secs: 30.0 },
                PlaybackEvent::Seeked,
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(state.current_time(), 30.0);
    }

    #[test]
    fn seek_from_paused_settles_ready() {
        let state = apply(
            playing(120.0),
            &[
                PlaybackEvent::PauseRequested,
                PlaybackEvent::SeekRequested { target_secs: 30.0 },
                PlaybackEvent::Seeked,
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Ready);
    }

    #[test]
    fn chained_seeks_preserve_resume_intent() {
        let state = apply(
            playing(120.0),
            &[
                PlaybackEvent::SeekRequested { target_secs: 30.0 },
                PlaybackEvent::SeekRequested { target_secs: 60.0 },
                PlaybackEvent::Seeked,
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(state.current_time(), 60.0);
    }

    #[test]
    fn platform_pause_during_seek_cancels_resume() {
        let state = apply(
            playing(120.0),
            &[
                PlaybackEvent::SeekRequested { target_secs: 30.0 },
                PlaybackEvent::Paused,
                PlaybackEvent::Seeked,
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Ready);
    }

    #[test]
    fn seek_ignored_while_loading() {
        let state = transition(&loading(), &PlaybackEvent::SeekRequested { target_secs: 5.0 });
        assert_eq!(state, loading());
    }

    #[test]
    fn time_updates_overwrite_position_without_touching_status() {
        let state = apply(
            playing(120.0),
            &[
                PlaybackEvent::TimeUpdate { position_secs: 10.0 },
                PlaybackEvent::TimeUpdate { position_secs: 10.0 },
                PlaybackEvent::TimeUpdate { position_secs: 11.5 },
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(state.current_time(), 11.5);
    }

    #[test]
    fn time_update_before_metadata_stays_at_zero() {
        let state = transition(&loading(), &PlaybackEvent::TimeUpdate { position_secs: 3.0 });
        assert_abs_diff_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn ended_after_platform_pause_is_accepted() {
        let state = apply(
            playing(120.0),
            &[PlaybackEvent::Paused, PlaybackEvent::Ended],
        );
        assert_eq!(state.status(), PlaybackStatus::Ended);
        assert_abs_diff_eq!(state.current_time(), 120.0);

        let replay = transition(&state, &PlaybackEvent::Played);
        assert_eq!(replay.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn failure_is_terminal() {
        let failed = transition(&playing(120.0), &network_failure());
        assert_eq!(failed.status(), PlaybackStatus::Error);
        assert_eq!(
            failed.last_error().map(|info| info.code),
            Some(ErrorCode::NetworkError)
        );

        let after = apply(
            failed.clone(),
            &[
                PlaybackEvent::Played,
                PlaybackEvent::MetadataLoaded { duration_secs: 5.0 },
                PlaybackEvent::SeekRequested { target_secs: 1.0 },
                PlaybackEvent::Failed(ErrorInfo::playback_rejected("late")),
            ],
        );
        assert_eq!(after, failed);
    }

    #[test]
    fn preferences_and_fullscreen_apply_in_any_status() {
        let failed = transition(&playing(120.0), &network_failure());
        let state = apply(
            failed,
            &[
                PlaybackEvent::VolumeChanged(Volume::new(0.2)),
                PlaybackEvent::FullscreenChanged {
                    is_fullscreen: true,
                },
            ],
        );
        assert_eq!(state.status(), PlaybackStatus::Error);
        assert_abs_diff_eq!(state.volume().value(), 0.2);
        assert!(state.is_fullscreen());

        let idle = transition(
            &PlaybackState::default(),
            &PlaybackEvent::RateChanged(PlaybackRate::new(0.5).unwrap()),
        );
        assert_abs_diff_eq!(idle.playback_rate().value(), 0.5);
    }

    #[test]
    fn idle_ignores_platform_events() {
        let idle = PlaybackState::default();
        for event in [
            PlaybackEvent::Played,
            PlaybackEvent::Ended,
            network_failure(),
            PlaybackEvent::MetadataLoaded { duration_secs: 3.0 },
        ] {
            assert_eq!(transition(&idle, &event), idle);
        }
    }

    #[test]
    fn detached_keeps_generation_and_preferences() {
        let state = transition(&playing(30.0), &PlaybackEvent::VolumeChanged(Volume::new(0.5)));
        let detached = PlaybackState::detached(&state);
        assert_eq!(detached.status(), PlaybackStatus::Idle);
        assert_eq!(detached.generation(), state.generation());
        assert_abs_diff_eq!(detached.volume().value(), 0.5);
    }
}
