// SPDX-License-Identifier: MPL-2.0
//! Presentation-agnostic control surface.
//!
//! [`ControlSurface`] borrows the controller, exposes renderer-friendly
//! values derived from the current [`PlaybackState`] and forwards user
//! commands. It keeps no state of its own. [`SurfaceView`] is the same
//! projection as a serializable value.

use super::controller::PlaybackController;
use super::handle::{MediaHandle, RequestTicket};
use super::state::PlaybackState;
use super::time_units::{format_time, progress_ratio};
use crate::domain::error::ErrorInfo;
use crate::domain::video::{PlaybackRate, PlaybackStatus};
use serde::Serialize;

const PLAY_LABEL: &str = "Play video";
const PAUSE_LABEL: &str = "Pause video";
const ENTER_FULLSCREEN_LABEL: &str = "Enter fullscreen";
const EXIT_FULLSCREEN_LABEL: &str = "Exit fullscreen";

/// Renderer-ready projection of a [`PlaybackState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceView {
    pub status: PlaybackStatus,
    pub current_time: f64,
    /// Slider maximum: the duration, `0` while unknown.
    pub duration: f64,
    pub formatted_current_time: String,
    pub formatted_duration: String,
    /// Accessible progress text, e.g. `"1:05 of 2:00"`.
    pub position_text: String,
    pub progress_ratio: f64,
    pub volume_percent: u8,
    pub is_muted: bool,
    pub playback_rate: f64,
    pub rate_options: Vec<f64>,
    pub is_fullscreen: bool,
    pub play_label: &'static str,
    pub fullscreen_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<ErrorInfo>,
}

impl SurfaceView {
    #[must_use]
    pub fn project(state: &PlaybackState) -> Self {
        let current_time = state.current_time();
        let duration = state.duration_or_zero();
        let formatted_current_time = format_time(current_time);
        let formatted_duration = format_time(duration);

        Self {
            status: state.status(),
            current_time,
            duration,
            position_text: format!("{formatted_current_time} of {formatted_duration}"),
            formatted_current_time,
            formatted_duration,
            progress_ratio: progress_ratio(current_time, duration),
            volume_percent: state.volume().percent(),
            is_muted: state.volume().is_muted(),
            playback_rate: state.playback_rate().value(),
            rate_options: PlaybackRate::all().map(PlaybackRate::value).collect(),
            is_fullscreen: state.is_fullscreen(),
            play_label: if state.status().is_playing() {
                PAUSE_LABEL
            } else {
                PLAY_LABEL
            },
            fullscreen_label: if state.is_fullscreen() {
                EXIT_FULLSCREEN_LABEL
            } else {
                ENTER_FULLSCREEN_LABEL
            },
            last_error: state.last_error().cloned(),
        }
    }
}

/// Read/command facade over a [`PlaybackController`].
pub struct ControlSurface<'a, H: MediaHandle> {
    controller: &'a mut PlaybackController<H>,
}

impl<'a, H: MediaHandle> ControlSurface<'a, H> {
    pub fn new(controller: &'a mut PlaybackController<H>) -> Self {
        Self { controller }
    }

    /// Current snapshot.
    pub fn state(&self) -> &PlaybackState {
        self.controller.state()
    }

    pub fn view(&self) -> SurfaceView {
        SurfaceView::project(self.controller.state())
    }

    pub fn formatted_current_time(&self) -> String {
        format_time(self.state().current_time())
    }

    pub fn formatted_duration(&self) -> String {
        format_time(self.state().duration_or_zero())
    }

    /// `round(volume * 100)`.
    pub fn volume_percent(&self) -> u8 {
        self.state().volume().percent()
    }

    /// `current_time / duration`, `0` while the duration is zero.
    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.state().current_time(), self.state().duration_or_zero())
    }

    pub fn play(&mut self) -> Option<RequestTicket> {
        self.controller.play()
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Click-to-toggle: plays when not playing, pauses otherwise.
    pub fn toggle_play(&mut self) -> Option<RequestTicket> {
        self.controller.toggle_play()
    }

    pub fn seek(&mut self, target_secs: f64) {
        self.controller.seek(target_secs);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.controller.set_volume(volume);
    }

    /// Raises the volume by one slider step.
    pub fn volume_up(&mut self) {
        let volume = self.state().volume().increase();
        self.controller.set_volume(volume.value());
    }

    /// Lowers the volume by one slider step.
    pub fn volume_down(&mut self) {
        let volume = self.state().volume().decrease();
        self.controller.set_volume(volume.value());
    }

    pub fn set_playback_rate(&mut self, rate: f64) -> bool {
        self.controller.set_playback_rate(rate)
    }

    pub fn toggle_fullscreen(&mut self) -> Option<RequestTicket> {
        self.controller.toggle_fullscreen()
    }
}
