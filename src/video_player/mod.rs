// SPDX-License-Identifier: MPL-2.0
//! Native video playback control.
//!
//! This module drives a platform media handle through an explicit state
//! machine. Platform events reach the controller through the event bridge;
//! user commands reach it through the control surface. Embedded provider
//! videos never get here: [`PlayerSession::open`] hands their embed target
//! straight back to the caller.

mod bridge;
mod controller;
mod handle;
pub mod scripted;
mod session;
mod state;
mod surface;
pub mod time_units;

pub use bridge::{translate, Bridged, EventBridge, FullscreenNotifier};
pub use controller::PlaybackController;
pub use handle::{
    MediaEvent, MediaEventReceiver, MediaEventSender, MediaHandle, RequestKind, RequestOutcome,
    RequestTicket,
};
pub use scripted::{HandleCommand, ScriptedHandle, ScriptedPlatform};
pub use session::{Playback, PlayerSession};
pub use state::{transition, PlaybackEvent, PlaybackState};
pub use surface::{ControlSurface, SurfaceView};
