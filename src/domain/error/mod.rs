// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides the playback error taxonomy. These values are never
//! returned as `Err`; they are stored in the playback state so the
//! presentation layer can show them next to the player.

mod playback;

pub use playback::{ErrorCode, ErrorInfo, MediaErrorKind};
