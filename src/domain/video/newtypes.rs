// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use serde::Serialize;
use std::fmt;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = crate::config::MIN_VOLUME;
    /// Maximum volume level.
    pub const MAX: f32 = crate::config::MAX_VOLUME;
    /// Default volume level.
    pub const DEFAULT: f32 = crate::config::DEFAULT_VOLUME;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f32 = crate::config::VOLUME_STEP;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an invalid volume value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the volume as a whole percentage (`round(volume * 100)`).
    #[must_use]
    pub fn percent(self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u8;
        percent
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + volume_bounds::STEP)
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - volume_bounds::STEP)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate constraints.
pub mod rate_bounds {
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = crate::config::DEFAULT_PLAYBACK_RATE;
    /// The only accepted rates, ascending.
    pub const ALLOWED: [f64; 6] = crate::config::PLAYBACK_RATES;
    /// Tolerance when matching user input against the allowed set.
    pub const MATCH_TOLERANCE: f64 = 1e-9;
}

/// Playback speed multiplier, guaranteed to be a member of the fixed rate set.
///
/// Unlike [`Volume`], invalid input is rejected instead of clamped: a rate of
/// 1.1 does not silently become 1.0 or 1.25.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Returns the rate if it belongs to the allowed set.
    #[must_use]
    pub fn new(rate: f64) -> Option<Self> {
        rate_bounds::ALLOWED
            .iter()
            .find(|&&allowed| (allowed - rate).abs() < rate_bounds::MATCH_TOLERANCE)
            .map(|&allowed| Self(allowed))
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// All accepted rates, in ascending order.
    pub fn all() -> impl Iterator<Item = PlaybackRate> {
        rate_bounds::ALLOWED.iter().map(|&rate| Self(rate))
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Attachment epoch of the native player.
///
/// Incremented on every source attach; asynchronous results carrying an
/// older generation are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    /// Generation before any source has been attached.
    pub const INITIAL: Self = Self(0);

    /// Returns the following generation.
    ///
    /// # Panics
    ///
    /// Panics on counter overflow, which indicates a broken invariant.
    #[must_use]
    pub fn next(self) -> Self {
        Self(
            self.0
                .checked_add(1)
                .expect("playback generation counter overflowed"),
        )
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
