// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Native playback volume settings
//! - **Playback Rate**: The fixed set of accepted speed multipliers
//! - **Source Cache**: Memoization of classified video references
//! - **Placeholder**: Thumbnail placeholder palette

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (10%).
pub const VOLUME_STEP: f32 = 0.1;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// The only playback rates the player accepts, in ascending order.
pub const PLAYBACK_RATES: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

// ==========================================================================
// Source Cache Defaults
// ==========================================================================

/// Default number of classified references kept in memory.
pub const DEFAULT_SOURCE_CACHE_CAPACITY: usize = 256;

/// Minimum source cache capacity.
pub const MIN_SOURCE_CACHE_CAPACITY: usize = 16;

/// Maximum source cache capacity.
pub const MAX_SOURCE_CACHE_CAPACITY: usize = 4096;

// ==========================================================================
// Placeholder Defaults
// ==========================================================================

/// Number of gradient variants available for thumbnail placeholders.
pub const PLACEHOLDER_PALETTE_SIZE: usize = 5;
