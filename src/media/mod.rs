// SPDX-License-Identifier: MPL-2.0
//! Video source resolution.
//!
//! Decides, for any user-supplied reference, whether a video is played
//! through a provider embed or by the native player.

pub mod classifier;
pub mod source_cache;

pub use classifier::{analyze, placeholder_variant, thumbnail_for, thumbnail_of, Thumbnail};
pub use source_cache::{CacheStats, SourceCache};
