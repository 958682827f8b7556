// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Positions, durations, volumes and rates are floats; compare them with the
//! `approx` macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
