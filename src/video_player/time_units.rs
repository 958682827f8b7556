// SPDX-License-Identifier: MPL-2.0
//! Time formatting for the control surface.

/// Formats a position as `m:ss`.
///
/// Minutes are not wrapped into hours. Negative and non-finite values
/// format as `0:00`.
///
/// # Examples
///
/// ```
/// use clipdeck::video_player::time_units::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.4), "1:05");
/// assert_eq!(format_time(3725.0), "62:05");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Fraction of `duration` reached at `position`, in `[0, 1]`.
///
/// Returns `0.0` when the duration is zero or unknown.
#[must_use]
pub fn progress_ratio(position: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) || !position.is_finite() {
        return 0.0;
    }
    (position / duration).clamp(0.0, 1.0)
}
