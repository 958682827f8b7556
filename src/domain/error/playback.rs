// SPDX-License-Identifier: MPL-2.0
use serde::Serialize;
use std::fmt;

/// Failure reported by the platform media handle.
///
/// Mirrors the platform's numeric media error codes; anything the platform
/// reports outside the known set is kept as `Other` with its raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    Aborted,
    Network,
    Decode,
    SourceNotSupported,
    Other(u16),
}

impl MediaErrorKind {
    /// Interprets a raw platform media error code (1 = aborted,
    /// 2 = network, 3 = decode, 4 = source not supported).
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            other => Self::Other(other),
        }
    }
}

/// Playback error category exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    Aborted,
    NetworkError,
    DecodeError,
    SourceNotSupported,
    PlaybackRejected,
    Unknown,
}

impl ErrorCode {
    /// Message shown when the platform does not provide one.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::Aborted => "Video playback was aborted",
            ErrorCode::NetworkError => "Network error while loading video",
            ErrorCode::DecodeError => "Video decoding error",
            ErrorCode::SourceNotSupported => "Video source not supported",
            ErrorCode::PlaybackRejected => "Playback request was rejected",
            ErrorCode::Unknown => "Unknown video error",
        }
    }
}

impl From<MediaErrorKind> for ErrorCode {
    fn from(kind: MediaErrorKind) -> Self {
        match kind {
            MediaErrorKind::Aborted => ErrorCode::Aborted,
            MediaErrorKind::Network => ErrorCode::NetworkError,
            MediaErrorKind::Decode => ErrorCode::DecodeError,
            MediaErrorKind::SourceNotSupported => ErrorCode::SourceNotSupported,
            MediaErrorKind::Other(_) => ErrorCode::Unknown,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::Aborted => "Aborted",
            ErrorCode::NetworkError => "NetworkError",
            ErrorCode::DecodeError => "DecodeError",
            ErrorCode::SourceNotSupported => "SourceNotSupported",
            ErrorCode::PlaybackRejected => "PlaybackRejected",
            ErrorCode::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A playback failure with a human-readable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorInfo {
    /// Builds error info from a platform media error.
    ///
    /// A non-empty platform message wins over the default message.
    #[must_use]
    pub fn from_media_error(kind: MediaErrorKind, platform_message: Option<&str>) -> Self {
        let code = ErrorCode::from(kind);
        let message = platform_message
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .map_or_else(|| code.default_message().to_string(), str::to_string);
        Self { code, message }
    }

    /// Builds error info for a play request the platform refused.
    #[must_use]
    pub fn playback_rejected(reason: &str) -> Self {
        let code = ErrorCode::PlaybackRejected;
        let message = if reason.trim().is_empty() {
            code.default_message().to_string()
        } else {
            format!("{}: {}", code.default_message(), reason.trim())
        };
        Self { code, message }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}
