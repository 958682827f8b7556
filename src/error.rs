// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Only operational failures (file I/O, malformed settings or records, API
//! misuse) are errors. Playback failures reported by the platform are data:
//! see [`ErrorInfo`](crate::domain::error::ErrorInfo).

use crate::domain::video::VideoKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hosted embeds are rendered by the provider and never reach the native controller.
    #[error("Cannot attach a {kind} source to the native player")]
    EmbeddedSource { kind: VideoKind },

    #[error("No media source is attached")]
    NotAttached,

    #[error("Logging Error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
