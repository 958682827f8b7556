// SPDX-License-Identifier: MPL-2.0
//! Classified video references.

use serde::Serialize;
use std::fmt;

/// How a video reference is played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// Hosted on YouTube, rendered through the provider embed.
    Youtube,
    /// Hosted on Vimeo, rendered through the provider embed.
    Vimeo,
    /// Any other URL, played by the native media element.
    Direct,
    /// A file served by the application itself.
    Local,
}

impl VideoKind {
    /// Returns true for provider-hosted kinds that bypass native playback.
    #[must_use]
    pub fn is_embedded(self) -> bool {
        matches!(self, Self::Youtube | Self::Vimeo)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Direct => "direct",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of classifying one video reference. Immutable once built.
///
/// An embed target is present exactly when the kind is embedded; the
/// constructors are the only way to build a value, so this always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    kind: VideoKind,
    original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    embed_target: Option<String>,
}

impl VideoSource {
    /// Creates a YouTube source pointing at the provider's embed player.
    #[must_use]
    pub fn youtube(reference: &str, video_id: &str) -> Self {
        Self {
            kind: VideoKind::Youtube,
            original_reference: reference.to_string(),
            embed_target: Some(format!("https://www.youtube.com/embed/{video_id}")),
        }
    }

    /// Creates a Vimeo source pointing at the provider's embed player.
    #[must_use]
    pub fn vimeo(reference: &str, video_id: &str) -> Self {
        Self {
            kind: VideoKind::Vimeo,
            original_reference: reference.to_string(),
            embed_target: Some(format!("https://player.vimeo.com/video/{video_id}")),
        }
    }

    /// Creates a source served by the application.
    #[must_use]
    pub fn local(reference: &str) -> Self {
        Self::native(VideoKind::Local, reference)
    }

    /// Creates a source played as-is by the native media element.
    #[must_use]
    pub fn direct(reference: &str) -> Self {
        Self::native(VideoKind::Direct, reference)
    }

    fn native(kind: VideoKind, reference: &str) -> Self {
        Self {
            kind,
            original_reference: reference.to_string(),
            embed_target: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> VideoKind {
        self.kind
    }

    /// The reference exactly as supplied.
    #[must_use]
    pub fn original_reference(&self) -> &str {
        &self.original_reference
    }

    #[must_use]
    pub fn embed_target(&self) -> Option<&str> {
        self.embed_target.as_deref()
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.kind.is_embedded()
    }
}
