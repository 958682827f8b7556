// SPDX-License-Identifier: MPL-2.0
//! Video reference classification.
//!
//! Turns an arbitrary user-supplied video reference into a [`VideoSource`]
//! by walking an ordered rule table; the first rule that matches decides the
//! kind. Order matters: local paths are checked before provider patterns,
//! and YouTube before Vimeo.
//!
//! Classification never fails. Anything unrecognised, including the empty
//! string, is a [`VideoKind::Direct`] source played as-is.
//!
//! # Example
//!
//! ```
//! use clipdeck::domain::video::VideoKind;
//! use clipdeck::media::classifier::analyze;
//!
//! let source = analyze("https://youtu.be/dQw4w9WgXcQ");
//! assert_eq!(source.kind(), VideoKind::Youtube);
//! assert_eq!(
//!     source.embed_target(),
//!     Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
//! );
//! ```

use crate::config::PLACEHOLDER_PALETTE_SIZE;
use crate::domain::video::{Video, VideoKind, VideoSource};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Prefixes of references served by the application itself.
///
/// `/video` is deliberately broader than `/videos/`: `/video-intro.mp4`
/// is local as well.
const LOCAL_PREFIXES: [&str; 2] = ["/videos/", "/video"];

static YOUTUBE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .expect("youtube short pattern is valid"),
        Regex::new(r"youtube\.com/.*[?&]v=([^&\n?#]+)").expect("youtube query pattern is valid"),
    ]
});

static VIMEO_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"vimeo\.com/([0-9]+)").expect("vimeo pattern is valid"),
        Regex::new(r"vimeo\.com/.*/([0-9]+)").expect("vimeo nested pattern is valid"),
    ]
});

/// What a matching rule recognised in the reference.
enum Capture<'a> {
    Local,
    Youtube(&'a str),
    Vimeo(&'a str),
}

impl Capture<'_> {
    fn into_source(self, reference: &str) -> VideoSource {
        match self {
            Capture::Local => VideoSource::local(reference),
            Capture::Youtube(id) => VideoSource::youtube(reference, id),
            Capture::Vimeo(id) => VideoSource::vimeo(reference, id),
        }
    }
}

type Rule = for<'a> fn(&'a str) -> Option<Capture<'a>>;

/// Classification rules, evaluated top to bottom.
const RULES: [Rule; 3] = [match_local, match_youtube, match_vimeo];

fn match_local(reference: &str) -> Option<Capture<'_>> {
    LOCAL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
        .then_some(Capture::Local)
}

fn match_youtube(reference: &str) -> Option<Capture<'_>> {
    first_capture(YOUTUBE_PATTERNS.as_slice(), reference).map(Capture::Youtube)
}

fn match_vimeo(reference: &str) -> Option<Capture<'_>> {
    first_capture(VIMEO_PATTERNS.as_slice(), reference).map(Capture::Vimeo)
}

/// Returns the first capture group of the first pattern that matches.
fn first_capture<'h>(patterns: &[Regex], haystack: &'h str) -> Option<&'h str> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(haystack)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str())
            .filter(|id| !id.is_empty())
    })
}

/// Classifies a video reference.
#[must_use]
pub fn analyze(reference: &str) -> VideoSource {
    let source = RULES
        .iter()
        .find_map(|rule| rule(reference))
        .map(|capture| capture.into_source(reference))
        .unwrap_or_else(|| VideoSource::direct(reference));

    tracing::trace!(reference, kind = %source.kind(), "Classified video reference");
    source
}

/// Returns a thumbnail URL for the reference, if one can be built without
/// a network call.
///
/// Only YouTube thumbnails are deterministic; Vimeo, direct and local
/// references return `None` and callers show a placeholder instead.
#[must_use]
pub fn thumbnail_for(reference: &str) -> Option<String> {
    if analyze(reference).kind() != VideoKind::Youtube {
        return None;
    }
    first_capture(YOUTUBE_PATTERNS.as_slice(), reference)
        .map(|id| format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}

/// Picks the placeholder gradient for a video without a thumbnail.
///
/// Uses the first UTF-16 code unit of the identifier modulo the palette
/// size, so the same video always gets the same variant. An empty id
/// uses the first variant.
#[must_use]
pub fn placeholder_variant(video_id: &str) -> usize {
    video_id
        .encode_utf16()
        .next()
        .map_or(0, |unit| usize::from(unit) % PLACEHOLDER_PALETTE_SIZE)
}

/// Thumbnail shown for a video card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Thumbnail {
    /// A remote image URL.
    Remote(String),
    /// Index into the placeholder palette.
    Placeholder(usize),
}

/// Resolves the thumbnail for a video record.
#[must_use]
pub fn thumbnail_of(video: &Video) -> Thumbnail {
    thumbnail_for(&video.video_url)
        .map_or_else(|| Thumbnail::Placeholder(placeholder_variant(&video.id)), Thumbnail::Remote)
}
