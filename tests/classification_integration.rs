// SPDX-License-Identifier: MPL-2.0
//! Integration tests for video source classification and thumbnails.

use clipdeck::config::{self, Config, PLACEHOLDER_PALETTE_SIZE};
use clipdeck::domain::video::{Video, VideoKind};
use clipdeck::media::{analyze, placeholder_variant, thumbnail_for, thumbnail_of, SourceCache, Thumbnail};
use std::sync::Arc;

#[test]
fn test_reference_table() {
    let cases = [
        (
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            VideoKind::Youtube,
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        ),
        (
            "https://youtu.be/dQw4w9WgXcQ",
            VideoKind::Youtube,
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        ),
        (
            "https://vimeo.com/76979871",
            VideoKind::Vimeo,
            Some("https://player.vimeo.com/video/76979871"),
        ),
        ("/videos/intro.mp4", VideoKind::Local, None),
        ("/video-intro.mp4", VideoKind::Local, None),
        ("https://cdn.example.com/clip.webm", VideoKind::Direct, None),
        ("/etc/passwd", VideoKind::Direct, None),
        ("", VideoKind::Direct, None),
    ];

    for (reference, kind, embed_target) in cases {
        let source = analyze(reference);
        assert_eq!(source.kind(), kind, "kind of {reference:?}");
        assert_eq!(source.embed_target(), embed_target, "embed of {reference:?}");
        assert_eq!(source.original_reference(), reference);
    }
}

#[test]
fn test_thumbnails() {
    assert_eq!(
        thumbnail_for("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
    );
    assert_eq!(thumbnail_for("https://vimeo.com/76979871"), None);
    assert_eq!(thumbnail_for("/videos/intro.mp4"), None);

    let video = Video {
        id: "abc".to_string(),
        title: "Local".to_string(),
        description: String::new(),
        video_url: "/videos/intro.mp4".to_string(),
        user_id: "u".to_string(),
        created_at: None,
        num_comments: None,
    };
    let Thumbnail::Placeholder(variant) = thumbnail_of(&video) else {
        panic!("local videos use a placeholder");
    };
    assert_eq!(variant, placeholder_variant("abc"));
    assert!(variant < PLACEHOLDER_PALETTE_SIZE);
}

#[test]
fn test_source_serializes_for_presentation_layer() {
    let json = serde_json::to_value(analyze("https://vimeo.com/76979871")).expect("serializes");
    assert_eq!(json["kind"], "vimeo");
    assert_eq!(json["originalReference"], "https://vimeo.com/76979871");
    assert_eq!(json["embedTarget"], "https://player.vimeo.com/video/76979871");

    let json = serde_json::to_value(analyze("/videos/a.mp4")).expect("serializes");
    assert!(json.get("embedTarget").map_or(true, serde_json::Value::is_null));
}

#[test]
fn test_source_cache_shares_classification() {
    let mut cache = SourceCache::new(config::MIN_SOURCE_CACHE_CAPACITY);
    let first = cache.resolve("https://youtu.be/dQw4w9WgXcQ");
    let second = cache.resolve("https://youtu.be/dQw4w9WgXcQ");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, analyze("https://youtu.be/dQw4w9WgXcQ"));
}

#[test]
fn test_config_file_drives_cache_capacity() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[playback]\nsource_cache_capacity = 32\n").expect("write settings");

    let config: Config = config::load_from_path(&path).expect("load settings");

    assert_eq!(SourceCache::new(config.source_cache_capacity()).capacity(), 32);
}
