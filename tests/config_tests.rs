// Host-side tests for JSON configuration parsing.

use dome_core::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = AppConfig::from_json("{}").unwrap();
    assert_eq!(cfg.gallery.segments, 35);
    assert_eq!(cfg.gallery.fit_basis, FitBasis::Auto);
    assert_eq!(cfg.gallery.max_radius, None);
    assert_eq!(cfg.gallery.drag_dampening, 1.0);
    assert_eq!(cfg.gallery.max_vertical_rotation_deg, 5.0);
    assert!(cfg.gallery.grayscale);
    assert!(cfg.items.is_empty());
    assert!(cfg.music.looped);
    assert_eq!(cfg.music.volume, 0.5);
    assert_eq!(cfg.intro.animate_by, AnimateBy::Words);
    assert!(cfg.background.colors.is_none());
}

#[test]
fn camel_case_overrides() {
    let cfg = AppConfig::from_json(
        r#"{
            "gallery": {
                "segments": 21,
                "fitBasis": "height",
                "minRadius": 400,
                "maxRadius": 900,
                "dragSensitivity": 12.5,
                "dragDampening": 0.6,
                "maxVerticalRotationDeg": 8,
                "grayscale": false
            },
            "music": { "src": "song.mp3", "autoplay": true, "volume": 0.3 },
            "intro": { "text": "Hi there", "animateBy": "chars", "direction": "bottom" },
            "background": { "intensity": 0.4, "colors": [[1, 2, 3]] }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.gallery.segments, 21);
    assert_eq!(cfg.gallery.fit_basis, FitBasis::Height);
    assert_eq!(cfg.gallery.min_radius, 400.0);
    assert_eq!(cfg.gallery.max_radius, Some(900.0));
    assert_eq!(cfg.gallery.drag_sensitivity, 12.5);
    assert_eq!(cfg.gallery.inertia_params().max_frames, 252);
    assert_eq!(cfg.gallery.rotation_limits().max_vertical_deg, 8.0);
    assert!(!cfg.gallery.grayscale);
    assert_eq!(cfg.gallery.pad_factor, 0.25);
    assert!(cfg.music.autoplay);
    assert_eq!(cfg.music.src, "song.mp3");
    assert_eq!(cfg.intro.animate_by, AnimateBy::Chars);
    assert_eq!(cfg.intro.direction, Direction::Bottom);
    assert_eq!(cfg.background.colors, Some(vec![[1, 2, 3]]));
}

#[test]
fn items_accept_paths_and_records() {
    let cfg = AppConfig::from_json(
        r#"{ "items": [
            "photos/1.jpg",
            { "src": "photos/2.jpg", "alt": "Beach", "note": "Remember this?" },
            { "id": 7, "image": "photos/3.jpg", "message": "" }
        ] }"#,
    )
    .unwrap();
    assert_eq!(cfg.items.len(), 3);
    assert_eq!(cfg.items[0], ContentItem::new("photos/1.jpg"));
    assert_eq!(
        cfg.items[1],
        ContentItem::new("photos/2.jpg")
            .with_alt("Beach")
            .with_note("Remember this?")
    );
    assert_eq!(cfg.items[2].id, Some(7));
    assert_eq!(cfg.items[2].src, "photos/3.jpg");
    assert!(!cfg.items[2].has_note());
}

#[test]
fn zero_segments_rejected() {
    let err = AppConfig::from_json(r#"{ "gallery": { "segments": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroSegments));
}

#[test]
fn malformed_json_reports_error() {
    let err = AppConfig::from_json("{ items: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("Malformed configuration"));
}

#[test]
fn unknown_fit_basis_rejected() {
    assert!(AppConfig::from_json(r#"{ "gallery": { "fitBasis": "diagonal" } }"#).is_err());
}
