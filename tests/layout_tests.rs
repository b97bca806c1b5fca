// Host-side tests for tile placement and content assignment.

use dome_core::*;
use std::collections::HashSet;

fn items(srcs: &[&str]) -> Vec<ContentItem> {
    srcs.iter().map(|s| ContentItem::new(*s)).collect()
}

fn srcs(layout: &Layout) -> Vec<&str> {
    layout.tiles.iter().map(|t| t.src()).collect()
}

#[test]
fn every_position_is_generated_exactly_once() {
    for segments in [1, 2, 7, 20, 35] {
        let positions = tile_positions(segments);
        assert_eq!(positions.len(), total_slots(segments));
        let unique: HashSet<_> = positions.iter().collect();
        assert_eq!(unique.len(), positions.len(), "segments = {}", segments);
        for p in &positions {
            assert_eq!((p.size_x, p.size_y), (2, 2));
        }
    }
}

#[test]
fn columns_follow_fixed_span_and_alternate_offsets() {
    let positions = tile_positions(3);
    let xs: Vec<i32> = positions.iter().step_by(5).map(|p| p.x).collect();
    assert_eq!(xs, vec![-37, -35, -33]);

    let col0: Vec<i32> = positions[0..5].iter().map(|p| p.y).collect();
    let col1: Vec<i32> = positions[5..10].iter().map(|p| p.y).collect();
    assert_eq!(col0, vec![-4, -2, 0, 2, 4]);
    assert_eq!(col1, vec![-3, -1, 1, 3, 5]);
}

#[test]
fn layout_covers_every_slot_for_any_pool_size() {
    for n in [0usize, 1, 3, 50, 400] {
        let pool: Vec<ContentItem> = (0..n).map(|i| ContentItem::new(format!("{}.jpg", i))).collect();
        let layout = build_layout(&pool, 35);
        assert_eq!(layout.len(), total_slots(35));
        let positions: HashSet<_> = layout.tiles.iter().map(|t| t.position).collect();
        assert_eq!(positions.len(), layout.len());
    }
}

#[test]
fn three_items_over_two_segments_round_robin() {
    let layout = build_layout(&items(&["A", "B", "C"]), 2);
    assert_eq!(layout.len(), 10);
    assert_eq!(&srcs(&layout)[..2], &["A", "B"]);
    assert_eq!(
        srcs(&layout),
        vec!["A", "B", "C", "A", "B", "C", "A", "B", "C", "A"]
    );
    assert!(layout.warning.is_none());
}

#[test]
fn empty_pool_yields_placeholders() {
    let layout = build_layout(&[], 4);
    assert_eq!(layout.len(), 20);
    assert!(layout.tiles.iter().all(|t| t.item.is_none()));
    assert!(layout.tiles.iter().all(|t| t.src().is_empty() && t.note().is_none()));
}

#[test]
fn oversized_pool_warns_and_drops_excess() {
    let pool: Vec<ContentItem> = (0..12).map(|i| ContentItem::new(format!("{}.jpg", i))).collect();
    let layout = build_layout(&pool, 2);
    assert_eq!(
        layout.warning,
        Some(LayoutWarning::PoolExceedsSlots { pool: 12, slots: 10 })
    );
    assert_eq!(layout.len(), 10);
    assert!(!srcs(&layout).contains(&"10.jpg"));
    assert!(!srcs(&layout).contains(&"11.jpg"));
}

#[test]
fn distinct_pool_has_no_adjacent_duplicates() {
    let layout = build_layout(&items(&["A", "B", "C", "D"]), 35);
    for pair in layout.tiles.windows(2) {
        assert_ne!(pair[0].src(), pair[1].src());
    }
}

#[test]
fn repair_pulls_a_different_image_forward() {
    let layout = build_layout(&items(&["A", "B", "B"]), 2);
    assert_eq!(
        srcs(&layout),
        vec!["A", "B", "A", "B", "A", "B", "A", "B", "B", "B"]
    );
}

#[test]
fn single_distinct_image_keeps_duplicates() {
    let layout = build_layout(&items(&["A", "A"]), 2);
    assert!(srcs(&layout).iter().all(|s| *s == "A"));
    assert_eq!(distinct_sources(&items(&["A", "A", "B"])), 2);
}

#[test]
fn layout_is_deterministic() {
    let pool = items(&["A", "A", "B", "C", "C"]);
    assert_eq!(build_layout(&pool, 35).tiles, build_layout(&pool, 35).tiles);
}

#[test]
fn captions_travel_with_their_image() {
    let pool = vec![
        ContentItem::new("A").with_note("first"),
        ContentItem::new("B"),
    ];
    let layout = build_layout(&pool, 1);
    assert_eq!(layout.get(0).and_then(GalleryTile::note), Some("first"));
    assert_eq!(layout.get(1).and_then(GalleryTile::note), None);
    assert_eq!(layout.get(2).and_then(GalleryTile::note), Some("first"));
}

#[test]
fn base_rotation_centers_tile_on_its_cell() {
    let p = TilePosition { x: -37, y: -4, size_x: 2, size_y: 2 };
    let rot = p.base_rotation(35);
    let unit = 360.0 / 35.0 / 2.0;
    assert!((rot.rotate_y - unit * -36.5).abs() < 1e-3);
    assert!((rot.rotate_x - unit * -4.5).abs() < 1e-3);
}
