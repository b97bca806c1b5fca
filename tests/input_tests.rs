// Host-side tests for pure input and styling helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn client_position_maps_to_vec2() {
    assert_eq!(client_pos(12, -4), glam::Vec2::new(12.0, -4.0));
}

#[test]
fn only_primary_button_or_touch_starts_drag() {
    assert!(starts_drag(false, 0));
    assert!(!starts_drag(false, 1));
    assert!(!starts_drag(false, 2));
    assert!(starts_drag(true, 0));
    assert!(starts_drag(true, -1));
}

#[test]
fn item_index_parsing() {
    assert_eq!(parse_item_index(Some("17")), Some(17));
    assert_eq!(parse_item_index(Some(" 3 ")), Some(3));
    assert_eq!(parse_item_index(Some("-1")), None);
    assert_eq!(parse_item_index(Some("x")), None);
    assert_eq!(parse_item_index(None), None);
}

#[test]
fn pixel_values_are_rounded() {
    assert_eq!(px(640.4), "640px");
    assert_eq!(px(8.0), "8px");
}

#[test]
fn grayscale_filter() {
    assert_eq!(image_filter(true), "grayscale(1)");
    assert_eq!(image_filter(false), "none");
}

#[test]
fn intro_style_string() {
    let s = intro_element_style(0.5, 2.0, glam::Vec2::new(0.0, -15.0));
    assert!(s.contains("opacity:0.500"));
    assert!(s.contains("blur(2.00px)"));
    assert!(s.contains("translate(0.00px,-15.00px)"));
}

#[test]
fn control_labels() {
    assert_eq!(play_label(true), "Pause music");
    assert_eq!(play_label(false), "Play music");
    assert_eq!(mute_label(true), "Unmute");
    assert_eq!(mute_label(false), "Mute");
}
