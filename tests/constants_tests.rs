// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so the DOM constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use dome_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_consistent() {
    // Touch gets a larger tap radius than a mouse
    assert!(TAP_THRESHOLD_TOUCH_PX > TAP_THRESHOLD_MOUSE_PX);
    assert!(MOVE_THRESHOLD_SQ_PX > 0.0);

    // The post-drag click guard outlasts the minimum gap
    assert!(CLICK_SUPPRESS_AFTER_DRAG_MS > CLICK_MIN_GAP_AFTER_DRAG_MS);
    assert!(VELOCITY_WINDOW_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn inertia_constants_stay_in_range() {
    // Friction must stay below 1 at full dampening or coasting never decays
    assert!(INERTIA_FRICTION_BASE + INERTIA_FRICTION_SPAN < 1.0);
    assert!(INERTIA_STOP_BASE - INERTIA_STOP_SPAN > 0.0);
    assert!(INERTIA_FRAMES_BASE > 0.0);
    assert!(INERTIA_MIN_START_VELOCITY > INERTIA_ZERO_VELOCITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_pattern_shape() {
    assert_eq!(EVEN_COLUMN_YS.len(), ODD_COLUMN_YS.len());
    assert_eq!(COLUMN_X_START + COLUMN_X_STEP * (DEFAULT_SEGMENTS as i32 - 1), 31);
    assert!(MOBILE_MIN_SEGMENTS <= DEFAULT_SEGMENTS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fit_and_palette_defaults() {
    assert!(DEFAULT_FIT > 0.0 && DEFAULT_FIT <= 1.0);
    assert!(AUTO_FIT_WIDE_ASPECT > 1.0);
    assert!(MIN_VIEWER_PAD_PX > 0.0);
    assert!(BACKGROUND_BENDS_MOBILE < BACKGROUND_BENDS_DESKTOP);
    assert_eq!(DEFAULT_PALETTE.len(), 6);
    assert!(DEFAULT_MUSIC_VOLUME >= 0.0 && DEFAULT_MUSIC_VOLUME <= 1.0);
}

#[test]
fn dom_hooks_are_well_formed() {
    assert_eq!(ITEM_INDEX_SELECTOR, format!("[{}]", ITEM_INDEX_ATTR));
    for id in [
        CONFIG_SCRIPT_ID,
        INTRO_ROOT_ID,
        GALLERY_ROOT_ID,
        BACKGROUND_CANVAS_ID,
        MUSIC_CONTROLS_ID,
    ] {
        assert!(!id.is_empty() && !id.contains(' '));
    }
    assert_eq!(NBSP.chars().count(), 1);
}
