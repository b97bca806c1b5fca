// Pure helpers shared by the pointer wiring. Kept free of browser calls so the
// host-side tests can include this file directly.

use glam::Vec2;

#[inline]
pub fn client_pos(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Only touches and the primary mouse or pen button start a drag.
#[inline]
pub fn starts_drag(is_touch: bool, button: i16) -> bool {
    is_touch || button == 0
}

/// Parse the value of a `data-item-index` attribute.
#[inline]
pub fn parse_item_index(attr: Option<&str>) -> Option<usize> {
    attr.and_then(|s| s.trim().parse::<usize>().ok())
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value.round())
}

#[inline]
pub fn image_filter(grayscale: bool) -> &'static str {
    if grayscale {
        "grayscale(1)"
    } else {
        "none"
    }
}

/// Inline style for an intro element at a given reveal state.
pub fn intro_element_style(opacity: f32, blur_px: f32, offset: Vec2) -> String {
    format!(
        "display:inline-block;opacity:{:.3};filter:blur({:.2}px);transform:translate({:.2}px,{:.2}px)",
        opacity, blur_px, offset.x, offset.y
    )
}

pub fn play_label(playing: bool) -> &'static str {
    if playing {
        "Pause music"
    } else {
        "Play music"
    }
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "Unmute"
    } else {
        "Mute"
    }
}
