use crate::constants::{ITEM_INDEX_ATTR, ITEM_INDEX_SELECTOR};
use crate::dom;
use crate::host::SharedGallery;
use crate::input;
use dome_core::PointerKind;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tile index under an event target, if the target sits inside a tile.
pub fn tile_index_at(target: Option<web::EventTarget>) -> Option<usize> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let tile = el.closest(ITEM_INDEX_SELECTOR).ok()??;
    input::parse_item_index(tile.get_attribute(ITEM_INDEX_ATTR).as_deref())
}

pub fn wire_input_handlers(host: &SharedGallery, window: &web::Window) {
    let (main, backdrop, close_button) = {
        let h = host.borrow();
        (
            h.view.main.clone(),
            h.overlay.backdrop().clone(),
            h.overlay.close_button.clone(),
        )
    };
    wire_pointerdown(host, &main);
    wire_pointermove(host, window);
    wire_pointerup(host, window);
    wire_tile_click(host, &main);

    for target in [&backdrop, &close_button] {
        let h = host.clone();
        dom::add_click_listener(target, move || {
            h.borrow_mut()
                .with(|g, out| g.close_selection(dom::now_ms(), out));
        });
    }
}

fn wire_pointerdown(host: &SharedGallery, main: &web::HtmlElement) {
    let h = host.clone();
    dom::add_active_listener::<web::PointerEvent>(main, "pointerdown", move |ev| {
        let kind = PointerKind::from_dom(&ev.pointer_type());
        if !input::starts_drag(kind.is_touch(), ev.button()) {
            return;
        }
        if kind.is_touch() {
            ev.prevent_default();
        }
        let id = ev.pointer_id();
        let pos = input::client_pos(ev.client_x(), ev.client_y());
        let target = tile_index_at(ev.target());
        h.borrow_mut()
            .with(|g, out| g.pointer_down(id, pos, kind, target, dom::now_ms(), out));
    });
}

fn wire_pointermove(host: &SharedGallery, window: &web::Window) {
    let h = host.clone();
    dom::add_active_listener::<web::PointerEvent>(window, "pointermove", move |ev| {
        let mut host = h.borrow_mut();
        if !host.gallery.is_dragging() {
            return;
        }
        if PointerKind::from_dom(&ev.pointer_type()).is_touch() {
            ev.prevent_default();
        }
        let pos = input::client_pos(ev.client_x(), ev.client_y());
        let id = ev.pointer_id();
        host.with(|g, out| g.pointer_move(id, pos, dom::now_ms(), out));
    });
}

fn wire_pointerup(host: &SharedGallery, window: &web::Window) {
    let h = host.clone();
    dom::add_listener::<web::PointerEvent>(window, "pointerup", move |ev| {
        let id = ev.pointer_id();
        let pos = input::client_pos(ev.client_x(), ev.client_y());
        h.borrow_mut()
            .with(|g, out| g.pointer_up(id, pos, dom::now_ms(), out));
    });
    let h = host.clone();
    dom::add_listener::<web::PointerEvent>(window, "pointercancel", move |ev| {
        let id = ev.pointer_id();
        h.borrow_mut()
            .with(|g, out| g.pointer_cancel(id, dom::now_ms(), out));
    });
}

// Mouse taps select through pointerup; this path serves keyboard activation
// and synthetic clicks, which the controller filters against recent drags.
fn wire_tile_click(host: &SharedGallery, main: &web::HtmlElement) {
    let h = host.clone();
    dom::add_listener::<web::MouseEvent>(main, "click", move |ev| {
        if let Some(index) = tile_index_at(ev.target()) {
            let opened = h
                .borrow_mut()
                .with(|g, out| g.click_tile(index, dom::now_ms(), out));
            if opened {
                log::debug!("[gallery] tile {} opened by click", index);
            }
        }
    });
}
