use super::pointer::tile_index_at;
use crate::dom;
use crate::host::SharedGallery;
use web_sys as web;

#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn wire_global_keydown(host: &SharedGallery, window: &web::Window) {
    let h = host.clone();
    dom::add_listener::<web::KeyboardEvent>(window, "keydown", move |ev| {
        let key = ev.key();
        let now = dom::now_ms();
        let mut host = h.borrow_mut();
        if is_activation_key(&key) {
            if let Some(index) = tile_index_at(ev.target()) {
                ev.prevent_default();
                host.with(|g, out| g.click_tile(index, now, out));
                return;
            }
        }
        host.with(|g, out| g.key_down(&key, now, out));
    });
}
