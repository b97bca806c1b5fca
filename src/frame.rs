use crate::audio::{self, SharedMusic};
use crate::dom;
use crate::host::SharedGallery;
use crate::intro::IntroView;
use crate::render::BackgroundRenderer;
use dome_core::{ColorBends, DeviceProfile, IntroEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gallery: SharedGallery,
    pub gallery_container: web::Element,
    pub music: Option<SharedMusic>,
    pub intro: Option<IntroView>,
    pub bends: ColorBends,
    pub renderer: Option<BackgroundRenderer>,
    pub revealed: bool,
    pub intro_events: Vec<IntroEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = dom::now_ms();

        if let Some(intro) = self.intro.as_mut() {
            intro.frame(now, &mut self.intro_events);
            if intro.is_finished() {
                self.intro = None;
            }
        }
        if self.intro_events.contains(&IntroEvent::ShowGallery) {
            self.reveal();
        }
        self.intro_events.clear();

        self.gallery.borrow_mut().with(|g, out| g.frame(now, out));

        if let Some(music) = &self.music {
            audio::tick(music, now);
        }

        if self.revealed {
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.resize_if_needed();
                let frame = self.bends.next_frame(renderer.width(), renderer.height());
                renderer.render(&frame);
            }
        }
    }

    /// Show the gallery and the animated background.
    pub fn reveal(&mut self) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        dom::set_visible(&self.gallery_container, true);
        if let Some(renderer) = &self.renderer {
            renderer.set_visible(true);
        }
        log::info!("[app] gallery revealed");
    }

    pub fn set_device(&mut self, device: DeviceProfile) {
        if device == self.gallery.borrow().gallery.device() {
            return;
        }
        log::info!("[app] device profile now {:?}", device);
        self.gallery
            .borrow_mut()
            .with(|g, out| g.set_device(device, out));
        self.bends.set_device(device);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
