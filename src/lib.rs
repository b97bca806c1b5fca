#![cfg(target_arch = "wasm32")]
use crate::host::{GalleryHost, SharedGallery};
use dome_core::{AppConfig, ColorBends, DeviceProfile, DomeGallery};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod intro;
mod overlay;
mod render;
mod view;

use constants::*;

fn detect_device(window: &web::Window) -> DeviceProfile {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let ua = window.navigator().user_agent().unwrap_or_default();
    DeviceProfile::detect(width, &ua)
}

/// Read the inline JSON config; a missing or malformed block falls back to
/// defaults so the page still renders.
fn load_config(document: &web::Document) -> AppConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("[app] no #{} block, using defaults", CONFIG_SCRIPT_ID);
        return AppConfig::default();
    };
    match AppConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("[app] config rejected: {}", e);
            AppConfig::default()
        }
    }
}

fn wire_resize_observer(host: &SharedGallery, target: &web::Element) -> anyhow::Result<()> {
    let h = host.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::ResizeObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::ResizeObserverEntry>() {
                    let rect = entry.content_rect();
                    h.borrow_mut()
                        .resize(rect.width() as f32, rect.height() as f32);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
    observer.observe(target);
    closure.forget();
    Ok(())
}

fn wire_window_resize(window: &web::Window, frame_ctx: &Rc<RefCell<frame::FrameContext>>) {
    let ctx = frame_ctx.clone();
    let win = window.clone();
    dom::add_listener::<web::Event>(window, "resize", move |_| {
        ctx.borrow_mut().set_device(detect_device(&win));
    });
}

fn wire_teardown(window: &web::Window, host: &SharedGallery) {
    let h = host.clone();
    dom::add_listener::<web::Event>(window, "pagehide", move |_| {
        h.borrow_mut().with(|g, out| g.teardown(out));
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dome-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let AppConfig {
        gallery: gallery_cfg,
        items,
        music: music_cfg,
        intro: intro_cfg,
        background: background_cfg,
    } = load_config(&document);
    let device = detect_device(&window);

    let container = document
        .get_element_by_id(GALLERY_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", GALLERY_ROOT_ID))?;
    let gallery = DomeGallery::new(gallery_cfg, items, device);
    let host: SharedGallery = Rc::new(RefCell::new(GalleryHost::mount(
        &document, &container, gallery,
    )?));
    host.borrow_mut().resize(
        container.client_width() as f32,
        container.client_height() as f32,
    );
    wire_resize_observer(&host, &container)?;
    events::wire_input_handlers(&host, &window);
    events::wire_global_keydown(&host, &window);
    wire_teardown(&window, &host);

    let renderer = match document
        .get_element_by_id(BACKGROUND_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(canvas) => match render::BackgroundRenderer::new(canvas) {
            Ok(r) => Some(r),
            Err(e) => {
                log::warn!("[app] background disabled: {:?}", e);
                None
            }
        },
        None => None,
    };

    let music = match document.get_element_by_id(MUSIC_CONTROLS_ID) {
        Some(panel) if !music_cfg.src.is_empty() => Some(audio::mount(&document, &panel, &music_cfg)?),
        _ => None,
    };

    let intro = match document.get_element_by_id(INTRO_ROOT_ID) {
        Some(root) => Some(intro::IntroView::mount(
            &document,
            &root,
            &intro_cfg,
            dom::now_ms(),
        )?),
        None => None,
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gallery: host,
        gallery_container: container,
        music,
        intro,
        bends: ColorBends::new(&background_cfg, device),
        renderer,
        revealed: false,
        intro_events: Vec::with_capacity(3),
    }));
    {
        let mut ctx = frame_ctx.borrow_mut();
        dom::set_visible(&ctx.gallery_container, false);
        if let Some(r) = &ctx.renderer {
            r.set_visible(false);
        }
        if ctx.intro.is_none() {
            ctx.reveal();
        }
    }
    wire_window_resize(&window, &frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
