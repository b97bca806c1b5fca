use crate::constants::*;
use crate::dom;
use crate::input::{mute_label, play_label};
use dome_core::{MusicConfig, MusicPlayer, PlaybackCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<audio>` element plus the small floating control panel.
pub struct MusicHost {
    audio: web::HtmlAudioElement,
    panel: web::HtmlElement,
    toggle: web::HtmlElement,
    play_button: web::HtmlElement,
    mute_button: web::HtmlElement,
    slider: web::HtmlInputElement,
    listening: bool,
}

pub struct MusicState {
    pub player: MusicPlayer,
    host: MusicHost,
}

pub type SharedMusic = Rc<RefCell<MusicState>>;

fn build_host(
    document: &web::Document,
    container: &web::Element,
    cfg: &MusicConfig,
) -> anyhow::Result<MusicHost> {
    let audio = web::HtmlAudioElement::new_with_src(&cfg.src)
        .map_err(|e| anyhow::anyhow!("HtmlAudioElement error: {:?}", e))?;
    audio.set_preload("auto");

    let panel = dom::create_element(document, "div", MUSIC_PANEL_CLASS)?;
    let play_button = dom::create_element(document, "button", MUSIC_BUTTON_CLASS)?;
    let mute_button = dom::create_element(document, "button", MUSIC_BUTTON_CLASS)?;
    let slider = document
        .create_element("input")
        .map_err(|e| anyhow::anyhow!("create <input>: {:?}", e))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    slider.set_type("range");
    slider.set_min("0");
    slider.set_max("1");
    slider.set_step("0.1");
    slider.set_class_name(MUSIC_SLIDER_CLASS);
    _ = slider.set_attribute("aria-label", "Volume");
    slider.set_value(&cfg.volume.clamp(0.0, 1.0).to_string());
    _ = panel.append_child(&play_button);
    _ = panel.append_child(&mute_button);
    _ = panel.append_child(&slider);

    let toggle = dom::create_element(document, "button", MUSIC_TOGGLE_CLASS)?;
    toggle.set_text_content(Some("\u{1F3B5}"));
    _ = toggle.set_attribute("aria-label", "Show music controls");

    _ = container.append_child(&panel);
    _ = container.append_child(&toggle);

    Ok(MusicHost {
        audio,
        panel,
        toggle,
        play_button,
        mute_button,
        slider,
        listening: false,
    })
}

pub fn mount(
    document: &web::Document,
    container: &web::Element,
    cfg: &MusicConfig,
) -> anyhow::Result<SharedMusic> {
    let host = build_host(document, container, cfg)?;
    let mut cmds = Vec::new();
    let player = MusicPlayer::new(cfg, dom::now_ms(), &mut cmds);
    let shared = Rc::new(RefCell::new(MusicState { player, host }));
    apply(&shared, cmds);
    refresh_controls(&shared);
    wire_controls(&shared, container);
    wire_interaction_retry(&shared, document);
    Ok(shared)
}

/// Per-frame housekeeping: scheduled autoplay and control auto-hide.
pub fn tick(shared: &SharedMusic, now_ms: f64) {
    let mut cmds = Vec::new();
    shared.borrow_mut().player.tick(now_ms, &mut cmds);
    if !cmds.is_empty() {
        apply(shared, cmds);
    }
}

pub fn apply(shared: &SharedMusic, cmds: Vec<PlaybackCommand>) {
    for cmd in cmds {
        match cmd {
            PlaybackCommand::Play => request_play(shared),
            PlaybackCommand::Pause => {
                _ = shared.borrow().host.audio.pause();
            }
            PlaybackCommand::SetMuted(m) => shared.borrow().host.audio.set_muted(m),
            PlaybackCommand::SetVolume(v) => shared.borrow().host.audio.set_volume(v as f64),
            PlaybackCommand::SetLoop(l) => shared.borrow().host.audio.set_loop(l),
            PlaybackCommand::ListenForInteraction => shared.borrow_mut().host.listening = true,
            PlaybackCommand::StopListening => shared.borrow_mut().host.listening = false,
            PlaybackCommand::ShowControls(_) => {}
        }
    }
    refresh_controls(shared);
}

fn request_play(shared: &SharedMusic) {
    let promise = match shared.borrow().host.audio.play() {
        Ok(p) => p,
        Err(e) => {
            log::error!("[music] play() threw: {:?}", e);
            return;
        }
    };
    let shared = shared.clone();
    spawn_local(async move {
        let result = JsFuture::from(promise).await;
        let mut cmds = Vec::new();
        {
            let mut st = shared.borrow_mut();
            match result {
                Ok(_) => st.player.play_succeeded(),
                Err(e) => {
                    log::info!("[music] play rejected: {:?}", e);
                    st.player.play_failed(&mut cmds);
                }
            }
        }
        apply(&shared, cmds);
    });
}

fn refresh_controls(shared: &SharedMusic) {
    let st = shared.borrow();
    let (player, host) = (&st.player, &st.host);
    host.play_button
        .set_text_content(Some(if player.playing { "\u{23F8}" } else { "\u{25B6}" }));
    _ = host
        .play_button
        .set_attribute("aria-label", play_label(player.playing));
    host.mute_button
        .set_text_content(Some(if player.muted { "\u{1F507}" } else { "\u{1F50A}" }));
    _ = host
        .mute_button
        .set_attribute("aria-label", mute_label(player.muted));
    dom::set_visible(&host.panel, player.controls_visible);
    dom::set_visible(&host.toggle, !player.controls_visible);
}

fn with_player(shared: &SharedMusic, f: impl FnOnce(&mut MusicPlayer, &mut Vec<PlaybackCommand>)) {
    let mut cmds = Vec::new();
    f(&mut shared.borrow_mut().player, &mut cmds);
    apply(shared, cmds);
}

fn wire_controls(shared: &SharedMusic, container: &web::Element) {
    let (play, mute, toggle, slider) = {
        let st = shared.borrow();
        (
            st.host.play_button.clone(),
            st.host.mute_button.clone(),
            st.host.toggle.clone(),
            st.host.slider.clone(),
        )
    };

    let s = shared.clone();
    dom::add_click_listener(&play, move || {
        with_player(&s, |p, out| p.toggle_play(dom::now_ms(), out));
    });
    let s = shared.clone();
    dom::add_click_listener(&mute, move || {
        with_player(&s, |p, out| p.toggle_mute(out));
    });
    let s = shared.clone();
    dom::add_click_listener(&toggle, move || {
        with_player(&s, |p, out| p.show_controls(dom::now_ms(), out));
    });
    let s = shared.clone();
    let slider_read = slider.clone();
    dom::add_listener::<web::Event>(&slider, "input", move |_| {
        let v = slider_read.value().parse::<f32>().unwrap_or(0.0);
        with_player(&s, |p, out| p.set_volume(v, out));
    });
    let s = shared.clone();
    dom::add_listener::<web::MouseEvent>(container, "mouseenter", move |_| {
        with_player(&s, |p, out| p.show_controls(dom::now_ms(), out));
    });
    let s = shared.clone();
    dom::add_listener::<web::MouseEvent>(container, "mouseleave", move |_| {
        with_player(&s, |p, out| p.hide_controls(out));
    });
}

// Autoplay rejected: the next click or touch anywhere retries once.
fn wire_interaction_retry(shared: &SharedMusic, document: &web::Document) {
    for event in ["click", "touchstart"] {
        let s = shared.clone();
        dom::add_listener::<web::Event>(document, event, move |_| {
            if !s.borrow().host.listening {
                return;
            }
            with_player(&s, |p, out| p.user_interaction(out));
        });
    }
}
