//! Intro text sequencing: staggered blur-in of words or characters, a hold,
//! then a fade-out after which the gallery is shown.

use crate::config::IntroConfig;
use crate::constants::{
    INTRO_EASE, INTRO_ELEMENT_DURATION_MS, INTRO_GALLERY_DELAY_MS, INTRO_INITIAL_BLUR_PX,
    INTRO_INITIAL_OFFSET_PX, INTRO_START_DELAY_MS,
};
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimateBy {
    #[default]
    Words,
    Chars,
}

/// Side the text elements drift in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn initial_offset(self) -> Vec2 {
        let d = INTRO_INITIAL_OFFSET_PX;
        match self {
            Direction::Top => Vec2::new(0.0, -d),
            Direction::Bottom => Vec2::new(0.0, d),
            Direction::Left => Vec2::new(-d, 0.0),
            Direction::Right => Vec2::new(d, 0.0),
        }
    }
}

pub fn split_text(text: &str, by: AnimateBy) -> Vec<String> {
    match by {
        AnimateBy::Words => text
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect(),
        AnimateBy::Chars => text
            .chars()
            .filter(|&c| c != ' ')
            .map(String::from)
            .collect(),
    }
}

/// Evaluate a CSS-style cubic bezier easing `[x1, y1, x2, y2]` at progress `x`.
pub fn cubic_bezier(ctrl: [f32; 4], x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }
    let [x1, y1, x2, y2] = ctrl;
    let curve = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };
    // bisection on the monotonic x(t)
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..32 {
        let cx = curve(x1, x2, t);
        if (cx - x).abs() < 1e-5 {
            break;
        }
        if cx < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    curve(y1, y2, t)
}

#[inline]
fn ease_in_out(p: f32) -> f32 {
    cubic_bezier([0.42, 0.0, 0.58, 1.0], p)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Pending,
    Revealing,
    Holding,
    Fading,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    AnimationComplete,
    FadeComplete,
    ShowGallery,
}

/// Visual state of one text element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub opacity: f32,
    pub blur_px: f32,
    pub offset: Vec2,
}

#[derive(Clone, Debug)]
pub struct IntroTimeline {
    elements: Vec<String>,
    animate_by: AnimateBy,
    direction: Direction,
    delay_ms: f64,
    fade_delay_ms: f64,
    fade_duration_ms: f64,
    fired: [bool; 3],
}

impl IntroTimeline {
    pub fn new(cfg: &IntroConfig) -> Self {
        Self {
            elements: split_text(&cfg.text, cfg.animate_by),
            animate_by: cfg.animate_by,
            direction: cfg.direction,
            delay_ms: cfg.delay_ms.max(0.0),
            fade_delay_ms: cfg.fade_delay_ms.max(0.0),
            fade_duration_ms: cfg.fade_duration_ms.max(0.0),
            fired: [false; 3],
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn animate_by(&self) -> AnimateBy {
        self.animate_by
    }

    pub fn reveal_end_ms(&self) -> f64 {
        let stagger = self.elements.len().saturating_sub(1) as f64 * self.delay_ms;
        let duration = if self.elements.is_empty() {
            0.0
        } else {
            INTRO_ELEMENT_DURATION_MS
        };
        INTRO_START_DELAY_MS + stagger + duration
    }

    pub fn fade_end_ms(&self) -> f64 {
        self.fade_delay_ms + self.fade_duration_ms
    }

    pub fn gallery_at_ms(&self) -> f64 {
        self.fade_end_ms() + INTRO_GALLERY_DELAY_MS
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> IntroPhase {
        if elapsed_ms >= self.fade_end_ms() {
            IntroPhase::Done
        } else if elapsed_ms >= self.fade_delay_ms {
            IntroPhase::Fading
        } else if elapsed_ms < INTRO_START_DELAY_MS {
            IntroPhase::Pending
        } else if elapsed_ms < self.reveal_end_ms() {
            IntroPhase::Revealing
        } else {
            IntroPhase::Holding
        }
    }

    pub fn element_style(&self, index: usize, elapsed_ms: f64) -> ElementStyle {
        let start = INTRO_START_DELAY_MS + index as f64 * self.delay_ms;
        let local = ((elapsed_ms - start) / INTRO_ELEMENT_DURATION_MS).clamp(0.0, 1.0) as f32;
        let eased = cubic_bezier(INTRO_EASE, local);
        ElementStyle {
            opacity: eased.clamp(0.0, 1.0),
            blur_px: INTRO_INITIAL_BLUR_PX * (1.0 - eased).max(0.0),
            offset: self.direction.initial_offset() * (1.0 - eased),
        }
    }

    pub fn container_opacity(&self, elapsed_ms: f64) -> f32 {
        if elapsed_ms <= self.fade_delay_ms {
            return 1.0;
        }
        if self.fade_duration_ms <= 0.0 {
            return 0.0;
        }
        let p = ((elapsed_ms - self.fade_delay_ms) / self.fade_duration_ms).clamp(0.0, 1.0) as f32;
        1.0 - ease_in_out(p)
    }

    /// Emit each milestone once as `elapsed_ms` passes it.
    pub fn advance(&mut self, elapsed_ms: f64, out: &mut Vec<IntroEvent>) {
        let milestones = [
            (self.reveal_end_ms(), IntroEvent::AnimationComplete),
            (self.fade_end_ms(), IntroEvent::FadeComplete),
            (self.gallery_at_ms(), IntroEvent::ShowGallery),
        ];
        for (i, (at, ev)) in milestones.into_iter().enumerate() {
            if !self.fired[i] && elapsed_ms >= at {
                self.fired[i] = true;
                if ev == IntroEvent::AnimationComplete && self.elements.is_empty() {
                    continue;
                }
                log::info!("[intro] {:?} at {:.0}ms", ev, elapsed_ms);
                out.push(ev);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.fired.iter().all(|f| *f)
    }
}
