//! Application configuration. Every field is optional in JSON and falls back
//! to the defaults below.

use crate::constants::*;
use crate::content::ContentItem;
use crate::fit::{FitBasis, FitParams};
use crate::inertia::InertiaParams;
use crate::intro::{AnimateBy, Direction};
use crate::rotation::RotationLimits;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Segment count must be positive")]
    ZeroSegments,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub segments: u32,
    pub fit: f32,
    pub fit_basis: FitBasis,
    pub min_radius: f32,
    pub max_radius: Option<f32>,
    pub pad_factor: f32,
    pub max_vertical_rotation_deg: f32,
    pub drag_sensitivity: f32,
    pub drag_dampening: f32,
    pub enlarge_transition_ms: f64,
    pub grayscale: bool,
    pub image_border_radius: String,
    pub opened_image_border_radius: String,
    pub overlay_blur_color: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            fit: DEFAULT_FIT,
            fit_basis: FitBasis::Auto,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: None,
            pad_factor: DEFAULT_PAD_FACTOR,
            max_vertical_rotation_deg: DEFAULT_MAX_VERTICAL_ROTATION_DEG,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            drag_dampening: DEFAULT_DRAG_DAMPENING,
            enlarge_transition_ms: DEFAULT_ENLARGE_TRANSITION_MS,
            grayscale: true,
            image_border_radius: "30px".to_string(),
            opened_image_border_radius: "30px".to_string(),
            overlay_blur_color: "#060010".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn fit_params(&self) -> FitParams {
        FitParams {
            fit: self.fit,
            basis: self.fit_basis,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            pad_factor: self.pad_factor,
        }
    }

    pub fn rotation_limits(&self) -> RotationLimits {
        RotationLimits {
            max_vertical_deg: self.max_vertical_rotation_deg,
        }
    }

    pub fn inertia_params(&self) -> InertiaParams {
        InertiaParams::from_dampening(self.drag_dampening)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicConfig {
    pub src: String,
    pub autoplay: bool,
    pub looped: bool,
    pub volume: f32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            src: "media/background-music.mp3".to_string(),
            autoplay: false,
            looped: true,
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroConfig {
    pub text: String,
    pub delay_ms: f64,
    pub animate_by: AnimateBy,
    pub direction: Direction,
    pub fade_delay_ms: f64,
    pub fade_duration_ms: f64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            delay_ms: 150.0,
            animate_by: AnimateBy::Words,
            direction: Direction::Top,
            fade_delay_ms: 3000.0,
            fade_duration_ms: 1000.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundConfig {
    pub intensity: f32,
    pub speed: f32,
    /// Custom palette as RGB triples; the default pink palette when absent.
    pub colors: Option<Vec<[u8; 3]>>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_BACKGROUND_INTENSITY,
            speed: 1.0,
            colors: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub gallery: GalleryConfig,
    pub items: Vec<ContentItem>,
    pub music: MusicConfig,
    pub intro: IntroConfig,
    pub background: BackgroundConfig,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = serde_json::from_str(text)?;
        if cfg.gallery.segments == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        Ok(cfg)
    }
}
