//! Sphere radius and viewer padding derived from the container size.

use crate::constants::{AUTO_FIT_WIDE_ASPECT, MIN_VIEWER_PAD_PX, RADIUS_HEIGHT_GUARD};
use serde::Deserialize;

/// Which container dimension drives the radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBasis {
    #[default]
    Auto,
    Min,
    Max,
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    pub fit: f32,
    pub basis: FitBasis,
    pub min_radius: f32,
    /// `None` means unbounded.
    pub max_radius: Option<f32>,
    pub pad_factor: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    pub radius: f32,
    pub padding: f32,
}

impl FitParams {
    pub fn compute(&self, width: f32, height: f32) -> FitResult {
        let w = width.max(1.0);
        let h = height.max(1.0);
        let min_dim = w.min(h);
        let max_dim = w.max(h);

        let basis = match self.basis {
            FitBasis::Min => min_dim,
            FitBasis::Max => max_dim,
            FitBasis::Width => w,
            FitBasis::Height => h,
            FitBasis::Auto => {
                if w / h >= AUTO_FIT_WIDE_ASPECT {
                    w
                } else {
                    min_dim
                }
            }
        };

        let mut radius = (basis * self.fit).min(h * RADIUS_HEIGHT_GUARD);
        // max/min rather than clamp: inverted bounds must not panic
        radius = radius.max(self.min_radius);
        if let Some(max_radius) = self.max_radius {
            radius = radius.min(max_radius);
        }

        FitResult {
            radius: radius.round(),
            padding: (min_dim * self.pad_factor).round().max(MIN_VIEWER_PAD_PX),
        }
    }
}
