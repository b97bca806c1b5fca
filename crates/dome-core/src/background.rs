//! Ambient "color bends" background: slowly drifting bezier strokes and radial
//! glows over a pink palette. Geometry only; painting happens in the host.

use crate::config::BackgroundConfig;
use crate::constants::{BACKGROUND_GLOWS, BACKGROUND_TIME_STEP, DEFAULT_PALETTE};
use crate::device::DeviceProfile;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0] as f32,
            g: rgb[1] as f32,
            b: rgb[2] as f32,
            a,
        }
    }

    /// Offset each channel, clamped to the displayable range.
    fn wobbled(rgb: [u8; 3], dr: f32, dg: f32, db: f32, a: f32) -> Self {
        Self {
            r: (rgb[0] as f32 + dr).clamp(0.0, 255.0),
            g: (rgb[1] as f32 + dg).clamp(0.0, 255.0),
            b: (rgb[2] as f32 + db).clamp(0.0, 255.0),
            a,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({:.0}, {:.0}, {:.0}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: Vec<ColorStop>,
}

/// One wide bezier stroke across the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Bend {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
    pub line_width: f32,
    pub stroke: LinearGradient,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center: Vec2,
    pub radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundFrame {
    pub bends: Vec<Bend>,
    pub glows: Vec<Glow>,
}

#[derive(Clone, Debug)]
pub struct ColorBends {
    palette: Vec<[u8; 3]>,
    base_intensity: f32,
    base_speed: f32,
    intensity: f32,
    speed: f32,
    bends: usize,
    time: f32,
}

impl ColorBends {
    pub fn new(cfg: &BackgroundConfig, device: DeviceProfile) -> Self {
        let palette = match &cfg.colors {
            Some(c) if !c.is_empty() => c.clone(),
            _ => DEFAULT_PALETTE.to_vec(),
        };
        let mut bends = Self {
            palette,
            base_intensity: cfg.intensity,
            base_speed: cfg.speed,
            intensity: cfg.intensity,
            speed: cfg.speed,
            bends: device.background_bends(),
            time: 0.0,
        };
        bends.set_device(device);
        bends
    }

    pub fn set_device(&mut self, device: DeviceProfile) {
        self.intensity = device.background_intensity(self.base_intensity);
        self.speed = device.background_speed(self.base_speed);
        self.bends = device.background_bends();
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn bend_count(&self) -> usize {
        self.bends
    }

    /// Advance one animation frame and return the geometry to paint.
    pub fn next_frame(&mut self, width: f32, height: f32) -> BackgroundFrame {
        self.time += BACKGROUND_TIME_STEP * self.speed;
        self.frame_at(self.time, width, height)
    }

    pub fn frame_at(&self, time: f32, width: f32, height: f32) -> BackgroundFrame {
        let bends = (0..self.bends)
            .map(|i| self.bend(time, i, width, height))
            .collect();
        let glows = (0..BACKGROUND_GLOWS)
            .map(|i| self.glow(time, i, width, height))
            .collect();
        BackgroundFrame { bends, glows }
    }

    fn stop_offset(&self, index: usize) -> f32 {
        let n = self.palette.len();
        if n > 1 {
            index as f32 / (n - 1) as f32
        } else {
            0.0
        }
    }

    fn bend(&self, time: f32, i: usize, w: f32, h: f32) -> Bend {
        let offset = i as f32 / self.bends as f32 * TAU;
        let t = time + offset;
        let alpha = self.intensity * 0.8;
        let stops = self
            .palette
            .iter()
            .enumerate()
            .map(|(k, &rgb)| {
                let kf = k as f32;
                ColorStop {
                    offset: self.stop_offset(k),
                    color: Rgba::wobbled(
                        rgb,
                        (t + kf).sin() * 15.0,
                        (t * 1.1 + kf).cos() * 15.0,
                        (t * 0.9 + kf).sin() * 15.0,
                        alpha,
                    ),
                }
            })
            .collect();
        Bend {
            start: Vec2::new(-w * 0.2, h * 0.5),
            control1: Vec2::new(w * (0.3 + t.sin() * 0.2), h * (0.3 + (t * 0.8).cos() * 0.2)),
            control2: Vec2::new(
                w * (0.7 + (t * 1.2).cos() * 0.2),
                h * (0.7 + (t * 0.9).sin() * 0.2),
            ),
            end: Vec2::new(w * 1.2, h * 0.5),
            line_width: h * 0.8,
            stroke: LinearGradient {
                from: Vec2::new(-w * 0.2, 0.0),
                to: Vec2::new(w * 1.2, 0.0),
                stops,
            },
        }
    }

    fn glow(&self, time: f32, i: usize, w: f32, h: f32) -> Glow {
        let t = time + i as f32 / BACKGROUND_GLOWS as f32 * PI;
        let n = self.palette.len();
        Glow {
            center: Vec2::new(w * (0.5 + t.sin() * 0.3), h * (0.5 + (t * 0.7).cos() * 0.3)),
            radius: w.max(h) * 0.8,
            inner: Rgba::from_rgb(self.palette[i % n], self.intensity * 0.4),
            outer: Rgba::from_rgb(self.palette[(i + 1) % n], 0.0),
        }
    }
}
