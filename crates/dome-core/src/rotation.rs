//! Orientation of the whole dome and the drag transition rule.

use glam::Vec2;

/// Wrap an angle in degrees into `(-180, 180]`.
#[inline]
pub fn wrap_signed(deg: f32) -> f32 {
    let a = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if a <= -180.0 {
        a + 360.0
    } else {
        a
    }
}

/// Two-angle rotation of the dome, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub angle_x: f32,
    pub angle_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationLimits {
    pub max_vertical_deg: f32,
}

impl RotationLimits {
    #[inline]
    pub fn clamp_x(&self, angle_x: f32) -> f32 {
        let m = self.max_vertical_deg.abs();
        angle_x.clamp(-m, m)
    }
}

impl Orientation {
    pub fn new(angle_x: f32, angle_y: f32, limits: &RotationLimits) -> Self {
        Self {
            angle_x: limits.clamp_x(angle_x),
            angle_y: wrap_signed(angle_y),
        }
    }

    /// Orientation after dragging `delta` pixels from a drag that began at `self`.
    pub fn dragged(&self, delta: Vec2, sensitivity: f32, limits: &RotationLimits) -> Self {
        let s = sensitivity.max(f32::EPSILON);
        Self {
            angle_x: limits.clamp_x(self.angle_x - delta.y / s),
            angle_y: wrap_signed(self.angle_y + delta.x / s),
        }
    }

    /// Advance by an angular step in degrees.
    pub fn stepped(&self, d_x: f32, d_y: f32, limits: &RotationLimits) -> Self {
        Self {
            angle_x: limits.clamp_x(self.angle_x + d_x),
            angle_y: wrap_signed(self.angle_y + d_y),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translateZ(calc(var(--radius) * -1)) rotateX({}deg) rotateY({}deg)",
            self.angle_x, self.angle_y
        )
    }
}
