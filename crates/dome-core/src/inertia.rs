//! Post-release coasting with geometric friction.

use crate::constants::{
    INERTIA_ANGLE_DIVISOR, INERTIA_FALLBACK_SCALE, INERTIA_FRAMES_BASE, INERTIA_FRAMES_SPAN,
    INERTIA_FRICTION_BASE, INERTIA_FRICTION_SPAN, INERTIA_MAX_RELEASE_VELOCITY,
    INERTIA_MIN_START_VELOCITY, INERTIA_STOP_BASE, INERTIA_STOP_SPAN, INERTIA_VELOCITY_SCALE,
    INERTIA_ZERO_VELOCITY,
};
use crate::rotation::{Orientation, RotationLimits};
use glam::Vec2;

/// Friction, stop threshold and frame budget derived from a dampening value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaParams {
    pub friction: f32,
    pub stop_threshold: f32,
    pub max_frames: u32,
}

impl InertiaParams {
    /// `dampening` is clamped to `[0, 1]`; higher values coast longer.
    pub fn from_dampening(dampening: f32) -> Self {
        let d = if dampening.is_nan() {
            0.0
        } else {
            dampening.clamp(0.0, 1.0)
        };
        Self {
            friction: INERTIA_FRICTION_BASE + INERTIA_FRICTION_SPAN * d,
            stop_threshold: INERTIA_STOP_BASE - INERTIA_STOP_SPAN * d,
            max_frames: (INERTIA_FRAMES_BASE + INERTIA_FRAMES_SPAN * d).round() as u32,
        }
    }
}

/// Velocity handed to the simulator when a drag ends.
///
/// Falls back to total movement over the configured sensitivity when the
/// measured velocity is effectively zero, so slow deliberate drags still coast.
/// Returns `None` when the result is too small to start a coast.
pub fn release_velocity(measured: Vec2, movement: Vec2, configured_sensitivity: f32) -> Option<Vec2> {
    let mut v = measured;
    if v.x.abs() < INERTIA_ZERO_VELOCITY && v.y.abs() < INERTIA_ZERO_VELOCITY {
        v = movement / configured_sensitivity.max(f32::EPSILON) * INERTIA_FALLBACK_SCALE;
    }
    (v.x.abs() > INERTIA_MIN_START_VELOCITY || v.y.abs() > INERTIA_MIN_START_VELOCITY).then_some(v)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InertiaStep {
    Moved,
    Settled,
    BudgetExhausted,
}

/// One coast. Dropping the value cancels it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaRun {
    pub velocity: Vec2,
    pub frames: u32,
    pub params: InertiaParams,
}

impl InertiaRun {
    pub fn start(release_velocity: Vec2, params: InertiaParams) -> Self {
        let max = INERTIA_MAX_RELEASE_VELOCITY;
        let velocity = Vec2::new(
            release_velocity.x.clamp(-max, max),
            release_velocity.y.clamp(-max, max),
        ) * INERTIA_VELOCITY_SCALE;
        Self {
            velocity,
            frames: 0,
            params,
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.velocity.x.abs() < self.params.stop_threshold
            && self.velocity.y.abs() < self.params.stop_threshold
    }

    /// Decay once and, unless the run ends, rotate `orientation` by the new velocity.
    pub fn step(&mut self, orientation: &mut Orientation, limits: &RotationLimits) -> InertiaStep {
        self.velocity *= self.params.friction;
        if self.is_settled() {
            return InertiaStep::Settled;
        }
        self.frames += 1;
        if self.frames > self.params.max_frames {
            return InertiaStep::BudgetExhausted;
        }
        *orientation = orientation.stepped(
            -self.velocity.y / INERTIA_ANGLE_DIVISOR,
            self.velocity.x / INERTIA_ANGLE_DIVISOR,
            limits,
        );
        InertiaStep::Moved
    }
}
