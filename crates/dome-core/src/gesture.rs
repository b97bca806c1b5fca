//! Pointer gesture tracking and tap-vs-drag classification.

use crate::constants::{
    MOVE_THRESHOLD_SQ_PX, TAP_THRESHOLD_MOUSE_PX, TAP_THRESHOLD_TOUCH_PX, VELOCITY_WINDOW_MS,
};
use crate::rotation::Orientation;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType` string; unknown kinds behave like a mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    #[inline]
    pub fn is_touch(self) -> bool {
        self == PointerKind::Touch
    }

    #[inline]
    pub fn tap_threshold_px(self) -> f32 {
        if self.is_touch() {
            TAP_THRESHOLD_TOUCH_PX
        } else {
            TAP_THRESHOLD_MOUSE_PX
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    t_ms: f64,
    pos: Vec2,
}

/// Recent pointer samples used to estimate release velocity in px/ms.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 16]>,
}

impl VelocityTracker {
    pub fn push(&mut self, pos: Vec2, t_ms: f64) {
        let horizon = t_ms - VELOCITY_WINDOW_MS;
        self.samples.retain(|s| s.t_ms >= horizon);
        self.samples.push(Sample { t_ms, pos });
    }

    /// Signed velocity over the samples within the window ending at `now_ms`.
    /// A pointer that rested for longer than the window reads as zero.
    pub fn velocity(&self, now_ms: f64) -> Vec2 {
        let horizon = now_ms - VELOCITY_WINDOW_MS;
        let mut recent = self.samples.iter().filter(|s| s.t_ms >= horizon);
        let Some(first) = recent.next() else {
            return Vec2::ZERO;
        };
        let Some(last) = recent.last() else {
            return Vec2::ZERO;
        };
        let dt = (last.t_ms - first.t_ms) as f32;
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        (last.pos - first.pos) / dt
    }
}

/// Transient state of one pointer drag, from pointer-down to pointer-up.
#[derive(Clone, Debug)]
pub struct DragSession {
    /// Id of the pointer that started the drag; other pointers are ignored.
    pub pointer_id: i32,
    pub start_orientation: Orientation,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub kind: PointerKind,
    pub tap_target: Option<usize>,
    pub moved: bool,
    tracker: VelocityTracker,
}

impl DragSession {
    pub fn begin(
        pointer_id: i32,
        pos: Vec2,
        kind: PointerKind,
        start_orientation: Orientation,
        tap_target: Option<usize>,
        now_ms: f64,
    ) -> Self {
        let mut tracker = VelocityTracker::default();
        tracker.push(pos, now_ms);
        Self {
            pointer_id,
            start_orientation,
            start_pos: pos,
            last_pos: pos,
            kind,
            tap_target,
            moved: false,
            tracker,
        }
    }

    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        self.pointer_id == pointer_id
    }

    #[inline]
    pub fn displacement(&self, pos: Vec2) -> Vec2 {
        pos - self.start_pos
    }

    /// Record a move and return the total displacement from the start.
    pub fn track(&mut self, pos: Vec2, now_ms: f64) -> Vec2 {
        self.last_pos = pos;
        self.tracker.push(pos, now_ms);
        let d = self.displacement(pos);
        if !self.moved && d.length_squared() > MOVE_THRESHOLD_SQ_PX {
            self.moved = true;
        }
        d
    }

    pub fn finish(mut self, pos: Vec2, now_ms: f64) -> GestureOutcome {
        let total = self.track(pos, now_ms);
        let threshold = self.kind.tap_threshold_px();
        if total.length_squared() <= threshold * threshold {
            GestureOutcome::Tap {
                target: self.tap_target,
                moved: self.moved,
            }
        } else {
            GestureOutcome::Drag {
                velocity: self.tracker.velocity(now_ms),
                movement: total,
                moved: self.moved,
            }
        }
    }
}

/// Classification of a completed pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    Tap {
        target: Option<usize>,
        moved: bool,
    },
    Drag {
        /// Signed release velocity in px/ms.
        velocity: Vec2,
        /// Total displacement from pointer-down.
        movement: Vec2,
        moved: bool,
    },
}

impl GestureOutcome {
    #[inline]
    pub fn is_tap(&self) -> bool {
        matches!(self, GestureOutcome::Tap { .. })
    }

    /// Whether the pointer travelled past the move threshold at any point.
    #[inline]
    pub fn moved(&self) -> bool {
        match *self {
            GestureOutcome::Tap { moved, .. } | GestureOutcome::Drag { moved, .. } => moved,
        }
    }
}
