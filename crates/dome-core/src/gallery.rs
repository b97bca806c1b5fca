//! The dome gallery controller.
//!
//! Owns the orientation and is the only thing that mutates it: pointer drags
//! while a [`DragSession`] is active, or the [`InertiaRun`] stepped from
//! [`DomeGallery::frame`]. At most one of the two exists at any time. All
//! observable changes are reported as [`GalleryEvent`]s pushed into a
//! caller-provided buffer; timestamps are milliseconds on any monotonic clock.

use crate::config::GalleryConfig;
use crate::constants::{CLICK_MIN_GAP_AFTER_DRAG_MS, CLICK_SUPPRESS_AFTER_DRAG_MS};
use crate::content::ContentItem;
use crate::device::DeviceProfile;
use crate::fit::FitResult;
use crate::gesture::{DragSession, GestureOutcome, PointerKind};
use crate::inertia::{release_velocity, InertiaRun, InertiaStep};
use crate::layout::{build_layout, GalleryTile, Layout};
use crate::rotation::Orientation;
use crate::scroll_lock::{LockHolder, ScrollLock};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    OrientationChanged(Orientation),
    TileSelected { index: usize },
    TileDeselected { index: usize },
    GestureEnded(GestureOutcome),
    ScrollLockChanged(bool),
    LayoutChanged,
}

pub struct DomeGallery {
    config: GalleryConfig,
    device: DeviceProfile,
    pool: Vec<ContentItem>,
    layout: Layout,
    orientation: Orientation,
    drag: Option<DragSession>,
    inertia: Option<InertiaRun>,
    selected: Option<usize>,
    scroll_lock: ScrollLock,
    last_drag_end_ms: Option<f64>,
    click_guard_until_ms: Option<f64>,
    pending_unlock_at_ms: Option<f64>,
    fit: Option<FitResult>,
}

impl DomeGallery {
    pub fn new(config: GalleryConfig, pool: Vec<ContentItem>, device: DeviceProfile) -> Self {
        let layout = build_layout(&pool, device.effective_segments(config.segments));
        log::info!(
            "[gallery] {} tiles over {} segments from {} items ({:?})",
            layout.len(),
            layout.segments,
            pool.len(),
            device
        );
        Self {
            config,
            device,
            pool,
            layout,
            orientation: Orientation::default(),
            drag: None,
            inertia: None,
            selected: None,
            scroll_lock: ScrollLock::default(),
            last_drag_end_ms: None,
            click_guard_until_ms: None,
            pending_unlock_at_ms: None,
            fit: None,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tile(&self, index: usize) -> Option<&GalleryTile> {
        self.layout.get(index)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tile(&self) -> Option<&GalleryTile> {
        self.selected.and_then(|i| self.layout.get(i))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_coasting(&self) -> bool {
        self.inertia.is_some()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn fit(&self) -> Option<FitResult> {
        self.fit
    }

    pub fn effective_segments(&self) -> u32 {
        self.layout.segments
    }

    pub fn effective_sensitivity(&self) -> f32 {
        self.device.effective_sensitivity(self.config.drag_sensitivity)
    }

    pub fn set_device(&mut self, device: DeviceProfile, out: &mut Vec<GalleryEvent>) {
        if device == self.device {
            return;
        }
        self.device = device;
        if device.effective_segments(self.config.segments) != self.layout.segments {
            self.rebuild(out);
        }
    }

    pub fn set_pool(&mut self, pool: Vec<ContentItem>, out: &mut Vec<GalleryEvent>) {
        self.pool = pool;
        self.rebuild(out);
    }

    fn rebuild(&mut self, out: &mut Vec<GalleryEvent>) {
        self.layout = build_layout(&self.pool, self.device.effective_segments(self.config.segments));
        log::info!(
            "[gallery] layout rebuilt: {} tiles over {} segments",
            self.layout.len(),
            self.layout.segments
        );
        if self.selected.is_some_and(|i| i >= self.layout.len()) {
            self.selected = None;
        }
        out.push(GalleryEvent::LayoutChanged);
    }

    /// Recompute radius and padding for a new container size.
    pub fn resize(&mut self, width: f32, height: f32) -> FitResult {
        let fit = self.config.fit_params().compute(width, height);
        self.fit = Some(fit);
        fit
    }

    /// Start a drag. Ignored while a caption is open or another pointer
    /// already owns the drag.
    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        pos: Vec2,
        kind: PointerKind,
        target: Option<usize>,
        now_ms: f64,
        out: &mut Vec<GalleryEvent>,
    ) {
        if self.selected.is_some() || self.drag.is_some() {
            return;
        }
        if self.inertia.take().is_some() {
            log::debug!("[gallery] coast cancelled by new drag");
        }
        if kind.is_touch() && self.scroll_lock.acquire(LockHolder::Drag) {
            out.push(GalleryEvent::ScrollLockChanged(true));
        }
        let target = target.filter(|&i| i < self.layout.len());
        self.drag = Some(DragSession::begin(
            pointer_id,
            pos,
            kind,
            self.orientation,
            target,
            now_ms,
        ));
    }

    pub fn pointer_move(
        &mut self,
        pointer_id: i32,
        pos: Vec2,
        now_ms: f64,
        out: &mut Vec<GalleryEvent>,
    ) {
        if self.selected.is_some() {
            return;
        }
        let sensitivity = self.effective_sensitivity();
        let limits = self.config.rotation_limits();
        let Some(session) = self.drag.as_mut().filter(|s| s.owns(pointer_id)) else {
            return;
        };
        let delta = session.track(pos, now_ms);
        let next = session.start_orientation.dragged(delta, sensitivity, &limits);
        self.set_orientation(next, out);
    }

    pub fn pointer_up(
        &mut self,
        pointer_id: i32,
        pos: Vec2,
        now_ms: f64,
        out: &mut Vec<GalleryEvent>,
    ) {
        let Some(session) = self.take_drag(pointer_id) else {
            return;
        };
        let kind = session.kind;
        let start = session.start_orientation;
        let outcome = session.finish(pos, now_ms);

        match outcome {
            GestureOutcome::Tap { target, .. } => {
                self.set_orientation(start, out);
                if let Some(index) = target {
                    if self.selected.is_none() && self.tile_has_note(index) {
                        self.select(index, out);
                    }
                }
            }
            GestureOutcome::Drag {
                velocity, movement, ..
            } => {
                let next = start.dragged(
                    movement,
                    self.effective_sensitivity(),
                    &self.config.rotation_limits(),
                );
                self.set_orientation(next, out);
                if let Some(v) = release_velocity(velocity, movement, self.config.drag_sensitivity)
                {
                    log::debug!("[gallery] coast from ({:.3}, {:.3}) px/ms", v.x, v.y);
                    self.inertia = Some(InertiaRun::start(v, self.config.inertia_params()));
                }
                self.click_guard_until_ms = Some(now_ms + CLICK_SUPPRESS_AFTER_DRAG_MS);
            }
        }

        if outcome.moved() {
            self.last_drag_end_ms = Some(now_ms);
        }
        if kind.is_touch() && self.scroll_lock.release(LockHolder::Drag) {
            out.push(GalleryEvent::ScrollLockChanged(false));
        }
        out.push(GalleryEvent::GestureEnded(outcome));
    }

    /// Pointer cancelled by the platform: end the session without a tap or coast.
    pub fn pointer_cancel(&mut self, pointer_id: i32, now_ms: f64, out: &mut Vec<GalleryEvent>) {
        let Some(session) = self.take_drag(pointer_id) else {
            return;
        };
        if session.moved {
            self.last_drag_end_ms = Some(now_ms);
        }
        if session.kind.is_touch() && self.scroll_lock.release(LockHolder::Drag) {
            out.push(GalleryEvent::ScrollLockChanged(false));
        }
    }

    /// A click delivered to a tile. Returns whether it opened the caption.
    pub fn click_tile(&mut self, index: usize, now_ms: f64, out: &mut Vec<GalleryEvent>) -> bool {
        if self.drag.is_some() || self.selected.is_some() {
            return false;
        }
        if self
            .last_drag_end_ms
            .is_some_and(|t| now_ms - t < CLICK_MIN_GAP_AFTER_DRAG_MS)
        {
            return false;
        }
        if self.click_guard_until_ms.is_some_and(|t| now_ms < t) {
            return false;
        }
        if !self.tile_has_note(index) {
            return false;
        }
        self.select(index, out);
        true
    }

    pub fn close_selection(&mut self, now_ms: f64, out: &mut Vec<GalleryEvent>) {
        if let Some(index) = self.selected.take() {
            out.push(GalleryEvent::TileDeselected { index });
            self.pending_unlock_at_ms = Some(now_ms + self.config.enlarge_transition_ms);
        }
    }

    pub fn key_down(&mut self, key: &str, now_ms: f64, out: &mut Vec<GalleryEvent>) {
        if key == "Escape" {
            self.close_selection(now_ms, out);
        }
    }

    /// Advance one animation frame. Returns whether gallery motion or a
    /// deferred unlock still needs frames.
    pub fn frame(&mut self, now_ms: f64, out: &mut Vec<GalleryEvent>) -> bool {
        if let Some(at) = self.pending_unlock_at_ms {
            if now_ms >= at {
                self.pending_unlock_at_ms = None;
                if self.selected.is_none() && self.scroll_lock.release(LockHolder::Modal) {
                    out.push(GalleryEvent::ScrollLockChanged(false));
                }
            }
        }

        if let Some(run) = self.inertia.as_mut() {
            let limits = self.config.rotation_limits();
            let mut next = self.orientation;
            match run.step(&mut next, &limits) {
                InertiaStep::Moved => self.set_orientation(next, out),
                step => {
                    log::debug!("[gallery] coast ended: {:?} after {} frames", step, run.frames);
                    self.inertia = None;
                }
            }
        }

        self.inertia.is_some() || self.pending_unlock_at_ms.is_some()
    }

    /// Drop transient state and release the document scroll lock.
    pub fn teardown(&mut self, out: &mut Vec<GalleryEvent>) {
        self.drag = None;
        self.selected = None;
        self.inertia = None;
        self.pending_unlock_at_ms = None;
        if self.scroll_lock.clear() {
            out.push(GalleryEvent::ScrollLockChanged(false));
        }
    }

    fn take_drag(&mut self, pointer_id: i32) -> Option<DragSession> {
        if self.drag.as_ref().is_some_and(|s| s.owns(pointer_id)) {
            self.drag.take()
        } else {
            None
        }
    }

    fn tile_has_note(&self, index: usize) -> bool {
        self.layout.get(index).and_then(GalleryTile::note).is_some()
    }

    fn select(&mut self, index: usize, out: &mut Vec<GalleryEvent>) {
        log::info!("[gallery] tile {} selected", index);
        self.selected = Some(index);
        self.pending_unlock_at_ms = None;
        out.push(GalleryEvent::TileSelected { index });
        if self.scroll_lock.acquire(LockHolder::Modal) {
            out.push(GalleryEvent::ScrollLockChanged(true));
        }
    }

    fn set_orientation(&mut self, next: Orientation, out: &mut Vec<GalleryEvent>) {
        if next != self.orientation {
            self.orientation = next;
            out.push(GalleryEvent::OrientationChanged(next));
        }
    }
}
