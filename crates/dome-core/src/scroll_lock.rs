//! Document scroll lock shared by touch drags and the caption modal.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockHolder {
    Drag,
    Modal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    drag: bool,
    modal: bool,
}

impl ScrollLock {
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.drag || self.modal
    }

    /// Returns `true` when the document-level lock flipped on.
    pub fn acquire(&mut self, holder: LockHolder) -> bool {
        let was = self.is_locked();
        match holder {
            LockHolder::Drag => self.drag = true,
            LockHolder::Modal => self.modal = true,
        }
        !was && self.is_locked()
    }

    /// Returns `true` when the document-level lock flipped off.
    pub fn release(&mut self, holder: LockHolder) -> bool {
        let was = self.is_locked();
        match holder {
            LockHolder::Drag => self.drag = false,
            LockHolder::Modal => self.modal = false,
        }
        was && !self.is_locked()
    }

    /// Drop every hold, e.g. on teardown.
    pub fn clear(&mut self) -> bool {
        let was = self.is_locked();
        *self = Self::default();
        was
    }
}
