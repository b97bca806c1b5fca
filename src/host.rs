use crate::constants::SCROLL_LOCK_CLASS;
use crate::dom;
use crate::input::px;
use crate::overlay::CaptionOverlay;
use crate::view::GalleryView;
use dome_core::{DomeGallery, GalleryEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The gallery controller together with the DOM it drives.
pub struct GalleryHost {
    pub gallery: DomeGallery,
    pub view: GalleryView,
    pub overlay: CaptionOverlay,
    document: web::Document,
    events: Vec<GalleryEvent>,
}

pub type SharedGallery = Rc<RefCell<GalleryHost>>;

impl GalleryHost {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        gallery: DomeGallery,
    ) -> anyhow::Result<Self> {
        let view = GalleryView::mount(document, container, &gallery)?;
        let overlay = CaptionOverlay::mount(document, &view.root)?;
        Ok(Self {
            gallery,
            view,
            overlay,
            document: document.clone(),
            events: Vec::with_capacity(8),
        })
    }

    /// Run an operation on the controller and reflect its events in the DOM.
    pub fn with<R>(&mut self, f: impl FnOnce(&mut DomeGallery, &mut Vec<GalleryEvent>) -> R) -> R {
        let mut events = std::mem::take(&mut self.events);
        let result = f(&mut self.gallery, &mut events);
        for ev in events.drain(..) {
            self.apply(ev);
        }
        self.events = events;
        result
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let fit = self.gallery.resize(width, height);
        log::debug!(
            "[gallery] fit {}x{} -> radius {} pad {}",
            width,
            height,
            px(fit.radius),
            px(fit.padding)
        );
        self.view.apply_fit(fit);
    }

    fn apply(&mut self, ev: GalleryEvent) {
        match ev {
            GalleryEvent::OrientationChanged(o) => self.view.apply_orientation(o),
            GalleryEvent::TileSelected { index } => {
                if let Some(tile) = self.gallery.tile(index) {
                    self.overlay.show(tile);
                }
            }
            GalleryEvent::TileDeselected { .. } => self.overlay.hide(),
            GalleryEvent::ScrollLockChanged(locked) => {
                dom::set_body_class(&self.document, SCROLL_LOCK_CLASS, locked)
            }
            GalleryEvent::LayoutChanged => {
                self.view.apply_style_vars(&self.gallery);
                if let Err(e) = self.view.rebuild_tiles(&self.gallery) {
                    log::error!("[gallery] tile rebuild failed: {:?}", e);
                }
                self.view.apply_orientation(self.gallery.orientation());
            }
            GalleryEvent::GestureEnded(outcome) => {
                log::debug!("[gallery] gesture ended: {:?}", outcome);
            }
        }
    }
}
