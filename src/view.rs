use crate::constants::*;
use crate::dom;
use crate::input::{image_filter, px};
use dome_core::{DomeGallery, FitResult, GalleryTile, Orientation};
use web_sys as web;

/// DOM for the dome: root, pointer surface, sphere and one element per tile.
pub struct GalleryView {
    pub root: web::HtmlElement,
    pub main: web::HtmlElement,
    sphere: web::HtmlElement,
    document: web::Document,
}

impl GalleryView {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        gallery: &DomeGallery,
    ) -> anyhow::Result<Self> {
        let root = dom::create_element(document, "div", ROOT_CLASS)?;
        let main = dom::create_element(document, "main", MAIN_CLASS)?;
        let stage = dom::create_element(document, "div", STAGE_CLASS)?;
        let sphere = dom::create_element(document, "div", SPHERE_CLASS)?;
        _ = stage.append_child(&sphere);
        _ = main.append_child(&stage);
        for class in ["dome-overlay-gradient-top", "dome-overlay-gradient-bottom"] {
            _ = main.append_child(&dom::create_element(document, "div", class)?);
        }
        _ = root.append_child(&main);
        _ = container.append_child(&root);

        let view = Self {
            root,
            main,
            sphere,
            document: document.clone(),
        };
        view.apply_style_vars(gallery);
        view.rebuild_tiles(gallery)?;
        view.apply_orientation(gallery.orientation());
        Ok(view)
    }

    pub fn apply_style_vars(&self, gallery: &DomeGallery) {
        let cfg = gallery.config();
        let segments = gallery.effective_segments().to_string();
        dom::set_style_var(&self.root, "--segments-x", &segments);
        dom::set_style_var(&self.root, "--segments-y", &segments);
        dom::set_style_var(&self.root, "--overlay-blur-color", &cfg.overlay_blur_color);
        dom::set_style_var(&self.root, "--tile-radius", &cfg.image_border_radius);
        dom::set_style_var(&self.root, "--enlarge-radius", &cfg.opened_image_border_radius);
        dom::set_style_var(&self.root, "--image-filter", image_filter(cfg.grayscale));
    }

    pub fn apply_fit(&self, fit: FitResult) {
        dom::set_style_var(&self.root, "--radius", &px(fit.radius));
        dom::set_style_var(&self.root, "--viewer-pad", &px(fit.padding));
    }

    pub fn apply_orientation(&self, o: Orientation) {
        dom::set_style_var(&self.sphere, "transform", &o.css_transform());
    }

    pub fn rebuild_tiles(&self, gallery: &DomeGallery) -> anyhow::Result<()> {
        self.sphere.set_inner_html("");
        let segments = gallery.effective_segments();
        let grayscale = gallery.config().grayscale;
        for (i, tile) in gallery.layout().tiles.iter().enumerate() {
            let el = self.build_tile(i, tile, segments, grayscale)?;
            _ = self.sphere.append_child(&el);
        }
        Ok(())
    }

    fn build_tile(
        &self,
        index: usize,
        tile: &GalleryTile,
        segments: u32,
        grayscale: bool,
    ) -> anyhow::Result<web::HtmlElement> {
        let doc = &self.document;
        let p = tile.position;
        let rot = p.base_rotation(segments);

        let item = dom::create_element(doc, "div", ITEM_CLASS)?;
        _ = item.set_attribute(ITEM_INDEX_ATTR, &index.to_string());
        dom::set_style_var(&item, "--offset-x", &p.x.to_string());
        dom::set_style_var(&item, "--offset-y", &p.y.to_string());
        dom::set_style_var(&item, "--item-size-x", &p.size_x.to_string());
        dom::set_style_var(&item, "--item-size-y", &p.size_y.to_string());
        dom::set_style_var(&item, "--rot-x", &format!("{}deg", rot.rotate_x));
        dom::set_style_var(&item, "--rot-y", &format!("{}deg", rot.rotate_y));

        let image = dom::create_element(doc, "div", ITEM_IMAGE_CLASS)?;
        _ = image.set_attribute("role", "button");
        _ = image.set_attribute("tabindex", "0");
        let alt = tile.item.as_ref().map(|i| i.alt.as_str()).unwrap_or("");
        _ = image.set_attribute("aria-label", if alt.is_empty() { "Open image" } else { alt });

        if !tile.src().is_empty() {
            let img = doc
                .create_element("img")
                .map_err(|e| anyhow::anyhow!("create <img>: {:?}", e))?;
            _ = img.set_attribute("src", tile.src());
            _ = img.set_attribute("alt", alt);
            _ = img.set_attribute("draggable", "false");
            _ = img.set_attribute("loading", "lazy");
            _ = img.set_attribute("decoding", "async");
            _ = img.set_attribute(
                "style",
                &format!(
                    "filter:{};transform:translateZ(0);will-change:transform",
                    image_filter(grayscale)
                ),
            );
            _ = image.append_child(&img);
        }
        if tile.note().is_some() {
            let hint = dom::create_element(doc, "div", HINT_CLASS)?;
            let span = doc
                .create_element("span")
                .map_err(|e| anyhow::anyhow!("create <span>: {:?}", e))?;
            span.set_text_content(Some(HINT_TEXT));
            _ = hint.append_child(&span);
            _ = image.append_child(&hint);
        }
        _ = item.append_child(&image);
        Ok(item)
    }
}
