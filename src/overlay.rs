use crate::constants::*;
use crate::dom;
use dome_core::GalleryTile;
use web_sys as web;

/// Caption modal: a backdrop plus a card with the image, a title and the note.
pub struct CaptionOverlay {
    backdrop: web::HtmlElement,
    modal: web::HtmlElement,
    pub close_button: web::HtmlElement,
    image: web::Element,
    text: web::Element,
}

impl CaptionOverlay {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let backdrop = dom::create_element(document, "div", BACKDROP_CLASS)?;
        let modal = dom::create_element(document, "div", MODAL_CLASS)?;
        let close_button = dom::create_element(document, "button", MODAL_CLOSE_CLASS)?;
        close_button.set_text_content(Some("\u{00D7}"));
        _ = close_button.set_attribute("aria-label", "Close");

        let content = dom::create_element(document, "div", "dome-note-content")?;
        let image_wrap = dom::create_element(document, "div", "dome-note-image")?;
        let image = document
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("create <img>: {:?}", e))?;
        _ = image_wrap.append_child(&image);

        let message = dom::create_element(document, "div", "dome-note-message")?;
        let title = document
            .create_element("h3")
            .map_err(|e| anyhow::anyhow!("create <h3>: {:?}", e))?;
        title.set_class_name("dome-note-title");
        title.set_text_content(Some(MODAL_TITLE));
        let text = document
            .create_element("p")
            .map_err(|e| anyhow::anyhow!("create <p>: {:?}", e))?;
        text.set_class_name("dome-note-text");
        _ = message.append_child(&title);
        _ = message.append_child(&text);

        _ = content.append_child(&image_wrap);
        _ = content.append_child(&message);
        _ = modal.append_child(&close_button);
        _ = modal.append_child(&content);
        _ = parent.append_child(&backdrop);
        _ = parent.append_child(&modal);

        let overlay = Self {
            backdrop,
            modal,
            close_button,
            image,
            text,
        };
        overlay.hide();
        Ok(overlay)
    }

    pub fn backdrop(&self) -> &web::HtmlElement {
        &self.backdrop
    }

    pub fn show(&self, tile: &GalleryTile) {
        let src = tile.src();
        if let Some(wrap) = self.image.parent_element() {
            dom::set_visible(&wrap, !src.is_empty());
        }
        _ = self.image.set_attribute("src", src);
        let alt = tile
            .item
            .as_ref()
            .map(|i| i.alt.as_str())
            .filter(|a| !a.is_empty())
            .unwrap_or("Selected image");
        _ = self.image.set_attribute("alt", alt);
        self.text.set_text_content(tile.note());
        dom::set_visible(&self.backdrop, true);
        dom::set_visible(&self.modal, true);
    }

    pub fn hide(&self) {
        dom::set_visible(&self.backdrop, false);
        dom::set_visible(&self.modal, false);
    }
}
