use crate::constants::*;
use crate::dom;
use crate::input::intro_element_style;
use dome_core::{AnimateBy, IntroConfig, IntroEvent, IntroTimeline};
use web_sys as web;

/// Blur-in intro text. One span per word or character, restyled every frame
/// until the timeline has fired all its milestones.
pub struct IntroView {
    container: web::HtmlElement,
    spans: Vec<web::HtmlElement>,
    timeline: IntroTimeline,
    started_at_ms: f64,
}

impl IntroView {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        cfg: &IntroConfig,
        now_ms: f64,
    ) -> anyhow::Result<Self> {
        let timeline = IntroTimeline::new(cfg);
        let container = dom::create_element(document, "p", INTRO_CONTAINER_CLASS)?;
        let class = match timeline.animate_by() {
            AnimateBy::Words => INTRO_WORD_CLASS,
            AnimateBy::Chars => INTRO_CHAR_CLASS,
        };
        let count = timeline.elements().len();
        let mut spans = Vec::with_capacity(count);
        for (i, text) in timeline.elements().iter().enumerate() {
            let span = dom::create_element(document, "span", class)?;
            let spaced = timeline.animate_by() == AnimateBy::Words && i + 1 < count;
            if spaced {
                span.set_text_content(Some(&format!("{}{}", text, NBSP)));
            } else {
                span.set_text_content(Some(text));
            }
            _ = span.set_attribute("style", &intro_element_style(0.0, 0.0, Default::default()));
            _ = container.append_child(&span);
            spans.push(span);
        }
        _ = parent.append_child(&container);
        log::info!("[intro] {} elements ({:?})", count, timeline.animate_by());

        let view = Self {
            container,
            spans,
            timeline,
            started_at_ms: now_ms,
        };
        view.paint(0.0);
        Ok(view)
    }

    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished()
    }

    pub fn frame(&mut self, now_ms: f64, out: &mut Vec<IntroEvent>) {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        self.paint(elapsed);
        self.timeline.advance(elapsed, out);
        if out.contains(&IntroEvent::FadeComplete) {
            dom::set_visible(&self.container, false);
        }
    }

    fn paint(&self, elapsed: f64) {
        for (i, span) in self.spans.iter().enumerate() {
            let s = self.timeline.element_style(i, elapsed);
            _ = span.set_attribute("style", &intro_element_style(s.opacity, s.blur_px, s.offset));
        }
        dom::set_style_var(
            &self.container,
            "opacity",
            &format!("{:.3}", self.timeline.container_opacity(elapsed)),
        );
    }
}
