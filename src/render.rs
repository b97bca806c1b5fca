use crate::dom;
use dome_core::{BackgroundFrame, Bend, Glow, LinearGradient};
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas painter for the color-bends background.
pub struct BackgroundRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl BackgroundRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let mut r = Self {
            canvas,
            ctx,
            width: 0,
            height: 0,
        };
        r.resize_if_needed();
        Ok(r)
    }

    pub fn width(&self) -> f32 {
        self.width as f32
    }

    pub fn height(&self) -> f32 {
        self.height as f32
    }

    pub fn set_visible(&self, visible: bool) {
        dom::set_visible(&self.canvas, visible);
    }

    /// Keep the backing store at the window size.
    pub fn resize_if_needed(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        let width = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0) as u32;
        let height = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0) as u32;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
    }

    pub fn render(&self, frame: &BackgroundFrame) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        for bend in &frame.bends {
            self.draw_bend(bend);
        }
        for glow in &frame.glows {
            self.draw_glow(glow);
        }
    }

    fn linear(&self, g: &LinearGradient) -> web::CanvasGradient {
        let grad = self.ctx.create_linear_gradient(
            g.from.x as f64,
            g.from.y as f64,
            g.to.x as f64,
            g.to.y as f64,
        );
        for stop in &g.stops {
            _ = grad.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.css());
        }
        grad
    }

    #[allow(deprecated)]
    fn draw_bend(&self, bend: &Bend) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        ctx.move_to(bend.start.x as f64, bend.start.y as f64);
        ctx.bezier_curve_to(
            bend.control1.x as f64,
            bend.control1.y as f64,
            bend.control2.x as f64,
            bend.control2.y as f64,
            bend.end.x as f64,
            bend.end.y as f64,
        );
        let stroke = self.linear(&bend.stroke);
        ctx.set_stroke_style(&stroke);
        ctx.set_line_width(bend.line_width as f64);
        ctx.set_line_cap("round");
        _ = ctx.set_global_composite_operation("screen");
        ctx.stroke();
        ctx.restore();
    }

    #[allow(deprecated)]
    fn draw_glow(&self, glow: &Glow) {
        let (cx, cy) = (glow.center.x as f64, glow.center.y as f64);
        let grad = match self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, glow.radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::error!("radial gradient error: {:?}", e);
                return;
            }
        };
        _ = grad.add_color_stop(0.0, &glow.inner.css());
        _ = grad.add_color_stop(1.0, &glow.outer.css());
        self.ctx.set_fill_style(&grad);
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }
}
