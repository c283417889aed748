// `Surface` over quarkstrom's render context. Shapes go to the GPU batches;
// text is queued and painted by egui in `gui()`.

use super::surface::{to_array, PenStack, Rgba, Surface};
use super::view::CanvasView;
use ultraviolet::Vec2;

/// Text queued during `render`, positioned in egui points.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
}

pub struct QuarkSurface<'a> {
    ctx: &'a mut quarkstrom::RenderContext,
    view: CanvasView,
    scale_factor: f32,
    pen: PenStack,
    labels: Vec<ScreenLabel>,
}

impl<'a> QuarkSurface<'a> {
    pub fn new(ctx: &'a mut quarkstrom::RenderContext, view: CanvasView, scale_factor: f32) -> Self {
        Self {
            ctx,
            view,
            scale_factor: scale_factor.max(f32::EPSILON),
            pen: PenStack::default(),
            labels: Vec::new(),
        }
    }

    pub fn into_labels(self) -> Vec<ScreenLabel> {
        self.labels
    }

    /// Canvas units covered by one physical pixel.
    fn pixel(&self) -> f32 {
        1.0 / self.view.pixels_per_unit().max(f32::EPSILON)
    }
}

impl Surface for QuarkSurface<'_> {
    fn clear(&mut self, color: Rgba) {
        self.ctx.clear_circles();
        self.ctx.clear_lines();
        self.ctx.clear_rects();
        self.ctx.set_view_pos(Vec2::zero());
        self.ctx.set_view_scale(self.view.view_scale());
        self.pen.reset();
        self.labels.clear();

        let canvas = self.view.canvas;
        let min = self.view.to_world(Vec2::new(0.0, canvas.height));
        let max = self.view.to_world(Vec2::new(canvas.width, 0.0));
        self.ctx.draw_rect(min, max, to_array(color));
    }

    fn set_fill(&mut self, color: Rgba) {
        self.pen.current.fill = color;
    }

    fn set_stroke(&mut self, color: Rgba, width: f32) {
        self.pen.current.stroke = color;
        self.pen.current.stroke_width = width;
    }

    fn save_state(&mut self) {
        self.pen.save();
    }

    fn restore_state(&mut self) {
        self.pen.restore();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx
            .draw_circle(self.view.to_world(center), radius, to_array(color));
    }

    // Lines are one pixel wide on the GPU side, so wider strokes are laid
    // down as parallel strands.
    fn draw_line(&mut self, a: Vec2, b: Vec2) {
        let color = to_array(self.pen.current.stroke);
        let (wa, wb) = (self.view.to_world(a), self.view.to_world(b));
        let d = wb - wa;
        let len = d.mag();
        if len <= f32::EPSILON {
            return;
        }
        let normal = Vec2::new(-d.y, d.x) / len;
        let width = self.pen.current.stroke_width;
        let strands = (width / self.pixel()).ceil().max(1.0) as usize;
        for i in 0..strands {
            let t = if strands == 1 {
                0.0
            } else {
                (i as f32 / (strands - 1) as f32 - 0.5) * width
            };
            let offset = normal * t;
            self.ctx.draw_line(wa + offset, wb + offset, color);
        }
    }

    fn draw_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2) {
        let color = to_array(self.pen.current.fill);
        let (w0, w1, w2) = (
            self.view.to_world(p0),
            self.view.to_world(p1),
            self.view.to_world(p2),
        );
        // fan from p2 across the p0-p1 edge
        let edge = w1 - w0;
        let steps = (edge.mag() / self.pixel()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.ctx.draw_line(w2, w0 + edge * t, color);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        let ppu = self.view.pixels_per_unit();
        self.labels.push(ScreenLabel {
            text: text.to_string(),
            pos: self.view.canvas_to_screen(pos) / self.scale_factor,
            size: size * ppu / self.scale_factor,
            color,
        });
    }
}
