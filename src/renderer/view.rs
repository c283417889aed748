// Mapping between canvas coordinates (origin top-left, y down) and the
// window's world view (origin at the canvas centre, y up).

use crate::config::Canvas;
use ultraviolet::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasView {
    pub canvas: Canvas,
    /// Window size in physical pixels.
    pub window: (u16, u16),
}

impl CanvasView {
    pub fn new(canvas: Canvas, width: u16, height: u16) -> Self {
        Self {
            canvas,
            window: (width, height),
        }
    }

    fn aspect(&self) -> f32 {
        self.window.0 as f32 / self.window.1.max(1) as f32
    }

    /// Half the visible world height, chosen so the whole canvas fits.
    pub fn view_scale(&self) -> f32 {
        let fit_height = self.canvas.height * 0.5;
        let fit_width = self.canvas.width * 0.5 / self.aspect().max(f32::EPSILON);
        fit_height.max(fit_width)
    }

    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x - self.canvas.width * 0.5,
            self.canvas.height * 0.5 - p.y,
        )
    }

    pub fn from_world(&self, w: Vec2) -> Vec2 {
        Vec2::new(
            w.x + self.canvas.width * 0.5,
            self.canvas.height * 0.5 - w.y,
        )
    }

    /// Window pixel position (y down) to canvas coordinates.
    pub fn screen_to_canvas(&self, mx: f32, my: f32) -> Vec2 {
        let height = self.window.1.max(1) as f32;
        let mut mouse = Vec2::new(mx, my);
        mouse *= 2.0 / height;
        mouse.y -= 1.0;
        mouse.y *= -1.0;
        mouse.x -= self.aspect();
        self.from_world(mouse * self.view_scale())
    }

    /// Canvas coordinates to window pixel position.
    pub fn canvas_to_screen(&self, p: Vec2) -> Vec2 {
        let height = self.window.1.max(1) as f32;
        let n = self.to_world(p) / self.view_scale();
        Vec2::new((n.x + self.aspect()) * height * 0.5, (1.0 - n.y) * height * 0.5)
    }

    /// Window pixels per canvas unit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.window.1.max(1) as f32 * 0.5 / self.view_scale()
    }
}
