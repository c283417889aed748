use crate::charge::Charge;
use crate::renderer::surface::{SavedState, Surface, WHITE};

impl Charge {
    /// Filled circle in the value colour; saturated charges also show their value.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let mut s = SavedState::new(surface);
        let color = self.color();
        s.set_fill(color);
        s.draw_circle(self.pos, self.radius(), color);

        if let Some(label) = self.label() {
            s.set_fill(WHITE);
            s.draw_text(&label.text, label.pos, label.size, WHITE);
        }
    }
}
