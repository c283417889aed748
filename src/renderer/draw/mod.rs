// Frame composition: background, arrow grid, charges, help overlay

mod charge;
mod field;

pub use field::{arrow_intensity, Arrow, ArrowField, ArrowSample};

use crate::config::{
    Canvas, HELP_BOX, HELP_DIM_ALPHA, HELP_LINES, HELP_LINE_HEIGHT, HELP_TEXT_SIZE,
};
use crate::editor::{PointerState, Scene};
use crate::renderer::surface::{Rgba, SavedState, Surface, BLACK, WHITE};
use ultraviolet::Vec2;

/// Draw one full frame. Committed charges are drawn over the arrows and the
/// cursor charge over everything but the help text.
pub fn draw_frame(
    surface: &mut dyn Surface,
    scene: &Scene,
    arrows: &ArrowField,
    canvas: Canvas,
    pointer: PointerState,
) {
    surface.clear(BLACK);

    arrows.draw(surface, canvas, |p| scene.value_at(p));

    for charge in scene.field.charges() {
        charge.draw(surface);
    }
    scene.cursor.draw(surface);

    draw_help(surface, pointer.pos);
}

/// Usage hints in the top-left corner, dimmed while the pointer is over them.
pub fn draw_help(surface: &mut dyn Surface, pointer: Vec2) {
    let over_help = pointer.x <= HELP_BOX.0 && pointer.y <= HELP_BOX.1;
    let color = if over_help {
        Rgba::new(255, 255, 255, HELP_DIM_ALPHA)
    } else {
        WHITE
    };

    let mut s = SavedState::new(surface);
    s.set_fill(color);
    for (i, line) in HELP_LINES.iter().enumerate() {
        let baseline = HELP_LINE_HEIGHT * (i + 1) as f32;
        s.draw_text(line, Vec2::new(0.0, baseline), HELP_TEXT_SIZE, color);
    }
}
