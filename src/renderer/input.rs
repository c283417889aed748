use quarkstrom::winit::event::VirtualKeyCode;
use quarkstrom::winit_input_helper::WinitInputHelper;

use super::view::CanvasView;
use crate::editor::wheel_steps;

impl super::Renderer {
    pub fn handle_input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
        self.settings_window_open ^= input.key_pressed(VirtualKeyCode::E);

        self.window_width = width;
        self.window_height = height;
        self.view = CanvasView::new(self.editor.canvas(), width, height);

        if let Some((mx, my)) = input.mouse() {
            self.pointer.pos = self.view.screen_to_canvas(mx, my);
        }
        self.pointer.snap = input.held_shift();
        self.editor.frame(self.pointer);

        // egui owns the pointer while it is over a window
        if self.pointer_over_gui {
            return;
        }

        // scroll_diff sums every wheel event since the last frame
        self.editor.wheel_by(wheel_steps(input.scroll_diff()));

        if input.mouse_pressed(0) {
            self.editor.click(self.pointer.pos);
        }
    }
}
