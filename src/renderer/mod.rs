pub mod draw;
pub mod surface;
pub mod view;

#[cfg(feature = "gui")]
pub mod backend;
#[cfg(feature = "gui")]
pub mod gui;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod state;

#[cfg(feature = "gui")]
pub use gui_renderer::Renderer;

#[cfg(feature = "gui")]
mod gui_renderer {
    use super::backend::{QuarkSurface, ScreenLabel};
    use super::draw::{self, ArrowField};
    use super::state::startup_config;
    use super::view::CanvasView;
    use crate::editor::{Editor, PointerState};
    use quarkstrom::winit_input_helper::WinitInputHelper;
    use tracing::info;

    pub struct Renderer {
        pub(super) editor: Editor,
        pub(super) arrows: ArrowField,
        pub(super) view: CanvasView,
        pub(super) pointer: PointerState,
        pub(super) labels: Vec<ScreenLabel>,
        pub(super) scale_factor: f32,
        pub(super) settings_window_open: bool,
        pub(super) pointer_over_gui: bool,
        pub window_width: u16,
        pub window_height: u16,
    }

    impl Renderer {
        pub(super) fn set_grid(&mut self, nx: usize, ny: usize) {
            self.editor.set_grid(nx, ny);
            let (nx, ny) = self.editor.grid();
            self.arrows.nx = nx;
            self.arrows.ny = ny;
        }
    }

    impl quarkstrom::Renderer for Renderer {
        fn new() -> Self {
            let config = startup_config();
            let editor = Editor::from_config(&config);
            let (nx, ny) = editor.grid();
            let canvas = editor.canvas();
            info!(
                width = canvas.width,
                height = canvas.height,
                nx,
                ny,
                charges = editor.scene().field.len(),
                "window ready"
            );

            Self {
                arrows: ArrowField::new(nx, ny, config.arrows),
                view: CanvasView::new(canvas, 800, 600),
                pointer: PointerState {
                    pos: canvas.center(),
                    snap: false,
                },
                editor,
                labels: Vec::new(),
                scale_factor: 1.0,
                settings_window_open: false,
                pointer_over_gui: false,
                window_width: 800,
                window_height: 600,
            }
        }

        fn input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
            if width == 0 || height == 0 {
                // Window is minimized; ignore input until restored
                return;
            }
            self.scale_factor = input.scale_factor().unwrap_or(1.0) as f32;
            self.handle_input(input, width, height);
        }

        fn render(&mut self, ctx: &mut quarkstrom::RenderContext) {
            if self.window_width == 0 || self.window_height == 0 {
                return;
            }
            let mut surface = QuarkSurface::new(ctx, self.view, self.scale_factor);
            draw::draw_frame(
                &mut surface,
                self.editor.scene(),
                &self.arrows,
                self.editor.canvas(),
                self.pointer,
            );
            self.labels = surface.into_labels();
        }

        fn gui(&mut self, ctx: &quarkstrom::egui::Context) {
            self.show_gui(ctx);
        }
    }
}
