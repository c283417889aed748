use crate::config::Shading;
use quarkstrom::egui::{self, Align2, Color32, FontId, Pos2};

impl super::Renderer {
    pub fn show_gui(&mut self, ctx: &egui::Context) {
        self.paint_labels(ctx);

        let mut settings_open = self.settings_window_open;
        egui::Window::new("Charge Field")
            .default_width(280.0)
            .resizable(false)
            .open(&mut settings_open)
            .show(ctx, |ui| {
                self.show_readout(ui);
                ui.separator();
                self.show_grid_controls(ui);
                ui.separator();
                self.show_shading_controls(ui);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.editor.clear();
                    }
                    if ui.button("Reset").clicked() {
                        self.editor.reset();
                    }
                });
            });
        self.settings_window_open = settings_open;

        self.pointer_over_gui = ctx.is_pointer_over_area();
    }

    fn show_readout(&self, ui: &mut egui::Ui) {
        let cursor = self.editor.cursor();
        let scene = self.editor.scene();
        ui.label(format!("Cursor charge: {:+}", cursor.value));
        ui.label(format!("Committed charges: {}", scene.field.len()));
        ui.label(format!(
            "Cursor at ({:.0}, {:.0})",
            cursor.pos.x, cursor.pos.y
        ));

        // Probe the other charges at the cursor; its own contribution is
        // excluded by the coincidence guard.
        ui.label(format!("|E|: {:.3e}", scene.value_at(cursor.pos).mag()));
        ui.label(format!("V: {:.3e}", scene.potential_at(cursor.pos)));
    }

    fn show_grid_controls(&mut self, ui: &mut egui::Ui) {
        let (mut nx, mut ny) = self.editor.grid();
        ui.add(egui::Slider::new(&mut nx, 1..=100).text("Columns"));
        ui.add(egui::Slider::new(&mut ny, 1..=100).text("Rows"));
        if (nx, ny) != self.editor.grid() {
            self.set_grid(nx, ny);
        }
    }

    fn show_shading_controls(&mut self, ui: &mut egui::Ui) {
        let style = &mut self.arrows.style;
        ui.horizontal(|ui| {
            ui.label("Shading:");
            ui.radio_value(&mut style.shading, Shading::Compressive, "Compressive");
            ui.radio_value(&mut style.shading, Shading::Flat, "Flat");
        });
        ui.add_enabled(
            style.shading == Shading::Compressive,
            egui::Slider::new(&mut style.gain, 1.0..=1.0e5)
                .logarithmic(true)
                .text("Gain"),
        );
    }

    /// Text queued by the last `render`, drawn under every egui window.
    fn paint_labels(&self, ctx: &egui::Context) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("charge_field_labels"),
        ));
        for label in &self.labels {
            painter.text(
                Pos2::new(label.pos.x, label.pos.y),
                Align2::LEFT_BOTTOM,
                &label.text,
                FontId::proportional(label.size),
                Color32::from_rgba_unmultiplied(
                    label.color.red,
                    label.color.green,
                    label.color.blue,
                    label.color.alpha,
                ),
            );
        }
    }
}
