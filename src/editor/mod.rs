// Mouse-driven charge editor. Owns the simulation context: the committed
// charges plus the cursor charge that follows the pointer.

use crate::charge::Charge;
use crate::config::{AppConfig, Canvas, InitialCharge, DEFAULT_LAYOUT_OFFSET_CELLS};
use crate::field::{superpose_field, superpose_potential, Field};
use std::iter;
use tracing::{debug, info};
use ultraviolet::Vec2;


/// Everything the frame callbacks read and mutate.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Committed charges. Hit testing only ever looks here.
    pub field: Field,
    /// Live charge following the pointer. Contributes to the field but is
    /// never removed by a click.
    pub cursor: Charge,
}

impl Scene {
    pub fn new(cursor: Charge, committed: Vec<Charge>) -> Self {
        Self {
            field: Field::from_charges(committed),
            cursor,
        }
    }

    /// Committed charges followed by the cursor charge.
    pub fn charges(&self) -> impl Iterator<Item = &Charge> + '_ {
        self.field.charges().iter().chain(iter::once(&self.cursor))
    }

    pub fn value_at(&self, pos: Vec2) -> Vec2 {
        superpose_field(self.charges(), pos)
    }

    pub fn potential_at(&self, pos: Vec2) -> f32 {
        superpose_potential(self.charges(), pos)
    }
}

/// Pointer as seen by the editor for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    /// Snap modifier (Shift) held.
    pub snap: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    Removed { index: usize, charge: Charge },
    Committed { index: usize, charge: Charge },
}

/// Nearest of the `(nx + 1) x (ny + 1)` grid intersections to `pos`.
pub fn snap_to_grid(pos: Vec2, canvas: Canvas, nx: usize, ny: usize) -> Vec2 {
    let cells_x = (nx + 1) as f32;
    let cells_y = (ny + 1) as f32;
    let cell_w = canvas.width / cells_x;
    let cell_h = canvas.height / cells_y;
    Vec2::new(
        (pos.x / canvas.width * cells_x).round() * cell_w,
        (pos.y / canvas.height * cells_y).round() * cell_h,
    )
}

/// Notches in a frame's accumulated line delta (wheel-up positive). Any
/// non-zero movement counts as at least one notch.
pub fn wheel_steps(line_delta: f32) -> i32 {
    if !line_delta.is_finite() || line_delta == 0.0 {
        return 0;
    }
    let steps = line_delta.round() as i32;
    if steps == 0 {
        line_delta.signum() as i32
    } else {
        steps
    }
}

/// `+1` at the centre with a `-1` five grid cells to either side.
pub fn default_layout(canvas: Canvas, nx: usize) -> Vec<Charge> {
    let center = canvas.center();
    let offset = Vec2::new(
        canvas.width / (nx + 1) as f32 * DEFAULT_LAYOUT_OFFSET_CELLS,
        0.0,
    );
    vec![
        Charge::new(1.0, center),
        Charge::new(-1.0, center + offset),
        Charge::new(-1.0, center - offset),
    ]
}

pub struct Editor {
    scene: Scene,
    canvas: Canvas,
    nx: usize,
    ny: usize,
    initial: Vec<Charge>,
}

impl Editor {
    /// `initial` is the committed layout used at startup and by [`Editor::reset`].
    pub fn new(canvas: Canvas, nx: usize, ny: usize, initial: Vec<Charge>) -> Self {
        let cursor = Charge::new(0.0, canvas.center());
        Self {
            scene: Scene::new(cursor, initial.clone()),
            canvas,
            nx: nx.max(1),
            ny: ny.max(1),
            initial,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let initial = match &config.initial {
            Some(list) => list
                .iter()
                .map(|&InitialCharge { value, x, y }| Charge::new(value, Vec2::new(x, y)))
                .collect(),
            None => default_layout(config.canvas, config.grid.x_count),
        };
        info!(charges = initial.len(), "editor initialised");
        Self::new(
            config.canvas,
            config.grid.x_count,
            config.grid.y_count,
            initial,
        )
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn cursor(&self) -> &Charge {
        &self.scene.cursor
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn grid(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Counts of 0 are clamped to 1.
    pub fn set_grid(&mut self, nx: usize, ny: usize) {
        self.nx = nx.max(1);
        self.ny = ny.max(1);
    }

    /// Per-frame sync of the cursor charge with the pointer.
    pub fn frame(&mut self, pointer: PointerState) {
        self.scene.cursor.pos = if pointer.snap {
            snap_to_grid(pointer.pos, self.canvas, self.nx, self.ny)
        } else {
            pointer.pos
        };
    }

    /// Remove the first committed charge under `pos`; if none, commit a copy
    /// of the cursor charge. Never both.
    pub fn click(&mut self, pos: Vec2) -> ClickOutcome {
        if let Some(index) = self.scene.field.hit_test(pos) {
            let charge = self.scene.field.remove(index);
            debug!(index, value = charge.value, "removed charge");
            return ClickOutcome::Removed { index, charge };
        }

        let charge = self.scene.cursor;
        self.scene.field.push(charge);
        let index = self.scene.field.len() - 1;
        debug!(
            index,
            value = charge.value,
            x = charge.pos.x,
            y = charge.pos.y,
            "committed charge"
        );
        ClickOutcome::Committed { index, charge }
    }

    /// One wheel event, one notch: positive delta decrements, negative increments.
    pub fn wheel(&mut self, delta: f32) {
        if delta > 0.0 {
            self.wheel_by(-1);
        } else if delta < 0.0 {
            self.wheel_by(1);
        }
    }

    /// Adjust the cursor value by `steps` notches, positive meaning increase.
    pub fn wheel_by(&mut self, steps: i32) {
        if steps == 0 {
            return;
        }
        self.scene.cursor.value += steps as f32;
        debug!(steps, value = self.scene.cursor.value, "cursor charge adjusted");
    }

    pub fn clear(&mut self) {
        info!(removed = self.scene.field.len(), "cleared committed charges");
        self.scene.field.clear();
    }

    pub fn reset(&mut self) {
        self.scene.field = Field::from_charges(self.initial.clone());
        info!(charges = self.initial.len(), "reset to initial layout");
    }
}
