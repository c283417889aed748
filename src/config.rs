// Centralized configuration for drawing and field parameters

use serde::{Deserialize, Serialize};

// ====================
// Charge presentation
// ====================
/// Radius of a neutral charge, and the starting point of the radius ramp.
pub const BASE_RADIUS: f32 = 10.0;
/// Radius cap. Charges drawn at this radius also carry a value label.
pub const MAX_RADIUS: f32 = 20.0;
/// Radius growth per unit of |value|.
pub const RADIUS_PER_UNIT: f32 = 2.0;
/// Colour channel of a charge with |value| -> 0.
pub const COLOR_CHANNEL_BASE: f32 = 150.0;
/// Colour channel growth per unit of |value|.
pub const COLOR_CHANNEL_PER_UNIT: f32 = 30.0;

// ====================
// Field evaluation
// ====================
/// Squared distances at or below this contribute nothing to the field or potential.
pub const SINGULARITY_EPSILON: f32 = 1e-5;
/// Field magnitudes at or below this are not drawn.
pub const ARROW_MIN_MAGNITUDE: f32 = 1e-12;

// ====================
// Canvas, grid and arrows
// ====================
pub const DEFAULT_CANVAS_WIDTH: f32 = 1000.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 1000.0;
pub const DEFAULT_GRID_COUNT: usize = 25;
pub const ARROW_LENGTH: f32 = 20.0;
pub const ARROW_HEAD_SIZE: f32 = 7.0;
pub const ARROW_STROKE_WIDTH: f32 = 3.0;
/// No physical meaning; picked so that typical layouts use the whole grey range.
pub const ARROW_INTENSITY_GAIN: f32 = 1000.0;
pub const ARROW_INTENSITY_EXPONENT: f32 = 2.0 / 3.0;

/// Distance, in grid cells, of the two negative charges of the startup layout.
pub const DEFAULT_LAYOUT_OFFSET_CELLS: f32 = 5.0;

// ====================
// Help overlay
// ====================
pub const HELP_TEXT_SIZE: f32 = 15.0;
pub const HELP_LINE_HEIGHT: f32 = 15.0;
/// Pointer inside `[0, w] x [0, h]` dims the overlay.
pub const HELP_BOX: (f32, f32) = (240.0, 60.0);
pub const HELP_DIM_ALPHA: u8 = 50;
pub const HELP_LINES: [&str; 3] = [
    "Click: add/remove charge",
    "Mouse Wheel: select charge value",
    "Shift: Snap cursor on grid",
];

/// Logical canvas size. Canvas coordinates have their origin at the top-left
/// corner with y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> ultraviolet::Vec2 {
        ultraviolet::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub x_count: usize,
    pub y_count: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_count: DEFAULT_GRID_COUNT,
            y_count: DEFAULT_GRID_COUNT,
        }
    }
}

/// How arrow brightness follows the raw field magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// `255 * |E|^exponent * gain`, clamped.
    Compressive,
    /// Every arrow at full brightness.
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub length: f32,
    pub head_size: f32,
    pub stroke_width: f32,
    pub shading: Shading,
    pub gain: f32,
    pub exponent: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            length: ARROW_LENGTH,
            head_size: ARROW_HEAD_SIZE,
            stroke_width: ARROW_STROKE_WIDTH,
            shading: Shading::Compressive,
            gain: ARROW_INTENSITY_GAIN,
            exponent: ARROW_INTENSITY_EXPONENT,
        }
    }
}

/// A committed charge placed at startup, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialCharge {
    pub value: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: Canvas,
    pub grid: GridConfig,
    pub arrows: ArrowStyle,
    /// Startup layout. `None` places the default three-charge layout.
    pub initial: Option<Vec<InitialCharge>>,
}
