//! The drawing surface the core renders into.
//!
//! Coordinates are canvas coordinates: origin at the top-left corner, y down.
//! Fill and stroke are pen state; `save_state`/`restore_state` push and pop it.
//! Use [`SavedState`] rather than calling the pair by hand so the restore
//! also happens on early returns.

use palette::Srgba;
use std::ops::{Deref, DerefMut};
use ultraviolet::Vec2;

pub type Rgba = Srgba<u8>;

pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

pub fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    Rgba::new(r, g, b, 255)
}

pub fn gray(level: u8) -> Rgba {
    Rgba::new(level, level, level, 255)
}

pub fn to_array(color: Rgba) -> [u8; 4] {
    [color.red, color.green, color.blue, color.alpha]
}

pub trait Surface {
    /// Fill the whole canvas and start a new frame.
    fn clear(&mut self, color: Rgba);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba, width: f32);
    fn save_state(&mut self);
    fn restore_state(&mut self);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Stroked with the current stroke colour and width.
    fn draw_line(&mut self, a: Vec2, b: Vec2);
    /// Filled with the current fill colour.
    fn draw_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2);
    /// `pos` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            fill: WHITE,
            stroke: BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Pen state plus the stack behind `save_state`/`restore_state`, shared by
/// the surface implementations.
#[derive(Clone, Debug, Default)]
pub struct PenStack {
    pub current: PenState,
    saved: Vec<PenState>,
}

impl PenStack {
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Restoring with nothing saved resets to the default pen.
    pub fn restore(&mut self) {
        self.current = self.saved.pop().unwrap_or_default();
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn reset(&mut self) {
        self.current = PenState::default();
        self.saved.clear();
    }
}

/// Saves the surface state on creation and restores it on drop.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}
