use crate::config::{ArrowStyle, Canvas, Shading, ARROW_MIN_MAGNITUDE};
use crate::renderer::surface::{gray, SavedState, Surface};
use rayon::prelude::*;
use ultraviolet::Vec2;

/// Field value at one interior grid point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowSample {
    pub pos: Vec2,
    pub value: Vec2,
}

/// Fixed-length arrow centred on its sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub tail: Vec2,
    pub tip: Vec2,
    /// Two base corners, then the tip.
    pub head: [Vec2; 3],
    pub intensity: u8,
}

impl Arrow {
    /// `None` when the field is too weak (or not finite) to have a direction.
    pub fn from_sample(sample: &ArrowSample, style: &ArrowStyle) -> Option<Arrow> {
        let magnitude = sample.value.mag();
        if !magnitude.is_finite() || magnitude <= ARROW_MIN_MAGNITUDE {
            return None;
        }

        let dir = sample.value / magnitude;
        let span = dir * style.length;
        let tail = sample.pos - span * 0.5;
        let tip = tail + span;

        let perp = Vec2::new(-dir.y, dir.x) * (style.head_size * 0.5);
        let base = tip - dir * style.head_size;

        Some(Arrow {
            tail,
            tip,
            head: [base + perp, base - perp, tip],
            intensity: arrow_intensity(magnitude, style),
        })
    }

    pub fn draw(&self, surface: &mut dyn Surface, stroke_width: f32) {
        let mut s = SavedState::new(surface);
        let color = gray(self.intensity);
        s.set_stroke(color, stroke_width);
        s.set_fill(color);
        s.draw_line(self.tail, self.tip);
        s.draw_triangle(self.head[0], self.head[1], self.head[2]);
    }
}

/// Grey level for a raw field magnitude. The compressive curve keeps the
/// inverse-square falloff visible away from the sources instead of
/// saturating next to them and vanishing elsewhere.
pub fn arrow_intensity(magnitude: f32, style: &ArrowStyle) -> u8 {
    match style.shading {
        Shading::Flat => 255,
        Shading::Compressive => {
            let level = 255.0 * magnitude.powf(style.exponent) * style.gain;
            if level.is_nan() {
                return 0;
            }
            level.clamp(0.0, 255.0) as u8
        }
    }
}

/// Regular `nx x ny` lattice of interior sample points. Grid lines sit at
/// `size / (n + 1) * k` for `k` in `1..=n`, so none lie on the canvas border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowField {
    pub nx: usize,
    pub ny: usize,
    pub style: ArrowStyle,
}

impl ArrowField {
    pub fn new(nx: usize, ny: usize, style: ArrowStyle) -> Self {
        Self { nx, ny, style }
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid point `i` in row-major order (rows top to bottom).
    pub fn grid_point(&self, canvas: Canvas, i: usize) -> Vec2 {
        let k = i % self.nx + 1;
        let j = i / self.nx + 1;
        Vec2::new(
            canvas.width / (self.nx + 1) as f32 * k as f32,
            canvas.height / (self.ny + 1) as f32 * j as f32,
        )
    }

    pub fn grid_points(&self, canvas: Canvas) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.len()).map(move |i| self.grid_point(canvas, i))
    }

    pub fn sample<F>(&self, canvas: Canvas, field: F) -> Vec<ArrowSample>
    where
        F: Fn(Vec2) -> Vec2 + Sync,
    {
        (0..self.len())
            .into_par_iter()
            .map(|i| {
                let pos = self.grid_point(canvas, i);
                ArrowSample {
                    pos,
                    value: field(pos),
                }
            })
            .collect()
    }

    pub fn arrows<F>(&self, canvas: Canvas, field: F) -> Vec<Arrow>
    where
        F: Fn(Vec2) -> Vec2 + Sync,
    {
        self.sample(canvas, field)
            .iter()
            .filter_map(|s| Arrow::from_sample(s, &self.style))
            .collect()
    }

    pub fn draw<F>(&self, surface: &mut dyn Surface, canvas: Canvas, field: F)
    where
        F: Fn(Vec2) -> Vec2 + Sync,
    {
        for arrow in self.arrows(canvas, field) {
            arrow.draw(surface, self.style.stroke_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::recording::RecordingSurface;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).mag() < 1e-4
    }

    #[test]
    fn grid_excludes_canvas_border() {
        let arrows = ArrowField::new(3, 1, ArrowStyle::default());
        let points: Vec<Vec2> = arrows.grid_points(Canvas::new(400.0, 200.0)).collect();
        assert_eq!(
            points,
            vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(200.0, 100.0),
                Vec2::new(300.0, 100.0),
            ]
        );
    }

    #[test]
    fn grid_is_row_major() {
        let arrows = ArrowField::new(2, 3, ArrowStyle::default());
        let points: Vec<Vec2> = arrows.grid_points(Canvas::new(300.0, 400.0)).collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Vec2::new(100.0, 100.0));
        assert_eq!(points[1], Vec2::new(200.0, 100.0));
        assert_eq!(points[2], Vec2::new(100.0, 200.0));
        assert_eq!(points[5], Vec2::new(200.0, 300.0));
    }

    #[test]
    fn sample_keeps_grid_order() {
        let arrows = ArrowField::new(4, 4, ArrowStyle::default());
        let canvas = Canvas::new(500.0, 500.0);
        let samples = arrows.sample(canvas, |p| p * 2.0);
        for (sample, point) in samples.iter().zip(arrows.grid_points(canvas)) {
            assert_eq!(sample.pos, point);
            assert_eq!(sample.value, point * 2.0);
        }
    }

    #[test]
    fn arrow_is_centred_and_fixed_length() {
        let style = ArrowStyle::default();
        let sample = ArrowSample {
            pos: Vec2::new(50.0, 50.0),
            value: Vec2::new(0.0, 1e-3),
        };
        let arrow = Arrow::from_sample(&sample, &style).unwrap();
        assert!(close(arrow.tail, Vec2::new(50.0, 40.0)));
        assert!(close(arrow.tip, Vec2::new(50.0, 60.0)));
        assert!(close((arrow.tail + arrow.tip) * 0.5, sample.pos));
    }

    #[test]
    fn arrow_length_ignores_magnitude() {
        let style = ArrowStyle::default();
        for m in [1e-8f32, 1e-3, 10.0, 1e6] {
            let sample = ArrowSample {
                pos: Vec2::zero(),
                value: Vec2::new(m, -m),
            };
            let arrow = Arrow::from_sample(&sample, &style).unwrap();
            assert!(((arrow.tip - arrow.tail).mag() - style.length).abs() < 1e-3);
        }
    }

    #[test]
    fn head_is_at_tip_and_symmetric() {
        let style = ArrowStyle::default();
        let sample = ArrowSample {
            pos: Vec2::zero(),
            value: Vec2::new(3.0, 0.0),
        };
        let arrow = Arrow::from_sample(&sample, &style).unwrap();
        assert_eq!(arrow.head[2], arrow.tip);
        assert!(close(arrow.head[0], Vec2::new(3.0, 3.5)));
        assert!(close(arrow.head[1], Vec2::new(3.0, -3.5)));
    }

    #[test]
    fn negligible_or_invalid_field_draws_nothing() {
        let style = ArrowStyle::default();
        for value in [
            Vec2::zero(),
            Vec2::new(f32::NAN, 0.0),
            Vec2::new(f32::INFINITY, 1.0),
        ] {
            let sample = ArrowSample {
                pos: Vec2::zero(),
                value,
            };
            assert!(Arrow::from_sample(&sample, &style).is_none());
        }
    }

    #[test]
    fn compressive_intensity_grows_and_clamps() {
        let style = ArrowStyle::default();
        // 255 * (1e-6)^(2/3) * 1000 = 25.5
        assert_eq!(arrow_intensity(1e-6, &style), 25);
        assert!(arrow_intensity(1e-5, &style) > arrow_intensity(1e-6, &style));
        assert_eq!(arrow_intensity(1.0, &style), 255);
        assert_eq!(arrow_intensity(0.0, &style), 0);
    }

    #[test]
    fn flat_intensity_is_full_brightness() {
        let style = ArrowStyle {
            shading: Shading::Flat,
            ..ArrowStyle::default()
        };
        assert_eq!(arrow_intensity(1e-9, &style), 255);
    }

    #[test]
    fn draw_emits_line_and_head_per_arrow_with_balanced_state() {
        let arrows = ArrowField::new(5, 5, ArrowStyle::default());
        let mut surface = RecordingSurface::new();
        arrows.draw(&mut surface, Canvas::new(600.0, 600.0), |_| {
            Vec2::new(1.0, 0.0)
        });

        let lines = surface.lines();
        let triangles = surface.triangles();
        assert_eq!(lines.len(), 25);
        assert_eq!(triangles.len(), 25);
        assert!(surface.is_balanced());
        let (_, _, color, width) = lines[0];
        assert_eq!(color, gray(255));
        assert_eq!(width, 3.0);
    }

    #[test]
    fn arrows_skip_points_without_field() {
        let arrows = ArrowField::new(2, 1, ArrowStyle::default());
        let drawn = arrows.arrows(Canvas::new(300.0, 300.0), |p| {
            if p.x < 150.0 {
                Vec2::zero()
            } else {
                Vec2::unit_y()
            }
        });
        assert_eq!(drawn.len(), 1);
        assert!(close((drawn[0].tail + drawn[0].tip) * 0.5, Vec2::new(200.0, 150.0)));
    }
}
