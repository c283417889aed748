// Defines the point charge (signed value + canvas position) and the pure
// presentation rules derived from its value: radius, colour and value label.

use crate::config::{
    BASE_RADIUS, COLOR_CHANNEL_BASE, COLOR_CHANNEL_PER_UNIT, MAX_RADIUS, RADIUS_PER_UNIT,
};
use crate::renderer::surface::{rgb, Rgba, WHITE};
use ultraviolet::Vec2;

/// A point charge. `Copy`, so committing the cursor charge yields an
/// independent value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    pub value: f32,
    pub pos: Vec2,
}

/// Text drawn inside a charge whose radius is at the cap.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeLabel {
    pub text: String,
    /// Left end of the baseline.
    pub pos: Vec2,
    pub size: f32,
}

impl Charge {
    pub fn new(value: f32, pos: Vec2) -> Self {
        Self { value, pos }
    }

    pub fn radius(&self) -> f32 {
        charge_radius(self.value)
    }

    pub fn color(&self) -> Rgba {
        charge_color(self.value)
    }

    pub fn is_saturated(&self) -> bool {
        self.radius() >= MAX_RADIUS
    }

    /// Hit test against the bounding box of the drawn circle.
    pub fn contains(&self, point: Vec2) -> bool {
        let r = self.radius();
        point.x >= self.pos.x - r
            && point.x <= self.pos.x + r
            && point.y >= self.pos.y - r
            && point.y <= self.pos.y + r
    }

    /// The value label, present only once the radius has saturated.
    ///
    /// Shifted left by one character width per character of the number, plus
    /// one for a leading `+`, and down by `MAX_RADIUS / 8`.
    pub fn label(&self) -> Option<ChargeLabel> {
        if !self.is_saturated() {
            return None;
        }

        let size = MAX_RADIUS / 2.0;
        let char_size = size / 4.0;

        let value = self.value.round() as i64;
        let mut text = value.to_string();
        let mut offset_chars = text.chars().count() as f32;
        if value > 0 {
            text.insert(0, '+');
            offset_chars += 1.0;
        }

        let pos = self.pos + Vec2::new(-offset_chars * char_size, MAX_RADIUS / 8.0);
        Some(ChargeLabel { text, pos, size })
    }
}

/// `BASE_RADIUS` for a neutral charge, otherwise `BASE_RADIUS + 2|v|` capped
/// at `MAX_RADIUS`.
pub fn charge_radius(value: f32) -> f32 {
    if value == 0.0 {
        return BASE_RADIUS;
    }
    (BASE_RADIUS + RADIUS_PER_UNIT * value.abs()).min(MAX_RADIUS)
}

/// Red for positive, blue for negative, white for neutral. The channel grows
/// by 30 per unit from 150 and saturates at 255.
pub fn charge_color(value: f32) -> Rgba {
    let channel = (COLOR_CHANNEL_BASE + COLOR_CHANNEL_PER_UNIT * value.abs())
        .round()
        .clamp(0.0, 255.0) as u8;

    if value > 0.0 {
        rgb(channel, 0, 0)
    } else if value < 0.0 {
        rgb(0, 0, channel)
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_radius_is_base() {
        assert_eq!(charge_radius(0.0), BASE_RADIUS);
    }

    #[test]
    fn radius_grows_with_magnitude_then_clamps() {
        let mut previous = charge_radius(0.0);
        for step in 1..=40 {
            let v = step as f32 * 0.25;
            let r = charge_radius(v);
            assert!(r >= previous, "radius shrank at |v| = {v}");
            assert_eq!(r, charge_radius(-v), "radius depends on sign at {v}");
            previous = r;
        }
        for v in [5.0, 6.0, 12.0, -5.0, -100.0] {
            assert_eq!(charge_radius(v), MAX_RADIUS);
        }
        assert_eq!(charge_radius(1.0), 12.0);
        assert_eq!(charge_radius(-4.0), 18.0);
    }

    #[test]
    fn color_mapping() {
        assert_eq!(charge_color(0.0), WHITE);
        assert_eq!(charge_color(1.0), rgb(180, 0, 0));
        assert_eq!(charge_color(-1.0), rgb(0, 0, 180));
        assert_eq!(charge_color(3.0), rgb(240, 0, 0));
    }

    #[test]
    fn color_channel_saturates() {
        assert_eq!(charge_color(4.0), rgb(255, 0, 0));
        assert_eq!(charge_color(-50.0), rgb(0, 0, 255));
    }

    #[test]
    fn committed_copy_is_independent() {
        let mut cursor = Charge::new(2.0, Vec2::new(10.0, 10.0));
        let committed = cursor;
        cursor.value = -3.0;
        cursor.pos = Vec2::new(50.0, 50.0);
        assert_eq!(committed.value, 2.0);
        assert_eq!(committed.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn bounding_box_uses_full_radius() {
        let charge = Charge::new(0.0, Vec2::new(100.0, 100.0));
        assert!(charge.contains(Vec2::new(100.0, 100.0)));
        assert!(charge.contains(Vec2::new(110.0, 90.0)));
        assert!(!charge.contains(Vec2::new(110.5, 100.0)));
        assert!(!charge.contains(Vec2::new(100.0, 89.0)));
    }

    #[test]
    fn label_only_when_saturated() {
        assert!(Charge::new(4.0, Vec2::zero()).label().is_none());
        assert!(Charge::new(-4.0, Vec2::zero()).label().is_none());
        assert!(Charge::new(5.0, Vec2::zero()).label().is_some());
        assert!(Charge::new(-7.0, Vec2::zero()).label().is_some());
    }

    #[test]
    fn positive_label_gets_plus_sign_and_extra_offset() {
        let center = Vec2::new(200.0, 300.0);
        let label = Charge::new(5.0, center).label().unwrap();
        assert_eq!(label.text, "+5");
        assert_eq!(label.size, 10.0);
        // one digit + one for the sign, 2.5 per character
        assert_eq!(label.pos, Vec2::new(195.0, 302.5));

        let label = Charge::new(12.0, center).label().unwrap();
        assert_eq!(label.text, "+12");
        assert_eq!(label.pos.x, 192.5);
    }

    #[test]
    fn fractional_value_is_labelled_as_integer() {
        let label = Charge::new(6.5, Vec2::new(0.0, 0.0)).label().unwrap();
        assert_eq!(label.text, "+7");
        assert_eq!(label.pos.x, -5.0);

        let label = Charge::new(-5.2, Vec2::new(0.0, 0.0)).label().unwrap();
        assert_eq!(label.text, "-5");
    }

    #[test]
    fn negative_label_counts_minus_sign() {
        let label = Charge::new(-6.0, Vec2::new(0.0, 0.0)).label().unwrap();
        assert_eq!(label.text, "-6");
        assert_eq!(label.pos, Vec2::new(-5.0, 2.5));
    }
}
