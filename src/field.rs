// Electrostatic field and potential of a set of point charges by superposition.
// Unit Coulomb constant: E(p) = sum q (p - r) / |p - r|^3, V(p) = sum q / |p - r|.

use crate::charge::Charge;
use crate::config::SINGULARITY_EPSILON;
use ultraviolet::Vec2;

/// Field of a single charge at `pos`. Zero when `pos` is (numerically) on the charge.
#[inline]
pub fn field_contribution(charge: &Charge, pos: Vec2) -> Vec2 {
    let r = pos - charge.pos;
    let dist2 = r.mag_sq();
    if dist2 <= SINGULARITY_EPSILON {
        return Vec2::zero();
    }
    r * (charge.value / (dist2 * dist2.sqrt()))
}

/// Potential of a single charge at `pos`, excluded under the same rule as the field.
#[inline]
pub fn potential_contribution(charge: &Charge, pos: Vec2) -> f32 {
    let dist2 = (pos - charge.pos).mag_sq();
    if dist2 <= SINGULARITY_EPSILON {
        return 0.0;
    }
    charge.value / dist2.sqrt()
}

pub fn superpose_field<'a, I>(charges: I, pos: Vec2) -> Vec2
where
    I: IntoIterator<Item = &'a Charge>,
{
    charges
        .into_iter()
        .fold(Vec2::zero(), |acc, c| acc + field_contribution(c, pos))
}

pub fn superpose_potential<'a, I>(charges: I, pos: Vec2) -> f32
where
    I: IntoIterator<Item = &'a Charge>,
{
    charges
        .into_iter()
        .map(|c| potential_contribution(c, pos))
        .sum()
}

/// Ordered collection of committed charges. Order is only relevant to hit
/// testing, where the earliest charge wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    charges: Vec<Charge>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_charges(charges: Vec<Charge>) -> Self {
        Self { charges }
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn push(&mut self, charge: Charge) {
        self.charges.push(charge);
    }

    pub fn remove(&mut self, index: usize) -> Charge {
        self.charges.remove(index)
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    /// Index of the first charge whose bounding box contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.charges.iter().position(|c| c.contains(point))
    }

    pub fn value_at(&self, pos: Vec2) -> Vec2 {
        superpose_field(&self.charges, pos)
    }

    pub fn potential_at(&self, pos: Vec2) -> f32 {
        superpose_potential(&self.charges, pos)
    }
}
