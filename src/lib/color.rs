//! Linear RGB color used by the shading formulas.

use std::{
    iter::Sum,
    ops::{Mul, MulAssign},
};

use ::derive_more::{Add, AddAssign};

#[derive(Clone, Copy, Default, Debug, Add, AddAssign, PartialEq)]
/// RGB triple, nominally in `[0, 1]` but left unclamped until [clamp](Color::clamp).
pub struct Color {
    #[allow(missing_docs)]
    pub r: f32,
    #[allow(missing_docs)]
    pub g: f32,
    #[allow(missing_docs)]
    pub b: f32,
}

impl Color {
    #[allow(missing_docs)]
    pub const BLACK: Self = Self::new(0., 0., 0.);
    #[allow(missing_docs)]
    pub const WHITE: Self = Self::new(1., 1., 1.);

    /// Create a color from its components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Gray level `v` on every channel.
    pub const fn splat(v: f32) -> Self {
        Color { r: v, g: v, b: v }
    }

    /// Clamp every channel to `[0, 1]`.
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0., 1.),
            g: self.g.clamp(0., 1.),
            b: self.b.clamp(0., 1.),
        }
    }

    /// RGBA with an opaque alpha, the layout of a `vec4` color uniform.
    pub fn as_rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.]
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, rhs: f32) {
        self.r *= rhs;
        self.g *= rhs;
        self.b *= rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Channel-wise product, e.g. light intensity times material reflectance.
impl Mul for Color {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.r *= rhs.r;
        self.g *= rhs.g;
        self.b *= rhs.b;

        self
    }
}

impl Sum<Color> for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Self {
        iter.fold(Color::BLACK, |acc, cur| acc + cur)
    }
}
