//! 3D vector definition

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};
use paste::paste;

#[repr(C)]
#[derive(PartialEq, Clone, Copy, Debug, Default, Pod, Zeroable)]
/// Three-component `f32` vector.
///
/// When handed to a 4x4 matrix it behaves as a direction: its homogeneous `w` is always 0.
pub struct Vector3 {
    /// Coordinates in x, y, z order.
    pub inner: [f32; 3],
}

impl Vector3 {
    /// Unit vector along +X.
    pub const X: Self = Self::new(1., 0., 0.);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0., 1., 0.);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0., 0., 1.);

    /// Create a new 3D vector from values.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { inner: [x, y, z] }
    }

    /// Create a vector from up to three values. Missing trailing components are 0 and extra
    /// values are ignored.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut res = Self::default();
        for (dst, src) in res.inner.iter_mut().zip(values) {
            *dst = *src;
        }

        res
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn x(&self) -> f32 {
        self.inner[0]
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn y(&self) -> f32 {
        self.inner[1]
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn z(&self) -> f32 {
        self.inner[2]
    }

    /// Homogeneous `[x, y, z, 0]` representation, ready to be multiplied by a 4x4 matrix.
    pub fn homogeneous(&self) -> [f32; 4] {
        let [x, y, z] = self.inner;
        [x, y, z, 0.]
    }

    /// Perform dot product with `other`.
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .fold(0., |acc, (l, r)| acc + l * r)
    }

    /// Perform cross product with `other`. Order matters: `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.inner;
        let [bx, by, bz] = other.inner;

        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    #[inline]
    /// Get squared length of the vector, slightly faster than [Vector3::length].
    pub fn len_sq(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    /// Get the Euclidean length of the vector.
    pub fn length(&self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Normalize **in place** to unit length.
    ///
    /// A zero-length vector is left untouched instead of turning into NaNs.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0. {
            *self /= len;
        }
    }

    /// Get a normalized copy, the receiver is not modified. Same zero-length rule as
    /// [normalize](Self::normalize).
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Multiply every component by `s` **in place**.
    pub fn scale(&mut self, s: f32) {
        *self *= s;
    }

    /// Get a copy scaled by `s`.
    pub fn scaled(self, s: f32) -> Self {
        self * s
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(inner: [f32; 3]) -> Self {
        Self { inner }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        value.inner
    }
}

impl From<&[f32]> for Vector3 {
    fn from(value: &[f32]) -> Self {
        Self::from_slice(value)
    }
}

macro_rules! impl_vec_vec_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl [<$trait Assign>] for Vector3 {
                fn [<$function _assign>](&mut self, rhs: Self) {
                    for (l, r) in self.inner.iter_mut().zip(rhs.inner) {
                        *l $($op)+ r;
                    }
                }
            }

            impl $trait for Vector3 {
                type Output = Self;

                fn $function(mut self, rhs: Self) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    };
}

impl_vec_vec_op!(Add, add, +=);
impl_vec_vec_op!(Sub, sub, -=);

macro_rules! impl_vec_scalar_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl [<$trait Assign>]<f32> for Vector3 {
                fn [<$function _assign>](&mut self, rhs: f32) {
                    for v in self.inner.iter_mut() {
                        *v $($op)+ rhs;
                    }
                }
            }

            impl $trait<f32> for Vector3 {
                type Output = Self;

                fn $function(mut self, rhs: f32) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    };
}

impl_vec_scalar_op!(Mul, mul, *=);
impl_vec_scalar_op!(Div, div, /=);

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1.
    }
}
