//! Column-major 4x4 matrix used to build model, view and projection transforms.
//!
//! Every transform-producing method returns a new [Matrix4]: neither the receiver nor the
//! arguments are ever modified.

use std::{fmt, ops::Mul};

use bytemuck::{Pod, Zeroable};

use crate::{
    error::{Error, Result},
    vector::Vector3,
};

/// Below this length the cross product of two unit vectors is treated as zero.
const PARALLEL_EPSILON: f32 = 1e-6;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
/// 4x4 `f32` matrix stored in column-major order: row `r`, column `c` lives at `r + c * 4`.
pub struct Matrix4 {
    inner: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self {
        inner: [
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ],
    };

    #[inline]
    /// Get the identity matrix.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build a matrix from up to 16 values given in **row-major** order.
    ///
    /// Values are re-laid out to column-major storage on the way in. Entries that are not
    /// provided keep the identity's value and anything past the 16th value is ignored.
    pub fn from_row_major(values: &[f32]) -> Self {
        let mut res = Self::IDENTITY;
        for (i, value) in values.iter().take(16).enumerate() {
            res.inner[i / 4 + (i % 4) * 4] = *value;
        }

        res
    }

    /// Build a matrix from a buffer that is already column-major.
    pub const fn from_column_major(inner: [f32; 16]) -> Self {
        Self { inner }
    }

    /// Column-major data, element `i` being row `i % 4` of column `i / 4`. This is the layout
    /// expected by 4x4 uniform uploads.
    pub fn data(&self) -> &[f32; 16] {
        &self.inner
    }

    /// Copy of the column-major data.
    pub fn to_array(self) -> [f32; 16] {
        self.inner
    }

    /// Raw bytes of the column-major data.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    /// Get the value at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> f32 {
        self.inner[r + c * 4]
    }

    #[inline]
    /// Set the value at row `r`, column `c`.
    pub fn set(&mut self, r: usize, c: usize, value: f32) {
        self.inner[r + c * 4] = value;
    }

    /// Matrix product `self * other`.
    pub fn mult(&self, other: &Self) -> Self {
        let mut res = Self::from_column_major([0.; 16]);

        for r in 0..4 {
            for c in 0..4 {
                res.set(r, c, (0..4).map(|k| self.get(r, k) * other.get(k, c)).sum());
            }
        }

        res
    }

    /// Apply the upper-left 3x3 block to `v`, ignoring translation. Meant for directions.
    pub fn multiply_point(&self, v: &Vector3) -> Vector3 {
        let mut res = Vector3::default();
        for r in 0..3 {
            res[r] = (0..3).map(|c| self.get(r, c) * v[c]).sum();
        }

        res
    }

    /// Full 4x4 product with a homogeneous column vector.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut res = [0.; 4];
        for (r, out) in res.iter_mut().enumerate() {
            *out = (0..4).map(|c| self.get(r, c) * v[c]).sum();
        }

        res
    }

    /// Transform a position (`w = 1`), dividing by the resulting `w` when it is not zero.
    pub fn transform_point(&self, p: &Vector3) -> Vector3 {
        let [x, y, z, w] = self.transform([p.x(), p.y(), p.z(), 1.]);
        if w != 0. && w != 1. {
            Vector3::new(x / w, y / w, z / w)
        } else {
            Vector3::new(x, y, z)
        }
    }

    /// Post-multiply by a translation of (`x`, `y`, `z`).
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        let mut t = Self::IDENTITY;
        t.inner[12] = x;
        t.inner[13] = y;
        t.inner[14] = z;

        self.mult(&t)
    }

    fn translate_to(&self, pivot: &Vector3) -> Self {
        self.translate(pivot.x(), pivot.y(), pivot.z())
    }

    fn translate_from(&self, pivot: &Vector3) -> Self {
        self.translate(-pivot.x(), -pivot.y(), -pivot.z())
    }

    /// Scale relative to the origin.
    pub fn scale_by(&self, sx: f32, sy: f32, sz: f32) -> Self {
        self.scale_by_about(sx, sy, sz, &Vector3::default())
    }

    /// Scale relative to `pivot`: translate the pivot to the origin, scale, translate back.
    pub fn scale_by_about(&self, sx: f32, sy: f32, sz: f32, pivot: &Vector3) -> Self {
        let mut s = Self::IDENTITY;
        s.inner[0] = sx;
        s.inner[5] = sy;
        s.inner[10] = sz;

        self.translate_to(pivot).mult(&s).translate_from(pivot)
    }

    /// Rotate around the origin, angles in degrees. See [rotate_about](Self::rotate_about).
    pub fn rotate(&self, theta_x: f32, theta_y: f32, theta_z: f32) -> Self {
        self.rotate_about(theta_x, theta_y, theta_z, &Vector3::default())
    }

    /// Rotate around `pivot`, angles in degrees.
    ///
    /// The result is always `self * T(pivot) * Rx * Ry * Rz * T(-pivot)`; rotations do not
    /// commute so this order is part of the contract.
    pub fn rotate_about(&self, theta_x: f32, theta_y: f32, theta_z: f32, pivot: &Vector3) -> Self {
        let (sinx, cosx) = theta_x.to_radians().sin_cos();
        let mut rx = Self::IDENTITY;
        rx.inner[5] = cosx;
        rx.inner[9] = -sinx;
        rx.inner[6] = sinx;
        rx.inner[10] = cosx;

        let (siny, cosy) = theta_y.to_radians().sin_cos();
        let mut ry = Self::IDENTITY;
        ry.inner[10] = cosy;
        ry.inner[2] = -siny;
        ry.inner[8] = siny;
        ry.inner[0] = cosy;

        let (sinz, cosz) = theta_z.to_radians().sin_cos();
        let mut rz = Self::IDENTITY;
        rz.inner[0] = cosz;
        rz.inner[4] = -sinz;
        rz.inner[1] = sinz;
        rz.inner[5] = cosz;

        self.translate_to(pivot)
            .mult(&rx)
            .mult(&ry)
            .mult(&rz)
            .translate_from(pivot)
    }

    /// Rotate by `theta` degrees around the X axis.
    pub fn rotate_x(&self, theta: f32) -> Self {
        self.rotate(theta, 0., 0.)
    }

    /// Rotate by `theta` degrees around the Y axis.
    pub fn rotate_y(&self, theta: f32) -> Self {
        self.rotate(0., theta, 0.)
    }

    /// Rotate by `theta` degrees around the Z axis.
    pub fn rotate_z(&self, theta: f32) -> Self {
        self.rotate(0., 0., theta)
    }

    /// Rotate by `theta` degrees around the X axis through `pivot`.
    pub fn rotate_x_about(&self, theta: f32, pivot: &Vector3) -> Self {
        self.rotate_about(theta, 0., 0., pivot)
    }

    /// Rotate by `theta` degrees around the Y axis through `pivot`.
    pub fn rotate_y_about(&self, theta: f32, pivot: &Vector3) -> Self {
        self.rotate_about(0., theta, 0., pivot)
    }

    /// Rotate by `theta` degrees around the Z axis through `pivot`.
    pub fn rotate_z_about(&self, theta: f32, pivot: &Vector3) -> Self {
        self.rotate_about(0., 0., theta, pivot)
    }

    /// Smallest rotation taking the direction of `start` onto the direction of `end`
    /// (Rodrigues' formula). Neither input is modified.
    ///
    /// Degenerate inputs still produce a rotation:
    /// - same direction, or a zero-length input: identity.
    /// - opposite directions: half-turn around an axis perpendicular to `start`.
    pub fn rotate_to_vector(start: &Vector3, end: &Vector3) -> Self {
        let n_start = start.normalized();
        let n_end = end.normalized();

        if n_start.len_sq() == 0. || n_end.len_sq() == 0. {
            log::debug!("rotate_to_vector: zero-length input, using identity");
            return Self::IDENTITY;
        }

        // Rounding can push the dot product of unit vectors slightly past 1.
        let c = n_start.dot(&n_end).clamp(-1., 1.);
        let mut axis = n_start.cross(&n_end);

        if axis.length() <= PARALLEL_EPSILON {
            if c > 0. {
                return Self::IDENTITY;
            }

            let mut perpendicular = n_start.cross(&Vector3::X);
            if perpendicular.length() <= PARALLEL_EPSILON {
                perpendicular = n_start.cross(&Vector3::Y);
            }
            perpendicular.normalize();

            log::debug!(
                "rotate_to_vector: opposite directions, half-turn around {:?}",
                perpendicular.inner
            );
            return Self::axis_angle(&perpendicular, -1., 0.);
        }

        // |a x b| = sin(alpha) for unit inputs.
        let s = axis.length();
        axis.normalize();
        Self::axis_angle(&axis, c, s)
    }

    /// Rotation around unit `axis` given the cosine and sine of the angle.
    fn axis_angle(axis: &Vector3, c: f32, s: f32) -> Self {
        let [x, y, z] = axis.inner;
        let t = 1. - c;

        #[rustfmt::skip]
        let res = Self::from_row_major(&[
            x * x * t + c,     x * y * t - s * z, x * z * t + s * y, 0.,
            x * y * t + s * z, y * y * t + c,     y * z * t - s * x, 0.,
            x * z * t - s * y, y * z * t + s * x, z * z * t + c,     0.,
            0.,                0.,                0.,                1.,
        ]);

        res
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut res = Self::IDENTITY;
        for r in 0..4 {
            for c in 0..4 {
                res.set(r, c, self.get(c, r));
            }
        }

        res
    }

    /// Unscaled inverse (transposed cofactors), flat column-major.
    fn adjugate(&self) -> [f32; 16] {
        let m = &self.inner;
        let mut inv = [0.; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        inv
    }

    fn determinant_with(&self, adjugate: &[f32; 16]) -> f32 {
        let m = &self.inner;
        m[0] * adjugate[0] + m[1] * adjugate[4] + m[2] * adjugate[8] + m[3] * adjugate[12]
    }

    /// Get the determinant.
    pub fn determinant(&self) -> f32 {
        self.determinant_with(&self.adjugate())
    }

    /// Get the inverse, failing with [Error::Singular] when the determinant is (nearly) zero.
    pub fn inverse(&self) -> Result<Self> {
        let adjugate = self.adjugate();
        let determinant = self.determinant_with(&adjugate);

        if determinant.abs() <= f32::EPSILON {
            log::debug!("Refusing to invert singular matrix (determinant {determinant})");
            return Err(Error::Singular { determinant });
        }

        Ok(Self::from_column_major(adjugate.map(|v| v / determinant)))
    }

    /// Inverse-transpose, used to carry normals through a model(-view) transform.
    pub fn normal_matrix(&self) -> Result<Self> {
        self.inverse().map(|inverse| inverse.transpose())
    }

    /// Perspective projection with a vertical field of view in degrees, mapping the view
    /// volume between `near` and `far` to clip space (`-1..1` depth after division).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1. / (fov_y.to_radians() / 2.).tan();

        let mut res = Self::from_column_major([0.; 16]);
        res.inner[0] = f / aspect;
        res.inner[5] = f;
        res.inner[10] = (far + near) / (near - far);
        res.inner[11] = -1.;
        res.inner[14] = 2. * far * near / (near - far);

        res
    }

    /// Perspective projection from explicit near-plane bounds.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut res = Self::from_column_major([0.; 16]);
        res.inner[0] = 2. * near / (right - left);
        res.inner[5] = 2. * near / (top - bottom);
        res.inner[8] = (right + left) / (right - left);
        res.inner[9] = (top + bottom) / (top - bottom);
        res.inner[10] = -(far + near) / (far - near);
        res.inner[11] = -1.;
        res.inner[14] = -2. * far * near / (far - near);

        res
    }

    /// Orthographic projection of the given box onto clip space.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut res = Self::IDENTITY;
        res.inner[0] = 2. / (right - left);
        res.inner[5] = 2. / (top - bottom);
        res.inner[10] = -2. / (far - near);
        res.inner[12] = -(right + left) / (right - left);
        res.inner[13] = -(top + bottom) / (top - bottom);
        res.inner[14] = -(far + near) / (far - near);

        res
    }

    /// Right-handed view matrix placing the eye at the origin and looking down -Z at `center`.
    pub fn look_at(eye: &Vector3, center: &Vector3, up: &Vector3) -> Self {
        let dir = (*center - *eye).normalized();
        let right = dir.cross(up).normalized();
        let up = right.cross(&dir).normalized();

        #[rustfmt::skip]
        let res = Self::from_row_major(&[
            right.x(), right.y(), right.z(), -right.dot(eye),
            up.x(),    up.y(),    up.z(),    -up.dot(eye),
            -dir.x(),  -dir.y(),  -dir.z(),  dir.dot(eye),
            0.,        0.,        0.,        1.,
        ]);

        res
    }

    /// Render as 4 lines of 4 values with 2 decimals, in row order.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        self.mult(&rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            if r > 0 {
                writeln!(f)?;
            }

            for c in 0..4 {
                if c > 0 {
                    write!(f, " ")?;
                }
                let value = format!("{:.2}", self.get(r, c));
                // Tiny negative values round to zero too.
                match value.as_str() {
                    "-0.00" => write!(f, "0.00")?,
                    _ => write!(f, "{value}")?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use float_eq::assert_float_eq;
    use rand::Rng;

    use super::*;

    fn assert_mat_eq(got: &Matrix4, expected: &Matrix4) {
        assert_float_eq!(
            got.to_array(),
            expected.to_array(),
            abs_all <= 0.000_1,
            "got\n{got}\nexpected\n{expected}"
        );
    }

    fn assert_vec_eq(got: Vector3, expected: Vector3) {
        assert_float_eq!(
            got.inner,
            expected.inner,
            abs_all <= 0.000_1,
            "got {got:?}, expected {expected:?}"
        );
    }

    fn random_matrix(rng: &mut impl Rng) -> Matrix4 {
        Matrix4::from_column_major(std::array::from_fn(|_| rng.gen_range(-2.0..2.0)))
    }

    fn counting() -> Matrix4 {
        Matrix4::from_row_major(&(0..16).map(|v| v as f32).collect::<Vec<_>>())
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::identity());
        assert_eq!(Matrix4::from_row_major(&[]), Matrix4::identity());
    }

    #[test]
    fn row_major_constructor() {
        let m = counting();

        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m.get(r, c), (r * 4 + c) as f32);
            }
        }

        assert_eq!(m.data()[..4], [0., 4., 8., 12.]);
    }

    #[test]
    fn partial_and_excess_constructor_input() {
        let partial = Matrix4::from_row_major(&[5., 6.]);
        assert_eq!(partial.get(0, 0), 5.);
        assert_eq!(partial.get(0, 1), 6.);
        assert_eq!(partial.get(1, 1), 1.);
        assert_eq!(partial.get(3, 3), 1.);
        assert_eq!(partial.get(1, 0), 0.);

        let excess: Vec<f32> = (0..20).map(|v| v as f32).collect();
        assert_eq!(Matrix4::from_row_major(&excess), counting());
    }

    #[test]
    fn set_uses_column_major_index() {
        let mut m = Matrix4::identity();
        m.set(1, 3, 7.);

        assert_eq!(m.data()[13], 7.);
        assert_eq!(m.get(1, 3), 7.);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let a = random_matrix(&mut rng);
            assert_mat_eq(&a.mult(&Matrix4::identity()), &a);
            assert_mat_eq(&Matrix4::identity().mult(&a), &a);
        }
    }

    #[test]
    fn mult_is_associative() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let (a, b, c) = (
                random_matrix(&mut rng),
                random_matrix(&mut rng),
                random_matrix(&mut rng),
            );

            assert_float_eq!(
                a.mult(&b).mult(&c).to_array(),
                a.mult(&b.mult(&c)).to_array(),
                abs_all <= 0.001
            );
        }
    }

    #[test]
    fn mult_by_hand() {
        let a = counting();
        let b = Matrix4::from_row_major(&(16..32).map(|v| v as f32).collect::<Vec<_>>());
        let before = (a, b);

        let product = a * b;

        assert_eq!(product.get(0, 0), 152.);
        assert_eq!(product.get(1, 2), 548.);
        assert_eq!((a, b), before);
    }

    #[test]
    fn translate_stores_translation_column() {
        let m = Matrix4::identity().translate(1., 2., 3.);
        assert_eq!(m.data()[12..15], [1., 2., 3.]);
    }

    #[test]
    fn translate_inverse_pair() {
        let (x, y, z) = (1.5, -2., 7.25);
        let there = Matrix4::identity().translate(x, y, z);
        let back = Matrix4::identity().translate(-x, -y, -z);

        assert_mat_eq(&there.mult(&back), &Matrix4::identity());
    }

    #[test]
    fn translate_matches_manual_product() {
        let m = counting();
        #[rustfmt::skip]
        let manual = Matrix4::from_row_major(&[
            1., 0., 0., 2.,
            0., 1., 0., 2.,
            0., 0., 1., 2.,
            0., 0., 0., 1.,
        ]);

        assert_mat_eq(&m.translate(2., 2., 2.), &m.mult(&manual));
    }

    #[test]
    fn scale_about_origin() {
        let m = Matrix4::identity().scale_by(2., 2., 2.);

        for r in 0..4 {
            for c in 0..4 {
                let expected = match (r, c) {
                    (3, 3) => 1.,
                    (r, c) if r == c => 2.,
                    _ => 0.,
                };
                assert_eq!(m.get(r, c), expected, "at ({r}, {c})");
            }
        }
    }

    #[test]
    fn scale_matches_manual_product() {
        let m = counting();
        let manual = Matrix4::from_row_major(&[2., 0., 0., 0., 0., 2., 0., 0., 0., 0., 2.]);

        assert_mat_eq(&m.scale_by(2., 2., 2.), &m.mult(&manual));
    }

    #[test]
    fn scale_about_pivot_keeps_pivot() {
        let pivot = Vector3::new(1., 1., 1.);
        let m = Matrix4::identity().scale_by_about(2., 2., 2., &pivot);

        assert_vec_eq(m.transform_point(&pivot), pivot);
        assert_vec_eq(
            m.transform_point(&Vector3::new(2., 1., 1.)),
            Vector3::new(3., 1., 1.),
        );
    }

    #[test]
    fn rotate_x_direction() {
        let m = Matrix4::identity().rotate_x(90.);
        assert_vec_eq(m.multiply_point(&Vector3::Y), Vector3::Z);
    }

    #[test]
    fn rotate_y_direction() {
        let m = Matrix4::identity().rotate_y(90.);
        assert_vec_eq(m.multiply_point(&Vector3::Z), Vector3::X);
    }

    #[test]
    fn rotate_z_direction() {
        let m = Matrix4::identity().rotate_z(90.);
        assert_vec_eq(m.multiply_point(&Vector3::X), Vector3::Y);
    }

    #[test]
    fn rotate_matches_manual_product() {
        let m = counting();
        let (sin, cos) = 2f32.to_radians().sin_cos();
        #[rustfmt::skip]
        let manual = Matrix4::from_row_major(&[
            1., 0., 0., 0.,
            0., cos, -sin, 0.,
            0., sin, cos, 0.,
            0., 0., 0., 1.,
        ]);

        assert_mat_eq(&m.rotate_x(2.), &m.mult(&manual));
    }

    #[test]
    fn rotate_order_is_x_then_y_then_z() {
        let id = Matrix4::identity();
        let composed = id.rotate(30., 45., 60.);
        let manual = id.rotate_x(30.).mult(&id.rotate_y(45.)).mult(&id.rotate_z(60.));
        let reversed = id.rotate_z(60.).mult(&id.rotate_y(45.)).mult(&id.rotate_x(30.));

        assert_mat_eq(&composed, &manual);
        assert_ne!(composed, reversed);
    }

    #[test]
    fn rotate_about_pivot_keeps_pivot() {
        let pivot = Vector3::X;
        let m = Matrix4::identity().rotate_z_about(90., &pivot);

        assert_vec_eq(m.transform_point(&pivot), pivot);
        assert_vec_eq(
            m.transform_point(&Vector3::new(2., 0., 0.)),
            Vector3::new(1., 1., 0.),
        );
    }

    #[test]
    fn multiply_point_ignores_translation() {
        let m = Matrix4::identity().translate(5., 5., 5.);
        let v = Vector3::new(1., -2., 3.);

        assert_eq!(m.multiply_point(&v), v);
    }

    #[test]
    fn rotate_to_vector_x_to_y() {
        let m = Matrix4::rotate_to_vector(&Vector3::X, &Vector3::Y);
        #[rustfmt::skip]
        let expected = Matrix4::from_row_major(&[
            0., -1., 0., 0.,
            1., 0., 0., 0.,
            0., 0., 1., 0.,
        ]);

        assert_mat_eq(&m, &expected);
    }

    #[test]
    fn rotate_to_vector_maps_start_onto_end() {
        let mut rng = rand::thread_rng();
        let mut random = || {
            Vector3::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            )
        };

        for _ in 0..100 {
            let (start, end) = (random(), random());
            if start.len_sq() < 0.01
                || end.len_sq() < 0.01
                || start.normalized().dot(&end.normalized()).abs() > 0.99
            {
                continue;
            }

            let m = Matrix4::rotate_to_vector(&start, &end);
            assert_vec_eq(m.multiply_point(&start.normalized()), end.normalized());
            assert_float_eq!(m.determinant(), 1., abs <= 0.001);
        }
    }

    #[test]
    fn rotate_to_vector_does_not_modify_inputs() {
        let (start, end) = (Vector3::new(2., 0., 0.), Vector3::new(0., 0., 5.));
        Matrix4::rotate_to_vector(&start, &end);

        assert_eq!(start, Vector3::new(2., 0., 0.));
        assert_eq!(end, Vector3::new(0., 0., 5.));
    }

    #[test]
    fn rotate_to_vector_parallel_is_identity() {
        let v = Vector3::new(0.3, -1.2, 2.);

        assert_mat_eq(&Matrix4::rotate_to_vector(&v, &v), &Matrix4::identity());
        assert_mat_eq(&Matrix4::rotate_to_vector(&v, &(v * 3.)), &Matrix4::identity());
    }

    #[test]
    fn rotate_to_vector_antiparallel_is_half_turn() {
        for start in [Vector3::X, Vector3::Y, Vector3::new(1., 1., 1.)] {
            let m = Matrix4::rotate_to_vector(&start, &-start);

            assert_vec_eq(m.multiply_point(&start.normalized()), -start.normalized());
            assert_float_eq!(m.determinant(), 1., abs <= 0.001);
        }
    }

    #[test]
    fn rotate_to_vector_zero_input_is_identity() {
        let m = Matrix4::rotate_to_vector(&Vector3::default(), &Vector3::X);
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn rotate_to_vector_small_angles() {
        for degrees in [0.01f32, 0.057, 0.5] {
            let (sin, cos) = degrees.to_radians().sin_cos();
            let end = Vector3::new(cos, sin, 0.);

            let got = Matrix4::rotate_to_vector(&Vector3::X, &end).multiply_point(&Vector3::X);
            assert_float_eq!(got.inner, end.inner, abs_all <= 0.000_001, "{degrees} degrees");
        }

        let end = Vector3::new(1., 1e-3, 0.);
        let got = Matrix4::rotate_to_vector(&Vector3::X, &end).multiply_point(&Vector3::X);
        assert_float_eq!(got.y(), end.normalized().y(), abs <= 0.000_000_1);
    }

    #[test]
    fn as_text_has_no_negative_zero() {
        let text = Matrix4::identity().rotate_z(90.).as_text();

        assert!(text.starts_with("0.00 -1.00 0.00 0.00\n"), "{text}");
        assert!(!text.contains("-0.00"), "{text}");
    }

    #[test]
    fn as_text_is_row_ordered() {
        assert_eq!(
            Matrix4::identity().as_text(),
            "1.00 0.00 0.00 0.00\n0.00 1.00 0.00 0.00\n0.00 0.00 1.00 0.00\n0.00 0.00 0.00 1.00"
        );
        assert!(counting().as_text().starts_with("0.00 1.00 2.00 3.00\n4.00"));
    }

    #[test]
    fn transpose() {
        let t = counting().transpose();

        assert_eq!(t.get(0, 1), 4.);
        assert_eq!(t.get(1, 0), 1.);
        assert_eq!(t.transpose(), counting());
    }

    #[test]
    fn determinant_of_scale() {
        let m = Matrix4::identity().scale_by(2., 3., 4.);
        assert_float_eq!(m.determinant(), 24., abs <= 0.000_1);
    }

    #[test]
    fn inverse_of_composed_transform() {
        let m = Matrix4::identity()
            .translate(1., -2., 3.)
            .rotate(10., 20., 30.)
            .scale_by_about(2., 0.5, 3., &Vector3::new(1., 1., 0.));
        let inverse = m.inverse().unwrap();

        assert_mat_eq(&m.mult(&inverse), &Matrix4::identity());
        assert_mat_eq(&inverse.mult(&m), &Matrix4::identity());
    }

    #[test]
    fn inverse_of_singular_fails() {
        let m = Matrix4::identity().scale_by(1., 0., 1.);
        assert!(matches!(m.inverse(), Err(Error::Singular { .. })));
    }

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let m = Matrix4::identity().rotate(15., 25., 35.);
        assert_mat_eq(&m.normal_matrix().unwrap(), &m);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let (near, far) = (0.5, 4.);
        let m = Matrix4::perspective(32., 1.5, near, far);

        assert_float_eq!(
            m.transform_point(&Vector3::new(0., 0., -near)).z(),
            -1.,
            abs <= 0.000_1
        );
        assert_float_eq!(
            m.transform_point(&Vector3::new(0., 0., -far)).z(),
            1.,
            abs <= 0.000_1
        );
    }

    #[test]
    fn perspective_matches_symmetric_frustum() {
        let (fov, aspect, near, far): (f32, f32, f32, f32) = (60., 1.5, 0.5, 10.);
        let top = near * (fov / 2.).to_radians().tan();
        let right = top * aspect;

        assert_mat_eq(
            &Matrix4::perspective(fov, aspect, near, far),
            &Matrix4::frustum(-right, right, -top, top, near, far),
        );
    }

    #[test]
    fn orthographic_maps_box_to_cube() {
        let m = Matrix4::orthographic(-2., 4., -1., 3., 1., 5.);

        assert_vec_eq(
            m.transform_point(&Vector3::new(-2., -1., -1.)),
            Vector3::new(-1., -1., -1.),
        );
        assert_vec_eq(
            m.transform_point(&Vector3::new(4., 3., -5.)),
            Vector3::new(1., 1., 1.),
        );
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vector3::new(1.5, 0., 1.5);
        let center = Vector3::default();
        let view = Matrix4::look_at(&eye, &center, &Vector3::Z);

        assert_vec_eq(view.transform_point(&eye), Vector3::default());
        assert_vec_eq(
            view.transform_point(&center),
            Vector3::new(0., 0., -eye.length()),
        );
    }

    #[test]
    fn as_bytes_is_column_major() {
        let m = Matrix4::identity().translate(3., 0., 0.);
        let bytes = m.as_bytes();

        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[48..52], 3f32.to_ne_bytes());
    }
}
