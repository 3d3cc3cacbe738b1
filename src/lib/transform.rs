//! Model matrix built from independent scale, rotation and translation components.

use crate::{matrix::Matrix4, vector::Vector3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// 3D transformation representation.
///
/// Each setter replaces its component rather than accumulating into it, so a shape can be
/// re-posed every frame from absolute values. The composed model matrix applies, from the
/// vertex outwards: `base`, scale, rotation, translation.
pub struct Transform {
    base: Matrix4,

    scale: Matrix4,
    rotation: Matrix4,
    translation: Matrix4,
}

impl Transform {
    /// Replace the model-space base matrix, applied before everything else. Typically used to
    /// fit raw vertex data into a unit volume.
    pub fn with_base(mut self, base: Matrix4) -> Self {
        self.base = base;
        self
    }

    /// Replace the scale component.
    pub fn with_scale(mut self, sx: f32, sy: f32, sz: f32) -> Self {
        self.scale = Matrix4::identity().scale_by(sx, sy, sz);
        self
    }

    /// Replace the rotation component with X, Y then Z rotations in degrees.
    pub fn with_rotation(mut self, theta_x: f32, theta_y: f32, theta_z: f32) -> Self {
        self.rotation = Matrix4::identity().rotate(theta_x, theta_y, theta_z);
        self
    }

    /// Replace the rotation component so that model-space +X points along `direction`.
    pub fn oriented_towards(mut self, direction: &Vector3) -> Self {
        self.rotation = Matrix4::rotate_to_vector(&Vector3::X, direction);
        self
    }

    /// Replace the translation component.
    pub fn with_translation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = Matrix4::identity().translate(x, y, z);
        self
    }

    /// Position of the model-space origin after the transform.
    pub fn translation(&self) -> Vector3 {
        let data = self.translation.data();
        Vector3::new(data[12], data[13], data[14])
    }

    /// Composed model matrix: `translation * rotation * scale * base`.
    pub fn model(&self) -> Matrix4 {
        self.translation
            .mult(&self.rotation)
            .mult(&self.scale)
            .mult(&self.base)
    }
}
