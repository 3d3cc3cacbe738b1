//! Definition of the camera and its auxilliary data structures.

use crate::{
    error::{Error, Result},
    matrix::Matrix4,
    vector::Vector3,
};

/// Below this squared length a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Perspective projection parameters.
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Viewport width over height.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Perspective {
            fov_y: 32.,
            aspect: 1.,
            near: 0.5,
            far: 4.,
        }
    }
}

impl Perspective {
    /// Update the aspect ratio after a viewport resize. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::trace!("Ignoring resize to {width}x{height}");
            return;
        }

        self.aspect = width as f32 / height as f32;
    }

    /// Build the projection matrix, rejecting parameters that describe an empty view volume.
    pub fn to_matrix(&self) -> Result<Matrix4> {
        if !(self.fov_y > 0. && self.fov_y < 180.) {
            return Err(Error::InvalidProjection(format!(
                "field of view {} is outside (0, 180)",
                self.fov_y
            )));
        }
        if !(self.aspect > 0. && self.aspect.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "aspect ratio {} is not a positive finite number",
                self.aspect
            )));
        }
        if !(self.near > 0. && self.near < self.far && self.far.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "clipping planes near {} and far {} must satisfy 0 < near < far < inf",
                self.near, self.far
            )));
        }

        Ok(Matrix4::perspective(
            self.fov_y,
            self.aspect,
            self.near,
            self.far,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A 3D camera.
pub struct Camera {
    /// Position.
    pub eye: Vector3,
    /// Point looked at.
    pub target: Vector3,
    /// World up direction.
    pub up: Vector3,

    /// Projection.
    pub perspective: Perspective,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            eye: Vector3::new(1.5, 0., 1.5),
            target: Vector3::default(),
            up: Vector3::Z,
            perspective: Perspective::default(),
        }
    }
}

impl Camera {
    /// Move the eye onto a circle of `radius` around the target, in the `z = height` plane, at
    /// `degrees` from the +X axis.
    pub fn orbit(&mut self, radius: f32, height: f32, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.eye = Vector3::new(
            self.target.x() + radius * cos,
            self.target.y() + radius * sin,
            height,
        );
    }

    /// World to view space matrix.
    pub fn view(&self) -> Result<Matrix4> {
        let dir = self.target - self.eye;
        if dir.len_sq() <= DEGENERATE_EPSILON {
            return Err(Error::DegenerateView(format!(
                "eye and target are both at {:?}",
                self.eye.inner
            )));
        }
        if dir.normalized().cross(&self.up).len_sq() <= DEGENERATE_EPSILON {
            return Err(Error::DegenerateView(format!(
                "up {:?} is parallel to the view direction",
                self.up.inner
            )));
        }

        Ok(Matrix4::look_at(&self.eye, &self.target, &self.up))
    }

    /// View to clip space matrix.
    pub fn projection(&self) -> Result<Matrix4> {
        self.perspective.to_matrix()
    }

    /// `projection * view`.
    pub fn view_projection(&self) -> Result<Matrix4> {
        Ok(self.projection()?.mult(&self.view()?))
    }

    /// Matrix carrying model-space normals to view space.
    pub fn normal_matrix(&self, model: &Matrix4) -> Result<Matrix4> {
        self.view()?.mult(model).normal_matrix()
    }
}
