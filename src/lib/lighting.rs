//! Fixed-function shading: the Phong reflection model with a distance-attenuated point light,
//! a plain Lambert term for directional lights, and flat face normals.
//!
//! These mirror the per-fragment formulas used by the shaders, evaluated on the CPU.

use crate::{color::Color, vector::Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Distance falloff `1 / (constant + linear * d + quadratic * d²)`.
pub struct Attenuation {
    #[allow(missing_docs)]
    pub constant: f32,
    #[allow(missing_docs)]
    pub linear: f32,
    #[allow(missing_docs)]
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// No falloff.
    fn default() -> Self {
        Self {
            constant: 1.,
            linear: 0.,
            quadratic: 0.,
        }
    }
}

impl Attenuation {
    /// Intensity factor at `distance` from the light.
    pub fn factor(&self, distance: f32) -> f32 {
        1. / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Point light with separate intensities per Phong term.
pub struct PointLight {
    /// World-space position.
    pub position: Vector3,
    #[allow(missing_docs)]
    pub ambient: Color,
    #[allow(missing_docs)]
    pub diffuse: Color,
    #[allow(missing_docs)]
    pub specular: Color,
    #[allow(missing_docs)]
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vector3::default(),
            ambient: Color::WHITE,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            attenuation: Attenuation::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Surface reflectance per Phong term.
pub struct PhongMaterial {
    /// k_a
    pub ambient: Color,
    /// k_d
    pub diffuse: Color,
    /// k_s
    pub specular: Color,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5),
            specular: Color::splat(0.5),
            shininess: 1.,
        }
    }
}

/// Shade `position` with surface `normal` as seen from `viewer`.
///
/// The specular term is dropped when the light is behind the surface. The result is not
/// clamped.
pub fn phong(
    light: &PointLight,
    material: &PhongMaterial,
    position: &Vector3,
    normal: &Vector3,
    viewer: &Vector3,
) -> Color {
    let n = normal.normalized();
    let l = (light.position - *position).normalized();
    let l_dot_n = l.dot(&n);
    // w = 2 (l . n) n - l
    let r = (n * (2. * l_dot_n) - l).normalized();
    let v = (*viewer - *position).normalized();

    let falloff = light
        .attenuation
        .factor((*position - light.position).length());

    let ambient = light.ambient * material.ambient;
    let diffuse = light.diffuse * material.diffuse * (falloff * l_dot_n.max(0.));
    let specular = if l_dot_n < 0. {
        Color::BLACK
    } else {
        light.specular
            * material.specular
            * (falloff * r.dot(&v).max(0.).powf(material.shininess))
    };

    ambient + diffuse + specular
}

/// Diffuse-only shading for a directional light travelling along `light_direction`.
pub fn lambert(light_direction: &Vector3, normal: &Vector3, diffuse_product: Color) -> Color {
    diffuse_product * (-*light_direction).dot(&normal.normalized()).max(0.)
}

/// Unit normal of the triangle `p1, p2, p3` as `(p3 - p1) x (p2 - p1)`, i.e. facing the
/// viewer for clockwise winding. Degenerate triangles give the zero vector.
pub fn face_normal(p1: &Vector3, p2: &Vector3, p3: &Vector3) -> Vector3 {
    (*p3 - *p1).cross(&(*p2 - *p1)).normalized()
}
