#![warn(missing_docs)]

//! Library used by the mvp software. Provides the vector and matrix math behind a
//! model-view-projection pipeline: column-major 4x4 transforms ready for upload as shader
//! uniforms, camera and projection helpers, and CPU-side Phong shading.

pub mod camera;
pub mod color;
pub mod error;
pub mod lighting;
pub mod logging;
pub mod matrix;
pub mod transform;
pub mod vector;

/// Commonly used types, for glob importing.
pub mod prelude {
    pub use crate::{
        camera::{Camera, Perspective},
        color::Color,
        error::Error,
        lighting::{Attenuation, PhongMaterial, PointLight},
        logging::{init_logging, LoggingConfig},
        matrix::Matrix4,
        transform::Transform,
        vector::Vector3,
    };
}
