//! Errors returned by the fallible parts of the library.
//!
//! Composing transforms never fails; only inversion and camera/projection construction can.

#[derive(Debug, PartialEq, thiserror::Error)]
/// Possible errors returned while building view, projection or inverse matrices.
pub enum Error {
    #[error("Matrix is singular (determinant {determinant}), no inverse exists")]
    /// Tried to invert a matrix with a (near-)zero determinant.
    Singular {
        /// Determinant of the offending matrix.
        determinant: f32,
    },

    #[error("Invalid projection: {0}")]
    /// Projection parameters describe an empty or inverted view volume.
    InvalidProjection(String),

    #[error("Degenerate view: {0}")]
    /// Camera position, target and up vector cannot define an orientation.
    DegenerateView(String),
}

/// Library-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
