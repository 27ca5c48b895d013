//! Sphereframe: coordinate conversions and spherical basis visualization
//!
//! This crate converts points between Cartesian, spherical, and cylindrical
//! coordinate systems, and computes the local orthonormal basis vectors of
//! the spherical system at a point on the unit sphere. The [`render`] module
//! draws the sphere and the basis vectors in an interactive 3D window.
//!
//! All conversions are pure closed-form transforms; nothing is cached or
//! persisted between calls.

use thiserror::Error;

pub mod basis;
pub mod coordinates;
pub mod render;

// Re-export commonly used types
pub use basis::BasisFrame;
pub use coordinates::{Cartesian3, Cylindrical, Spherical};

/// Main error type for the sphereframe library
#[derive(Debug, Error)]
pub enum SphereframeError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("Invalid number: {0}")]
    ParseError(#[from] std::num::ParseFloatError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for sphereframe operations
pub type Result<T> = std::result::Result<T, SphereframeError>;
