//! Local orthonormal basis of the spherical coordinate system.

use crate::coordinates::Cartesian3;
use nalgebra::Vector3;

/// The spherical orthonormal frame at a point on the unit sphere
///
/// The three vectors are mutually orthogonal unit vectors by construction
/// (the standard spherical frame); no runtime check enforces this. The frame
/// is recomputed on each call and carries no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisFrame {
    /// Radial direction, identical to the anchor point on the unit sphere
    pub e_r: Vector3<f64>,
    /// Direction of increasing polar angle
    pub e_theta: Vector3<f64>,
    /// Direction of increasing azimuthal angle
    pub e_phi: Vector3<f64>,
}

impl BasisFrame {
    /// Computes the frame at polar angle `theta` and azimuthal angle `phi`
    /// (both radians).
    ///
    /// No range validation is performed: angles outside `[0, pi]` and
    /// `(-pi, pi]` still produce a consistent (mirrored) frame since the
    /// trigonometric functions are periodic.
    pub fn at(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        BasisFrame {
            e_r: Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta),
            e_theta: Vector3::new(cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta),
            e_phi: Vector3::new(-sin_phi, cos_phi, 0.0),
        }
    }

    /// The unit-sphere point the frame is anchored at
    ///
    /// Numerically equal to `e_r` interpreted as a position.
    pub fn anchor(&self) -> Cartesian3 {
        Cartesian3::from_vector3(self.e_r)
    }
}
