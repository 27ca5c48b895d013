//! Cylindrical coordinates (rho, psi, z).

use crate::coordinates::cartesian::Cartesian3;

/// Cylindrical coordinates
///
/// `rho >= 0` is the distance from the z-axis, `psi` the azimuthal angle in
/// radians in `(-pi, pi]`, and `z` the height. Stored as given, without
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    /// Distance from the z-axis
    pub rho: f64,
    /// Azimuthal angle in the xy-plane in radians
    pub psi: f64,
    /// Height along the z-axis
    pub z: f64,
}

impl Cylindrical {
    pub fn new(rho: f64, psi: f64, z: f64) -> Self {
        Cylindrical { rho, psi, z }
    }

    /// Azimuthal angle in degrees
    pub fn psi_degrees(&self) -> f64 {
        self.psi.to_degrees()
    }

    /// Converts to Cartesian coordinates: x = rho cos(psi), y = rho sin(psi),
    /// z unchanged.
    pub fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3 {
            x: self.rho * self.psi.cos(),
            y: self.rho * self.psi.sin(),
            z: self.z,
        }
    }

    /// Converts from Cartesian coordinates: rho = sqrt(x^2 + y^2),
    /// psi = atan2(y, x), z unchanged.
    ///
    /// Points on the z-axis have no defined azimuth; they map to `psi = 0`
    /// by the `atan2(0, 0)` convention.
    pub fn from_cartesian(cart: &Cartesian3) -> Self {
        Cylindrical {
            rho: (cart.x * cart.x + cart.y * cart.y).sqrt(),
            psi: cart.y.atan2(cart.x),
            z: cart.z,
        }
    }
}
