//! # Spherical Coordinate Module
//!
//! Spherical coordinates (r, theta, phi) with the physics convention:
//! theta is the polar angle measured from the +z axis, phi the azimuthal
//! angle in the xy-plane measured from the +x axis.

use crate::coordinates::cartesian::Cartesian3;

/// Spherical coordinates
///
/// # Conventions
///
/// - `r`: radial distance from the origin, `r >= 0`
/// - `theta`: polar angle from the +z axis in radians, range `[0, pi]`
/// - `phi`: azimuthal angle in radians, range `(-pi, pi]`
///
/// Values are stored exactly as provided; no range normalization or
/// validation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Radial distance from the origin
    pub r: f64,
    /// Polar angle from the +z axis in radians
    pub theta: f64,
    /// Azimuthal angle in the xy-plane in radians
    pub phi: f64,
}

impl Spherical {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Spherical { r, theta, phi }
    }

    /// Create from angles given in degrees
    pub fn from_degrees(r: f64, theta_deg: f64, phi_deg: f64) -> Self {
        Spherical::new(r, theta_deg.to_radians(), phi_deg.to_radians())
    }

    /// Polar angle in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// Azimuthal angle in degrees
    pub fn phi_degrees(&self) -> f64 {
        self.phi.to_degrees()
    }

    /// Converts to Cartesian coordinates
    ///
    /// - `x = r * sin(theta) * cos(phi)`
    /// - `y = r * sin(theta) * sin(phi)`
    /// - `z = r * cos(theta)`
    ///
    /// Defined for all real inputs; `r = 0` degenerates to the origin.
    pub fn to_cartesian(&self) -> Cartesian3 {
        let sin_theta = self.theta.sin();
        Cartesian3 {
            x: self.r * sin_theta * self.phi.cos(),
            y: self.r * sin_theta * self.phi.sin(),
            z: self.r * self.theta.cos(),
        }
    }

    /// Converts from Cartesian coordinates
    ///
    /// - `r = sqrt(x^2 + y^2 + z^2)`
    /// - `theta = arccos(z / r)`
    /// - `phi = atan2(y, x)`
    ///
    /// # Precondition
    ///
    /// `r > 0`. At the origin the polar angle is undefined: `theta` comes
    /// back NaN (arccos of 0/0) and `phi` is 0 by the `atan2(0, 0)`
    /// convention. The degenerate value is returned as-is rather than
    /// signaled as an error. Points on the z-axis have no defined azimuth
    /// and also yield `phi = 0`.
    pub fn from_cartesian(cart: &Cartesian3) -> Self {
        let r = cart.magnitude();
        Spherical {
            r,
            theta: (cart.z / r).acos(),
            phi: cart.y.atan2(cart.x),
        }
    }
}
