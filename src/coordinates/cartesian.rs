//! # Cartesian Coordinate Module
//!
//! Provides the 3D Cartesian representation that serves as the common
//! intermediate format for the coordinate transforms in this crate.
//!
//! ## Coordinate System Convention
//!
//! A standard right-handed frame:
//! - **X-axis**: azimuth reference direction (phi = 0 in the xy-plane)
//! - **Y-axis**: phi = +90 degrees in the xy-plane
//! - **Z-axis**: polar axis (theta = 0)
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values with no normalization or
//! conversion applied, so inputs round-trip exactly.
//!
//! ## Examples
//!
//! ```rust
//! use sphereframe::coordinates::cartesian::Cartesian3;
//!
//! let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
//! let z_axis = Cartesian3::new(0.0, 0.0, 1.0);
//!
//! // Perpendicular axes have zero dot product
//! assert_eq!(x_axis.dot(&z_axis), 0.0);
//! ```

use crate::coordinates::{Cylindrical, Spherical};
use nalgebra::Vector3;

/// Three-dimensional Cartesian point or direction
///
/// The fundamental building block for the coordinate transforms: both the
/// spherical and cylindrical systems convert through this type.
///
/// This type can represent both unit vectors (directions) and position
/// vectors; the interpretation depends on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    /// X-component (azimuth reference)
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component (polar axis)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sphereframe::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Converts to spherical coordinates (r, theta, phi)
    ///
    /// Equivalent to [`Spherical::from_cartesian`]. The origin has no
    /// defined polar angle; see that method for the degenerate behavior.
    pub fn to_spherical(&self) -> Spherical {
        Spherical::from_cartesian(self)
    }

    /// Converts to cylindrical coordinates (rho, psi, z)
    ///
    /// Equivalent to [`Cylindrical::from_cartesian`].
    pub fn to_cylindrical(&self) -> Cylindrical {
        Cylindrical::from_cartesian(self)
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sphereframe::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sphereframe::coordinates::cartesian::Cartesian3;
    ///
    /// let unit = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// ```
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Cartesian3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another coordinate
    ///
    /// For unit vectors this is the cosine of the angle between them.
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another coordinate
    ///
    /// Produces a vector perpendicular to both inputs following the
    /// right-hand rule.
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to nalgebra `Vector3` for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
