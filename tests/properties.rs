//! Round-trip and frame properties of the coordinate transforms.

use approx::assert_abs_diff_eq;
use rstest::rstest;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use sphereframe::{BasisFrame, Cartesian3, Cylindrical, Spherical};

const TOLERANCE: f64 = 1e-9;

#[rstest]
#[case(1.0, 1.0, 1.0)]
#[case(1.0, 0.0, 0.0)]
#[case(0.0, 0.0, 1.0)]
#[case(-2.0, 3.0, -4.0)]
#[case(1e-6, -1e-6, 1e-6)]
#[case(100.0, -250.0, 75.0)]
fn spherical_round_trip(#[case] x: f64, #[case] y: f64, #[case] z: f64) {
    let back = Cartesian3::new(x, y, z).to_spherical().to_cartesian();
    assert_abs_diff_eq!(back.x, x, epsilon = TOLERANCE);
    assert_abs_diff_eq!(back.y, y, epsilon = TOLERANCE);
    assert_abs_diff_eq!(back.z, z, epsilon = TOLERANCE);
}

#[rstest]
#[case(1.0, 1.0, 1.0)]
#[case(0.0, 0.0, 5.0)]
#[case(-2.0, 3.0, -4.0)]
#[case(100.0, -250.0, 75.0)]
fn cylindrical_round_trip(#[case] x: f64, #[case] y: f64, #[case] z: f64) {
    let back = Cartesian3::new(x, y, z).to_cylindrical().to_cartesian();
    assert_abs_diff_eq!(back.x, x, epsilon = TOLERANCE);
    assert_abs_diff_eq!(back.y, y, epsilon = TOLERANCE);
    assert_abs_diff_eq!(back.z, z, epsilon = TOLERANCE);
}

#[test]
fn z_axis_maps_to_zero_azimuth() {
    let cyl = Cylindrical::from_cartesian(&Cartesian3::new(0.0, 0.0, 5.0));
    assert_eq!(cyl.rho, 0.0);
    assert_eq!(cyl.psi, 0.0);
    assert_eq!(cyl.z, 5.0);
}

#[test]
fn equatorial_point_lands_on_x_axis() {
    let cart = Spherical::new(1.0, FRAC_PI_2, 0.0).to_cartesian();
    assert_abs_diff_eq!(cart.x, 1.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(cart.y, 0.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(cart.z, 0.0, epsilon = TOLERANCE);
}

#[test]
fn diagonal_point_has_known_spherical_values() {
    let sph = Cartesian3::new(1.0, 1.0, 1.0).to_spherical();
    assert_abs_diff_eq!(sph.r, 3.0_f64.sqrt(), epsilon = 1e-4);
    assert_abs_diff_eq!(sph.theta, 0.9553, epsilon = 1e-4);
    assert_abs_diff_eq!(sph.phi, FRAC_PI_4, epsilon = 1e-4);
}

#[test]
fn origin_has_undefined_polar_angle() {
    // Known-degenerate behavior: no validation, theta is NaN at the origin
    let sph = Cartesian3::new(0.0, 0.0, 0.0).to_spherical();
    assert_eq!(sph.r, 0.0);
    assert!(sph.theta.is_nan());
    assert_eq!(sph.phi, 0.0);
}

#[rstest]
#[case(0.0)]
#[case(FRAC_PI_4)]
#[case(FRAC_PI_2)]
#[case(3.0 * FRAC_PI_4)]
#[case(PI)]
fn basis_frame_is_orthonormal(#[case] theta: f64) {
    for phi in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2] {
        let frame = BasisFrame::at(theta, phi);

        assert_abs_diff_eq!(frame.e_r.norm(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(frame.e_theta.norm(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(frame.e_phi.norm(), 1.0, epsilon = TOLERANCE);

        assert_abs_diff_eq!(frame.e_r.dot(&frame.e_theta), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(frame.e_r.dot(&frame.e_phi), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(frame.e_theta.dot(&frame.e_phi), 0.0, epsilon = TOLERANCE);
    }
}
