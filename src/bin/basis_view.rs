//! Spherical Basis Viewer
//!
//! Prints two example coordinate conversions, then prompts for a polar and
//! an azimuthal angle and opens a 3D view of the spherical basis frame at
//! that point on the unit sphere.
//!
//! Usage:
//!   cargo run --bin basis_view
//!
//! There are no flags; both angles are read interactively from stdin in
//! radians. Non-numeric input is fatal. Set RUST_LOG=debug for render
//! diagnostics.

use std::f64::consts::FRAC_PI_4;
use std::io::{self, BufRead, Write};

use sphereframe::coordinates::{Cartesian3, Spherical};
use sphereframe::{render, Result, SphereframeError};

/// Format a coordinate triple the way the conversion examples are printed
fn format_triple(a: f64, b: f64, c: f64) -> String {
    format!("[{:.6} {:.6} {:.6}]", a, b, c)
}

/// Prompt for a single angle in radians and parse it from the next stdin line
fn prompt_angle(input: &mut impl BufRead, name: &str) -> Result<f64> {
    print!("Enter {} (in radians): ", name);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SphereframeError::InputError(format!(
            "stdin closed before a value was entered for {}",
            name
        )));
    }
    Ok(line.trim().parse::<f64>()?)
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Example conversions
    let sph = Cartesian3::new(1.0, 1.0, 1.0).to_spherical();
    println!(
        "Cartesian to Spherical: {}",
        format_triple(sph.r, sph.theta, sph.phi)
    );

    let cart = Spherical::new(1.0, FRAC_PI_4, FRAC_PI_4).to_cartesian();
    println!(
        "Spherical to Cartesian: {}",
        format_triple(cart.x, cart.y, cart.z)
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let theta = prompt_angle(&mut input, "theta")?;
    let phi = prompt_angle(&mut input, "phi")?;

    // Blocks until the viewer window is closed
    render::show_basis(theta, phi);

    Ok(())
}
