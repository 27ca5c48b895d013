//! Interactive 3D view of the spherical basis frame.
//!
//! Renders the unit sphere as a tessellated mesh plus the three basis
//! vectors of the spherical frame at a chosen point, and blocks until the
//! viewer window is closed.

use std::cell::RefCell;
use std::f32::consts::PI as PI32;
use std::rc::Rc;

use kiss3d::camera::ArcBall;
use kiss3d::light::Light;
use kiss3d::nalgebra as na;
use kiss3d::resource::Mesh;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use log::debug;

use crate::basis::BasisFrame;

/// Samples per parameter for the unit-sphere tessellation
pub const SPHERE_SAMPLES: usize = 100;

const SHAFT_RADIUS: f32 = 0.015;
const SHAFT_LENGTH: f32 = 0.85;
const HEAD_RADIUS: f32 = 0.045;
const HEAD_LENGTH: f32 = 0.15;

const COLOR_E_R: (f32, f32, f32) = (0.9, 0.2, 0.2);
const COLOR_E_THETA: (f32, f32, f32) = (0.2, 0.8, 0.3);
const COLOR_E_PHI: (f32, f32, f32) = (0.25, 0.4, 0.95);

/// Tessellates the unit sphere as a parametric surface.
///
/// Samples u in [0, 2 pi] and v in [0, pi] with `samples` points each and
/// returns vertex coordinates, per-vertex normals, and triangle indices.
/// For a unit sphere the outward normal at a vertex is the vertex itself.
pub fn unit_sphere_geometry(
    samples: usize,
) -> (
    Vec<na::Point3<f32>>,
    Vec<na::Vector3<f32>>,
    Vec<na::Point3<u16>>,
) {
    let mut coords = Vec::with_capacity(samples * samples);
    let mut normals = Vec::with_capacity(samples * samples);

    for i in 0..samples {
        let v = PI32 * (i as f32) / ((samples - 1) as f32);
        let (sin_v, cos_v) = v.sin_cos();
        for j in 0..samples {
            let u = 2.0 * PI32 * (j as f32) / ((samples - 1) as f32);
            let (sin_u, cos_u) = u.sin_cos();

            let vertex = na::Vector3::new(sin_v * cos_u, sin_v * sin_u, cos_v);
            coords.push(na::Point3::from(vertex));
            normals.push(vertex);
        }
    }

    // Two triangles per grid quad
    let mut faces = Vec::with_capacity(2 * (samples - 1) * (samples - 1));
    for i in 0..samples - 1 {
        for j in 0..samples - 1 {
            let a = (i * samples + j) as u16;
            let b = a + samples as u16;
            faces.push(na::Point3::new(a, b, a + 1));
            faces.push(na::Point3::new(a + 1, b, b + 1));
        }
    }

    (coords, normals, faces)
}

/// Adds an arrow (cylinder shaft plus cone head) of unit total length from
/// `anchor` along the unit direction `dir`.
fn add_arrow(
    group: &mut SceneNode,
    anchor: na::Vector3<f32>,
    dir: na::Vector3<f32>,
    color: (f32, f32, f32),
) {
    // kiss3d primitives point along +y; rotation_between has no solution
    // for the antiparallel case, so fall back to a half-turn about x.
    let rotation = na::UnitQuaternion::rotation_between(&na::Vector3::y(), &dir)
        .unwrap_or_else(|| na::UnitQuaternion::from_axis_angle(&na::Vector3::x_axis(), PI32));

    let mut shaft = group.add_cylinder(SHAFT_RADIUS, SHAFT_LENGTH);
    shaft.set_color(color.0, color.1, color.2);
    shaft.set_local_rotation(rotation);
    shaft.set_local_translation(na::Translation3::from(anchor + dir * (SHAFT_LENGTH / 2.0)));

    let mut head = group.add_cone(HEAD_RADIUS, HEAD_LENGTH);
    head.set_color(color.0, color.1, color.2);
    head.set_local_rotation(rotation);
    head.set_local_translation(na::Translation3::from(
        anchor + dir * (SHAFT_LENGTH + HEAD_LENGTH / 2.0),
    ));
}

fn to_render_vector(v: &nalgebra::Vector3<f64>) -> na::Vector3<f32> {
    na::Vector3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Opens a window showing the unit sphere and the spherical basis frame at
/// `(theta, phi)`, and blocks until the window is closed.
///
/// The sphere surface is drawn slightly inside the unit radius with its
/// wireframe overlaid so the anchored arrows stay visible. Rendering faults
/// are not handled and propagate out of the window loop.
pub fn show_basis(theta: f64, phi: f64) {
    let frame = BasisFrame::at(theta, phi);
    let anchor = to_render_vector(&frame.e_r);

    let mut window = Window::new("Spherical basis frame");
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.07, 0.07, 0.09);

    let (coords, normals, faces) = unit_sphere_geometry(SPHERE_SAMPLES);
    debug!(
        "tessellated unit sphere: {} vertices, {} faces",
        coords.len(),
        faces.len()
    );
    let mesh = Rc::new(RefCell::new(Mesh::new(
        coords,
        faces,
        Some(normals),
        None,
        false,
    )));

    let mut surface = window.add_mesh(mesh.clone(), na::Vector3::new(0.995, 0.995, 0.995));
    surface.set_color(0.25, 0.55, 0.6);

    let mut wireframe = window.add_mesh(mesh, na::Vector3::new(1.0, 1.0, 1.0));
    wireframe.set_surface_rendering_activation(false);
    wireframe.set_lines_width(1.0);
    wireframe.set_color(0.12, 0.3, 0.34);

    let mut arrows = window.scene_mut().add_group();
    add_arrow(&mut arrows, anchor, to_render_vector(&frame.e_r), COLOR_E_R);
    add_arrow(
        &mut arrows,
        anchor,
        to_render_vector(&frame.e_theta),
        COLOR_E_THETA,
    );
    add_arrow(
        &mut arrows,
        anchor,
        to_render_vector(&frame.e_phi),
        COLOR_E_PHI,
    );

    let mut camera = ArcBall::new(na::Point3::new(2.6, 2.0, 2.6), na::Point3::origin());

    while window.render_with_camera(&mut camera) {}
}
