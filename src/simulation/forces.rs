//! Force calculation functions for the particle simulation.
//!
//! Provides routines for computing pairwise electrostatic and strong forces
//! between bodies, per-particle field forces (central gravity and ground
//! gravity), and the per-step accumulation pass used by the simulation loop.
//! Photons participate in none of these.

use crate::body::Body;
use crate::config::{self, SimConfig};
use crate::simulation::Simulation;
use ultraviolet::Vec2;

/// In-plane and z separation of two bodies. The z term is zero outside 3D
/// mode so z never contributes to distances in 2D.
fn separation(p1: &Body, p2: &Body, mode_3d: bool) -> (Vec2, f32) {
    let d = p2.pos - p1.pos;
    let dz = if mode_3d { p2.z - p1.z } else { 0.0 };
    (d, dz)
}

/// Coulomb force on `p1` due to `p2` with quadratic softening.
///
/// Opposite charges yield a positive magnitude along the p1->p2 unit vector
/// (attraction); like charges repel. Callers never invoke this at zero
/// separation.
pub fn coulomb(p1: &Body, p2: &Body, k_e: f32, mode_3d: bool) -> (Vec2, f32) {
    let (d, dz) = separation(p1, p2, mode_3d);
    let dist_sq = d.mag_sq() + dz * dz;
    let dist = dist_sq.sqrt();
    let magnitude = -(k_e * p1.charge * p2.charge) / (dist_sq + config::FORCE_SOFTENING);
    let scale = magnitude / dist;
    (d * scale, dz * scale)
}

/// Short-range repulsive strong force on `p1` due to `p2`.
///
/// Falls off as 1/d^4 with no softening; the pairwise loop guarantees it is
/// never evaluated at zero separation.
pub fn strong(p1: &Body, p2: &Body, k_s: f32, mode_3d: bool) -> (Vec2, f32) {
    let (d, dz) = separation(p1, p2, mode_3d);
    let dist_sq = d.mag_sq() + dz * dz;
    let dist = dist_sq.sqrt();
    let magnitude = (k_s * config::STRONG_FORCE_SCALE) / (dist_sq * dist_sq);
    let scale = -magnitude / dist;
    (d * scale, dz * scale)
}

/// Combined pairwise force on `p1` due to `p2` for the current configuration.
pub fn pair_force(p1: &Body, p2: &Body, config: &SimConfig, mode_3d: bool) -> (Vec2, f32) {
    let (mut f, mut fz) = coulomb(p1, p2, config.coulomb_constant, mode_3d);
    if config.enable_strong_force {
        let (s, sz) = strong(p1, p2, config.strong_constant, mode_3d);
        f += s;
        fz += sz;
    }
    (f, fz)
}

/// Attraction toward the domain center. Zero when the body sits within
/// `FIELD_GUARD_EPSILON` of the center.
pub fn gravity(body: &Body, size: f32, k_g: f32, mode_3d: bool) -> (Vec2, f32) {
    let center = size * 0.5;
    let d = Vec2::new(center - body.pos.x, center - body.pos.y);
    let dz = if mode_3d { center - body.z } else { 0.0 };
    let dist = (d.mag_sq() + dz * dz).sqrt();
    if dist <= config::FIELD_GUARD_EPSILON {
        return (Vec2::zero(), 0.0);
    }
    let magnitude = body.mass * k_g * config::GRAVITY_SCALE;
    let scale = magnitude / dist;
    (d * scale, dz * scale)
}

/// Attraction toward the plane y = size; only the y component is non-zero.
/// Zero when the body sits within `FIELD_GUARD_EPSILON` of the plane.
pub fn ground_gravity(body: &Body, size: f32, k_gg: f32) -> f32 {
    if (size - body.pos.y).abs() <= config::FIELD_GUARD_EPSILON {
        return 0.0;
    }
    body.mass * k_gg * config::GRAVITY_SCALE
}

/// Reset the diagnostic force fields and accumulate all forces for the
/// current step: pairwise over non-photon pairs with Newton's third law,
/// then the enabled field forces.
pub fn accumulate(sim: &mut Simulation) {
    for body in &mut sim.bodies {
        body.force = Vec2::zero();
        body.fz = 0.0;
    }

    let mode_3d = sim.mode_3d();
    let n = sim.bodies.len();
    for i in 0..n {
        if sim.bodies[i].is_photon() {
            continue;
        }
        for j in (i + 1)..n {
            if sim.bodies[j].is_photon() {
                continue;
            }
            let (f, fz) = pair_force(&sim.bodies[i], &sim.bodies[j], &sim.config, mode_3d);
            sim.bodies[i].force += f;
            sim.bodies[i].fz += fz;
            sim.bodies[j].force -= f;
            sim.bodies[j].fz -= fz;
        }
    }

    if sim.config.enable_gravity {
        let k_g = sim.config.gravity_constant;
        let size = sim.size;
        for body in &mut sim.bodies {
            if body.is_photon() {
                continue;
            }
            let (g, gz) = gravity(body, size, k_g, mode_3d);
            body.force += g;
            body.fz += gz;
        }
    }
    if sim.config.enable_ground_gravity {
        let k_gg = sim.config.ground_gravity_constant;
        let size = sim.size;
        for body in &mut sim.bodies {
            if body.is_photon() {
                continue;
            }
            body.force.y += ground_gravity(body, size, k_gg);
        }
    }
}
