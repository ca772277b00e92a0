// simulation/absorption.rs
// Photon-electron collision detection and energy transfer

use crate::body::{Body, ParticleKind};
use crate::simulation::Simulation;
use rand::Rng;
use std::f32::consts::TAU;
use ultraviolet::Vec2;

/// Add `energy` to the electron's kinetic energy, preserving its direction
/// of motion. An electron at rest has no direction, so one is drawn
/// uniformly instead: inverse-cosine polar sampling over the full sphere in
/// 3D, in-plane (fixed polar angle pi/2) in 2D.
pub(crate) fn deposit(electron: &mut Body, energy: f32, mode_3d: bool, rng: &mut impl Rng) {
    let speed = electron.speed(mode_3d);
    let kinetic = 0.5 * electron.mass * speed * speed + energy;
    let new_speed = (2.0 * kinetic / electron.mass).sqrt();
    if speed > 0.0 {
        let scale = new_speed / speed;
        electron.vel *= scale;
        electron.vz *= scale;
        return;
    }
    let azimuth = rng.random::<f32>() * TAU;
    let (sin_a, cos_a) = azimuth.sin_cos();
    if mode_3d {
        let polar = (1.0 - 2.0 * rng.random::<f32>()).acos();
        let (sin_p, cos_p) = polar.sin_cos();
        electron.vel = Vec2::new(sin_p * cos_a, sin_p * sin_a) * new_speed;
        electron.vz = new_speed * cos_p;
    } else {
        electron.vel = Vec2::new(cos_a, sin_a) * new_speed;
        electron.vz = 0.0;
    }
}

/// Absorption sweep over every (photon, electron) pair. A photon must be at
/// least `absorption_min_age` steps old and within `absorption_distance` of
/// an electron; the first qualifying electron takes the whole energy and the
/// photon is scheduled for removal, at most once per step. Removals are
/// applied after the sweep in descending index order so earlier indices stay
/// valid. Returns the number of photons removed.
pub fn absorb(sim: &mut Simulation) -> usize {
    let mode_3d = sim.mode_3d();
    let min_age = sim.config.absorption_min_age;
    let max_dist = sim.config.absorption_distance;
    let n = sim.bodies.len();
    let mut removals: Vec<usize> = Vec::new();
    for pi in 0..n {
        {
            let photon = &sim.bodies[pi];
            if !photon.is_photon() || photon.age < min_age {
                continue;
            }
        }
        let (p_pos, p_z, p_energy) = {
            let photon = &sim.bodies[pi];
            (photon.pos, photon.z, photon.energy)
        };
        for ei in 0..n {
            if sim.bodies[ei].kind != ParticleKind::Electron {
                continue;
            }
            let d = sim.bodies[ei].pos - p_pos;
            let dz = if mode_3d { sim.bodies[ei].z - p_z } else { 0.0 };
            let dist = (d.mag_sq() + dz * dz).sqrt();
            if dist >= max_dist {
                continue;
            }
            deposit(&mut sim.bodies[ei], p_energy, mode_3d, &mut sim.rng);
            removals.push(pi);
            break;
        }
    }
    for &index in removals.iter().rev() {
        sim.bodies.remove(index);
    }
    removals.len()
}
