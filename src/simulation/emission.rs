// simulation/emission.rs
// Stochastic conversion of electron kinetic energy into new photons

use crate::body::{Body, ParticleKind};
use crate::config;
use crate::simulation::Simulation;
use log::debug;
use rand::Rng;

/// Deterministic part of an emission event: split off the fixed energy
/// fraction, slow the electron along its current direction, and build the
/// photon. The photon inherits the electron's post-reduction velocity.
pub(crate) fn emit_photon(electron: &mut Body, mode_3d: bool) -> Body {
    let speed = electron.speed(mode_3d);
    let kinetic = 0.5 * electron.mass * speed * speed;
    let photon_energy = config::EMISSION_ENERGY_RATIO * kinetic;
    let scale = (1.0 - config::EMISSION_ENERGY_RATIO).sqrt();
    electron.vel *= scale;
    electron.vz *= scale;
    electron.has_emitted_photon = true;
    Body::photon(
        electron.pos,
        electron.z,
        electron.vel,
        electron.vz,
        photon_energy,
    )
}

/// Emission sweep over every electron. The per-electron probability grows
/// linearly with speed past the threshold; one uniform draw decides each
/// candidate. New photons are buffered and appended only after the sweep so
/// they are never re-examined within the same step.
pub fn emit(sim: &mut Simulation) {
    if !sim.config.enable_emission {
        return;
    }
    let mode_3d = sim.mode_3d();
    let threshold = sim.config.emission_speed_threshold;
    let one_per_electron = sim.config.one_photon_per_electron;
    let mut spawned: Vec<Body> = Vec::new();
    for i in 0..sim.bodies.len() {
        {
            let body = &sim.bodies[i];
            if body.kind != ParticleKind::Electron {
                continue;
            }
            if one_per_electron && body.has_emitted_photon {
                continue;
            }
        }
        let speed = sim.bodies[i].speed(mode_3d);
        if speed < threshold {
            continue;
        }
        let probability = config::EMISSION_PROBABILITY_SCALE * speed / threshold;
        if sim.rng.random::<f32>() >= probability {
            continue;
        }
        spawned.push(emit_photon(&mut sim.bodies[i], mode_3d));
    }
    if !spawned.is_empty() {
        debug!("frame {}: emitted {} photons", sim.frame, spawned.len());
        sim.bodies.append(&mut spawned);
    }
}
