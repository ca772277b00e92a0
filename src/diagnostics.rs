// diagnostics.rs
// Energy accounting for the particle collection. Used for invariant checks
// and progress reporting; never fed back into stepping.

use crate::config;
use crate::simulation::Simulation;

/// Snapshot of the total energy split by kind.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnergyBreakdown {
    /// Sum of 1/2 m v^2 over non-photons.
    pub kinetic: f32,
    /// Sum of stored photon energies.
    pub photon: f32,
    /// Electrostatic pair potential with linear softening. Deliberately not
    /// the integral of the quadratically softened force law.
    pub potential: f32,
    pub total: f32,
}

impl EnergyBreakdown {
    pub fn measure(sim: &Simulation) -> Self {
        let mode_3d = sim.mode_3d();
        let k_e = sim.config.coulomb_constant;
        let mut kinetic = 0.0;
        let mut photon = 0.0;
        for body in &sim.bodies {
            if body.is_photon() {
                photon += body.energy;
            } else {
                kinetic += body.kinetic_energy(mode_3d);
            }
        }
        let mut potential = 0.0;
        let n = sim.bodies.len();
        for i in 0..n {
            if sim.bodies[i].is_photon() {
                continue;
            }
            for j in (i + 1)..n {
                if sim.bodies[j].is_photon() {
                    continue;
                }
                let a = &sim.bodies[i];
                let b = &sim.bodies[j];
                let d = b.pos - a.pos;
                let dz = if mode_3d { b.z - a.z } else { 0.0 };
                let dist = (d.mag_sq() + dz * dz).sqrt();
                potential += (k_e * a.charge * b.charge) / (dist + config::POTENTIAL_SOFTENING);
            }
        }
        Self {
            kinetic,
            photon,
            potential,
            total: kinetic + photon + potential,
        }
    }
}
