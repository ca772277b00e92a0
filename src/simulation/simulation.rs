// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, run_steps, iterate)

use crate::body::Body;
use crate::config::{self, SimConfig};
use crate::diagnostics::EnergyBreakdown;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::{absorption, boundary, emission, forces};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// 3D mode decides how every stored z component is interpreted, so it
    /// can only be chosen while the universe holds no particles.
    #[error("3D mode must be selected before any particle is added")]
    ModeLockedByParticles,
}

/// The main simulation state and logic for the particle system.
///
/// Owns the particle collection exclusively; external readers may inspect
/// `bodies` between steps but never during one. A step is a single
/// synchronous pass with no suspension points.
pub struct Simulation {
    pub dt: f32,
    pub frame: usize,
    /// Edge length of the square/cubic domain; coordinates live in [0, size].
    pub size: f32,
    pub bodies: Vec<Body>,
    pub config: SimConfig,
    /// Explicit generator state so runs are seedable and replayable.
    pub rng: StdRng,
    mode_3d: bool,
}

impl Simulation {
    pub fn new(size: f32, coulomb_constant: f32) -> Self {
        let sim_config = SimConfig {
            coulomb_constant,
            ..SimConfig::default()
        };
        Self {
            dt: config::DEFAULT_DT,
            frame: 0,
            size,
            bodies: Vec::new(),
            config: sim_config,
            rng: StdRng::from_os_rng(),
            mode_3d: false,
        }
    }

    /// Replace the generator state for deterministic replay.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn mode_3d(&self) -> bool {
        self.mode_3d
    }

    /// Select 2D/3D interpretation of the z components. Rejected once any
    /// particle exists.
    pub fn set_mode_3d(&mut self, enabled: bool) -> Result<(), SimError> {
        if !self.bodies.is_empty() {
            return Err(SimError::ModeLockedByParticles);
        }
        self.mode_3d = enabled;
        Ok(())
    }

    /// Append one particle. Data-model invariants (positive mass for
    /// non-photons, zero mass and charge for photons) are the caller's
    /// responsibility; the core propagates whatever it is given.
    pub fn add_particle(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Drop everything that is not positively charged. The literal
    /// `charge > 0` predicate keeps protons only, so neutral photons are
    /// removed along with the electrons.
    pub fn remove_all_electrons(&mut self) {
        self.bodies.retain(|body| body.charge > 0.0);
    }

    pub fn remove_all_particles(&mut self) {
        self.bodies.clear();
    }

    pub fn particle_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn photon_count(&self) -> usize {
        self.bodies.iter().filter(|body| body.is_photon()).count()
    }

    pub fn energy_breakdown(&self) -> EnergyBreakdown {
        EnergyBreakdown::measure(self)
    }

    /// Advance one tick. Phase order is fixed: absorption, emission, force
    /// accumulation (pairwise then field), integration with boundary
    /// handling. Mutations happen in place; the collection is consistent
    /// again when this returns.
    pub fn step(&mut self) {
        let absorbed = absorption::absorb(self);
        if absorbed > 0 {
            debug!("frame {}: absorbed {} photons", self.frame, absorbed);
        }
        emission::emit(self);
        forces::accumulate(self);
        self.iterate();
        self.frame += 1;
    }

    pub fn run_steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Semi-implicit Euler integration plus boundary handling.
    pub fn iterate(&mut self) {
        let dt = self.dt;
        let size = self.size;
        let mode_3d = self.mode_3d;
        let static_protons = self.config.static_protons;
        for body in &mut self.bodies {
            if body.is_photon() {
                // Photons ignore forces entirely.
                body.pos += body.vel * dt;
                if mode_3d {
                    body.z += body.vz * dt;
                }
                body.age += 1;
                boundary::reflect(body, size, mode_3d);
                continue;
            }
            if body.fixed || (static_protons && body.charge > 0.0) {
                continue;
            }
            body.acc = body.force / body.mass;
            body.vel += body.acc * dt;
            body.pos += body.vel * dt;
            if mode_3d {
                body.az = body.fz / body.mass;
                body.vz += body.az * dt;
                body.z += body.vz * dt;
            }
            boundary::clamp(body, size, mode_3d);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(config::DEFAULT_DOMAIN_SIZE, config::DEFAULT_COULOMB_CONSTANT)
    }
}

/// Mid-plane z coordinate used for particles created in 2D mode.
pub fn mid_plane(size: f32) -> f32 {
    size * 0.5
}
