// init_config.rs
// Handles loading and parsing the initial scenario from a TOML file

use crate::body::ParticleKind;
use crate::config;
use crate::simulation::{SimError, Simulation};
use crate::utils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown particle kind {0:?} (expected proton, electron, or photon)")]
    UnknownKind(String),
    #[error(transparent)]
    Sim(#[from] SimError),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    #[serde(default)]
    pub particles: Vec<ParticleGroup>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Domain edge length. Falls back to the default when omitted.
    pub size: Option<f32>,
    pub dt: Option<f32>,
    pub coulomb_constant: Option<f32>,
    pub mode_3d: Option<bool>,
    /// RNG seed for deterministic replay; also seeds particle placement.
    pub seed: Option<u64>,
    pub steps: Option<usize>,
    pub static_protons: Option<bool>,
    pub enable_strong_force: Option<bool>,
    pub strong_constant: Option<f32>,
    pub enable_gravity: Option<bool>,
    pub gravity_constant: Option<f32>,
    pub enable_ground_gravity: Option<bool>,
    pub ground_gravity_constant: Option<f32>,
    pub enable_emission: Option<bool>,
    pub one_photon_per_electron: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParticleGroup {
    pub count: usize,
    pub kind: String,
    /// Initial speed along a random direction; defaults to rest.
    pub speed: Option<f32>,
    /// Carried energy for photon groups.
    pub energy: Option<f32>,
    pub fixed: Option<bool>,
}

fn parse_kind(name: &str) -> Result<ParticleKind, ConfigError> {
    match name.to_ascii_lowercase().as_str() {
        "proton" => Ok(ParticleKind::Proton),
        "electron" => Ok(ParticleKind::Electron),
        "photon" => Ok(ParticleKind::Photon),
        _ => Err(ConfigError::UnknownKind(name.to_string())),
    }
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Number of steps the driver should run.
    pub fn steps(&self) -> usize {
        self.simulation
            .as_ref()
            .and_then(|s| s.steps)
            .unwrap_or(config::DEFAULT_STEPS)
    }

    /// Build a populated simulation from this scenario.
    pub fn build(&self) -> Result<Simulation, ConfigError> {
        let sim_section = self.simulation.as_ref();
        let size = sim_section
            .and_then(|s| s.size)
            .unwrap_or(config::DEFAULT_DOMAIN_SIZE);
        let coulomb = sim_section
            .and_then(|s| s.coulomb_constant)
            .unwrap_or(config::DEFAULT_COULOMB_CONSTANT);
        let mut sim = Simulation::new(size, coulomb);
        if let Some(section) = sim_section {
            if let Some(dt) = section.dt {
                sim.dt = dt;
            }
            if let Some(seed) = section.seed {
                sim.seed_rng(seed);
                fastrand::seed(seed);
            }
            if let Some(mode_3d) = section.mode_3d {
                sim.set_mode_3d(mode_3d)?;
            }
            let cfg = &mut sim.config;
            if let Some(v) = section.static_protons {
                cfg.static_protons = v;
            }
            if let Some(v) = section.enable_strong_force {
                cfg.enable_strong_force = v;
            }
            if let Some(v) = section.strong_constant {
                cfg.strong_constant = v;
            }
            if let Some(v) = section.enable_gravity {
                cfg.enable_gravity = v;
            }
            if let Some(v) = section.gravity_constant {
                cfg.gravity_constant = v;
            }
            if let Some(v) = section.enable_ground_gravity {
                cfg.enable_ground_gravity = v;
            }
            if let Some(v) = section.ground_gravity_constant {
                cfg.ground_gravity_constant = v;
            }
            if let Some(v) = section.enable_emission {
                cfg.enable_emission = v;
            }
            if let Some(v) = section.one_photon_per_electron {
                cfg.one_photon_per_electron = v;
            }
        }
        for group in &self.particles {
            let kind = parse_kind(&group.kind)?;
            let bodies = utils::scatter(
                kind,
                group.count,
                size,
                group.speed.unwrap_or(0.0),
                group.energy.unwrap_or(0.0),
                sim.mode_3d(),
            );
            let fixed = group.fixed.unwrap_or(false);
            for mut body in bodies {
                body.fixed = fixed;
                sim.add_particle(body);
            }
        }
        Ok(sim)
    }
}
