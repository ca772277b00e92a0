// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Force-Law Constants
// ====================
/// Quadratic softening added to d^2 in the Coulomb force denominator.
pub const FORCE_SOFTENING: f32 = 0.01;
/// Linear softening added to d in the potential-energy denominator.
/// Not the same shape as `FORCE_SOFTENING`: the reported potential is a
/// diagnostic and is not the exact integral of the softened force.
pub const POTENTIAL_SOFTENING: f32 = 0.01;
/// Fixed scale applied to the strong-force coefficient.
pub const STRONG_FORCE_SCALE: f32 = 1e-10;
/// Fixed scale applied to the gravity and ground-gravity coefficients.
pub const GRAVITY_SCALE: f32 = 1e-6;
/// Distance below which a field force is zeroed instead of computed.
pub const FIELD_GUARD_EPSILON: f32 = 1e-6;

// ====================
// Particle Parameters
// ====================
/// Electron mass in simulation units.
pub const ELECTRON_MASS: f32 = 1.0;
/// Proton mass in electron masses.
pub const PROTON_MASS: f32 = 1836.0;

// ====================
// Photon Parameters
// ====================
/// Scaling constant for the per-step emission probability.
pub const EMISSION_PROBABILITY_SCALE: f32 = 1e-5;
/// Fraction of the electron's kinetic energy carried away by an emitted photon.
pub const EMISSION_ENERGY_RATIO: f32 = 0.9;
/// Electron speed below which emission never occurs.
pub const DEFAULT_EMISSION_SPEED_THRESHOLD: f32 = 0.01;
/// Photon-electron distance below which absorption can occur.
pub const DEFAULT_ABSORPTION_DISTANCE: f32 = 0.05;
/// Minimum photon age (in steps) before it can be absorbed.
pub const DEFAULT_ABSORPTION_MIN_AGE: u32 = 100;

// ====================
// Simulation Parameters
// ====================
/// Default edge length of the square/cubic domain (normalized units).
pub const DEFAULT_DOMAIN_SIZE: f32 = 1.0;
/// Default integration timestep.
pub const DEFAULT_DT: f32 = 0.1;
/// Default electrostatic coefficient.
pub const DEFAULT_COULOMB_CONSTANT: f32 = 1.0;
/// Default strong-force coefficient (scaled by `STRONG_FORCE_SCALE`).
pub const DEFAULT_STRONG_CONSTANT: f32 = 10.0;
/// Default central-gravity coefficient (scaled by `GRAVITY_SCALE`).
pub const DEFAULT_GRAVITY_CONSTANT: f32 = 1.0;
/// Default ground-gravity coefficient (scaled by `GRAVITY_SCALE`).
pub const DEFAULT_GROUND_GRAVITY_CONSTANT: f32 = 1.0;
/// Default number of steps run by the headless driver.
pub const DEFAULT_STEPS: usize = 10_000;

/// Runtime-tunable simulation parameters.
///
/// Constructed with defaults and adjusted field by field; the emission and
/// absorption thresholds are fixed for the lifetime of a run by convention.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub coulomb_constant: f32,
    pub enable_strong_force: bool,
    pub strong_constant: f32,
    pub enable_gravity: bool,
    pub gravity_constant: f32,
    pub enable_ground_gravity: bool,
    pub ground_gravity_constant: f32,
    /// Protons are never integrated when set.
    pub static_protons: bool,
    /// Master switch for photon emission.
    pub enable_emission: bool,
    /// Restrict each electron to a single emission over its lifetime.
    pub one_photon_per_electron: bool,
    pub emission_speed_threshold: f32,
    pub absorption_distance: f32,
    pub absorption_min_age: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            coulomb_constant: DEFAULT_COULOMB_CONSTANT,
            enable_strong_force: false,
            strong_constant: DEFAULT_STRONG_CONSTANT,
            enable_gravity: false,
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            enable_ground_gravity: false,
            ground_gravity_constant: DEFAULT_GROUND_GRAVITY_CONSTANT,
            static_protons: false,
            enable_emission: false,
            one_photon_per_electron: false,
            emission_speed_threshold: DEFAULT_EMISSION_SPEED_THRESHOLD,
            absorption_distance: DEFAULT_ABSORPTION_DISTANCE,
            absorption_min_age: DEFAULT_ABSORPTION_MIN_AGE,
        }
    }
}
