// body/types.rs
// Contains the ParticleKind enum, the Body struct, and related methods

use crate::config;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Proton,
    Electron,
    Photon,
}

impl ParticleKind {
    pub fn charge(&self) -> f32 {
        match self {
            ParticleKind::Proton => 1.0,
            ParticleKind::Electron => -1.0,
            ParticleKind::Photon => 0.0,
        }
    }

    pub fn mass(&self) -> f32 {
        match self {
            ParticleKind::Proton => config::PROTON_MASS,
            ParticleKind::Electron => config::ELECTRON_MASS,
            ParticleKind::Photon => 0.0,
        }
    }
}

/// One simulated body. Position and velocity are split into an in-plane
/// `Vec2` part and a scalar `z` part; the z components only move when the
/// simulation runs in 3D mode, otherwise `z` keeps its initial value
/// (conventionally the domain mid-plane).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub z: f32,
    pub vel: Vec2,
    pub vz: f32,
    /// Last applied acceleration, display-only.
    pub acc: Vec2,
    pub az: f32,
    /// Accumulated net force for the current step, display-only.
    pub force: Vec2,
    pub fz: f32,
    pub mass: f32,
    pub charge: f32,
    /// Never integrated when set.
    pub fixed: bool,
    pub kind: ParticleKind,
    /// Carried energy; meaningful only for photons.
    pub energy: f32,
    /// Step count since creation; only incremented for photons.
    pub age: u32,
    /// Monotonic: set on first emission, never cleared. Electrons only.
    pub has_emitted_photon: bool,
}

impl Body {
    pub fn new(pos: Vec2, z: f32, vel: Vec2, vz: f32, kind: ParticleKind) -> Self {
        Self {
            pos,
            z,
            vel,
            vz,
            acc: Vec2::zero(),
            az: 0.0,
            force: Vec2::zero(),
            fz: 0.0,
            mass: kind.mass(),
            charge: kind.charge(),
            fixed: false,
            kind,
            energy: 0.0,
            age: 0,
            has_emitted_photon: false,
        }
    }

    pub fn proton(pos: Vec2, z: f32) -> Self {
        Self::new(pos, z, Vec2::zero(), 0.0, ParticleKind::Proton)
    }

    pub fn electron(pos: Vec2, z: f32) -> Self {
        Self::new(pos, z, Vec2::zero(), 0.0, ParticleKind::Electron)
    }

    pub fn photon(pos: Vec2, z: f32, vel: Vec2, vz: f32, energy: f32) -> Self {
        let mut body = Self::new(pos, z, vel, vz, ParticleKind::Photon);
        body.energy = energy;
        body
    }

    pub fn is_photon(&self) -> bool {
        self.kind == ParticleKind::Photon
    }

    /// Speed magnitude; the z component only counts in 3D mode.
    pub fn speed(&self, mode_3d: bool) -> f32 {
        let mut sq = self.vel.mag_sq();
        if mode_3d {
            sq += self.vz * self.vz;
        }
        sq.sqrt()
    }

    pub fn kinetic_energy(&self, mode_3d: bool) -> f32 {
        let speed = self.speed(mode_3d);
        0.5 * self.mass * speed * speed
    }
}
