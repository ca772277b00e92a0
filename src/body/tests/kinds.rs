// Particle-kind invariant tests for Body construction

use crate::body::{Body, ParticleKind};
use crate::config;
use ultraviolet::Vec2;

#[test]
fn proton_has_unit_positive_charge_and_proton_mass() {
    let p = Body::proton(Vec2::new(0.3, 0.4), 0.5);
    assert_eq!(p.charge, 1.0);
    assert_eq!(p.mass, config::PROTON_MASS);
    assert!(!p.is_photon());
    assert!(!p.fixed);
}

#[test]
fn electron_has_unit_negative_charge() {
    let e = Body::electron(Vec2::zero(), 0.5);
    assert_eq!(e.charge, -1.0);
    assert_eq!(e.mass, config::ELECTRON_MASS);
    assert!(!e.has_emitted_photon);
}

#[test]
fn photon_is_massless_neutral_and_newborn() {
    let ph = Body::photon(Vec2::zero(), 0.5, Vec2::new(0.1, 0.0), 0.0, 2.5);
    assert!(ph.is_photon());
    assert_eq!(ph.mass, 0.0);
    assert_eq!(ph.charge, 0.0);
    assert_eq!(ph.energy, 2.5);
    assert_eq!(ph.age, 0);
}

#[test]
fn speed_counts_z_only_in_3d() {
    let mut e = Body::electron(Vec2::zero(), 0.5);
    e.vel = Vec2::new(3.0, 0.0);
    e.vz = 4.0;
    assert_eq!(e.speed(false), 3.0);
    assert_eq!(e.speed(true), 5.0);
}

#[test]
fn kinetic_energy_matches_half_m_v_squared() {
    let mut e = Body::electron(Vec2::zero(), 0.5);
    e.vel = Vec2::new(0.0, 2.0);
    assert_eq!(e.kinetic_energy(false), 0.5 * config::ELECTRON_MASS * 4.0);
}

#[test]
fn kind_helpers_agree_with_constructors() {
    assert_eq!(ParticleKind::Proton.charge(), 1.0);
    assert_eq!(ParticleKind::Electron.charge(), -1.0);
    assert_eq!(ParticleKind::Photon.charge(), 0.0);
    assert_eq!(ParticleKind::Photon.mass(), 0.0);
}
