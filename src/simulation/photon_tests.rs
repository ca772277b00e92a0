// Emission and absorption tests: gating, energy exchange, removal order

use super::{absorption, emission};
use super::simulation::Simulation;
use crate::body::Body;
use crate::config;
use ultraviolet::Vec2;

fn seeded_sim() -> Simulation {
    let mut sim = Simulation::new(1.0, 0.0);
    sim.seed_rng(42);
    sim
}

fn fast_electron(speed: f32) -> Body {
    let mut e = Body::electron(Vec2::new(0.5, 0.5), 0.5);
    e.vel = Vec2::new(speed, 0.0);
    e
}

#[test]
fn disabled_emission_never_creates_photons() {
    let mut sim = seeded_sim();
    sim.config.enable_emission = false;
    // Saturated probability if emission were on.
    sim.config.emission_speed_threshold = config::EMISSION_PROBABILITY_SCALE;
    sim.add_particle(fast_electron(1.0));
    sim.run_steps(50);
    assert_eq!(sim.photon_count(), 0);
}

#[test]
fn slow_electrons_never_emit() {
    let mut sim = seeded_sim();
    sim.config.enable_emission = true;
    sim.config.emission_speed_threshold = 10.0;
    sim.add_particle(fast_electron(1.0));
    sim.run_steps(200);
    assert_eq!(sim.photon_count(), 0);
}

#[test]
fn saturated_probability_emits_every_step() {
    // threshold = probability scale makes p = speed >= 1, beating any draw.
    let mut sim = seeded_sim();
    sim.config.enable_emission = true;
    sim.config.emission_speed_threshold = config::EMISSION_PROBABILITY_SCALE;
    sim.add_particle(fast_electron(1.0));
    emission::emit(&mut sim);
    assert_eq!(sim.photon_count(), 1);
    assert!(sim.bodies[0].has_emitted_photon);
}

#[test]
fn one_photon_per_electron_is_permanent() {
    let mut sim = seeded_sim();
    sim.config.enable_emission = true;
    sim.config.one_photon_per_electron = true;
    sim.config.emission_speed_threshold = config::EMISSION_PROBABILITY_SCALE;
    sim.add_particle(fast_electron(1.0));
    sim.run_steps(100);
    assert_eq!(sim.photon_count(), 1, "flagged electron must never emit again");
}

#[test]
fn emission_splits_energy_at_the_fixed_ratio() {
    let mut electron = fast_electron(2.0);
    let kinetic_before = electron.kinetic_energy(false);
    let photon = emission::emit_photon(&mut electron, false);

    assert_eq!(photon.energy, config::EMISSION_ENERGY_RATIO * kinetic_before);
    let expected_speed = 2.0 * (1.0 - config::EMISSION_ENERGY_RATIO).sqrt();
    assert!((electron.speed(false) - expected_speed).abs() < 1e-6);
    // Direction preserved, photon co-moving with the slowed electron.
    assert!(electron.vel.x > 0.0);
    assert_eq!(electron.vel.y, 0.0);
    assert_eq!(photon.vel.x, electron.vel.x);
    assert_eq!(photon.pos, electron.pos);
    assert!(electron.has_emitted_photon);
}

fn aged_photon_at(pos: Vec2, energy: f32, age: u32) -> Body {
    let mut p = Body::photon(pos, 0.5, Vec2::zero(), 0.0, energy);
    p.age = age;
    p
}

#[test]
fn young_photon_is_never_absorbed_even_at_zero_distance() {
    let mut sim = seeded_sim();
    sim.config.absorption_min_age = 5;
    sim.add_particle(Body::electron(Vec2::new(0.5, 0.5), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.5, 0.5), 1.0, 4));
    let removed = absorption::absorb(&mut sim);
    assert_eq!(removed, 0);
    assert_eq!(sim.photon_count(), 1);
}

#[test]
fn distant_photon_is_never_absorbed_regardless_of_age() {
    let mut sim = seeded_sim();
    sim.config.absorption_distance = 0.05;
    sim.add_particle(Body::electron(Vec2::new(0.1, 0.1), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.9, 0.9), 1.0, u32::MAX));
    assert_eq!(absorption::absorb(&mut sim), 0);
    assert_eq!(sim.photon_count(), 1);
}

#[test]
fn absorption_transfers_all_photon_energy() {
    let mut sim = seeded_sim();
    sim.config.absorption_min_age = 0;
    let mut electron = Body::electron(Vec2::new(0.5, 0.5), 0.5);
    electron.vel = Vec2::new(0.1, 0.0);
    sim.add_particle(electron);
    sim.add_particle(aged_photon_at(Vec2::new(0.51, 0.5), 2.0, 10));

    let kinetic_before = sim.bodies[0].kinetic_energy(false);
    let removed = absorption::absorb(&mut sim);
    assert_eq!(removed, 1);
    assert_eq!(sim.photon_count(), 0);

    let kinetic_after = sim.bodies[0].kinetic_energy(false);
    assert!((kinetic_after - (kinetic_before + 2.0)).abs() < 1e-5);
    // Direction preserved for a moving electron.
    assert!(sim.bodies[0].vel.x > 0.0);
    assert_eq!(sim.bodies[0].vel.y, 0.0);
}

#[test]
fn absorption_at_rest_draws_a_random_planar_direction() {
    let mut sim = seeded_sim();
    sim.config.absorption_min_age = 0;
    sim.add_particle(Body::electron(Vec2::new(0.5, 0.5), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.5, 0.5), 0.5, 10));

    assert_eq!(absorption::absorb(&mut sim), 1);
    let electron = &sim.bodies[0];
    let expected_speed = (2.0 * 0.5 / electron.mass).sqrt();
    assert!((electron.speed(false) - expected_speed).abs() < 1e-6);
    assert_eq!(electron.vz, 0.0, "2D redirection stays in the plane");
}

#[test]
fn each_photon_feeds_at_most_one_electron() {
    let mut sim = seeded_sim();
    sim.config.absorption_min_age = 0;
    sim.add_particle(Body::electron(Vec2::new(0.50, 0.5), 0.5));
    sim.add_particle(Body::electron(Vec2::new(0.51, 0.5), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.505, 0.5), 1.0, 10));

    assert_eq!(absorption::absorb(&mut sim), 1);
    // First qualifying electron (lowest index) takes the whole quantum.
    assert!(sim.bodies[0].speed(false) > 0.0);
    assert_eq!(sim.bodies[1].speed(false), 0.0);
}

#[test]
fn multiple_removals_keep_surviving_indices_intact() {
    let mut sim = seeded_sim();
    sim.config.absorption_min_age = 0;
    sim.add_particle(Body::electron(Vec2::new(0.2, 0.2), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.2, 0.2), 1.0, 10));
    sim.add_particle(Body::proton(Vec2::new(0.9, 0.9), 0.5));
    sim.add_particle(aged_photon_at(Vec2::new(0.21, 0.2), 1.0, 10));

    assert_eq!(absorption::absorb(&mut sim), 2);
    assert_eq!(sim.photon_count(), 0);
    assert_eq!(sim.particle_count(), 2);
    // The untouched proton survives with its position intact.
    assert_eq!(sim.bodies[1].pos, Vec2::new(0.9, 0.9));
}
