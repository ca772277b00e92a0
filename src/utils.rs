// utils.rs
// Random population seeding helpers for scenarios and tests. Callers seed
// `fastrand` explicitly when they need reproducible placement.

use crate::body::{Body, ParticleKind};
use crate::simulation::mid_plane;
use std::f32::consts::TAU;
use ultraviolet::Vec2;

/// Scatter `n` particles of one kind uniformly over the domain, each with a
/// random direction at the given speed. `energy` is only meaningful when
/// seeding photons.
pub fn scatter(
    kind: ParticleKind,
    n: usize,
    size: f32,
    speed: f32,
    energy: f32,
    mode_3d: bool,
) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    while bodies.len() < n {
        let pos = Vec2::new(fastrand::f32(), fastrand::f32()) * size;
        let z = if mode_3d {
            fastrand::f32() * size
        } else {
            mid_plane(size)
        };
        let a = fastrand::f32() * TAU;
        let (sin, cos) = a.sin_cos();
        let vel = Vec2::new(cos, sin) * speed;
        let vz = if mode_3d {
            (fastrand::f32() * 2.0 - 1.0) * speed
        } else {
            0.0
        };
        let body = match kind {
            ParticleKind::Photon => Body::photon(pos, z, vel, vz, energy),
            _ => Body::new(pos, z, vel, vz, kind),
        };
        bodies.push(body);
    }
    bodies
}

/// Place proton/electron pairs uniformly, the electron offset from its
/// proton by `spacing` along a random direction. Both start at rest.
pub fn hydrogen_pairs(pairs: usize, size: f32, spacing: f32) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(pairs * 2);
    for _ in 0..pairs {
        let pos = Vec2::new(fastrand::f32(), fastrand::f32()) * size;
        let a = fastrand::f32() * TAU;
        let (sin, cos) = a.sin_cos();
        let offset = Vec2::new(cos, sin) * spacing;
        let z = mid_plane(size);
        bodies.push(Body::proton(pos, z));
        bodies.push(Body::electron(pos + offset, z));
    }
    bodies
}
