// simulation/boundary.rs
// Domain boundary handling, applied per particle after position updates

use crate::body::Body;
use ultraviolet::Vec2;

fn reflect_axis(pos: &mut f32, vel: &mut f32, size: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = -*vel;
    } else if *pos > size {
        *pos = 2.0 * size - *pos;
        *vel = -*vel;
    }
}

/// Photon boundary policy: elastic reflection per axis, speed preserved.
pub fn reflect(body: &mut Body, size: f32, mode_3d: bool) {
    reflect_axis(&mut body.pos.x, &mut body.vel.x, size);
    reflect_axis(&mut body.pos.y, &mut body.vel.y, size);
    if mode_3d {
        reflect_axis(&mut body.z, &mut body.vz, size);
    }
}

/// Non-photon boundary policy: clamp to [0, size]. A hit on any axis stops
/// the whole particle, zeroing every velocity and diagnostic acceleration
/// component, not just the clamped axis.
pub fn clamp(body: &mut Body, size: f32, mode_3d: bool) {
    let mut hit = false;
    for pos in [&mut body.pos.x, &mut body.pos.y] {
        if *pos < 0.0 {
            *pos = 0.0;
            hit = true;
        } else if *pos > size {
            *pos = size;
            hit = true;
        }
    }
    if mode_3d {
        if body.z < 0.0 {
            body.z = 0.0;
            hit = true;
        } else if body.z > size {
            body.z = size;
            hit = true;
        }
    }
    if hit {
        body.vel = Vec2::zero();
        body.vz = 0.0;
        body.acc = Vec2::zero();
        body.az = 0.0;
    }
}
