//! Damped spring force model
//!
//! Every spring in the cube (structural, shear, bend and collision) is a
//! Hooke spring plus a damper acting along the spring axis. The separation
//! vector `l` always points from the neighbor (or anchor) to the point the
//! force acts on.
//!
//! Coincident points (`|l| == 0`) have no defined axis; both terms return the
//! zero vector in that case.

use super::states::{NVec3, Particle};
use super::vector::{difference, dot, magnitude, normalize, scale, sum};

/// Stiffness, damping and rest length of one spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub k: f64, // hook coefficient
    pub d: f64, // damping coefficient
    pub rest_length: f64,
}

impl Spring {
    pub fn new(k: f64, d: f64, rest_length: f64) -> Self {
        Self { k, d, rest_length }
    }

    /// Force on `a` from the spring connecting it to `b`
    pub fn force(&self, a: &Particle, b: &Particle) -> NVec3 {
        let l = difference(&a.x, &b.x);
        let v_diff = difference(&a.v, &b.v);
        sum(
            &hook_force(self.k, &l, self.rest_length),
            &damp_force(self.d, &l, &v_diff),
        )
    }

    /// Elastic energy stored at separation `l`
    pub fn potential(&self, l: &NVec3) -> f64 {
        let stretch = magnitude(l) - self.rest_length;
        0.5 * self.k * stretch * stretch
    }
}

/// `-k (|l| - r) l/|l|`
pub fn hook_force(k_hook: f64, l: &NVec3, rest_length: f64) -> NVec3 {
    let len = magnitude(l);
    if len == 0.0 {
        return NVec3::zeros();
    }
    scale(&normalize(l), -k_hook * (len - rest_length))
}

/// `-kd ((v_diff . l) / |l|) l/|l|`
pub fn damp_force(k_damp: f64, l: &NVec3, v_diff: &NVec3) -> NVec3 {
    let len = magnitude(l);
    if len == 0.0 {
        return NVec3::zeros();
    }
    scale(&normalize(l), -k_damp * dot(v_diff, l) / len)
}

/// Zero-rest-length spring between a moving point and a static anchor
pub fn anchor_force(k: f64, d: f64, p: &Particle, anchor: &NVec3) -> NVec3 {
    Spring::new(k, d, 0.0).force(
        p,
        &Particle {
            x: *anchor,
            v: NVec3::zeros(),
        },
    )
}
