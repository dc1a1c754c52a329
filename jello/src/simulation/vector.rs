//! Point/vector primitives used by the force model.
//!
//! Thin wrappers over `nalgebra` that pin down the zero-length convention:
//! normalizing the zero vector gives the zero vector instead of NaN.

use super::states::NVec3;

#[inline]
pub fn difference(a: &NVec3, b: &NVec3) -> NVec3 {
    a - b
}

#[inline]
pub fn sum(a: &NVec3, b: &NVec3) -> NVec3 {
    a + b
}

#[inline]
pub fn scale(v: &NVec3, s: f64) -> NVec3 {
    v * s
}

#[inline]
pub fn dot(a: &NVec3, b: &NVec3) -> f64 {
    a.dot(b)
}

#[inline]
pub fn magnitude(v: &NVec3) -> f64 {
    dot(v, v).sqrt()
}

/// `v / |v|`, or the zero vector when `|v| == 0`
#[inline]
pub fn normalize(v: &NVec3) -> NVec3 {
    let len = magnitude(v);
    if len == 0.0 {
        NVec3::zeros()
    } else {
        scale(v, 1.0 / len)
    }
}
