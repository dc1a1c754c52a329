//! External force field sampled on a regular grid
//!
//! The field stores `R^3` force vectors covering the bounding cube, sample
//! `(i, j, k)` sitting at `-2 + 4 i / (R - 1)` along x (same for y and z) and
//! stored at `i * R * R + j * R + k`. Lookups clamp the query point to the
//! cube and blend the eight surrounding samples trilinearly.

use super::collision::BoundingBox;
use super::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    resolution: usize,
    data: Vec<NVec3>,
}

impl ForceField {
    /// `None` unless `data` holds exactly `resolution^3` samples and `resolution > 0`
    pub fn new(resolution: usize, data: Vec<NVec3>) -> Option<Self> {
        (resolution > 0 && resolution.checked_pow(3) == Some(data.len())).then_some(Self { resolution, data })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn data(&self) -> &[NVec3] {
        &self.data
    }

    pub fn sample(&self, i: usize, j: usize, k: usize) -> NVec3 {
        let r = self.resolution;
        self.data[(i * r + j) * r + k]
    }

    /// Trilinear interpolation of the field at `p`, clamped to `bbox`
    pub fn force_at(&self, bbox: &BoundingBox, p: &NVec3) -> NVec3 {
        let r = self.resolution;
        if r == 1 {
            return self.data[0];
        }

        let cells = (r - 1) as f64;
        let mut base = [0usize; 3];
        let mut frac = [0f64; 3];
        for axis in 0..3 {
            let c = p[axis].clamp(bbox.min, bbox.max);
            let u = (c - bbox.min) / (bbox.max - bbox.min) * cells;
            // the max face maps onto the last cell with fraction 1
            let cell = (u.floor() as usize).min(r - 2);
            base[axis] = cell;
            frac[axis] = u - cell as f64;
        }

        let weight = |bit: usize, t: f64| if bit == 1 { t } else { 1.0 - t };
        let mut f = NVec3::zeros();
        for corner in 0..8usize {
            let (di, dj, dk) = (corner & 1, (corner >> 1) & 1, (corner >> 2) & 1);
            let w = weight(di, frac[0]) * weight(dj, frac[1]) * weight(dk, frac[2]);
            f += self.sample(base[0] + di, base[1] + dj, base[2] + dk) * w;
        }
        f
    }
}
