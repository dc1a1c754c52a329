//! Collision detection against the fixed bounding cube `[-2, 2]^3`
//!
//! A point has collided when any coordinate leaves the cube. Each violated
//! face is handled on its own: the point is tied to an anchor on that face
//! (the two other coordinates pass through unchanged) by a zero-rest-length
//! collision spring. A point past a corner therefore gets up to three
//! independent springs.

use super::springs::anchor_force;
use super::states::{NVec3, Particle};

pub const BOX_MIN: f64 = -2.0;
pub const BOX_MAX: f64 = 2.0;

/// One of the six faces of the bounding cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::NegX, Face::PosX, Face::NegY, Face::PosY, Face::NegZ, Face::PosZ];

    /// Coordinate axis (0 = x, 1 = y, 2 = z) this face is perpendicular to
    pub fn axis(self) -> usize {
        match self {
            Face::NegX | Face::PosX => 0,
            Face::NegY | Face::PosY => 1,
            Face::NegZ | Face::PosZ => 2,
        }
    }

    pub fn is_max_side(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }
}

/// Axis-aligned cube the jello lives in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: f64,
    pub max: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self { min: BOX_MIN, max: BOX_MAX }
    }
}

impl BoundingBox {
    /// Plane coordinate of `face`
    pub fn face_coord(&self, face: Face) -> f64 {
        if face.is_max_side() { self.max } else { self.min }
    }

    pub fn is_violated(&self, face: Face, p: &NVec3) -> bool {
        let c = p[face.axis()];
        if face.is_max_side() { c > self.max } else { c < self.min }
    }

    pub fn contains(&self, p: &NVec3) -> bool {
        !Face::ALL.iter().any(|&f| self.is_violated(f, p))
    }

    /// Faces `p` has crossed; empty when the point is inside
    pub fn violated_faces<'a>(&'a self, p: &'a NVec3) -> impl Iterator<Item = Face> + 'a {
        Face::ALL.into_iter().filter(move |&f| self.is_violated(f, p))
    }

    /// Point on `face` with the other two coordinates taken from `p`
    pub fn anchor_point(&self, face: Face, p: &NVec3) -> NVec3 {
        let mut anchor = *p;
        anchor[face.axis()] = self.face_coord(face);
        anchor
    }

    /// Sum of collision spring forces over all faces `p` has crossed
    pub fn collision_force(&self, k_collision: f64, d_collision: f64, p: &Particle) -> NVec3 {
        self.violated_faces(&p.x)
            .map(|face| anchor_force(k_collision, d_collision, p, &self.anchor_point(face, &p.x)))
            .sum()
    }

    /// Eight corners, bit 0 selects x, bit 1 y, bit 2 z
    pub fn corners(&self) -> [NVec3; 8] {
        std::array::from_fn(|c| {
            let pick = |bit: usize| if c & bit == 0 { self.min } else { self.max };
            NVec3::new(pick(1), pick(2), pick(4))
        })
    }
}
