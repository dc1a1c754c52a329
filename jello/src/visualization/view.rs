//! Read-only view of a world for renderers
//!
//! A renderer draws the springs of the jello as line segments and the
//! bounding cube as a wireframe. Which spring categories are shown is a
//! display choice, so the toggles live in `ViewConfig` and never touch
//! the simulation.

use crate::simulation::collision::BoundingBox;
use crate::simulation::states::{NVec3, World};
use crate::simulation::topology::{unique_springs, SpringKind};

/// Visibility toggles for the spring categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub structural: bool,
    pub shear: bool,
    pub bend: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            structural: true,
            shear: false,
            bend: false,
        }
    }
}

impl ViewConfig {
    pub fn shows(&self, kind: SpringKind) -> bool {
        match kind {
            SpringKind::Structural => self.structural,
            SpringKind::ShearSide | SpringKind::ShearMain => self.shear,
            SpringKind::Bend => self.bend,
        }
    }

    /// Flip visibility of the category `kind` belongs to
    pub fn toggle(&mut self, kind: SpringKind) {
        match kind {
            SpringKind::Structural => self.structural = !self.structural,
            SpringKind::ShearSide | SpringKind::ShearMain => self.shear = !self.shear,
            SpringKind::Bend => self.bend = !self.bend,
        }
    }
}

/// A line segment to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: NVec3,
    pub b: NVec3,
    pub kind: SpringKind,
}

/// Current spring segments of `world` in the categories `view` enables, each spring once
pub fn visible_edges(world: &World, view: &ViewConfig) -> Vec<Edge> {
    let pos = &world.state.positions;
    unique_springs()
        .filter(|(_, _, kind)| view.shows(*kind))
        .map(|(a, b, kind)| Edge { a: pos[a], b: pos[b], kind })
        .collect()
}

/// The 12 edges of the bounding cube as corner pairs
pub fn bounding_box_edges(bbox: &BoundingBox) -> [(NVec3, NVec3); 12] {
    let c = bbox.corners();
    let mut edges = [(NVec3::zeros(), NVec3::zeros()); 12];
    let mut n = 0;
    // corners differing in exactly one bit share an edge
    for a in 0..8 {
        for bit in [1, 2, 4] {
            if a & bit == 0 {
                edges[n] = (c[a], c[a | bit]);
                n += 1;
            }
        }
    }
    edges
}
