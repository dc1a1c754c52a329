//! # Lattice neighbor topology
//!
//! Every lattice point is tied to its neighbors by three categories of springs:
//!
//! - **Structural**: the 6 face-adjacent points, rest length `h`
//! - **Shear**: the 12 face-diagonal points (rest `sqrt(2) h`) and the
//!   8 space-diagonal points (rest `sqrt(3) h`)
//! - **Bend**: the 6 points two cells away along an axis, rest length `2 h`
//!
//! where `h = 1/7` is the spacing of the unit cube at rest. An offset only
//! yields a neighbor when the shifted index stays inside `[0, 7]^3`, so points
//! on faces, edges and corners have fewer springs than interior ones.
//!
//! Neighbor sets are returned in a fixed-capacity [`NeighborList`] so the
//! force loop never allocates.

use super::states::{LatticeIndex, LATTICE_DIM};

/// Rest spacing between face-adjacent points of the unit cube
pub const LATTICE_SPACING: f64 = 1.0 / (LATTICE_DIM - 1) as f64;

/// Upper bound on neighbors of a single point (6 + 12 + 8 + 6)
pub const MAX_NEIGHBORS: usize = 32;

pub const STRUCTURAL_OFFSETS: [[isize; 3]; 6] = [
    [1, 0, 0], [-1, 0, 0],
    [0, 1, 0], [0, -1, 0],
    [0, 0, 1], [0, 0, -1],
];

/// Face diagonals: two axes move by one, the third stays
pub const SHEAR_SIDE_OFFSETS: [[isize; 3]; 12] = [
    [1, 1, 0], [1, -1, 0], [-1, 1, 0], [-1, -1, 0],
    [1, 0, 1], [1, 0, -1], [-1, 0, 1], [-1, 0, -1],
    [0, 1, 1], [0, 1, -1], [0, -1, 1], [0, -1, -1],
];

/// Space diagonals: all three axes move by one
pub const SHEAR_MAIN_OFFSETS: [[isize; 3]; 8] = [
    [1, 1, 1], [1, 1, -1], [1, -1, 1], [1, -1, -1],
    [-1, 1, 1], [-1, 1, -1], [-1, -1, 1], [-1, -1, -1],
];

pub const BEND_OFFSETS: [[isize; 3]; 6] = [
    [2, 0, 0], [-2, 0, 0],
    [0, 2, 0], [0, -2, 0],
    [0, 0, 2], [0, 0, -2],
];

/// Category of a lattice spring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpringKind {
    #[default]
    Structural,
    ShearSide,
    ShearMain,
    Bend,
}

impl SpringKind {
    pub const ALL: [SpringKind; 4] = [
        SpringKind::Structural,
        SpringKind::ShearSide,
        SpringKind::ShearMain,
        SpringKind::Bend,
    ];

    pub fn offsets(self) -> &'static [[isize; 3]] {
        match self {
            SpringKind::Structural => &STRUCTURAL_OFFSETS,
            SpringKind::ShearSide => &SHEAR_SIDE_OFFSETS,
            SpringKind::ShearMain => &SHEAR_MAIN_OFFSETS,
            SpringKind::Bend => &BEND_OFFSETS,
        }
    }

    pub fn rest_length(self) -> f64 {
        match self {
            SpringKind::Structural => LATTICE_SPACING,
            SpringKind::ShearSide => std::f64::consts::SQRT_2 * LATTICE_SPACING,
            SpringKind::ShearMain => 3f64.sqrt() * LATTICE_SPACING,
            SpringKind::Bend => 2.0 * LATTICE_SPACING,
        }
    }

    pub fn is_shear(self) -> bool {
        matches!(self, SpringKind::ShearSide | SpringKind::ShearMain)
    }
}

/// A valid neighbor of some lattice point and the spring joining them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbor {
    pub index: LatticeIndex,
    pub kind: SpringKind,
}

/// Stack-allocated list of at most [`MAX_NEIGHBORS`] neighbors
#[derive(Debug, Clone)]
pub struct NeighborList {
    items: [Neighbor; MAX_NEIGHBORS],
    len: usize,
}

impl NeighborList {
    fn new() -> Self {
        Self {
            items: [Neighbor::default(); MAX_NEIGHBORS],
            len: 0,
        }
    }

    fn push(&mut self, n: Neighbor) {
        self.items[self.len] = n;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Neighbor] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
        self.as_slice().iter()
    }

    /// Number of neighbors of the given category
    pub fn count(&self, kind: SpringKind) -> usize {
        self.iter().filter(|n| n.kind == kind).count()
    }
}

/// All valid neighbors of `idx`, structural first, then shear, then bend
pub fn neighbors(idx: LatticeIndex) -> NeighborList {
    let mut list = NeighborList::new();
    for kind in SpringKind::ALL {
        for &delta in kind.offsets() {
            if let Some(index) = idx.offset(delta) {
                list.push(Neighbor { index, kind });
            }
        }
    }
    list
}

/// Each spring of the lattice exactly once, as `(a, b, kind)` with `a < b` in flat order
pub fn unique_springs() -> impl Iterator<Item = (LatticeIndex, LatticeIndex, SpringKind)> {
    LatticeIndex::all().flat_map(|a| {
        neighbors(a)
            .as_slice()
            .iter()
            .filter(move |n| n.index.flat() > a.flat())
            .map(move |n| (a, n.index, n.kind))
            .collect::<Vec<_>>()
    })
}
