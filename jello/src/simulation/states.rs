//! Core state types for the jello cube.
//!
//! Defines the lattice containers and the simulation state:
//! - `LatticeIndex` / `Lattice<T>` for the fixed 8x8x8 grid
//! - `Particle` as the transient (position, velocity) pair
//! - `LatticeState` holding positions and velocities
//! - `World` bundling the state with the loaded parameters
//!
//! Flat order is `i` outermost and `k` innermost, i.e. `64 i + 8 j + k`.

use std::ops::{Index, IndexMut};

use nalgebra::Vector3;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::force_field::ForceField;
use crate::simulation::params::{InclinedPlane, Parameters};

pub type NVec3 = Vector3<f64>;

/// Points along each lattice edge
pub const LATTICE_DIM: usize = 8;

/// Total number of mass points
pub const N_POINTS: usize = LATTICE_DIM * LATTICE_DIM * LATTICE_DIM;

/// Integer coordinates (i, j, k) of a lattice vertex, each in `0..8`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl LatticeIndex {
    /// Panics in debug builds when a coordinate is outside the lattice
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        debug_assert!(i < LATTICE_DIM && j < LATTICE_DIM && k < LATTICE_DIM);
        Self { i, j, k }
    }

    pub fn flat(self) -> usize {
        (self.i * LATTICE_DIM + self.j) * LATTICE_DIM + self.k
    }

    pub fn from_flat(flat: usize) -> Self {
        debug_assert!(flat < N_POINTS);
        Self {
            i: flat / (LATTICE_DIM * LATTICE_DIM),
            j: (flat / LATTICE_DIM) % LATTICE_DIM,
            k: flat % LATTICE_DIM,
        }
    }

    /// Shift by `delta`, or `None` if the result leaves `[0, 7]^3`
    pub fn offset(self, delta: [isize; 3]) -> Option<Self> {
        let shift = |c: usize, d: isize| -> Option<usize> {
            let moved = c as isize + d;
            (0..LATTICE_DIM as isize).contains(&moved).then_some(moved as usize)
        };
        Some(Self {
            i: shift(self.i, delta[0])?,
            j: shift(self.j, delta[1])?,
            k: shift(self.k, delta[2])?,
        })
    }

    /// All 512 indices in flat order
    pub fn all() -> impl Iterator<Item = LatticeIndex> {
        (0..N_POINTS).map(LatticeIndex::from_flat)
    }
}

/// Fixed-size per-point storage over the 8x8x8 lattice
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<T> {
    data: Vec<T>,
}

impl<T: Clone> Lattice<T> {
    pub fn filled(value: T) -> Self {
        Self { data: vec![value; N_POINTS] }
    }
}

impl<T> Lattice<T> {
    /// Build from a flat vector, returning it back when the length is not 512
    pub fn from_vec(data: Vec<T>) -> Result<Self, Vec<T>> {
        if data.len() == N_POINTS {
            Ok(Self { data })
        } else {
            Err(data)
        }
    }

    pub fn from_fn(mut f: impl FnMut(LatticeIndex) -> T) -> Self {
        Self {
            data: LatticeIndex::all().map(&mut f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Index<LatticeIndex> for Lattice<T> {
    type Output = T;

    fn index(&self, idx: LatticeIndex) -> &T {
        &self.data[idx.flat()]
    }
}

impl<T> IndexMut<LatticeIndex> for Lattice<T> {
    fn index_mut(&mut self, idx: LatticeIndex) -> &mut T {
        &mut self.data[idx.flat()]
    }
}

/// One mass point seen from the force model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

/// Positions and velocities of every lattice point, index-aligned
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeState {
    pub positions: Lattice<NVec3>,
    pub velocities: Lattice<NVec3>,
}

impl LatticeState {
    /// Points on a regular grid of spacing `side / 7` starting at `origin`, all moving with `velocity`
    pub fn cube(origin: NVec3, side: f64, velocity: NVec3) -> Self {
        let spacing = side / (LATTICE_DIM - 1) as f64;
        Self {
            positions: Lattice::from_fn(|idx| {
                origin + NVec3::new(idx.i as f64, idx.j as f64, idx.k as f64) * spacing
            }),
            velocities: Lattice::filled(velocity),
        }
    }

    pub fn particle(&self, idx: LatticeIndex) -> Particle {
        Particle {
            x: self.positions[idx],
            v: self.velocities[idx],
        }
    }

    /// True when every coordinate of every point is finite
    pub fn is_finite(&self) -> bool {
        self.positions
            .iter()
            .chain(self.velocities.iter())
            .all(|p| p.iter().all(|c| c.is_finite()))
    }
}

/// Complete simulation state: parameters loaded once plus the mutable lattice
#[derive(Debug, Clone)]
pub struct World {
    pub integrator: IntegratorConfig, // fixed for the whole run
    pub params: Parameters,
    pub inclined_plane: Option<InclinedPlane>,
    pub force_field: Option<ForceField>,
    pub state: LatticeState,
}
