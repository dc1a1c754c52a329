//! Force contributors and the per-point accumulator
//!
//! Each physical effect (spring network, wall collisions, force field,
//! inclined plane) implements [`ForceTerm`]. An [`AccelSet`] sums the terms
//! for every lattice point and divides by the shared point mass.
//!
//! Terms only read the lattice state, so the 512 evaluations are independent
//! and the set can fan them out over rayon's thread pool.

use rayon::prelude::*;

use crate::simulation::collision::BoundingBox;
use crate::simulation::force_field::ForceField;
use crate::simulation::params::InclinedPlane;
use crate::simulation::springs::{anchor_force, Spring};
use crate::simulation::states::{Lattice, LatticeIndex, LatticeState, NVec3};
use crate::simulation::topology::neighbors;

/// A force source evaluated one lattice point at a time
pub trait ForceTerm {
    /// Force on point `idx` given the current `state`
    fn force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3;
}

/// Collection of force terms; their sum divided by the mass is the acceleration
pub struct AccelSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
    mass: f64,
    parallel: bool,
}

impl AccelSet {
    /// Empty set for points of mass `mass`
    pub fn new(mass: f64) -> Self {
        Self {
            terms: Vec::new(),
            mass,
            parallel: false,
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceTerm + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Evaluate points on rayon's pool instead of in a single loop
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Net force on a single point
    pub fn net_force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3 {
        self.terms.iter().map(|term| term.force(idx, state)).sum()
    }

    /// Compute accelerations of all points in `state`
    /// - `out[idx]` is overwritten with the net force on `idx` over the mass
    pub fn accumulate_accels(&self, state: &LatticeState, out: &mut Lattice<NVec3>) {
        let inv_mass = self.mass.recip();
        let eval = |(flat, a): (usize, &mut NVec3)| {
            *a = self.net_force(LatticeIndex::from_flat(flat), state) * inv_mass;
        };

        if self.parallel {
            out.as_mut_slice().par_iter_mut().enumerate().for_each(eval);
        } else {
            out.as_mut_slice().iter_mut().enumerate().for_each(eval);
        }
    }
}

/// Structural, shear and bend springs, all sharing one stiffness and damping
pub struct SpringNetwork {
    pub k_elastic: f64,
    pub d_elastic: f64,
}

impl ForceTerm for SpringNetwork {
    fn force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3 {
        let me = state.particle(idx);
        let mut f = NVec3::zeros();
        for n in neighbors(idx).iter() {
            let spring = Spring::new(self.k_elastic, self.d_elastic, n.kind.rest_length());
            f += spring.force(&me, &state.particle(n.index));
        }
        f
    }
}

/// Penalty springs pushing escaped points back into the bounding cube
pub struct BoundaryCollision {
    pub bbox: BoundingBox,
    pub k_collision: f64,
    pub d_collision: f64,
}

impl ForceTerm for BoundaryCollision {
    fn force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3 {
        let p = state.particle(idx);
        self.bbox.collision_force(self.k_collision, self.d_collision, &p)
    }
}

/// Externally supplied force field, sampled at each point's position
pub struct ExternalForceField {
    pub field: ForceField,
    pub bbox: BoundingBox,
}

impl ForceTerm for ExternalForceField {
    fn force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3 {
        self.field.force_at(&self.bbox, &state.positions[idx])
    }
}

/// Penalty spring toward the plane for points on its negative side
pub struct InclinedPlaneCollision {
    pub plane: InclinedPlane,
    pub k_collision: f64,
    pub d_collision: f64,
}

impl ForceTerm for InclinedPlaneCollision {
    fn force(&self, idx: LatticeIndex, state: &LatticeState) -> NVec3 {
        let p = state.particle(idx);
        if self.plane.signed_distance(&p.x) >= 0.0 {
            return NVec3::zeros();
        }
        anchor_force(self.k_collision, self.d_collision, &p, &self.plane.project(&p.x))
    }
}
