//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and the render interval,
//! - elastic spring and damping coefficients,
//! - collision spring and damping coefficients,
//! - the mass shared by all 512 points
//!
//! `InclinedPlane` holds the optional plane `a x + b y + c z + d = 0`

use super::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub n: u32, // render every n-th step
    pub k_elastic: f64, // structural/shear/bend stiffness
    pub d_elastic: f64, // structural/shear/bend damping
    pub k_collision: f64, // collision spring stiffness
    pub d_collision: f64, // collision spring damping
    pub mass: f64, // mass of each point
}

/// Plane `a x + b y + c z + d = 0`; the side with positive value is free space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclinedPlane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl InclinedPlane {
    pub fn normal(&self) -> NVec3 {
        NVec3::new(self.a, self.b, self.c)
    }

    /// `a x + b y + c z + d`, scaled by the normal length
    pub fn signed_distance(&self, p: &NVec3) -> f64 {
        let n = self.normal();
        (n.dot(p) + self.d) / n.norm()
    }

    /// Orthogonal projection of `p` onto the plane
    pub fn project(&self, p: &NVec3) -> NVec3 {
        let n = self.normal().normalize();
        p - n * self.signed_distance(p)
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl From<[f64; 4]> for InclinedPlane {
    fn from(c: [f64; 4]) -> Self {
        Self { a: c[0], b: c[1], c: c[2], d: c[3] }
    }
}
