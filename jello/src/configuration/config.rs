//! Configuration types for loading jello scenarios from YAML.
//!
//! This module defines a thin, `serde`-(de)serializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and optional force terms
//! - [`ParametersConfig`] – step size, spring coefficients and point mass
//! - an optional inclined plane `[a, b, c, d]`
//! - an optional [`ForceFieldConfig`] grid
//! - [`LatticeConfig`]    – the initial 512 positions and velocities
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler"
//!   force_field: false      # sample the force field below
//!   inclined_plane: false   # collide with the inclined plane below
//!   parallel: false         # evaluate points on the rayon pool
//!
//! parameters:
//!   dt: 0.0005              # step size
//!   n: 1                    # render every n-th step
//!   k_elastic: 200.0
//!   d_elastic: 0.25
//!   k_collision: 400.0
//!   d_collision: 0.25
//!   mass: 0.002             # mass of each of the 512 points
//!
//! inclined_plane: [0.31, -0.78, 0.5, 5.39]
//!
//! force_field:
//!   resolution: 2           # 2 * 2 * 2 samples follow, i outermost
//!   data:
//!     - [0.0, 0.0, -0.02]
//!     # ...
//!
//! lattice:
//!   kind: cube
//!   origin: [-0.5, -0.5, -0.5]
//!   side: 1.0
//!   velocity: [0.0, 0.0, 0.0]
//!   jitter: 0.01
//! ```
//!
//! `lattice` may instead be `{ kind: explicit, positions: [...], velocities: [...] }`
//! with 512 `[x, y, z]` entries each, which is also what a saved world uses.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Which integrator advances the world
/// `integrator: "euler"` or `integrator: "rk4"`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler", alias = "EULER")] // explicit first-order Euler, one force evaluation per step
    Euler,

    #[serde(rename = "rk4", alias = "RK4")] // classical 4th-order Runge–Kutta, four force evaluations per step
    Rk4,
}

/// Engine-level switches
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the lattice
    #[serde(default)]
    pub force_field: bool, // add the interpolated force field to the net force
    #[serde(default)]
    pub inclined_plane: bool, // collide with the inclined plane when one is given
    #[serde(default)]
    pub parallel: bool, // fan per-point accumulation out over rayon
}

/// Numerical and physical parameters
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,          // time step size
    pub n: u32,           // display every n-th step
    pub k_elastic: f64,   // stiffness of structural, shear and bend springs
    pub d_elastic: f64,   // damping of structural, shear and bend springs
    pub k_collision: f64, // stiffness of collision springs
    pub d_collision: f64, // damping of collision springs
    pub mass: f64,        // mass of each point
}

/// Regular grid of force vectors over the bounding cube
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ForceFieldConfig {
    pub resolution: usize,    // samples per axis
    pub data: Vec<[f64; 3]>,  // resolution^3 vectors, index i*R*R + j*R + k
}

/// Initial lattice state
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LatticeConfig {
    /// Regular cube with a deterministic jitter, every point moving alike
    Cube {
        origin: [f64; 3],   // position of point (0, 0, 0) before jitter
        side: f64,          // edge length; spacing is side / 7
        #[serde(default)]
        velocity: [f64; 3], // shared initial velocity
        #[serde(default)]
        jitter: f64,        // amplitude of the position perturbation
    },
    /// Every point listed, `i` outermost and `k` innermost
    Explicit {
        positions: Vec<[f64; 3]>,
        velocities: Vec<[f64; 3]>,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // integrator and optional terms
    pub parameters: ParametersConfig, // step size, coefficients, mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclined_plane: Option<[f64; 4]>, // plane coefficients a, b, c, d
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_field: Option<ForceFieldConfig>, // absent when resolution is 0
    pub lattice: LatticeConfig, // initial positions and velocities
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_yaml_string()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
