//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle `Scenario` containing:
//! - engine switches (`Engine`)
//! - the world (`World`: integrator, parameters, optional plane and field,
//!   lattice state at t = 0)
//! - the active force set (`AccelSet`)
//!
//! A `Scenario` is owned by the driver loop, which calls [`Scenario::step`]
//! or [`Scenario::advance_frame`] and reads `world` in between.

use tracing::{info, warn};

use crate::configuration::config::{
    EngineConfig, ForceFieldConfig, LatticeConfig, ParametersConfig, ScenarioConfig,
};
use crate::configuration::error::ConfigError;
use crate::simulation::collision::BoundingBox;
use crate::simulation::engine::Engine;
use crate::simulation::force_field::ForceField;
use crate::simulation::forces::{
    AccelSet, BoundaryCollision, ExternalForceField, InclinedPlaneCollision, SpringNetwork,
};
use crate::simulation::integrator;
use crate::simulation::params::{InclinedPlane, Parameters};
use crate::simulation::states::{Lattice, LatticeIndex, LatticeState, NVec3, World, N_POINTS};

/// Runtime bundle driven once per frame
pub struct Scenario {
    pub engine: Engine,
    pub world: World,
    pub forces: AccelSet,
    pub bbox: BoundingBox,
    pub t: f64, // simulated time
    pub steps: u64, // steps taken so far
}

impl Scenario {
    /// Validate `cfg` and assemble the runtime scenario
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let parameters = build_parameters(&cfg.parameters)?;

        let inclined_plane = cfg.inclined_plane.map(build_plane).transpose()?;

        let force_field = match cfg.force_field {
            Some(ref ff) if ff.resolution > 0 => Some(build_force_field(ff)?),
            _ => None,
        };

        let state = build_lattice(&cfg.lattice)?;

        let world = World {
            integrator: cfg.engine.integrator,
            params: parameters,
            inclined_plane,
            force_field,
            state,
        };

        Ok(Self::from_world(world, Engine::from(&cfg.engine)))
    }

    /// Wrap an already validated world, registering the force terms `engine` asks for
    pub fn from_world(world: World, engine: Engine) -> Self {
        let bbox = BoundingBox::default();
        let forces = build_forces(&world, &engine, bbox);

        info!(
            integrator = ?world.integrator,
            dt = world.params.dt,
            terms = forces.len(),
            parallel = engine.parallel,
            "scenario ready"
        );

        Self {
            engine,
            world,
            forces,
            bbox,
            t: 0.0,
            steps: 0,
        }
    }

    /// Advance one integrator step
    pub fn step(&mut self) {
        integrator::step(&mut self.world, &self.forces);
        self.t += self.world.params.dt;
        self.steps += 1;
    }

    /// Advance the `n` steps that separate two displayed frames
    pub fn advance_frame(&mut self) {
        for _ in 0..self.world.params.n {
            self.step();
        }
        if !self.world.state.is_finite() {
            warn!(steps = self.steps, "lattice state is no longer finite; dt is likely too large");
        }
    }

    /// Snapshot of the current world in configuration form, lattice listed point by point
    pub fn to_config(&self) -> ScenarioConfig {
        let p = &self.world.params;
        let to_arrays = |l: &Lattice<NVec3>| -> Vec<[f64; 3]> { l.iter().map(|v| [v.x, v.y, v.z]).collect() };

        ScenarioConfig {
            engine: EngineConfig {
                integrator: self.world.integrator,
                force_field: self.engine.force_field,
                inclined_plane: self.engine.inclined_plane,
                parallel: self.engine.parallel,
            },
            parameters: ParametersConfig {
                dt: p.dt,
                n: p.n,
                k_elastic: p.k_elastic,
                d_elastic: p.d_elastic,
                k_collision: p.k_collision,
                d_collision: p.d_collision,
                mass: p.mass,
            },
            inclined_plane: self.world.inclined_plane.map(|plane| plane.as_array()),
            force_field: self.world.force_field.as_ref().map(|ff| ForceFieldConfig {
                resolution: ff.resolution(),
                data: ff.data().iter().map(|v| [v.x, v.y, v.z]).collect(),
            }),
            lattice: LatticeConfig::Explicit {
                positions: to_arrays(&self.world.state.positions),
                velocities: to_arrays(&self.world.state.velocities),
            },
        }
    }
}

// helpers ==============================================================================

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn build_parameters(cfg: &ParametersConfig) -> Result<Parameters, ConfigError> {
    if cfg.n == 0 {
        return Err(ConfigError::ZeroRenderInterval);
    }
    Ok(Parameters {
        dt: positive("dt", cfg.dt)?,
        n: cfg.n,
        k_elastic: non_negative("k_elastic", cfg.k_elastic)?,
        d_elastic: non_negative("d_elastic", cfg.d_elastic)?,
        k_collision: non_negative("k_collision", cfg.k_collision)?,
        d_collision: non_negative("d_collision", cfg.d_collision)?,
        mass: positive("mass", cfg.mass)?,
    })
}

fn build_plane(coeffs: [f64; 4]) -> Result<InclinedPlane, ConfigError> {
    for (field, c) in ["plane a", "plane b", "plane c", "plane d"].into_iter().zip(coeffs) {
        finite(field, c)?;
    }
    let plane = InclinedPlane::from(coeffs);
    if plane.normal().norm() == 0.0 {
        return Err(ConfigError::DegeneratePlane);
    }
    Ok(plane)
}

fn build_force_field(cfg: &ForceFieldConfig) -> Result<ForceField, ConfigError> {
    let expected = cfg.resolution.saturating_pow(3);
    let data = cfg
        .data
        .iter()
        .map(|&v| to_vec3("force_field", v))
        .collect::<Result<Vec<_>, _>>()?;
    ForceField::new(cfg.resolution, data).ok_or(ConfigError::ForceFieldSize {
        resolution: cfg.resolution,
        expected,
        actual: cfg.data.len(),
    })
}

fn to_vec3(field: &'static str, v: [f64; 3]) -> Result<NVec3, ConfigError> {
    Ok(NVec3::new(finite(field, v[0])?, finite(field, v[1])?, finite(field, v[2])?))
}

fn to_lattice(field: &'static str, points: &[[f64; 3]]) -> Result<Lattice<NVec3>, ConfigError> {
    let data = points.iter().map(|&v| to_vec3(field, v)).collect::<Result<Vec<_>, _>>()?;
    Lattice::from_vec(data).map_err(|data| ConfigError::LatticeSize {
        field,
        expected: N_POINTS,
        actual: data.len(),
    })
}

/// Deterministic perturbation in `[-1, 1]^3` for point `idx`, no rng needed
fn jitter_direction(idx: LatticeIndex) -> NVec3 {
    let f = idx.flat() as f64;
    NVec3::new((f * 0.37).sin(), (f * 0.13).cos(), (f * 0.07).sin())
}

fn build_lattice(cfg: &LatticeConfig) -> Result<LatticeState, ConfigError> {
    match cfg {
        LatticeConfig::Cube { origin, side, velocity, jitter } => {
            let origin = to_vec3("lattice origin", *origin)?;
            let side = positive("lattice side", *side)?;
            let velocity = to_vec3("lattice velocity", *velocity)?;
            let jitter = non_negative("lattice jitter", *jitter)?;

            let mut state = LatticeState::cube(origin, side, velocity);
            for idx in LatticeIndex::all() {
                state.positions[idx] += jitter * jitter_direction(idx);
            }
            Ok(state)
        }
        LatticeConfig::Explicit { positions, velocities } => Ok(LatticeState {
            positions: to_lattice("positions", positions)?,
            velocities: to_lattice("velocities", velocities)?,
        }),
    }
}

fn build_forces(world: &World, engine: &Engine, bbox: BoundingBox) -> AccelSet {
    let p = &world.params;

    let mut forces = AccelSet::new(p.mass)
        .parallel(engine.parallel)
        .with(SpringNetwork {
            k_elastic: p.k_elastic,
            d_elastic: p.d_elastic,
        })
        .with(BoundaryCollision {
            bbox,
            k_collision: p.k_collision,
            d_collision: p.d_collision,
        });

    if engine.force_field {
        match &world.force_field {
            Some(field) => {
                forces = forces.with(ExternalForceField {
                    field: field.clone(),
                    bbox,
                });
            }
            None => warn!("force field term enabled but the scenario has no force field"),
        }
    }

    if engine.inclined_plane {
        match world.inclined_plane {
            Some(plane) => {
                forces = forces.with(InclinedPlaneCollision {
                    plane,
                    k_collision: p.k_collision,
                    d_collision: p.d_collision,
                });
            }
            None => warn!("inclined plane term enabled but the scenario has no plane"),
        }
    }

    forces
}
