pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Lattice, LatticeIndex, LatticeState, Particle, World, NVec3, N_POINTS};
pub use simulation::params::{Parameters, InclinedPlane};
pub use simulation::engine::Engine;
pub use simulation::forces::{AccelSet, ForceTerm, SpringNetwork, BoundaryCollision, ExternalForceField, InclinedPlaneCollision};
pub use simulation::integrator::{euler_integrator, rk4_integrator, step};
pub use simulation::scenario::Scenario;
pub use simulation::collision::BoundingBox;
pub use simulation::force_field::ForceField;
pub use simulation::topology::{neighbors, SpringKind};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, ForceFieldConfig, LatticeConfig, ScenarioConfig};
pub use configuration::error::ConfigError;

pub use visualization::view::{ViewConfig, Edge, visible_edges, bounding_box_edges};

pub use benchmark::benchmark::{bench_accumulate, bench_step};
