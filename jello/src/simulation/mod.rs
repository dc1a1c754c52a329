pub mod states;
pub mod params;
pub mod engine;
pub mod vector;
pub mod springs;
pub mod topology;
pub mod collision;
pub mod force_field;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod scenario;
