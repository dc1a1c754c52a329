//! High-level runtime engine settings
//!
//! Selects which optional force terms are active and whether per-point
//! accumulation runs on the rayon pool. The integrator itself lives on
//! `World` since it is part of the loaded state.

use crate::configuration::config::EngineConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    pub force_field: bool, // sample the external force field
    pub inclined_plane: bool, // collide with the inclined plane
    pub parallel: bool, // false = single loop, true = rayon fan-out
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            force_field: cfg.force_field,
            inclined_plane: cfg.inclined_plane,
            parallel: cfg.parallel,
        }
    }
}
