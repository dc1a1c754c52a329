use std::path::PathBuf;

/// Errors raised while loading or validating a scenario.
///
/// All of them are fatal: a scenario that fails to load never reaches the
/// integrator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("render interval n must be at least 1")]
    ZeroRenderInterval,
    #[error("lattice {field} must list {expected} points, got {actual}")]
    LatticeSize {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("force field of resolution {resolution} needs {expected} samples, got {actual}")]
    ForceFieldSize {
        resolution: usize,
        expected: usize,
        actual: usize,
    },
    #[error("inclined plane normal (a, b, c) must be non-zero")]
    DegeneratePlane,
}
