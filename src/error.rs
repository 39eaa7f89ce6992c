use thiserror::Error;

/// Top-level error type for the sketch editor.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to curve evaluation and sampling.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("curve evaluation requires at least one point")]
    EmptyPointSequence,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to the control point store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("control point not found")]
    PointNotFound,
}

/// Errors related to editor configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid editor configuration: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;
