use thiserror::Error;

/// Top-level error type for polyline sampling.
#[derive(Debug, Error)]
pub enum PolysampleError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building a sampler from a point sequence.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("a path needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },
}

/// Errors raised by distance or proportion lookups.
///
/// None of these invalidate the sampler; in-range queries keep working.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{parameter} = {value} is out of range [{min}, {max}] (try wrapping)")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("path has zero total length")]
    DegenerateTotalLength,

    #[error("segment starting at point {index} has zero length")]
    DegenerateSegment { index: usize },
}

/// Errors related to batch operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolysampleError`].
pub type Result<T> = std::result::Result<T, PolysampleError>;
