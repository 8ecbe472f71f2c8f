pub mod distance_2d;
pub mod polar;

pub use distance_2d::DistanceMetric;

/// 2D point type. Holds `(x, y)`, or `(longitude, latitude)` in geographic mode.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// The golden ratio φ = (1 + √5) / 2.
///
/// Stepping a wrapping sampler by multiples of φ spreads samples evenly
/// without ever repeating a position.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
