mod segment;

pub use segment::Segment;

/// 2D point type, in canvas pixel coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
