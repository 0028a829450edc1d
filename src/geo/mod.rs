mod point;
mod polyline;

pub use point::*;
pub use polyline::*;
