use crate::KilometersPerHour;
use crate::Meters;
use crate::geo::Point;
use serde::Serialize;

/// The route as currently published: geometry, length, and whether the
/// geometry is real or straight legs through the checkpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteResult {
    points: Vec<Point>,
    distance: Meters,
    fallback: bool,
}

impl RouteResult {
    pub fn routed(points: Vec<Point>, distance: Meters) -> Self {
        Self {
            points,
            distance,
            fallback: false,
        }
    }

    /// Straight legs through `checkpoints`, measured along the great circle.
    pub fn fallback(checkpoints: Vec<Point>) -> Self {
        Self {
            distance: Point::length(&checkpoints).round() as Meters,
            points: checkpoints,
            fallback: true,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn distance(&self) -> Meters {
        self.distance
    }
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time to cover the route at a steady `speed`.
    pub fn eta(&self, speed: KilometersPerHour) -> std::time::Duration {
        let meters_per_hour = speed.max(1) as f64 * 1000.0;
        std::time::Duration::from_secs_f64(self.distance as f64 * 3600.0 / meters_per_hour)
    }
}
