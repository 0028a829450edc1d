use super::*;
use crate::geo::Point;
use crate::preferences::TravelMode;
use serde::Deserialize;
use serde::Serialize;

/// One route computation, in the routes API request shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    origin: Waypoint,
    destination: Waypoint,
    intermediates: Vec<Waypoint>,
    travel_mode: TravelMode,
    routing_preference: RoutingPreference,
}

/// `{"location": {"latLng": {...}}}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Location {
    #[serde(rename = "latLng")]
    lat_lng: Point,
}

impl From<Point> for Waypoint {
    fn from(point: Point) -> Self {
        Self {
            location: Location { lat_lng: point },
        }
    }
}

impl From<Waypoint> for Point {
    fn from(waypoint: Waypoint) -> Self {
        waypoint.location.lat_lng
    }
}

impl RouteRequest {
    pub fn new(
        origin: Point,
        destination: Point,
        intermediates: &[Point],
        travel_mode: TravelMode,
        routing_preference: RoutingPreference,
    ) -> Self {
        Self {
            origin: Waypoint::from(origin),
            destination: Waypoint::from(destination),
            intermediates: intermediates.iter().copied().map(Waypoint::from).collect(),
            travel_mode,
            routing_preference,
        }
    }

    pub fn origin(&self) -> Point {
        Point::from(self.origin)
    }
    pub fn destination(&self) -> Point {
        Point::from(self.destination)
    }
    pub fn intermediates(&self) -> Vec<Point> {
        self.intermediates.iter().copied().map(Point::from).collect()
    }
    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }
    pub fn routing_preference(&self) -> RoutingPreference {
        self.routing_preference
    }

    /// Every waypoint in traversal order.
    pub fn path(&self) -> Vec<Point> {
        std::iter::once(self.origin())
            .chain(self.intermediates())
            .chain(std::iter::once(self.destination()))
            .collect()
    }
}
