use super::*;
use crate::Meters;
use crate::geo::Point;
use crate::geo::Polyline;

/// Offline routing service that connects waypoints with straight legs.
/// Distance is the summed great-circle length of those legs.
pub struct Straight;

#[async_trait::async_trait]
impl RoutingService for Straight {
    async fn compute(&self, request: &RouteRequest) -> Result<RouteResponse, RoutingError> {
        let path = request.path();
        let distance = Point::length(&path).round() as Meters;
        let polyline = Polyline::encode(&path)?;
        log::debug!(
            "straight route through {} waypoints, {} m",
            path.len(),
            distance
        );
        Ok(RouteResponse::from(Route::new(distance, polyline)))
    }
}
