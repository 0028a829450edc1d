use super::*;
use crate::Meters;
use crate::geo::Polyline;
use serde::Deserialize;
use serde::Serialize;

/// Candidate routes, best first.
/// The service answers `{}` when it found nothing, hence the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub distance_meters: Meters,
    pub polyline: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub encoded_polyline: Polyline,
}

impl RouteResponse {
    /// The preferred route, or [`RoutingError::NoRoute`] if there is none.
    pub fn best(&self) -> Result<&Route, RoutingError> {
        self.routes.first().ok_or(RoutingError::NoRoute)
    }
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            routes: vec![route],
        }
    }
}

impl Route {
    pub fn new(distance_meters: Meters, polyline: Polyline) -> Self {
        Self {
            distance_meters,
            polyline: Geometry {
                encoded_polyline: polyline,
            },
        }
    }
    pub fn encoded(&self) -> &Polyline {
        &self.polyline.encoded_polyline
    }
}
