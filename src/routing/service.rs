use super::*;

/// Response fields a remote service is asked to return, in the
/// `X-Goog-FieldMask` header form. Exactly what [`Route`] reads.
pub const FIELD_MASK: &str = "routes.distanceMeters,routes.polyline.encodedPolyline";

/// The remote route computation.
///
/// Implementations are transport-agnostic: an HTTP client, a local
/// router, or a scripted stub. HTTP clients send [`RouteRequest`] as the
/// JSON body and restrict the response with [`FIELD_MASK`]. A service that
/// was reached but could not route reports [`RoutingError::Rejected`];
/// anything else is treated as fatal by the engine.
#[async_trait::async_trait]
pub trait RoutingService: Send + Sync {
    async fn compute(&self, request: &RouteRequest) -> Result<RouteResponse, RoutingError>;
}
