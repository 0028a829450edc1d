use crate::geo::Point;

/// Reverse geocoding: a point to a best-effort human-readable address.
///
/// Lookups are advisory. The engine never waits on one before answering
/// a caller, and an `Err` is treated exactly like `Ok(None)`.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    async fn address(&self, point: Point) -> anyhow::Result<Option<String>>;
}

/// Geocoder that never knows an address.
pub struct Nowhere;

#[async_trait::async_trait]
impl Geocoder for Nowhere {
    async fn address(&self, _: Point) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}
