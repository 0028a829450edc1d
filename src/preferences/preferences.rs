use super::*;

/// Read side of the user's preference store.
///
/// The engine reads these at the moment it builds a request and never
/// caches them, so a change made between two rebuilds takes effect on
/// the next one.
pub trait Preferences: Send + Sync {
    fn travel_mode(&self) -> TravelMode;
    fn traffic_aware(&self) -> bool;
    /// Not consumed by routing; shares the store with the routing keys.
    fn theme(&self) -> Theme;
}
