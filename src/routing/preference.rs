use crate::preferences::TravelMode;
use serde::Deserialize;
use serde::Serialize;

/// Whether the routing service should account for live traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingPreference {
    #[serde(rename = "TRAFFIC_AWARE")]
    TrafficAware,
    #[serde(rename = "TRAFFIC_UNAWARE")]
    TrafficUnaware,
    #[serde(rename = "ROUTING_PREFERENCE_UNSPECIFIED")]
    Unspecified,
}

impl From<(TravelMode, bool)> for RoutingPreference {
    /// Traffic only matters for vehicles; every other mode is unspecified.
    fn from((mode, traffic_aware): (TravelMode, bool)) -> Self {
        match (mode.is_vehicle(), traffic_aware) {
            (true, true) => Self::TrafficAware,
            (true, false) => Self::TrafficUnaware,
            (false, _) => Self::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traffic_only_applies_to_driving() {
        assert_eq!(
            RoutingPreference::from((TravelMode::Drive, true)),
            RoutingPreference::TrafficAware
        );
        assert_eq!(
            RoutingPreference::from((TravelMode::Drive, false)),
            RoutingPreference::TrafficUnaware
        );
        assert_eq!(
            RoutingPreference::from((TravelMode::Walk, true)),
            RoutingPreference::Unspecified
        );
        assert_eq!(
            RoutingPreference::from((TravelMode::Walk, false)),
            RoutingPreference::Unspecified
        );
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_string(&RoutingPreference::Unspecified).unwrap(),
            "\"ROUTING_PREFERENCE_UNSPECIFIED\""
        );
    }
}
