use serde::Serialize;

/// Lifecycle of route tracking.
///
/// ```text
/// Inactive --start--> Active --pause--> Paused --start--> Active
/// any      --stop---> Inactive
/// Active   --checkpoint change--> Paused --rebuild settles--> Active
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    #[default]
    Inactive,
    Active,
    Paused,
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
        }
    }
}
