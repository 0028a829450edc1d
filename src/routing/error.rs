use crate::geo::PolylineError;

/// Failures of a single route computation.
///
/// Only [`RoutingError::Rejected`] and [`RoutingError::NoRoute`] are
/// expected outcomes: the service was reached and said no. Everything
/// else means the environment or the response itself is broken.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("routing service rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("routing service found no route")]
    NoRoute,
    #[error("routing service unreachable")]
    Unreachable(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("malformed routing response: {0}")]
    Malformed(String),
    #[error("undecodable route geometry")]
    Geometry(#[from] PolylineError),
}

impl RoutingError {
    /// Whether the service answered, just without a usable route.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::NoRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_answers_are_expected() {
        let rejected = RoutingError::Rejected {
            status: 404,
            body: "NOT_FOUND".into(),
        };
        assert!(rejected.is_expected());
        assert!(RoutingError::NoRoute.is_expected());
        assert!(rejected.to_string().contains("404"));
    }

    #[test]
    fn broken_environment_is_not_expected() {
        let refused = RoutingError::Unreachable("connection refused".into());
        assert!(!refused.is_expected());
        assert!(!RoutingError::Malformed("routes is not an array".into()).is_expected());
        let geometry = RoutingError::from(PolylineError::Decode("truncated".into()));
        assert!(!geometry.is_expected());
    }
}
