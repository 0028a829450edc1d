use super::*;
use crate::geo::Point;
use tokio::sync::watch::Receiver;

/// Read-only subscriptions to everything the engine publishes.
/// Each receiver always holds the latest value; intermediate values
/// may be skipped by a slow observer.
#[derive(Debug, Clone)]
pub struct Views {
    pub checkpoints: Receiver<Vec<Point>>,
    pub status: Receiver<RouteStatus>,
    pub route: Receiver<RouteResult>,
    pub focus: Receiver<Option<Point>>,
    pub address: Receiver<Option<String>>,
}
