use super::*;
use crate::Ticket;
use crate::geo::Point;
use crate::geocoding::Geocoder;
use crate::preferences::Preferences;
use crate::routing::RouteRequest;
use crate::routing::RouteResponse;
use crate::routing::RoutingError;
use crate::routing::RoutingPreference;
use crate::routing::RoutingService;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to a rebuild running in the background.
pub type Pending = JoinHandle<anyhow::Result<Rebuild>>;

/// Owner of the checkpoint list, route lifecycle and published route for
/// one map session.
///
/// Key responsibilities:
/// - Reject consecutive duplicate checkpoints
/// - Rebuild the route after every checkpoint change, without blocking the caller
/// - Publish only the result of the most recently initiated rebuild
/// - Hold an active route paused while its rebuild is in flight
/// - Degrade to straight legs when the routing service declines
///
/// Every rebuild takes a ticket when it is initiated. A rebuild whose
/// ticket is no longer the newest when it settles is dropped, so results
/// apply in initiation order even when responses arrive out of order.
///
/// Must be used from within a tokio runtime; mutations spawn their rebuild.
/// Clones share the same session.
#[derive(Clone)]
pub struct RouteEngine {
    inner: Arc<Session>,
}

struct Session {
    routing: Arc<dyn RoutingService>,
    preferences: Arc<dyn Preferences>,
    geocoder: Arc<dyn Geocoder>,
    checkpoints: watch::Sender<Vec<Point>>,
    status: watch::Sender<RouteStatus>,
    route: watch::Sender<RouteResult>,
    focus: watch::Sender<Option<Point>>,
    address: watch::Sender<Option<String>>,
    /// newest rebuild ticket issued
    tickets: AtomicU64,
    /// newest address lookup issued
    lookups: AtomicU64,
    /// rebuilds currently holding an active route paused;
    /// only touched while the status channel is locked
    holds: AtomicUsize,
    /// bumped by every explicit start/pause/stop, invalidating older holds
    epoch: AtomicU64,
}

impl RouteEngine {
    pub fn new(
        routing: Arc<dyn RoutingService>,
        preferences: Arc<dyn Preferences>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            inner: Arc::new(Session {
                routing,
                preferences,
                geocoder,
                checkpoints: watch::Sender::new(Vec::new()),
                status: watch::Sender::new(RouteStatus::default()),
                route: watch::Sender::new(RouteResult::default()),
                focus: watch::Sender::new(None),
                address: watch::Sender::new(None),
                tickets: AtomicU64::new(0),
                lookups: AtomicU64::new(0),
                holds: AtomicUsize::new(0),
                epoch: AtomicU64::new(0),
            }),
        }
    }
}

impl RouteEngine {
    /// Appends a checkpoint and rebuilds in the background.
    /// Returns `None` without rebuilding if `point` repeats the last checkpoint.
    pub fn add_checkpoint(&self, point: Point) -> Option<Pending> {
        self.inner
            .checkpoints
            .send_if_modified(|list| match list.last() == Some(&point) {
                true => false,
                false => {
                    list.push(point);
                    true
                }
            })
            .then(|| self.mutated())
            .or_else(|| {
                log::debug!("ignoring repeated checkpoint {}", point);
                None
            })
    }

    /// Drops the last checkpoint and rebuilds in the background.
    /// Returns `None` if there was nothing to remove.
    pub fn remove_last_checkpoint(&self) -> Option<Pending> {
        self.inner
            .checkpoints
            .send_if_modified(|list| list.pop().is_some())
            .then(|| self.mutated())
    }

    /// Rebuilds, then activates the route.
    /// A declined route still activates with fallback geometry; a fatal
    /// rebuild error is returned and leaves the status untouched.
    pub async fn start_route(&self) -> anyhow::Result<Rebuild> {
        let outcome = self.run(self.issue()).await?;
        self.transition(RouteStatus::Active);
        Ok(outcome)
    }

    pub fn pause_route(&self) {
        self.transition(RouteStatus::Paused);
    }

    /// Deactivates the route. Checkpoints and the published route are kept.
    pub fn stop_route(&self) {
        self.transition(RouteStatus::Inactive);
    }

    /// Rebuilds from the current checkpoints and waits for it to settle.
    pub async fn rebuild_route(&self) -> anyhow::Result<Rebuild> {
        self.run(self.issue()).await
    }

    /// Records the focused map position and resolves its address in the
    /// background. A newer focus supersedes an older pending lookup.
    pub fn update_focused_position(&self, point: Point) -> JoinHandle<()> {
        self.inner.focus.send_replace(Some(point));
        let lookup = self.inner.lookups.fetch_add(1, Ordering::SeqCst) + 1;
        let engine = self.clone();
        tokio::spawn(async move {
            let address = engine
                .inner
                .geocoder
                .address(point)
                .await
                .inspect_err(|e| log::debug!("no address for {}: {:#}", point, e))
                .unwrap_or(None);
            engine.inner.address.send_if_modified(|current| {
                match engine.inner.lookups.load(Ordering::SeqCst) == lookup {
                    true => {
                        *current = address;
                        true
                    }
                    false => false,
                }
            });
        })
    }
}

impl RouteEngine {
    pub fn checkpoints(&self) -> Vec<Point> {
        self.inner.checkpoints.borrow().clone()
    }
    pub fn status(&self) -> RouteStatus {
        *self.inner.status.borrow()
    }
    pub fn route(&self) -> RouteResult {
        self.inner.route.borrow().clone()
    }
    pub fn focused_position(&self) -> Option<Point> {
        *self.inner.focus.borrow()
    }
    pub fn address(&self) -> Option<String> {
        self.inner.address.borrow().clone()
    }
    /// Number of rebuilds initiated so far.
    pub fn rebuilds(&self) -> Ticket {
        self.inner.tickets.load(Ordering::SeqCst)
    }
    pub fn subscribe(&self) -> Views {
        Views {
            checkpoints: self.inner.checkpoints.subscribe(),
            status: self.inner.status.subscribe(),
            route: self.inner.route.subscribe(),
            focus: self.inner.focus.subscribe(),
            address: self.inner.address.subscribe(),
        }
    }
}

impl RouteEngine {
    fn issue(&self) -> Job {
        self.ticket(self.checkpoints())
    }

    pub(crate) fn ticket(&self, checkpoints: Vec<Point>) -> Job {
        Job::new(
            self.inner.tickets.fetch_add(1, Ordering::SeqCst) + 1,
            checkpoints,
        )
    }

    /// Common tail of every checkpoint mutation: hold, rebuild, release.
    /// A fatal rebuild keeps its hold, leaving an active route paused.
    fn mutated(&self) -> Pending {
        let hold = self.hold();
        let job = self.issue();
        let engine = self.clone();
        tokio::spawn(async move {
            let outcome = engine
                .run(job)
                .await
                .inspect_err(|e| log::error!("{:#}", e))?;
            if let Some(epoch) = hold {
                engine.release(epoch);
            }
            Ok(outcome)
        })
    }

    pub(crate) async fn run(&self, job: Job) -> anyhow::Result<Rebuild> {
        let ticket = job.ticket();
        let Some((origin, destination, between)) = job.legs() else {
            return Ok(self.publish(ticket, RouteResult::default(), Rebuild::Cleared));
        };
        if job.is_degenerate() {
            log::debug!("rebuild #{} routes {} to itself, skipping", ticket, origin);
            return Ok(Rebuild::Skipped);
        }
        let mode = self.inner.preferences.travel_mode();
        let traffic = self.inner.preferences.traffic_aware();
        let request = RouteRequest::new(
            origin,
            destination,
            between,
            mode,
            RoutingPreference::from((mode, traffic)),
        );
        log::debug!(
            "rebuild #{}: {} -> {} via {} waypoints ({})",
            ticket,
            origin,
            destination,
            between.len(),
            mode
        );
        let response = self.inner.routing.compute(&request).await;
        match response.and_then(|response| Self::decode(&response)) {
            Ok(result) => Ok(self.publish(ticket, result, Rebuild::Routed)),
            Err(e) if e.is_expected() => {
                log::warn!("rebuild #{}: {}, using straight legs", ticket, e);
                let result = RouteResult::fallback(job.checkpoints().to_vec());
                Ok(self.publish(ticket, result, Rebuild::Fallback))
            }
            Err(e) => Err(anyhow::Error::from(e).context(format!("rebuild #{} failed", ticket))),
        }
    }

    fn decode(response: &RouteResponse) -> Result<RouteResult, RoutingError> {
        let route = response.best()?;
        let points = route.encoded().decode()?;
        Ok(RouteResult::routed(points, route.distance_meters))
    }

    /// Publishes `result` only if no newer rebuild has been initiated.
    fn publish(&self, ticket: Ticket, result: RouteResult, outcome: Rebuild) -> Rebuild {
        let latest = self.inner.route.send_if_modified(|current| {
            match self.inner.tickets.load(Ordering::SeqCst) == ticket {
                true => {
                    *current = result;
                    true
                }
                false => false,
            }
        });
        match latest {
            true => {
                log::debug!("rebuild #{} {}", ticket, outcome);
                outcome
            }
            false => {
                log::debug!("rebuild #{} superseded, dropping result", ticket);
                Rebuild::Superseded
            }
        }
    }
}

impl RouteEngine {
    /// Pauses an active route for the length of one rebuild.
    /// A route already held paused by another rebuild gains another hold.
    /// Returns the epoch the hold belongs to, if one was taken.
    fn hold(&self) -> Option<u64> {
        let mut epoch = None;
        self.inner.status.send_if_modified(|status| {
            let holds = self.inner.holds.load(Ordering::SeqCst);
            match (*status, holds) {
                (RouteStatus::Active, _) | (RouteStatus::Paused, 1..) => {
                    self.inner.holds.store(holds + 1, Ordering::SeqCst);
                    epoch = Some(self.inner.epoch.load(Ordering::SeqCst));
                    std::mem::replace(status, RouteStatus::Paused) != RouteStatus::Paused
                }
                _ => false,
            }
        });
        epoch
    }

    /// Releases a hold; the last release of an epoch reactivates the route.
    /// Holds from before an explicit start/pause/stop are void.
    fn release(&self, epoch: u64) {
        self.inner.status.send_if_modified(|status| {
            let holds = self.inner.holds.load(Ordering::SeqCst);
            match self.inner.epoch.load(Ordering::SeqCst) == epoch && holds > 0 {
                false => false,
                true => {
                    self.inner.holds.store(holds - 1, Ordering::SeqCst);
                    match (holds - 1, *status) {
                        (0, RouteStatus::Paused) => {
                            *status = RouteStatus::Active;
                            true
                        }
                        _ => false,
                    }
                }
            }
        });
    }

    fn transition(&self, next: RouteStatus) {
        self.inner.status.send_if_modified(|status| {
            self.inner.epoch.fetch_add(1, Ordering::SeqCst);
            self.inner.holds.store(0, Ordering::SeqCst);
            std::mem::replace(status, next) != next
        });
        log::info!("route {}", next);
    }
}
