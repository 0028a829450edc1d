use crate::Ticket;
use crate::geo::Point;

/// A rebuild as initiated: its ticket and the checkpoints it will route.
///
/// Both are captured when the rebuild is requested, not when it runs, so
/// ticket order is initiation order regardless of task scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    ticket: Ticket,
    checkpoints: Vec<Point>,
}

impl Job {
    pub(crate) fn new(ticket: Ticket, checkpoints: Vec<Point>) -> Self {
        Self {
            ticket,
            checkpoints,
        }
    }
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
    pub fn checkpoints(&self) -> &[Point] {
        &self.checkpoints
    }

    /// Origin, destination and the waypoints between them,
    /// or `None` when there are fewer than two checkpoints.
    pub fn legs(&self) -> Option<(Point, Point, &[Point])> {
        match self.checkpoints.as_slice() {
            [origin, between @ .., destination] => Some((*origin, *destination, between)),
            _ => None,
        }
    }

    /// A point routed to itself.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.legs(), Some((origin, destination, [])) if origin == destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_origin_destination_and_between() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(2.0, 2.0);
        assert_eq!(Job::new(1, vec![]).legs(), None);
        assert_eq!(Job::new(1, vec![a]).legs(), None);
        assert_eq!(Job::new(1, vec![a, c]).legs(), Some((a, c, &[][..])));
        assert_eq!(Job::new(1, vec![a, b, c]).legs(), Some((a, c, &[b][..])));
    }

    #[test]
    fn degenerate_only_without_waypoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        assert!(Job::new(1, vec![a, a]).is_degenerate());
        assert!(!Job::new(1, vec![a, b, a]).is_degenerate());
        assert!(!Job::new(1, vec![a, b]).is_degenerate());
        assert!(!Job::new(1, vec![a]).is_degenerate());
    }
}
