/// What a single rebuild did to the published route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rebuild {
    /// Fewer than two checkpoints; the route was cleared without a request.
    Cleared,
    /// Origin equals destination with nothing between; nothing was published.
    Skipped,
    /// The service returned a route and it was published.
    Routed,
    /// The service declined; straight legs through the checkpoints were published.
    Fallback,
    /// A newer rebuild was initiated before this one settled; its result was dropped.
    Superseded,
}

impl Rebuild {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Cleared | Self::Routed | Self::Fallback)
    }
}

impl std::fmt::Display for Rebuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cleared => write!(f, "cleared"),
            Self::Skipped => write!(f, "skipped"),
            Self::Routed => write!(f, "routed"),
            Self::Fallback => write!(f, "fallback"),
            Self::Superseded => write!(f, "superseded"),
        }
    }
}
