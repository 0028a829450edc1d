//! Checkpoint placement and route orchestration for map navigation.
//!
//! The [`engine::RouteEngine`] owns an ordered list of checkpoints and a small
//! route lifecycle, and keeps a derived route in sync with both by calling out
//! to a [`routing::RoutingService`]. Everything else in the crate exists to feed
//! or observe that engine.
pub mod engine;
pub mod geo;
pub mod geocoding;
pub mod preferences;
pub mod routing;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Latitude or longitude in decimal degrees.
pub type Degrees = f64;
/// Route and segment lengths, as reported by the routing service.
pub type Meters = u32;
/// Travel speed used for time estimates.
pub type KilometersPerHour = u8;
/// Monotonic rebuild counter value.
pub type Ticket = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// GEODESY
// ============================================================================
/// Mean Earth radius used by haversine distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;
/// Encoded polyline coordinate precision, in decimal places.
pub const POLYLINE_PRECISION: u32 = 5;

// ============================================================================
// TRAVEL SPEED
// Bounds of the travel speed preference, in km/h.
// ============================================================================
/// Slowest selectable travel speed.
pub const TRAVEL_SPEED_MIN: KilometersPerHour = 2;
/// Fastest selectable travel speed.
pub const TRAVEL_SPEED_MAX: KilometersPerHour = 60;
/// Travel speed of a fresh profile (brisk walk).
pub const TRAVEL_SPEED_DEFAULT: KilometersPerHour = 6;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored at DEBUG into `logs/<unix>.log`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>;
    let mut loggers = vec![term];
    if file {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
