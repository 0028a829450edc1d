//! Route Planner Binary
//!
//! Places checkpoints, starts the route and prints what the map would draw.
//! Routes offline with straight legs; addresses come from an optional
//! JSON gazetteer.
//!
//! Usage: lazygo -c 48.8584,2.2945 -c 48.8606,2.3376 --mode drive

use clap::Parser;
use lazygo::engine::RouteEngine;
use lazygo::geo::Point;
use lazygo::geocoding::Gazetteer;
use lazygo::geocoding::Geocoder;
use lazygo::geocoding::Nowhere;
use lazygo::preferences::Settings;
use lazygo::preferences::TravelMode;
use lazygo::routing::Straight;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Plan a route through checkpoints", long_about = None)]
struct Args {
    /// Checkpoint as <lat>,<lng>; repeat in travel order
    #[arg(short, long = "checkpoint", required = true)]
    checkpoints: Vec<Point>,
    /// Travel mode (walk or drive), overriding the profile
    #[arg(short, long)]
    mode: Option<TravelMode>,
    /// Prefer traffic-aware routing when driving
    #[arg(short, long)]
    traffic: bool,
    /// Travel speed in km/h used for the time estimate
    #[arg(short, long)]
    speed: Option<u8>,
    /// JSON profile to start from
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Write the resulting profile back to this path
    #[arg(long)]
    save: Option<PathBuf>,
    /// JSON list of named places for address lookups
    #[arg(long)]
    places: Option<PathBuf>,
    /// Search radius for address lookups, in meters
    #[arg(long, default_value_t = 250.0)]
    radius: f64,
    /// Position to resolve an address for
    #[arg(short, long)]
    focus: Option<Point>,
    /// Log level
    #[arg(long, default_value = "info")]
    log: log::LevelFilter,
    /// Mirror debug logs into logs/
    #[arg(long)]
    log_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lazygo::log(args.log, args.log_file)?;

    let settings = Arc::new(match args.profile {
        Some(ref path) => Settings::load(path)?,
        None => Settings::default(),
    });
    if let Some(mode) = args.mode {
        settings.set_travel_mode(mode);
    }
    if args.traffic {
        settings.set_traffic_awareness(true);
    }
    if let Some(speed) = args.speed {
        settings.set_travel_speed(speed);
    }
    if let Some(ref path) = args.save {
        settings.save(path)?;
    }

    let geocoder: Arc<dyn Geocoder> = match args.places {
        Some(ref path) => Arc::new(Gazetteer::load(path, args.radius)?),
        None => Arc::new(Nowhere),
    };
    let engine = RouteEngine::new(Arc::new(Straight), settings.clone(), geocoder);

    for point in args.checkpoints {
        if let Some(pending) = engine.add_checkpoint(point) {
            pending.await??;
        }
    }
    let outcome = engine.start_route().await?;
    match outcome.is_published() {
        true => log::info!("route {}", outcome),
        false => log::warn!("route {}, nothing new to show", outcome),
    }

    let route = engine.route();
    let profile = settings.profile();
    for point in route.points() {
        println!("{}", point);
    }
    println!("status    {}", engine.status());
    println!("mode      {}", profile.travel_mode);
    println!("distance  {} m", route.distance());
    println!("fallback  {}", route.is_fallback());
    println!(
        "eta       {} min at {} km/h",
        route.eta(profile.travel_speed).as_secs().div_ceil(60),
        profile.travel_speed
    );

    if let Some(point) = args.focus {
        engine.update_focused_position(point).await?;
        match engine.address() {
            Some(address) => println!("address   {}", address),
            None => println!("address   unknown"),
        }
    }
    Ok(())
}
