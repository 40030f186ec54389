mod view;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use foundation::geo::LonLat;
use foundation::viewport::Viewport;
use map::{Icon, Map, MapConfig, MapEvent, RecordingEngine};
use playback::{Driver, STEP_CAP};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::view::ViewShell;

/// Replay seven days of ship tracks over a static port map.
#[derive(Debug, Parser)]
#[command(name = "tideline")]
struct Args {
    /// Port dataset (CSV with a header row).
    #[arg(long, default_value = "data/port_geo_location.csv")]
    ports: PathBuf,
    /// Ship telemetry dataset (CSV with a header row).
    #[arg(long, default_value = "data/geo_stats_data_7_days.csv")]
    ships: PathBuf,
    #[arg(long, default_value = "assets/port.png")]
    port_icon: PathBuf,
    #[arg(long, default_value = "assets/ship.png")]
    ship_icon: PathBuf,
    /// Playback tick interval in milliseconds.
    #[arg(long, default_value_t = 1)]
    tick_ms: u64,
    /// Maximum samples replayed per ship.
    #[arg(long, default_value_t = STEP_CAP)]
    step_cap: usize,
    #[arg(long, default_value_t = 82.0)]
    center_lon: f64,
    #[arg(long, default_value_t = 21.0)]
    center_lat: f64,
    #[arg(long, default_value_t = 2.5)]
    zoom: f64,
    #[arg(long, default_value = "mapbox://styles/mapbox/streets-v12")]
    style: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(Args::parse()).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = ViewShell::new();

    // The two dataset loads are independent; resolve them concurrently.
    let ports_path = args.ports.clone();
    let ships_path = args.ships.clone();
    let (ports, rows) = tokio::try_join!(
        tokio::task::spawn_blocking(move || ingest::read_ports(&ports_path)),
        tokio::task::spawn_blocking(move || ingest::read_telemetry(&ships_path)),
    )?;
    shell.ports_loaded(ports?);
    shell.tracks_built(track::build_tracks(&rows?)?);

    let Some((ports, tracks)) = shell.mount() else {
        return Err("a dataset produced no rows; the view cannot become ready".into());
    };
    info!(ports = ports.len(), ships = tracks.len(), "datasets ready, mounting map");

    let config = MapConfig {
        viewport: Viewport::new(LonLat::new(args.center_lon, args.center_lat), args.zoom),
        style_url: args.style.clone(),
        access_token: env::var("MAP_ACCESS_TOKEN").ok(),
        port_icon: Icon::new(args.port_icon.clone()).with_size(25, 25),
        ship_icon: Icon::new(args.ship_icon.clone()),
    };
    let mut map = Map::new(config, RecordingEngine::new());
    // The headless engine has no style to fetch; it is ready immediately.
    map.handle_event(MapEvent::StyleLoaded);
    map.add_ports_layer(&ports)?;

    let mut driver = Driver::with_cap(tracks, args.step_cap);
    let mut ticker = tokio::time::interval(Duration::from_millis(args.tick_ms.max(1)));
    while !driver.is_finished() {
        ticker.tick().await;
        driver.tick(&mut map)?;
    }
    if let Some(ts) = driver.last_shown() {
        info!(last_shown = %ts, "playback complete");
    }

    // Teardown happens after the tick loop has exited, so nothing can fire
    // against a removed engine.
    map.shutdown();
    Ok(())
}
