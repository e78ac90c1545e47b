//! Vitals server binary.
//!
//! Hosts the food / water mechanic with in-memory collaborators: a character
//! store, a broadcast HUD channel, and a local event bus that fires player
//! ticks on a fixed cadence. Simulated players stand in for game clients.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `vitals-config.yaml` (or the path given as the
//!    first argument)
//! 2. Initialize structured logging (tracing)
//! 3. Create the character store, HUD channel, and bridge task
//! 4. Create the vitals system and subscribe it to the event bus
//! 5. Connect demo players
//! 6. Run the tick loop until `max_ticks` or Ctrl-C
//! 7. Log final vitals

mod demo;
mod error;
mod hud;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vitals_core::{
    BroadcastEmitter, InMemoryCharacterStore, LocalEventBus, LoggingConfig, ServerConfig,
    ServerSection, SystemClock, VitalsSystem,
};

use crate::demo::DemoPlayers;
use crate::error::ServerError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "vitals-config.yaml";

/// Application entry point for the vitals server.
///
/// # Errors
///
/// Returns an error if configuration loading or signal handling fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, config_source) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("vitals-server starting");
    info!(
        source = %config_source,
        time_between_updates_ms = config.vitals.time_between_updates_ms,
        food_removal_rate = config.vitals.food_removal_rate,
        water_removal_rate = config.vitals.water_removal_rate,
        tick_cadence_ms = config.server.tick_cadence_ms,
        max_ticks = config.server.max_ticks,
        "Configuration loaded"
    );

    // 3. Host collaborators.
    let store = Arc::new(InMemoryCharacterStore::new());
    let emitter = Arc::new(BroadcastEmitter::new());
    let bridge = hud::spawn_bridge(emitter.subscribe());

    // 4. Vitals system.
    let vitals = VitalsSystem::new(
        Arc::clone(&store),
        Arc::clone(&emitter),
        Arc::new(SystemClock),
        config.vitals.clone(),
    );
    let mut bus = LocalEventBus::new();
    vitals.init(&mut bus);
    info!("Vitals system subscribed to player events");

    // 5. Demo players.
    let mut demo = DemoPlayers::new(Arc::clone(&store), vitals);
    demo.connect_all(&mut bus, config.server.demo_players);

    // 6. Tick loop.
    let ticks = run_tick_loop(&mut bus, &demo, &config.server).await?;

    // 7. Results.
    demo.report();
    bridge.abort();
    info!(
        ticks,
        players = bus.session_count(),
        characters = store.len(),
        writes = store.writes(),
        "vitals-server shutdown complete"
    );

    Ok(())
}

/// Fire player ticks on the configured cadence.
///
/// Returns the number of ticks dispatched.
async fn run_tick_loop(
    bus: &mut LocalEventBus,
    demo: &DemoPlayers,
    server: &ServerSection,
) -> Result<u64, ServerError> {
    let mut interval = tokio::time::interval(Duration::from_millis(server.tick_cadence_ms));
    let mut ticks: u64 = 0;

    info!(
        players = demo.player_count(),
        tick_cadence_ms = server.tick_cadence_ms,
        "Entering tick loop"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                demo.step(bus);
                let sessions = bus.dispatch_tick();
                ticks = ticks.saturating_add(1);
                debug!(tick = ticks, sessions, "Player tick dispatched");

                if server.max_ticks > 0 && ticks >= server.max_ticks {
                    info!(max_ticks = server.max_ticks, "Tick limit reached");
                    break;
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(|source| ServerError::Signal { source })?;
                info!(ticks, "Interrupted, shutting down");
                break;
            }
        }
    }

    Ok(ticks)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Load the server configuration.
///
/// Uses the path given as the first argument, else `vitals-config.yaml`
/// in the working directory. A missing default file falls back to built-in
/// defaults (with environment overrides still applied).
fn load_config() -> Result<(ServerConfig, String), ServerError> {
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let path = explicit
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if explicit.is_some() || path.exists() {
        let config = ServerConfig::from_file(&path)?;
        return Ok((config, path.display().to_string()));
    }

    let mut config = ServerConfig::default();
    config.vitals.apply_env_overrides();
    config.validate()?;
    Ok((config, String::from("defaults")))
}
