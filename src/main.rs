//! WeatherNow - terminal weather widget backed by Open-Meteo.

mod cli;
mod input;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::Cli;
use input::{Input, HELP};
use weathernow_core::Config;
use weathernow_store::{FileStore, KeyValueStore, MemoryStore};
use weathernow_ui::{Action, Controller, NoticeDurations, Surface, TerminalSurface, WeatherService};
use weathernow_weather::{ConfiguredLocation, Coordinates, ForecastClient};

const TICK: Duration = Duration::from_millis(250);

/// How long to keep waiting for responses once stdin has closed
const DRAIN_GRACE: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    let cli = Cli::parse();

    weathernow_core::init(cli.verbose)?;

    let (config, _) = Config::load_validated(cli.config.as_deref())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        tracing::info!("Using in-memory storage");
        Arc::new(MemoryStore::new())
    } else {
        match FileStore::open(config.storage.data_dir.clone()) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    "Failed to open data directory {}: {}; nothing will be saved",
                    config.storage.data_dir.display(),
                    e
                );
                Arc::new(MemoryStore::new())
            }
        }
    };

    let timeout = (config.api.timeout_secs > 0).then(|| Duration::from_secs(config.api.timeout_secs));
    let client = ForecastClient::with_endpoints(
        config.api.geocode_url.clone(),
        config.api.forecast_url.clone(),
        timeout,
    )?;

    let coordinates = match (config.location.latitude, config.location.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };
    let locator = ConfiguredLocation::new(config.location.enabled, coordinates);

    let durations = NoticeDurations::from(&config.notifications);
    let (service, mut rx) = WeatherService::new(
        Arc::new(client),
        Arc::new(locator),
        store,
        TerminalSurface::new(),
        durations.default,
    );
    let mut controller = Controller::new(service, durations);

    controller.dispatch(Action::Start);
    if let Some(city) = cli.city {
        controller.dispatch(Action::Search(city));
    }
    println!("{}", style("Type a city name, or 'help' for commands.").dim());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    let mut stdin_open = true;
    let mut last_activity = Instant::now();

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    stdin_open = false;
                    last_activity = Instant::now();
                    continue;
                };
                match input::parse(&line) {
                    None => {}
                    Some(Input::Action(action)) => controller.dispatch(action),
                    Some(Input::Show) => {
                        let surface = controller.surface_mut();
                        surface.invalidate();
                        surface.present();
                    }
                    Some(Input::Help) => println!("{}", HELP),
                    Some(Input::Usage(usage)) => println!("{} {}", style("usage:").yellow(), usage),
                    Some(Input::Quit) => break,
                }
            }
            Some(action) = rx.recv() => {
                last_activity = Instant::now();
                controller.dispatch(action);
            }
            _ = ticker.tick() => {
                controller.tick(Instant::now());
                if !stdin_open && last_activity.elapsed() > DRAIN_GRACE {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracing::info!("WeatherNow shutting down");
    Ok(())
}
