use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use tracing::{error, info};
use weather_feed_core::{
    Config, FilePreferences, LocationMenu, PresentationSink, StartupAction, TextSink,
    fetch_weather, provider_from_config, session,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather feed viewer")]
pub struct Cli {
    /// Read configuration from this file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a location.
    Show {
        /// Location name; if absent, the stored or default location is used.
        location: Option<String>,

        /// Print the snapshot as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Pick a location from the menu, remember it, and show its weather.
    Select,

    /// List the locations offered by `select`.
    Locations,

    /// Configure the feed endpoint and default location.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command {
            Command::Show { location, json } => {
                let location = match location {
                    Some(location) => location,
                    None => {
                        let mut prefs = FilePreferences::open_default()?;
                        let mut menu = LocationMenu::populate(&config.locations);
                        match session::restore(&mut prefs, &mut menu, &config.default_location) {
                            StartupAction::Fetch(location) => location,
                            StartupAction::Idle => return Ok(()),
                        }
                    }
                };
                show(&config, location, json).await?;
            }
            Command::Select => {
                let mut prefs = FilePreferences::open_default()?;
                let mut menu = LocationMenu::populate(&config.locations);
                let cursor = session::stored_location(&prefs)
                    .and_then(|city| menu.options().iter().position(|o| *o == city))
                    .unwrap_or(0);

                let choice = Select::new("Location:", menu.options().to_vec())
                    .with_starting_cursor(cursor)
                    .prompt()?;

                let location = session::choose(&mut prefs, &mut menu, &choice);
                show(&config, location, false).await?;
            }
            Command::Locations => {
                let prefs = FilePreferences::open_default()?;
                let stored = session::stored_location(&prefs);

                for location in &config.locations {
                    let marker = if stored.as_deref() == Some(location.as_str()) { "*" } else { " " };
                    println!("{marker} {location}");
                }
            }
            Command::Configure => configure(config, self.config)?,
        }

        Ok(())
    }
}

/// Fetch and print weather for `location`. Failures are only logged, as the
/// fetch itself does; nothing is printed to stdout in that case.
async fn show(config: &Config, location: String, json: bool) -> anyhow::Result<()> {
    let provider = Arc::new(provider_from_config(config)?);
    info!(%location, "fetching weather");

    let handle = fetch_weather(
        provider,
        location,
        move |snapshot| {
            if json {
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(out) => println!("{out}"),
                    Err(err) => error!("failed to serialize snapshot: {err}"),
                }
            } else {
                let mut sink = TextSink::default();
                sink.render(&snapshot);
                print!("{sink}");
            }
        },
        |_| {},
    );

    handle.await.context("Weather fetch task did not complete")?;
    Ok(())
}

fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let endpoint = Text::new("Feed endpoint:").with_default(&config.endpoint).prompt()?;
    config.endpoint = endpoint;
    config.endpoint_url()?;

    let cursor = config.locations.iter().position(|l| *l == config.default_location).unwrap_or(0);
    let default_location = Select::new("Default location:", config.locations.clone())
        .with_starting_cursor(cursor)
        .prompt()?;
    config.default_location = default_location;

    let path = match path {
        Some(path) => path,
        None => Config::config_file_path()?,
    };
    config.save_to(&path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
