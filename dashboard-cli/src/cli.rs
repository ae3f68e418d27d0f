use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{
    Config, Dashboard, DisplayUnit, FetchError, WeatherProvider, provider_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::debug;

use crate::{render, sink::TerminalSink};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and the default unit.
    Configure,

    /// Show current weather for a location.
    Show {
        /// City or location name.
        location: String,

        /// Display unit: c / celsius or f / fahrenheit. Defaults to the configured unit.
        #[arg(long, value_parser = parse_unit)]
        unit: Option<DisplayUnit>,

        /// Print the snapshot and derived values as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for locations repeatedly. `:unit` toggles units, `:unit c|f` sets one, `:quit` exits.
    Interactive {
        #[arg(long, value_parser = parse_unit)]
        unit: Option<DisplayUnit>,
    },
}

fn parse_unit(value: &str) -> Result<DisplayUnit, String> {
    value.parse().map_err(|e: anyhow::Error| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, unit, json } => {
                let dash = dashboard(unit)?;
                if let Err(err) = dash.fetch_weather(&location).await {
                    return Err(fetch_failure(&location, &err));
                }

                let view = dash.view();
                if json {
                    println!("{}", serde_json::to_string_pretty(&render::to_json(&view))?);
                } else {
                    print!("{}", render::render(&view));
                }
                Ok(())
            }
            Command::Interactive { unit } => interactive(dashboard(unit)?).await,
        }
    }
}

/// The sink has already shown the user-facing notice; provider detail only
/// goes to the log.
fn fetch_failure(location: &str, err: &FetchError) -> anyhow::Error {
    debug!(location, error = ?err, "Show command fetch failed");
    anyhow::anyhow!("Failed to fetch weather for '{location}'")
}

fn dashboard(
    unit: Option<DisplayUnit>,
) -> anyhow::Result<Dashboard<Box<dyn WeatherProvider>, TerminalSink>> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(Dashboard::new(provider, TerminalSink, unit.unwrap_or(config.unit)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.set_api_key(api_key);

    let units = vec![DisplayUnit::Celsius, DisplayUnit::Fahrenheit];
    let start = units.iter().position(|u| *u == config.unit).unwrap_or(0);
    config.unit = Select::new("Default unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read default unit")?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// One line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    ToggleUnit,
    SetUnit(DisplayUnit),
    /// Anything else, blank included; blank queries are rejected by the dashboard.
    Query(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some(":q" | ":quit"), None, _) => Input::Quit,
            (Some(":u" | ":unit"), None, _) => Input::ToggleUnit,
            (Some(":u" | ":unit"), Some(unit), None) => match unit.parse() {
                Ok(unit) => Input::SetUnit(unit),
                Err(_) => Input::Query(line),
            },
            _ => Input::Query(line),
        }
    }
}

async fn interactive<P: WeatherProvider>(dash: Dashboard<P, TerminalSink>) -> anyhow::Result<()> {
    print!("{}", render::render(&dash.view()));

    loop {
        let prompt = Text::new("Location:")
            .with_help_message(":unit toggles °C/°F, :unit c|f sets it, :quit exits");
        let input = match prompt.prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        match Input::parse(&input) {
            Input::Quit => break,
            Input::ToggleUnit => {
                dash.toggle_unit();
            }
            Input::SetUnit(unit) => dash.set_unit(unit),
            Input::Query(query) => {
                // Failures are already reported by the sink; the previous
                // snapshot stays on screen.
                let _ = dash.fetch_weather(query).await;
            }
        }

        print!("{}", render::render(&dash.view()));
    }

    Ok(())
}
