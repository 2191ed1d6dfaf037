mod charts;
mod console;
mod dashboard;
mod errors;
mod forecast;
mod handlers;
mod initialization;
mod manager_owm;

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::error;
use crate::errors::{UnrecoverableError, WeatherError};
use crate::forecast::{select_daily_forecasts, DailyForecast};
use crate::manager_owm::{Location, OWM};

#[derive(Parser)]
#[command(name = "skyscope")]
#[command(author, version, about = "3 day weather forecast via console, charts or dashboard", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the forecast to the console
    Console {
        /// Free-text location to get a forecast for
        location: String,
    },
    /// Write the chart projections as html files
    Charts {
        /// Free-text location to get a forecast for
        location: String,
    },
    /// Serve the interactive dashboard
    Dashboard,
}

/// Fetch then select, the sequence shared by all three surfaces. An empty
/// selection is reported as missing data so no surface renders from nothing.
///
/// # Arguments
///
/// * 'owm' - forecast provider manager
/// * 'location' - free-text place name
pub(crate) async fn fetch_daily(owm: &OWM, location: &str) -> Result<(Location, Vec<DailyForecast>), WeatherError> {
    let (resolved, samples) = owm.fetch_forecast(location).await?;

    let daily = select_daily_forecasts(&samples, Utc::now().date_naive());
    if daily.is_empty() {
        return Err(WeatherError::NoData(format!("no samples within the forecast window for {}", location)));
    }

    Ok((resolved, daily))
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let cli = Cli::parse();

    initialization::logging()?;
    let config = initialization::config(&cli.config)?;

    match cli.command {
        Commands::Console { location } => {
            let owm = OWM::new(&config.owm.url, &config.owm.api_key, &config.owm.units)?;
            match fetch_daily(&owm, &location).await {
                Ok((resolved, daily)) => console::print_forecast(&resolved, &daily),
                Err(e) => {
                    error!("console run for '{}' failed: {:?}", location, e);
                    println!("{}", e);
                }
            }
        }
        Commands::Charts { location } => {
            let owm = OWM::new(&config.owm.url, &config.owm.api_key, &config.owm.units)?;
            match fetch_daily(&owm, &location).await {
                Ok((_, daily)) => charts::write_charts(&daily, &config.charts.output_dir)?,
                Err(e) => {
                    error!("charts run for '{}' failed: {:?}", location, e);
                    println!("{}", e);
                }
            }
        }
        Commands::Dashboard => {
            dashboard::run(config).await?;
        }
    }

    Ok(())
}
