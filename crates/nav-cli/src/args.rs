use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments for `nav`.
#[derive(Debug, Parser)]
#[command(
    name = "nav",
    version,
    about = "Plan trips between world cities with different vehicles"
)]
pub struct CliArgs {
    /// World cities CSV (columns: city_ascii, lat, lng, country, iso3, capital, population, id)
    #[arg(short = 'd', long = "data", global = true, default_value = "worldcities.csv")]
    pub data: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).  `RUST_LOG` takes precedence.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shortest itinerary between two cities for one vehicle
    Route {
        /// flat[:kmh], diplomatic[:in_country_kmh:between_primary_kmh] or teleport[:hours:max_km]
        #[arg(long, default_value = "flat")]
        vehicle: String,

        /// Origin city name, or `#<id>` to pick by id
        #[arg(long)]
        from: String,

        /// Destination city name, or `#<id>` to pick by id
        #[arg(long)]
        to: String,
    },

    /// List a country's cities, most populous first
    Cities {
        /// Country name as it appears in the dataset
        country: String,

        /// Only primary (capital) cities
        #[arg(long)]
        primary: bool,
    },

    /// Route one trip with every preset vehicle
    Compare {
        /// Origin city name, or `#<id>`
        #[arg(long)]
        from: String,

        /// Destination city name, or `#<id>`
        #[arg(long)]
        to: String,
    },
}
