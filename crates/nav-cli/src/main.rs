//! nav — plan trips between world cities from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Shortest diplomatic route
//!   $ nav --data worldcities.csv route --vehicle diplomatic --from Melbourne --to "Kuala Lumpur"
//!
//! - Explicit vehicle parameters, city picked by id
//!   $ nav route --vehicle teleport:3:1500 --from '#1036533631' --to Perth
//!
//! - A country's primary cities, most populous first
//!   $ nav cities Australia --primary
//!
//! - Every preset vehicle on one trip
//!   $ nav compare --from Melbourne --to "Kuala Lumpur"
//!
//! Logs go to stderr.  `RUST_LOG` overrides the `-v` level.
mod args;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::{CityId, NavError};
use nav_route::{Vehicle, compare_vehicles, find_shortest_path};
use nav_world::{City, CityLookup, World, load_world_csv};

use crate::args::{CliArgs, Commands};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let t0 = Instant::now();
    let world = load_world_csv(&args.data)
        .with_context(|| format!("loading {}", args.data.display()))?;
    info!(
        countries = world.countries().len(),
        cities = world.city_count(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "dataset ready"
    );

    match args.command {
        Commands::Route { vehicle, from, to } => {
            let vehicle: Vehicle = vehicle.parse()?;
            let from = resolve(&world, &from)?;
            let to = resolve(&world, &to)?;

            println!("Vehicle: {vehicle}");
            match find_shortest_path(&world, &vehicle, from, to)? {
                Some(itinerary) => {
                    println!("{itinerary}");
                    match vehicle.itinerary_hours(&itinerary) {
                        Some(hours) => println!("Travel time: {hours} h"),
                        None => println!("Travel time: unknown"),
                    }
                }
                None => println!("No route from {} to {}", from.name, to.name),
            }
        }

        Commands::Cities { country, primary } => {
            let Some(c) = world.country_named(&country) else {
                bail!("no country named {country:?}");
            };
            let cities: Vec<&City> = c
                .cities_by_population()
                .into_iter()
                .filter(|city| !primary || city.is_primary())
                .collect();

            println!("Cities in {} ({}):", c.name, c.iso3);
            println!("{:>5}  {:<28} {:<22} {:<8} {:>12}  id", "#", "name", "position", "type", "population");
            for (i, city) in cities.iter().enumerate() {
                println!(
                    "{:>5}  {:<28} {:<22} {:<8} {:>12}  {}",
                    i + 1,
                    city.name,
                    city.position.to_string(),
                    city.city_type.as_str(),
                    city.population,
                    city.id.0,
                );
            }
        }

        Commands::Compare { from, to } => {
            let from = resolve(&world, &from)?;
            let to = resolve(&world, &to)?;

            println!("{} -> {}", from.name, to.name);
            for row in compare_vehicles(&world, &Vehicle::presets(), from, to)? {
                let hours = row
                    .hours
                    .map_or_else(|| "unreachable".to_string(), |h| format!("{h} h"));
                let stops = row.itinerary.as_ref().map_or(0, |it| it.len());
                println!("  {:<36} {:>12}  {} stops", row.vehicle.to_string(), hours, stops);
            }
        }
    }

    Ok(())
}

/// Default level `warn`; each `-v` raises it.  `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve a city by exact name, or by dataset id when written `#<id>`.
///
/// A name shared by several cities is an error listing the candidates.
fn resolve<'w>(world: &'w World, query: &str) -> Result<&'w City> {
    if let Some(raw) = query.strip_prefix('#') {
        let id = CityId(raw.parse().with_context(|| format!("invalid city id {query:?}"))?);
        return world.city(id).ok_or_else(|| NavError::CityNotFound(id).into());
    }

    match world.resolve_city(query) {
        CityLookup::Unique(city) => Ok(city),
        CityLookup::Missing => bail!("no city named {query:?}"),
        CityLookup::Ambiguous(matches) => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|c| {
                    let country = world.country_of(c).map_or("?", |k| k.name.as_str());
                    format!("  {} ({country}) #{}", c.name, c.id.0)
                })
                .collect();
            bail!(
                "{query:?} matches {} cities; pick one by id:\n{}",
                matches.len(),
                candidates.join("\n")
            )
        }
    }
}
