//! CSV world loader.
//!
//! # CSV format
//!
//! One row per city, in the `worldcities` layout.  Only the columns below are
//! read; any others are ignored.
//!
//! ```csv
//! city_ascii,lat,lng,country,iso3,capital,population,id
//! Melbourne,-37.8136,144.9631,Australia,AUS,admin,4529500,1036533631
//! Canberra,-35.2931,149.1269,Australia,AUS,primary,426704,1036142029
//! Kuala Lumpur,3.1478,101.6953,Malaysia,MYS,primary,8639000,1458988644
//! ```
//!
//! **`capital`**: see [`CityType::from_flag`].
//!
//! **`population`**: decimal text such as `4529500.0` is truncated to
//! `4529500`.  Loaders that only accept integer text store 0 for those rows;
//! this one keeps the count.
//!
//! # Malformed rows
//!
//! | Problem                                 | Handling                    |
//! |-----------------------------------------|-----------------------------|
//! | `population` empty or not a number      | population = 0, row kept    |
//! | `lat` / `lng` / `id` not a number       | row skipped, `warn!` logged |
//! | duplicate `id`                          | row skipped, `warn!` logged |
//! | wrong number of fields                  | row skipped, `warn!` logged |
//! | I/O failure, missing required column    | load aborted with an error  |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use nav_core::{CityId, GeoPoint};

use crate::{City, CityType, World, WorldError, WorldResult};

// ── CSV record ────────────────────────────────────────────────────────────────

// Numeric columns are read as text so a bad value rejects (or defaults) one
// field instead of failing the whole row inside the CSV deserializer.
#[derive(Deserialize)]
struct CityRecord {
    city_ascii: String,
    lat:        String,
    lng:        String,
    country:    String,
    iso3:       String,
    #[serde(default)]
    capital:    String,
    #[serde(default)]
    population: String,
    id:         String,
}

const REQUIRED_COLUMNS: [&str; 6] = ["city_ascii", "lat", "lng", "country", "iso3", "id"];

/// Row counts reported after a load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded:  usize,
    pub skipped: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`World`] from a CSV file.
pub fn load_world_csv(path: &Path) -> WorldResult<World> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_world_reader(file)
}

/// Like [`load_world_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or `&[u8]`).
pub fn load_world_reader<R: Read>(reader: R) -> WorldResult<World> {
    load_world_reader_with_summary(reader).map(|(world, _)| world)
}

/// Like [`load_world_reader`] but also returns the row counts.
pub fn load_world_reader_with_summary<R: Read>(reader: R) -> WorldResult<(World, LoadSummary)> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(WorldError::MissingColumn(*missing));
    }

    let mut world = World::new();
    let mut summary = LoadSummary::default();

    for (row, result) in csv_reader.deserialize::<CityRecord>().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable city row");
                summary.skipped += 1;
                continue;
            }
        };

        let Some(city) = city_from_record(&record, row) else {
            summary.skipped += 1;
            continue;
        };

        match world.add_city(city, &record.country, &record.iso3) {
            Ok(_) => summary.loaded += 1,
            Err(e) => {
                warn!(row, error = %e, "skipping city row");
                summary.skipped += 1;
            }
        }
    }

    info!(
        loaded    = summary.loaded,
        skipped   = summary.skipped,
        countries = world.countries().len(),
        "world loaded"
    );
    Ok((world, summary))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn city_from_record(r: &CityRecord, row: usize) -> Option<City> {
    let (Ok(lat), Ok(lon)) = (r.lat.trim().parse::<f64>(), r.lng.trim().parse::<f64>()) else {
        warn!(row, lat = %r.lat, lng = %r.lng, "skipping city with invalid coordinates");
        return None;
    };
    let Ok(id) = r.id.trim().parse::<u64>() else {
        warn!(row, id = %r.id, "skipping city with invalid id");
        return None;
    };

    Some(City::new(
        r.city_ascii.as_str(),
        GeoPoint::new(lat, lon),
        CityType::from_flag(&r.capital),
        parse_population(&r.population),
        CityId(id),
    ))
}

/// Parse a population count, falling back to 0.
///
/// Accepts plain integers and decimal forms such as `"4529500.0"` (truncated).
pub(crate) fn parse_population(s: &str) -> u64 {
    let s = s.trim();
    if let Ok(n) = s.parse::<u64>() {
        return n;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f as u64,
        _ => 0,
    }
}
