//! Transport modes and their reachability/cost rules.
//!
//! A [`Vehicle`] is a pure policy: given two cities it says whether a direct
//! hop is possible and how many hours it takes.  It holds no state and never
//! mutates cities, countries or itineraries.
//!
//! | Mode         | Direct hop allowed when                        | Cost (hours, rounded up)       |
//! |--------------|------------------------------------------------|--------------------------------|
//! | `FlatRate`   | always                                         | distance / speed               |
//! | `Diplomatic` | same country, or both cities primary           | distance / speed of that class |
//! | `Teleport`   | distance < `max_distance_km`                   | fixed `hop_hours`              |

use std::fmt;
use std::str::FromStr;

use nav_core::NavError;
use nav_world::City;

use crate::Itinerary;

/// A transport mode with its parameters.
///
/// Speeds are km/h, distances km, durations hours.  All parameters are
/// expected to be strictly positive; [`FromStr`] enforces this.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "kebab-case"))]
pub enum Vehicle {
    /// Any city to any city at one speed.
    FlatRate { speed_kmh: f64 },
    /// Within a country at `in_country_kmh`; between primary cities of
    /// different countries at `between_primary_kmh`; nothing else.
    Diplomatic { in_country_kmh: f64, between_primary_kmh: f64 },
    /// Fixed-duration hops strictly shorter than `max_distance_km`.
    Teleport { hop_hours: f64, max_distance_km: f64 },
}

impl Vehicle {
    pub const DEFAULT_FLAT_RATE: Vehicle = Vehicle::FlatRate { speed_kmh: 200.0 };
    pub const DEFAULT_DIPLOMATIC: Vehicle =
        Vehicle::Diplomatic { in_country_kmh: 100.0, between_primary_kmh: 500.0 };
    pub const DEFAULT_TELEPORT: Vehicle =
        Vehicle::Teleport { hop_hours: 3.0, max_distance_km: 2_000.0 };

    /// One vehicle of each mode with default parameters.
    pub fn presets() -> [Vehicle; 3] {
        [Self::DEFAULT_FLAT_RATE, Self::DEFAULT_DIPLOMATIC, Self::DEFAULT_TELEPORT]
    }

    /// Short mode label, also accepted by [`FromStr`].
    pub fn mode_name(&self) -> &'static str {
        match self {
            Vehicle::FlatRate { .. }   => "flat",
            Vehicle::Diplomatic { .. } => "diplomatic",
            Vehicle::Teleport { .. }   => "teleport",
        }
    }

    // ── Policy ────────────────────────────────────────────────────────────

    /// Hours for a direct trip `a → b`, rounded up to a whole hour, or
    /// `None` if this vehicle cannot make the hop.
    ///
    /// "Same country" compares `CountryId`s, so both cities must come from
    /// the same `World`; the router checks this before asking.
    pub fn travel_hours(&self, a: &City, b: &City) -> Option<f64> {
        let km = a.distance_km(b);
        match *self {
            Vehicle::FlatRate { speed_kmh } => Some(hours_at(km, speed_kmh)),

            Vehicle::Diplomatic { in_country_kmh, between_primary_kmh } => {
                let both_primary = a.is_primary() && b.is_primary();
                let same_country = a.is_attached() && a.country() == b.country();
                match (both_primary, same_country) {
                    // Either edge class applies; the slower one wins.
                    (true, true) => Some(
                        hours_at(km, in_country_kmh).max(hours_at(km, between_primary_kmh)),
                    ),
                    (true, false) => Some(hours_at(km, between_primary_kmh)),
                    (false, true) => Some(hours_at(km, in_country_kmh)),
                    (false, false) => None,
                }
            }

            Vehicle::Teleport { hop_hours, max_distance_km } => {
                (km < max_distance_km).then_some(hop_hours)
            }
        }
    }

    /// The two-city itinerary when the direct hop is known to be a shortest
    /// path without building a graph; `None` means "search required".
    ///
    /// - `FlatRate`: always (every hop is allowed, and the direct one is
    ///   never longer than a detour).
    /// - `Diplomatic`: both endpoints primary *and* the inter-primary speed
    ///   strictly exceeds the in-country speed.
    /// - `Teleport`: the endpoints are already within one hop.
    pub fn direct_shortcut<'w>(&self, from: &'w City, to: &'w City) -> Option<Itinerary<'w>> {
        let direct = match *self {
            Vehicle::FlatRate { .. } => true,
            Vehicle::Diplomatic { in_country_kmh, between_primary_kmh } => {
                from.is_primary() && to.is_primary() && between_primary_kmh > in_country_kmh
            }
            Vehicle::Teleport { max_distance_km, .. } => {
                from.distance_km(to) < max_distance_km
            }
        };
        direct.then(|| Itinerary::direct(from, to))
    }

    /// Total hours along `itinerary`, or `None` if any leg is impossible for
    /// this vehicle.  Empty and single-city itineraries take 0 hours.
    pub fn itinerary_hours(&self, itinerary: &Itinerary<'_>) -> Option<f64> {
        itinerary
            .legs()
            .map(|(a, b)| self.travel_hours(a, b))
            .sum()
    }
}

#[inline]
fn hours_at(km: f64, speed_kmh: f64) -> f64 {
    (km / speed_kmh).ceil()
}

// ── Display / FromStr ─────────────────────────────────────────────────────────

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::FlatRate { speed_kmh } => write!(f, "flat-rate ({speed_kmh} km/h)"),
            Vehicle::Diplomatic { in_country_kmh, between_primary_kmh } => {
                write!(f, "diplomatic ({in_country_kmh} km/h | {between_primary_kmh} km/h)")
            }
            Vehicle::Teleport { hop_hours, max_distance_km } => {
                write!(f, "teleport ({hop_hours} h | {max_distance_km} km)")
            }
        }
    }
}

/// Parses `flat`, `diplomatic`, `teleport` (default parameters) or the
/// explicit forms `flat:<kmh>`, `diplomatic:<in_country_kmh>:<between_primary_kmh>`
/// and `teleport:<hop_hours>:<max_km>`.
impl FromStr for Vehicle {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let mode = parts.next().unwrap_or_default().to_ascii_lowercase();
        let params = parts
            .map(parse_param)
            .collect::<Result<Vec<f64>, NavError>>()?;

        let vehicle = match (mode.as_str(), params.as_slice()) {
            ("flat", [])                    => Self::DEFAULT_FLAT_RATE,
            ("flat", &[speed_kmh])          => Vehicle::FlatRate { speed_kmh },
            ("diplomatic", [])              => Self::DEFAULT_DIPLOMATIC,
            ("diplomatic", &[inside, hub])  => Vehicle::Diplomatic {
                in_country_kmh:      inside,
                between_primary_kmh: hub,
            },
            ("teleport", [])                => Self::DEFAULT_TELEPORT,
            ("teleport", &[hours, max_km])  => Vehicle::Teleport {
                hop_hours:       hours,
                max_distance_km: max_km,
            },
            _ => {
                return Err(NavError::Config(format!(
                    "invalid vehicle {s:?}: expected flat[:kmh], \
                     diplomatic[:in_country_kmh:between_primary_kmh] or teleport[:hours:max_km]"
                )));
            }
        };
        Ok(vehicle)
    }
}

fn parse_param(raw: &str) -> Result<f64, NavError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(NavError::Config(format!(
            "vehicle parameter {raw:?} must be a positive number"
        ))),
    }
}
