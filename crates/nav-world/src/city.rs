//! The `City` entity and its category tag.

use std::fmt;

use nav_core::{CityId, CountryId, GeoPoint};

// ── CityType ──────────────────────────────────────────────────────────────────

/// Administrative category of a city, taken from the dataset's `capital`
/// column.
///
/// Only [`CityType::Primary`] has routing significance (diplomatic vehicles
/// may hop between primary cities of different countries).  The remaining
/// variants are kept for display and filtering.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CityType {
    /// National capital.
    Primary,
    /// First-level administrative capital (state, province, …).
    Admin,
    /// Lower-level administrative capital.
    Minor,
    /// Any other flag, including the empty string.
    #[default]
    None,
    /// Unrecognised non-empty flag, preserved verbatim.
    Other(String),
}

impl CityType {
    /// Map a raw `capital` column value to a `CityType`.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "primary" => CityType::Primary,
            "admin"   => CityType::Admin,
            "minor"   => CityType::Minor,
            ""        => CityType::None,
            other     => CityType::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CityType::Primary  => "primary",
            CityType::Admin    => "admin",
            CityType::Minor    => "minor",
            CityType::None     => "",
            CityType::Other(s) => s,
        }
    }
}

impl fmt::Display for CityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── City ──────────────────────────────────────────────────────────────────────

/// A city: a named point on the globe with a unique dataset id.
///
/// Names are *not* unique across the world ("Springfield", "Victoria", …);
/// always compare cities by [`id`](City::id).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id:         CityId,
    pub name:       String,
    pub position:   GeoPoint,
    pub city_type:  CityType,
    pub population: u64,
    /// Owning country; `INVALID` until attached by `World::add_city`.
    pub(crate) country: CountryId,
}

impl City {
    /// Create an unattached city.
    pub fn new(
        name:       impl Into<String>,
        position:   GeoPoint,
        city_type:  CityType,
        population: u64,
        id:         CityId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            city_type,
            population,
            country: CountryId::INVALID,
        }
    }

    /// The owning country, or `CountryId::INVALID` if never attached.
    #[inline]
    pub fn country(&self) -> CountryId {
        self.country
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.country.is_valid()
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.city_type == CityType::Primary
    }

    /// Great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &City) -> f64 {
        self.position.distance_km(other.position)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
