//! `nav-world` — cities, countries, and the catalog that owns them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`city`]    | `City`, `CityType`                                        |
//! | [`country`] | `Country` (owns its cities in insertion order)            |
//! | [`world`]   | `World` catalog, name/id indices, `CityLookup`            |
//! | [`loader`]  | `load_world_csv`, `load_world_reader`, `LoadSummary`      |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                            |
//!
//! # Ownership model
//!
//! ```text
//! World ──owns──▶ Country ──owns──▶ City
//!   │                                 │
//!   └─ indices: name → CountryId      └─ country: CountryId (back-reference)
//!               CityId → slot
//!               name → [CityId]
//! ```
//!
//! A city's back-reference is a plain `CountryId`, assigned once by
//! [`World::add_city`].  Cities built with [`City::new`] start unattached
//! (`CountryId::INVALID`) until then.

pub mod city;
pub mod country;
pub mod error;
pub mod loader;
pub mod world;

#[cfg(test)]
mod tests;

pub use city::{City, CityType};
pub use country::Country;
pub use error::{WorldError, WorldResult};
pub use loader::{LoadSummary, load_world_csv, load_world_reader, load_world_reader_with_summary};
pub use world::{CityLookup, World};
