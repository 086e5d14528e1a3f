//! `nav-core` — foundational types for the `rust_nav` routing workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `thiserror` (plus optional `serde`) from
//! the ecosystem.
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `CityId`, `CountryId`, `NodeId`, `EdgeId`         |
//! | [`geo`]     | `GeoPoint`, great-circle distance in kilometres   |
//! | [`error`]   | `NavError`, `NavResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use ids::{CityId, CountryId, EdgeId, NodeId};
