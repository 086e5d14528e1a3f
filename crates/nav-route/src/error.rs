//! Routing error type.
//!
//! "No route" is not an error: routing returns `Ok(None)`.  The variants here
//! are broken invariants of the input data and should be treated as bugs in
//! the caller or the ingestion step.

use thiserror::Error;

use nav_core::CityId;

/// Errors produced by `nav-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("city {0} was never attached to a country")]
    Unattached(CityId),

    /// The city is not owned by the `World` being queried, even if its
    /// country id happens to be valid there.
    #[error("city {0} is not part of this world")]
    ForeignCity(CityId),
}

pub type RouteResult<T> = Result<T, RouteError>;
