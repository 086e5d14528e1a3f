//! Workspace error type.
//!
//! Sub-crates define their own error enums (`WorldError`, `RouteError`) for
//! failures specific to them; `NavError` covers the cases shared by callers
//! of every crate.

use thiserror::Error;

use crate::CityId;

/// The base error type for `nav-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("city {0} not found")]
    CityNotFound(CityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
