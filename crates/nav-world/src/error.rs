use thiserror::Error;

use nav_core::CityId;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("city {0} is already registered")]
    DuplicateCity(CityId),

    #[error("CSV header is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
