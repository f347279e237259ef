use thiserror::Error;

/// Convenient result alias for the traveltime library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only transport-level failures while reading a dataset surface as errors.
/// Malformed records are skipped during ingestion and missing routes or
/// unknown locations are expressed through [`crate::RouteResult`].
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
