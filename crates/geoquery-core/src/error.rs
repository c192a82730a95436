// crates/geoquery-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoQueryError>;

/// Errors surfaced by the dataset loader and by [`PlaceRepository`]
/// implementations.
///
/// Parse outcomes ("no place found", partial matches, ambiguous matches) are
/// *not* errors; they are ordinary [`Resolution`](crate::model::Resolution)
/// values. This enum only covers real failures: missing or unreadable
/// datasets, malformed input files, and whatever a remote repository wants to
/// report through [`GeoQueryError::Repository`]. The resolver propagates
/// these to its caller unchanged.
///
/// [`PlaceRepository`]: crate::repo::PlaceRepository
#[derive(Debug, Error)]
pub enum GeoQueryError {
    /// The dataset file could not be found at the given path.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache decode error: {0}")]
    Cache(#[from] bincode::Error),

    /// Failure reported by an external repository implementation.
    #[error("repository error: {0}")]
    Repository(String),
}
