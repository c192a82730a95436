// crates/geoquery-core/src/lib.rs

//! Query-understanding front end for a place-lookup service.
//!
//! Callers type approximate, punctuation-inconsistent location strings
//! ("Paris France", "Some Venue, Los Angeles, CA") and
//! [`resolve_place`](resolve::resolve_place) works out which trailing words
//! name a place — resolving them to countries, regions or cities through a
//! [`PlaceRepository`](repo::PlaceRepository) — and hands back whatever is
//! left of the query for downstream matching.
//!
//! The bundled [`PlaceDb`](db::PlaceDb) is an in-memory repository built
//! from a JSON dataset; any other storage engine can implement the trait.

pub mod db;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod repo;
pub mod resolve;
pub mod scan;
pub mod text;

// Re-exports
pub use crate::db::{DbStats, PlaceDb};
pub use crate::error::{GeoQueryError, Result};
pub use crate::model::{City, Country, PlaceMatch, Region, Resolution};
pub use crate::repo::PlaceRepository;
pub use crate::resolve::resolve_place;
pub use crate::text::{equals_folded, fold_key, NameMatch};
