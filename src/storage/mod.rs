//! Trip persistence (JSONL) behind the [`CityStore`] port.
//!
//! All trips live in a single `trips.jsonl` file, one trip per line, so
//! adding a trip is a single-line append with no read/rewrite. Deleting
//! rewrites the file.

mod error;
mod manager;
mod store;

pub use error::StorageError;
pub use manager::{CityManager, TRIPS_FILE};
pub use store::CityStore;
