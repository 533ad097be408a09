use async_trait::async_trait;

use super::error::StorageError;
use crate::model::Trip;

/// The city-management capability the UI depends on.
///
/// Implementations own the list of saved trips. `is_loading` is `true` while
/// an [`add_city`](Self::add_city) call is in flight.
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Durably stores a new trip and adds it to [`cities`](Self::cities).
    async fn add_city(&self, trip: Trip) -> Result<(), StorageError>;

    /// Removes the trip with the given ID.
    async fn delete_city(&self, id: &str) -> Result<(), StorageError>;

    /// Returns a snapshot of all saved trips, oldest first.
    fn cities(&self) -> Vec<Trip>;

    /// Returns `true` while an add is in flight.
    fn is_loading(&self) -> bool;
}
