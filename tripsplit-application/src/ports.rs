use crate::error::TripSourceError;
use tripsplit_domain::Trip;

/// Supplies stored trips to the settlement flow.
pub trait TripSource: Send + Sync {
    fn load(&self, trip_id: &str) -> Result<Trip, TripSourceError>;

    fn list(&self) -> Result<Vec<Trip>, TripSourceError>;
}
