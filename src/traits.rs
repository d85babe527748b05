//! Core seam traits for external data providers.
//!
//! These are intentionally minimal. Concrete adapters (HTTP clients, offline
//! estimators, test fakes) implement them; the planning algorithms only ever
//! see the returned values. Provider failures are absorbed behind these
//! traits — implementations degrade to empty results or unknown entries and
//! never surface transport errors to the core.

use crate::place::{Place, PriceTier};

/// Supplies candidate restaurants and landmarks for a city.
pub trait PlaceCatalog {
    /// Search restaurants in a city, optionally constrained to a price tier.
    ///
    /// Returns an empty list when the search fails or nothing matches.
    fn search_restaurants(&self, city: &str, tier: Option<PriceTier>) -> Vec<Place>;

    /// Search landmarks near the city centre.
    ///
    /// Returns an empty list when the search fails or nothing matches.
    fn search_landmarks(&self, city: &str) -> Vec<Place>;
}

/// Provides pairwise walking durations for a set of locations.
///
/// The table is indexed by the provided location order. `None` entries mean
/// the duration for that pair is unknown; an empty table means the provider
/// was wholly unavailable.
pub trait TravelTimeProvider {
    fn walking_seconds(&self, locations: &[(f64, f64)]) -> Vec<Vec<Option<f64>>>;
}
