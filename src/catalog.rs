//! Candidate-pool construction with automatic price-tier widening.
//!
//! Runs before the selector: restrict the restaurant search to the
//! requested tier and a minimum quality threshold, and when that yields
//! nothing, retry once without the price constraint and re-filter
//! client-side. The cheapest tier never widens, so a `$` request cannot
//! surface misclassified expensive venues.

use tracing::{debug, info};

use crate::place::{Place, PriceTier};
use crate::traits::PlaceCatalog;

/// Minimum rating a restaurant needs to enter the pool.
pub const MIN_RESTAURANT_RATING: f64 = 4.0;

/// Builds the restaurant candidate pool for a city and tier.
///
/// At most one widened retry is attempted; if that also yields nothing the
/// pool is simply empty and the crawl proceeds without restaurants.
pub fn restaurant_pool<C: PlaceCatalog + ?Sized>(
    catalog: &C,
    city: &str,
    tier: PriceTier,
) -> Vec<Place> {
    let strict = eligible_restaurants(catalog.search_restaurants(city, Some(tier)), tier);
    if !strict.is_empty() {
        return strict;
    }

    if tier == PriceTier::Cheap {
        debug!(city, "no matches for the cheapest tier; not widening");
        return strict;
    }

    info!(
        city,
        tier = tier.symbol(),
        "no restaurants passed the strict search; retrying without the price constraint"
    );
    let widened = catalog.search_restaurants(city, None);
    eligible_restaurants(widened, tier)
}

/// Builds the landmark candidate pool for a city. Landmarks have no price
/// tier and always cost zero, so only usability filters apply.
pub fn landmark_pool<C: PlaceCatalog + ?Sized>(catalog: &C, city: &str) -> Vec<Place> {
    let mut landmarks = catalog.search_landmarks(city);
    landmarks.retain(|place| place.coordinates.is_some());
    landmarks
}

/// Client-side filter applied to every search result, strict or widened:
/// the requested tier, the rating floor, and resolved coordinates (places
/// without coordinates are unusable for matrix-based distances).
fn eligible_restaurants(candidates: Vec<Place>, tier: PriceTier) -> Vec<Place> {
    candidates
        .into_iter()
        .filter(|place| {
            place.price_tier == Some(tier)
                && place.rating.unwrap_or(0.0) >= MIN_RESTAURANT_RATING
                && place.coordinates.is_some()
        })
        .collect()
}
