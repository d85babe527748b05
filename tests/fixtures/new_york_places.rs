//! Real New York locations for realistic test fixtures.
//!
//! Coordinates are real neighbourhood and landmark positions, close enough
//! together that a straight-line walking estimate is meaningful.

use crawl_planner::place::{Place, PlaceKind, PriceTier};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// Downtown Restaurants
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Mama's of Greenwich", 40.7336, -74.0027),
    Location::new("Essex Street Noodles", 40.7209, -73.9840),
    Location::new("Golden Lotus", 40.7157, -73.9970),
    Location::new("Midtown Brasserie", 40.7549, -73.9840),
    Location::new("Hudson Counter", 40.7870, -73.9754),
];

// ============================================================================
// Landmarks
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Brooklyn Bridge Promenade", 40.7061, -73.9969),
    Location::new("Liberty Island Viewpoint", 40.6892, -74.0445),
];

/// Candidate restaurant built from a fixture location.
pub fn restaurant(location: &Location, tier: PriceTier) -> Place {
    Place {
        id: format!("places/{}", location.name.replace(' ', "-").to_lowercase()),
        kind: PlaceKind::Restaurant,
        name: location.name.to_string(),
        address: format!("{}, New York, NY", location.name),
        coordinates: Some((location.lat, location.lng)),
        rating: Some(4.5),
        user_ratings_total: Some(800),
        types: vec!["restaurant".to_string()],
        price_tier: Some(tier),
    }
}

/// Candidate landmark built from a fixture location.
pub fn landmark(location: &Location) -> Place {
    Place {
        id: format!("places/{}", location.name.replace(' ', "-").to_lowercase()),
        kind: PlaceKind::Landmark,
        name: location.name.to_string(),
        address: format!("{}, New York, NY", location.name),
        coordinates: Some((location.lat, location.lng)),
        rating: Some(4.7),
        user_ratings_total: Some(12_000),
        types: vec!["tourist_attraction".to_string()],
        price_tier: None,
    }
}
