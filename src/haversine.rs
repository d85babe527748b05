//! Haversine walking-time provider (fallback when no directions service is
//! available).
//!
//! Uses great-circle distance at an assumed walking pace. Less accurate
//! than a routed estimate (ignores streets and crossings) but always
//! available and never fails.

use crate::traits::TravelTimeProvider;

/// Average walking pace assumption for time estimation.
const DEFAULT_WALKING_SPEED_KMH: f64 = 4.8;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based walking-time provider.
#[derive(Debug, Clone)]
pub struct HaversineWalking {
    /// Assumed walking pace in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineWalking {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }
}

impl HaversineWalking {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to walking time in seconds.
    fn km_to_seconds(&self, km: f64) -> f64 {
        let hours = km / self.speed_kmh;
        hours * 3600.0
    }
}

impl TravelTimeProvider for HaversineWalking {
    fn walking_seconds(&self, locations: &[(f64, f64)]) -> Vec<Vec<Option<f64>>> {
        let n = locations.len();
        let mut table = vec![vec![Some(0.0); n]; n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    let km = Self::haversine_km(*from, *to);
                    table[i][j] = Some(self.km_to_seconds(km));
                }
            }
        }

        table
    }
}
