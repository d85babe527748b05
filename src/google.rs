//! Google Maps HTTP adapter (Geocoding, Places, Directions).
//!
//! Implements both seam traits against the classic Maps web services.
//! Failures never cross the boundary: catalog searches degrade to empty
//! lists and travel-time lookups to unknown entries, each logged here.

use rayon::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::place::{Place, PlaceKind, PriceTier};
use crate::traits::{PlaceCatalog, TravelTimeProvider};

/// Landmark categories searched near the city centre.
const LANDMARK_TYPES: &[&str] = &[
    "tourist_attraction",
    "museum",
    "park",
    "church",
    "synagogue",
    "mosque",
    "point_of_interest",
];

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Landmark search radius around the city centre, in meters.
    pub landmark_radius_m: u32,
    /// Cap on candidates taken per category, to bound API spend.
    pub max_candidates: usize,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            timeout_secs: 10,
            landmark_radius_m: 5_000,
            max_candidates: 15,
        }
    }
}

#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    /// The API answered with a non-OK status or an unusable body.
    Rejected(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    config: GoogleMapsConfig,
    client: reqwest::blocking::Client,
}

impl GoogleMapsClient {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Resolves a city name to its centre point.
    fn geocode_city(&self, city: &str) -> Result<(f64, f64), ProviderError> {
        let url = format!("{}/geocode/json", self.config.base_url);
        let response: GeocodeResponse = self
            .client
            .get(url)
            .query(&[("address", city), ("key", self.config.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        let result = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Rejected(format!("city not found: {city}")))?;
        Ok((result.geometry.location.lat, result.geometry.location.lng))
    }

    fn restaurant_search(
        &self,
        city: &str,
        tier: Option<PriceTier>,
    ) -> Result<Vec<Place>, ProviderError> {
        let url = format!("{}/place/textsearch/json", self.config.base_url);
        let query = format!("popular restaurants in {city}");
        let mut params = vec![
            ("query".to_string(), query),
            ("type".to_string(), "restaurant".to_string()),
            ("key".to_string(), self.config.api_key.clone()),
        ];
        if let Some(tier) = tier {
            // Pin both ends of the price range to the requested tier.
            let level = (tier as u8 + 1).to_string();
            params.push(("minprice".to_string(), level.clone()));
            params.push(("maxprice".to_string(), level));
        }

        let response: PlaceSearchResponse = self
            .client
            .get(url)
            .query(&params)
            .send()?
            .error_for_status()?
            .json()?;
        response.check_status()?;

        Ok(response
            .results
            .into_iter()
            .take(self.config.max_candidates)
            .map(|result| result.into_place(PlaceKind::Restaurant))
            .collect())
    }

    fn landmark_search(&self, city: &str) -> Result<Vec<Place>, ProviderError> {
        let (lat, lng) = self.geocode_city(city)?;
        let url = format!("{}/place/nearbysearch/json", self.config.base_url);
        let response: PlaceSearchResponse = self
            .client
            .get(url)
            .query(&[
                ("location", format!("{lat:.6},{lng:.6}")),
                ("radius", self.config.landmark_radius_m.to_string()),
                ("type", LANDMARK_TYPES.join("|")),
                ("rankby", "prominence".to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        response.check_status()?;

        Ok(response
            .results
            .into_iter()
            .take(self.config.max_candidates)
            .map(|result| result.into_place(PlaceKind::Landmark))
            .collect())
    }

    /// Walking duration in seconds between two points, per the Directions
    /// API.
    fn pair_seconds(&self, from: (f64, f64), to: (f64, f64)) -> Result<f64, ProviderError> {
        let url = format!("{}/directions/json", self.config.base_url);
        let response: DirectionsResponse = self
            .client
            .get(url)
            .query(&[
                ("origin", format!("{:.6},{:.6}", from.0, from.1)),
                ("destination", format!("{:.6},{:.6}", to.0, to.1)),
                ("mode", "walking".to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        if response.status != "OK" {
            return Err(ProviderError::Rejected(response.status));
        }
        response
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .map(|leg| leg.duration.value)
            .ok_or_else(|| ProviderError::Rejected("no route returned".to_string()))
    }
}

impl PlaceCatalog for GoogleMapsClient {
    fn search_restaurants(&self, city: &str, tier: Option<PriceTier>) -> Vec<Place> {
        match self.restaurant_search(city, tier) {
            Ok(places) => places,
            Err(err) => {
                warn!(city, ?err, "restaurant search failed");
                Vec::new()
            }
        }
    }

    fn search_landmarks(&self, city: &str) -> Vec<Place> {
        match self.landmark_search(city) {
            Ok(places) => places,
            Err(err) => {
                warn!(city, ?err, "landmark search failed");
                Vec::new()
            }
        }
    }
}

impl TravelTimeProvider for GoogleMapsClient {
    /// Fans out one Directions request per ordered pair and joins the
    /// results into a full table. Failed pairs stay unknown.
    fn walking_seconds(&self, locations: &[(f64, f64)]) -> Vec<Vec<Option<f64>>> {
        locations
            .par_iter()
            .map(|&from| {
                locations
                    .iter()
                    .map(|&to| {
                        if from == to {
                            return Some(0.0);
                        }
                        match self.pair_seconds(from, to) {
                            Ok(seconds) => Some(seconds),
                            Err(err) => {
                                warn!(?from, ?to, ?err, "walking-time lookup failed");
                                None
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

// Wire types for the classic Maps web services.

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize, Clone, Copy)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct PlaceSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

impl PlaceSearchResponse {
    /// ZERO_RESULTS is an answer, not a failure.
    fn check_status(&self) -> Result<(), ProviderError> {
        match self.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => Err(ProviderError::Rejected(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    vicinity: Option<String>,
    geometry: Option<Geometry>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: Option<u32>,
    #[serde(default)]
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
}

impl PlaceResult {
    fn into_place(self, kind: PlaceKind) -> Place {
        let price_tier = match kind {
            // Landmarks never carry a tier; their cost is always zero.
            PlaceKind::Landmark => None,
            PlaceKind::Restaurant => self.price_level.and_then(PriceTier::from_price_level),
        };
        Place {
            id: self.place_id,
            kind,
            name: self.name,
            address: self.formatted_address.or(self.vicinity).unwrap_or_default(),
            coordinates: self
                .geometry
                .map(|geometry| (geometry.location.lat, geometry.location.lng)),
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            types: self.types,
            price_tier,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    duration: DurationValue,
}

#[derive(Debug, Deserialize)]
struct DurationValue {
    /// Seconds.
    value: f64,
}
