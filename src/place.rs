//! Candidate places and price tiers.
//!
//! A [`Place`] is a restaurant or landmark as returned by a place catalog,
//! carrying whatever the provider knew about it. Visit durations are
//! estimated here so the selector never needs provider access.

use serde::{Deserialize, Serialize};

/// Default visit length for a restaurant with no richer signal.
pub const RESTAURANT_DEFAULT_VISIT_MINUTES: u32 = 45;

/// Fixed visit length for landmarks.
pub const LANDMARK_VISIT_MINUTES: u32 = 30;

/// Ratings count above which a wait buffer is added to the visit estimate.
const POPULARITY_BUFFER_THRESHOLD: u32 = 2_000;
const POPULARITY_BUFFER_MINUTES: u32 = 15;

/// Provider category tags that indicate quick service (short visits).
const QUICK_SERVICE_TYPES: &[&str] = &["bakery", "cafe", "fast_food", "dessert"];

/// Ordered affordability bucket, matching provider price levels 1 through 4.
///
/// The fourth tier is a real variant, not an alias of `Upscale`; see
/// DESIGN.md for the mapping decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    /// `$` — usually $10 and under per stop.
    Cheap,
    /// `$$` — $10 to $25 per stop.
    Moderate,
    /// `$$$` — $25 to $45 per stop.
    Upscale,
    /// `$$$$` — $50 and up per stop, no upper bound.
    Luxury,
}

impl PriceTier {
    /// Maps a provider price level (1..=4) onto a tier.
    pub fn from_price_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Cheap),
            2 => Some(Self::Moderate),
            3 => Some(Self::Upscale),
            4 => Some(Self::Luxury),
            _ => None,
        }
    }

    /// Dollar-sign display form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Cheap => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    /// Per-stop dollar range used to scale an itinerary's cost estimate.
    /// `None` means no upper bound.
    pub fn per_stop_range(&self) -> (u32, Option<u32>) {
        match self {
            Self::Cheap => (0, Some(10)),
            Self::Moderate => (10, Some(25)),
            Self::Upscale => (25, Some(45)),
            Self::Luxury => (50, None),
        }
    }
}

/// Stop category. Closed set: there is no further subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    Restaurant,
    Landmark,
}

/// A candidate stop for a crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Opaque stable identifier from the catalog.
    pub id: String,
    pub kind: PlaceKind,
    pub name: String,
    pub address: String,
    /// Resolved (lat, lng). Places without coordinates must be excluded
    /// before matrix construction.
    pub coordinates: Option<(f64, f64)>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    /// Provider category tags, e.g. `cafe`, `tourist_attraction`.
    pub types: Vec<String>,
    /// Present only for restaurants; landmarks always cost zero.
    pub price_tier: Option<PriceTier>,
}

impl Place {
    /// Estimated visit length in minutes.
    ///
    /// Landmarks are fixed. Restaurants start from service style and price
    /// tier, with a wait buffer for very popular venues:
    /// quick service 30, `$$` 75, `$$$` and up 100, otherwise 45.
    pub fn estimated_visit_minutes(&self) -> u32 {
        match self.kind {
            PlaceKind::Landmark => LANDMARK_VISIT_MINUTES,
            PlaceKind::Restaurant => {
                let mut minutes = if self.is_quick_service() {
                    30
                } else {
                    match self.price_tier {
                        Some(PriceTier::Upscale) | Some(PriceTier::Luxury) => 100,
                        Some(PriceTier::Moderate) => 75,
                        _ => RESTAURANT_DEFAULT_VISIT_MINUTES,
                    }
                };
                if self.user_ratings_total.unwrap_or(0) > POPULARITY_BUFFER_THRESHOLD {
                    minutes += POPULARITY_BUFFER_MINUTES;
                }
                minutes
            }
        }
    }

    fn is_quick_service(&self) -> bool {
        self.types
            .iter()
            .any(|t| QUICK_SERVICE_TYPES.contains(&t.as_str()))
    }
}
