//! Final itinerary assembly and formatting.
//!
//! Pure aggregation over an already-ordered stop list: totals, a cost
//! estimate scaled from price tiers, and the human-readable route string.
//! No selection or optimization happens here.

use serde::{Deserialize, Serialize};

use crate::matrix::TravelTimeMatrix;
use crate::place::{Place, PlaceKind};

/// A place selected into the itinerary, with its visit estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub place: Place,
    pub visit_minutes: u32,
}

impl Stop {
    pub fn new(place: Place) -> Self {
        let visit_minutes = place.estimated_visit_minutes();
        Self {
            place,
            visit_minutes,
        }
    }
}

/// Estimated total spend across the crawl, in dollars.
///
/// `max_dollars` is `None` when any stop's tier has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub min_dollars: u32,
    pub max_dollars: Option<u32>,
}

impl CostEstimate {
    /// Display form: `"$20–$50"`, `"Up to $30"`, or `"$100+"`.
    pub fn display(&self) -> String {
        match (self.min_dollars, self.max_dollars) {
            (min, None) => format!("${min}+"),
            (0, Some(max)) => format!("Up to ${max}"),
            (min, Some(max)) => format!("${min}–${max}"),
        }
    }
}

/// A presentation-ready crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Ordered stops.
    pub stops: Vec<Stop>,
    /// Walking minutes from stop `i` to stop `i + 1`, per the matrix; always
    /// one shorter than `stops`. `None` marks a leg the matrix had no value
    /// for.
    pub walking_minutes_between: Vec<Option<u32>>,
    /// Sum of the known legs.
    pub total_walking_minutes: u32,
    pub total_visit_minutes: u32,
    /// Length of the caller's time window.
    pub total_budget_minutes: u32,
    pub estimated_cost: CostEstimate,
    /// `"Start at A → B → C"`.
    pub route: String,
}

/// Consecutive-leg walking minutes for `order`, looked up in `matrix`.
pub fn legs_for(order: &[usize], matrix: &TravelTimeMatrix) -> Vec<Option<u32>> {
    order
        .windows(2)
        .map(|pair| matrix.minutes_between(pair[0], pair[1]))
        .collect()
}

/// Aggregates an ordered stop list into the final itinerary.
///
/// `walking_minutes_between` must already reflect the final order (use
/// [`legs_for`]); its length must be `stops.len() - 1`, or zero for empty
/// and single-stop itineraries.
pub fn assemble(
    stops: Vec<Stop>,
    walking_minutes_between: Vec<Option<u32>>,
    total_budget_minutes: u32,
) -> Itinerary {
    debug_assert_eq!(
        walking_minutes_between.len(),
        stops.len().saturating_sub(1),
    );

    let total_walking_minutes = walking_minutes_between.iter().flatten().sum();
    let total_visit_minutes = stops.iter().map(|stop| stop.visit_minutes).sum();
    let estimated_cost = estimate_cost(&stops);
    let route = route_summary(&stops);

    Itinerary {
        stops,
        walking_minutes_between,
        total_walking_minutes,
        total_visit_minutes,
        total_budget_minutes,
        estimated_cost,
        route,
    }
}

/// Sums per-stop tier ranges. Landmarks contribute zero.
fn estimate_cost(stops: &[Stop]) -> CostEstimate {
    let mut min_dollars = 0;
    let mut max_dollars = Some(0);

    for stop in stops {
        if stop.place.kind != PlaceKind::Restaurant {
            continue;
        }
        let Some(tier) = stop.place.price_tier else {
            continue;
        };
        let (tier_min, tier_max) = tier.per_stop_range();
        min_dollars += tier_min;
        max_dollars = match (max_dollars, tier_max) {
            (Some(total), Some(per_stop)) => Some(total + per_stop),
            _ => None,
        };
    }

    CostEstimate {
        min_dollars,
        max_dollars,
    }
}

fn route_summary(stops: &[Stop]) -> String {
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            if i == 0 {
                format!("Start at {}", stop.place.name)
            } else {
                format!("→ {}", stop.place.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
