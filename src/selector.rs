//! Time-budget-constrained greedy stop sequencing.
//!
//! Picks and orders an initial path through the candidate pool: seed at the
//! first restaurant, then repeatedly walk to the nearest feasible candidate,
//! alternating restaurant and landmark stops while the cumulative walking
//! and visiting time stays inside the budget.
//!
//! This is a hand-rolled heuristic, not an optimal scheduler. It is a pure
//! function over explicit state so it can be tested without any provider.

use tracing::debug;

use crate::itinerary::{Itinerary, Stop, assemble, legs_for};
use crate::matrix::TravelTimeMatrix;
use crate::place::{Place, PlaceKind};

/// Hard cap on stops per crawl. Also bounds the optimizer's search space.
pub const MAX_STOPS: usize = 10;

#[derive(Debug, Clone)]
pub struct SelectorOptions {
    pub max_stops: usize,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            max_stops: MAX_STOPS,
        }
    }
}

/// Running selection state over the concatenated candidate index space.
struct SelectionState {
    order: Vec<usize>,
    used: Vec<bool>,
    walking_total: u32,
    visit_total: u32,
}

/// Builds an itinerary from disjoint restaurant and landmark candidate
/// lists.
///
/// `matrix` must be indexed consistently with the concatenation
/// `[restaurants..., landmarks...]`.
///
/// Selection is deterministic: re-running on identical inputs yields the
/// same order. Unreachable pairs are never feasible; an empty candidate
/// pool yields an empty itinerary rather than an error.
///
/// # Panics
///
/// Panics if the matrix dimension does not match the candidate count; that
/// is a bug in the calling layer, not a runtime condition.
pub fn plan_crawl(
    restaurants: &[Place],
    landmarks: &[Place],
    matrix: &TravelTimeMatrix,
    budget_minutes: u32,
    options: &SelectorOptions,
) -> Itinerary {
    let places: Vec<&Place> = restaurants.iter().chain(landmarks.iter()).collect();
    assert_eq!(
        matrix.len(),
        places.len(),
        "matrix must be indexed by [restaurants..., landmarks...]"
    );

    if places.is_empty() {
        return assemble(Vec::new(), Vec::new(), budget_minutes);
    }

    let restaurant_count = restaurants.len();
    let visit = |idx: usize| places[idx].estimated_visit_minutes();

    // Seed at the first restaurant in input order, else the first landmark.
    // Either way that is global index 0. The seed is never budget-checked:
    // a crawl always has at least one stop when any candidate exists.
    let seed = 0;
    let seed_is_restaurant = restaurant_count > 0;

    let mut state = SelectionState {
        order: vec![seed],
        used: vec![false; places.len()],
        walking_total: 0,
        visit_total: visit(seed),
    };
    state.used[seed] = true;

    let mut current = seed;
    let mut want_restaurant = !seed_is_restaurant;

    while state.order.len() < options.max_stops {
        // If the wanted category has no unused candidates left, flip and
        // retry the other one within this same iteration. Both exhausted
        // ends selection.
        let category_range = |wants_restaurant: bool| {
            if wants_restaurant {
                0..restaurant_count
            } else {
                restaurant_count..places.len()
            }
        };
        let has_unused =
            |wants_restaurant: bool| category_range(wants_restaurant).any(|idx| !state.used[idx]);

        if !has_unused(want_restaurant) {
            want_restaurant = !want_restaurant;
            if !has_unused(want_restaurant) {
                break;
            }
        }

        // Nearest feasible candidate in the wanted category. Ties resolve
        // to the first candidate in input order (strict comparison over a
        // stable iteration). No fallback to the other category once scoring
        // has been attempted.
        let mut best: Option<(usize, u32)> = None;
        for idx in category_range(want_restaurant) {
            if state.used[idx] {
                continue;
            }
            let Some(walk) = matrix.minutes_between(current, idx) else {
                continue;
            };
            let candidate_visit = visit(idx);
            let projected =
                state.walking_total + walk + state.visit_total + candidate_visit;
            if projected > budget_minutes {
                continue;
            }
            if best.is_none_or(|(_, best_walk)| walk < best_walk) {
                best = Some((idx, walk));
            }
        }

        let Some((next, walk)) = best else {
            debug!(
                stops = state.order.len(),
                want_restaurant, "no feasible candidate left; selection ends"
            );
            break;
        };

        state.used[next] = true;
        state.order.push(next);
        state.walking_total += walk;
        state.visit_total += visit(next);
        current = next;
        want_restaurant = !want_restaurant;
    }

    debug!(
        stops = state.order.len(),
        walking_minutes = state.walking_total,
        visit_minutes = state.visit_total,
        budget_minutes,
        "selection complete"
    );

    let legs = legs_for(&state.order, matrix);
    let stops = state
        .order
        .iter()
        .map(|&idx| Stop::new((*places[idx]).clone()))
        .collect();
    assemble(stops, legs, budget_minutes)
}

/// Global matrix indices of the stops a selection chose, given the original
/// candidate lists. Useful for carving a [`TravelTimeMatrix::submatrix`]
/// before re-ordering.
pub fn stop_indices(itinerary: &Itinerary, restaurants: &[Place], landmarks: &[Place]) -> Vec<usize> {
    itinerary
        .stops
        .iter()
        .filter_map(|stop| {
            let id = &stop.place.id;
            match stop.place.kind {
                PlaceKind::Restaurant => restaurants.iter().position(|p| &p.id == id),
                PlaceKind::Landmark => landmarks
                    .iter()
                    .position(|p| &p.id == id)
                    .map(|i| i + restaurants.len()),
            }
        })
        .collect()
}
