//! Route-optimizer tests.
//!
//! Tests for exact re-ordering, the changed flag, and handling of unknown
//! edges.

use crawl_planner::itinerary::Stop;
use crawl_planner::matrix::TravelTimeMatrix;
use crawl_planner::optimizer::reorder_stops;
use crawl_planner::place::{Place, PlaceKind, PriceTier};

fn stop(name: &str) -> Stop {
    Stop::new(Place {
        id: format!("places/{name}"),
        kind: PlaceKind::Restaurant,
        name: name.to_string(),
        address: format!("{name} St"),
        coordinates: Some((40.73, -74.0)),
        rating: Some(4.5),
        user_ratings_total: Some(100),
        types: vec!["restaurant".to_string()],
        price_tier: Some(PriceTier::Cheap),
    })
}

fn stops(names: &[&str]) -> Vec<Stop> {
    names.iter().map(|name| stop(name)).collect()
}

fn names(stops: &[Stop]) -> Vec<&str> {
    stops.iter().map(|s| s.place.name.as_str()).collect()
}

/// Stops laid out on a line at the given positions; walking minutes are the
/// absolute position differences.
fn line_matrix(positions: &[u32]) -> TravelTimeMatrix {
    let rows = positions
        .iter()
        .map(|&a| {
            positions
                .iter()
                .map(|&b| Some(a.abs_diff(b)))
                .collect()
        })
        .collect();
    TravelTimeMatrix::from_minutes(rows)
}

#[test]
fn test_finds_shorter_hamiltonian_path() {
    // Input order walks 7 + 3 + 6 = 16 minutes; visiting the line
    // monotonically (A, C, B, D) walks 4 + 3 + 3 = 10.
    let matrix = line_matrix(&[0, 7, 4, 10]);
    let result = reorder_stops(stops(&["A", "B", "C", "D"]), &matrix);

    assert!(result.changed);
    assert_eq!(names(&result.stops), vec!["A", "C", "B", "D"]);
}

#[test]
fn test_already_optimal_order_is_unchanged() {
    let matrix = line_matrix(&[0, 2, 5, 9]);
    let result = reorder_stops(stops(&["A", "B", "C", "D"]), &matrix);

    assert!(!result.changed);
    assert_eq!(names(&result.stops), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_second_pass_reports_no_change() {
    let matrix = line_matrix(&[0, 7, 4, 10]);
    let first = reorder_stops(stops(&["A", "B", "C", "D"]), &matrix);
    assert!(first.changed);

    // Re-index the matrix by the optimized order, then optimize again.
    let optimized = matrix.submatrix(&[0, 2, 1, 3]);
    let second = reorder_stops(first.stops.clone(), &optimized);
    assert!(!second.changed);
    assert_eq!(names(&second.stops), names(&first.stops));
}

#[test]
fn test_empty_input_returns_unchanged() {
    let matrix = TravelTimeMatrix::from_minutes(Vec::new());
    let result = reorder_stops(Vec::new(), &matrix);
    assert!(!result.changed);
    assert!(result.stops.is_empty());
}

#[test]
fn test_single_stop_returns_unchanged() {
    let matrix = TravelTimeMatrix::from_minutes(vec![vec![Some(0)]]);
    let result = reorder_stops(stops(&["Only"]), &matrix);
    assert!(!result.changed);
    assert_eq!(names(&result.stops), vec!["Only"]);
}

#[test]
fn test_two_stops_swap_only_when_strictly_better() {
    // Symmetric distance: both orders cost the same, so the input order
    // must win the tie and report no change.
    let matrix = TravelTimeMatrix::from_minutes(vec![
        vec![Some(0), Some(4)],
        vec![Some(4), Some(0)],
    ]);
    let result = reorder_stops(stops(&["A", "B"]), &matrix);
    assert!(!result.changed);
}

#[test]
fn test_preserves_the_stop_set() {
    let matrix = line_matrix(&[3, 9, 0, 6, 1]);
    let input = stops(&["A", "B", "C", "D", "E"]);
    let result = reorder_stops(input.clone(), &matrix);

    let mut input_ids: Vec<&str> = input.iter().map(|s| s.place.id.as_str()).collect();
    let mut output_ids: Vec<&str> = result.stops.iter().map(|s| s.place.id.as_str()).collect();
    input_ids.sort_unstable();
    output_ids.sort_unstable();
    assert_eq!(input_ids, output_ids, "optimizer must never add or drop stops");
}

#[test]
fn test_routes_around_unknown_edges() {
    // The A<->C edge is unknown. Orders that avoid it cost a handful of
    // minutes; orders crossing it carry the large sentinel and lose.
    let matrix = TravelTimeMatrix::from_minutes(vec![
        vec![Some(0), None, Some(2)],
        vec![None, Some(0), Some(2)],
        vec![Some(2), Some(2), Some(0)],
    ]);
    let result = reorder_stops(stops(&["A", "C", "B"]), &matrix);

    // Input order A -> C is the unknown edge; B must end up in the middle.
    assert!(result.changed);
    assert_eq!(result.stops[1].place.name, "B");
}
