//! crawl-planner core
//!
//! Itinerary construction and ordering engine for walking food crawls:
//! candidate pools, pairwise walking-time matrices, greedy stop selection,
//! and exact re-ordering of the chosen stops.

pub mod catalog;
pub mod google;
pub mod haversine;
pub mod itinerary;
pub mod matrix;
pub mod optimizer;
pub mod place;
pub mod selector;
pub mod traits;
