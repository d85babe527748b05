//! Test fixtures for crawl-planner.
//!
//! Provides realistic test data: real Lower Manhattan coordinates for
//! restaurants and landmarks, plus builders for candidate places.

pub mod new_york_places;

pub use new_york_places::*;
