//! Pairwise walking-time matrix.
//!
//! Built once per request from a fixed snapshot of candidate places and
//! immutable afterward. Entries are whole walking minutes; `None` marks an
//! unreachable pair. Durations are rounded up so the selector never
//! underestimates a walk and overruns the time budget.

use tracing::warn;

use crate::place::Place;
use crate::traits::TravelTimeProvider;

/// Square table of walking minutes between candidate places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeMatrix {
    minutes: Vec<Vec<Option<u32>>>,
}

impl TravelTimeMatrix {
    /// Builds the matrix for an ordered list of locations.
    ///
    /// A wholly failed or malformed provider response yields a matrix with
    /// every off-diagonal pair unreachable; the rest of the pipeline then
    /// degrades to shorter itineraries rather than aborting.
    pub fn build<P: TravelTimeProvider + ?Sized>(provider: &P, locations: &[(f64, f64)]) -> Self {
        let n = locations.len();
        if n == 0 {
            return Self { minutes: Vec::new() };
        }

        let seconds = provider.walking_seconds(locations);
        if seconds.len() != n || seconds.iter().any(|row| row.len() != n) {
            warn!(
                expected = n,
                got = seconds.len(),
                "travel-time provider returned a malformed table; treating all pairs as unreachable"
            );
            return Self::unreachable(n);
        }

        let minutes = seconds
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, entry)| {
                        if i == j {
                            // A place's distance to itself is always zero.
                            Some(0)
                        } else {
                            entry.filter(|s| s.is_finite() && *s >= 0.0).map(ceil_minutes)
                        }
                    })
                    .collect()
            })
            .collect();

        Self { minutes }
    }

    /// Builds the matrix for places that all have resolved coordinates.
    ///
    /// Callers filter out places lacking coordinates beforehand; passing one
    /// in is a programming error in the calling layer.
    ///
    /// # Panics
    ///
    /// Panics if any place has no coordinates.
    pub fn for_places<P: TravelTimeProvider + ?Sized>(provider: &P, places: &[Place]) -> Self {
        let locations: Vec<(f64, f64)> = places
            .iter()
            .map(|place| {
                place
                    .coordinates
                    .unwrap_or_else(|| panic!("place {:?} has no coordinates", place.id))
            })
            .collect();
        Self::build(provider, &locations)
    }

    /// Wraps an already-computed table of minutes. Rows must form a square.
    ///
    /// # Panics
    ///
    /// Panics if the table is not square.
    pub fn from_minutes(minutes: Vec<Vec<Option<u32>>>) -> Self {
        let n = minutes.len();
        assert!(
            minutes.iter().all(|row| row.len() == n),
            "travel-time table must be square"
        );
        Self { minutes }
    }

    /// An `n`×`n` matrix with every off-diagonal pair unknown.
    pub fn unreachable(n: usize) -> Self {
        let minutes = (0..n)
            .map(|i| (0..n).map(|j| if i == j { Some(0) } else { None }).collect())
            .collect();
        Self { minutes }
    }

    /// Number of places the matrix is indexed by.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    /// Walking minutes from `from` to `to`, or `None` if unknown.
    pub fn minutes_between(&self, from: usize, to: usize) -> Option<u32> {
        self.minutes[from][to]
    }

    /// The sub-matrix covering `indices`, in their given order.
    ///
    /// Used to hand the optimizer a table indexed by the selected stops
    /// rather than the full candidate pool.
    pub fn submatrix(&self, indices: &[usize]) -> Self {
        let minutes = indices
            .iter()
            .map(|&i| indices.iter().map(|&j| self.minutes[i][j]).collect())
            .collect();
        Self { minutes }
    }
}

fn ceil_minutes(seconds: f64) -> u32 {
    (seconds / 60.0).ceil() as u32
}
