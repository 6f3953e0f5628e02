//! Greedy nearest-park search around the trip anchor.
//!
//! Each round scans the whole catalog in its current enumeration order and
//! keeps the closest park that is neither the anchor nor already picked. A
//! candidate must be strictly closer to replace the current best, so ties go
//! to the park encountered first. The search is O(k · n), which is fine for
//! catalogs of a few thousand parks.
//!
//! Parks already on the trip are eligible; only the anchor itself is skipped.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, ParkHandle};
use crate::error::CommandError;
use crate::park::Park;

/// A park picked by the search with its distance from the anchor in miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbour<'a> {
    pub park: &'a Park,
    pub distance: f64,
}

/// Result of a nearest query. Transient; borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestResult<'a> {
    pub anchor: &'a Park,
    pub neighbours: Vec<Neighbour<'a>>,
}

impl NearestResult<'_> {
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }
}

/// Find up to `k` parks closest to `anchor`, nearest first.
///
/// Returns `min(k, catalog.len() - 1)` neighbours. `k == 0` is rejected.
pub fn find_nearest(
    catalog: &Catalog,
    anchor: ParkHandle,
    k: usize,
) -> Result<NearestResult<'_>, CommandError> {
    if k == 0 {
        return Err(CommandError::NonPositiveCount { count: 0 });
    }

    let origin = catalog.park(anchor);
    let mut excluded: HashSet<ParkHandle> = HashSet::with_capacity(k.min(catalog.len()) + 1);
    excluded.insert(anchor);
    let mut neighbours = Vec::with_capacity(k.min(catalog.len()));

    while neighbours.len() < k {
        let mut best: Option<Neighbour<'_>> = None;
        let mut best_handle = None;

        for (handle, park) in catalog.entries() {
            if excluded.contains(&handle) {
                continue;
            }
            let distance = origin.distance_to(park);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Neighbour { park, distance });
                best_handle = Some(handle);
            }
        }

        let (Some(winner), Some(handle)) = (best, best_handle) else {
            break;
        };
        excluded.insert(handle);
        neighbours.push(winner);
    }

    debug!(
        anchor = origin.id(),
        requested = k,
        found = neighbours.len(),
        "nearest search complete"
    );

    Ok(NearestResult {
        anchor: origin,
        neighbours,
    })
}
