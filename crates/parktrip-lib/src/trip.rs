//! Ordered trip of catalog parks.
//!
//! A trip stores [`ParkHandle`]s rather than parks, so it never copies record
//! data and must be resolved against the catalog that issued the handles.
//! Revisits are allowed: adding a park that is already on the trip appends it
//! again, and removal takes out the first occurrence only.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, ParkHandle};
use crate::error::CommandError;
use crate::park::{Park, ParkId};

/// One stop on the trip with the distance travelled to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripLeg<'a> {
    pub park: &'a Park,
    /// Running total along the visiting path, in miles.
    pub cumulative_distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    stops: Vec<ParkHandle>,
}

impl Trip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Handles in visiting order.
    pub fn stops(&self) -> &[ParkHandle] {
        &self.stops
    }

    /// The anchor for nearest-park queries.
    pub fn last(&self) -> Option<ParkHandle> {
        self.stops.last().copied()
    }

    /// Append the park with `id`. Fails without changing the trip when the
    /// catalog has no such park.
    pub fn add(&mut self, catalog: &Catalog, id: ParkId) -> Result<ParkHandle, CommandError> {
        let handle = catalog
            .lookup_by_id(id)
            .ok_or(CommandError::UnknownPark { id })?;
        self.stops.push(handle);
        debug!(id, stops = self.stops.len(), "added park to trip");
        Ok(handle)
    }

    /// Remove the first stop whose park has `id`, keeping the order of the
    /// rest. Fails without changing the trip when no stop matches.
    pub fn remove(&mut self, catalog: &Catalog, id: ParkId) -> Result<ParkHandle, CommandError> {
        let position = self
            .stops
            .iter()
            .position(|&handle| catalog.park(handle).id() == id)
            .ok_or(CommandError::NotInTrip { id })?;
        let handle = self.stops.remove(position);
        debug!(id, position, stops = self.stops.len(), "removed park from trip");
        Ok(handle)
    }

    /// Resolve the trip with cumulative distances: 0 for the first stop, then
    /// the previous total plus the hop from the previous stop.
    pub fn legs<'a>(&self, catalog: &'a Catalog) -> Vec<TripLeg<'a>> {
        let mut legs = Vec::with_capacity(self.stops.len());
        let mut total = 0.0;
        let mut previous: Option<&Park> = None;

        for &handle in &self.stops {
            let park = catalog.park(handle);
            if let Some(prev) = previous {
                total += prev.distance_to(park);
            }
            legs.push(TripLeg {
                park,
                cumulative_distance: total,
            });
            previous = Some(park);
        }

        legs
    }
}
