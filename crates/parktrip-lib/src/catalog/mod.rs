//! Park catalog storage, ordering and filtering.
//!
//! Records live in a storage vector that never changes order once a park has
//! been inserted. Sorting only rearranges a separate enumeration order, so a
//! [`ParkHandle`] stays valid for the lifetime of the catalog no matter how
//! often the user re-sorts it.

mod load;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::park::{Park, ParkId};

/// Stable, non-owning reference to a park stored in a [`Catalog`].
///
/// Handles are only meaningful for the catalog that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParkHandle(usize);

/// Orderings supported by [`Catalog::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending id.
    Id,
    /// Ascending name (byte order), ties broken by ascending id.
    Name,
}

impl SortKey {
    pub fn compare(self, a: &Park, b: &Park) -> Ordering {
        match self {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Name => a
                .name()
                .cmp(b.name())
                .then_with(|| a.id().cmp(&b.id())),
        }
    }
}

/// Exact county-membership filter used by `list county`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyFilter {
    county: String,
}

impl CountyFilter {
    pub fn new(county: impl Into<String>) -> Self {
        Self {
            county: county.into(),
        }
    }

    pub fn matches(&self, park: &Park) -> bool {
        park.has_county(&self.county)
    }
}

/// Owning collection of every park loaded for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parks: Vec<Park>,
    order: Vec<ParkHandle>,
    id_to_handle: HashMap<ParkId, ParkHandle>,
    sources: Vec<PathBuf>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from parks already in memory, rejecting duplicate ids.
    pub fn from_parks<I>(parks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Park>,
    {
        let mut catalog = Self::new();
        for park in parks {
            catalog.insert(park)?;
        }
        Ok(catalog)
    }

    /// Insert a park at the end of the current enumeration order.
    pub fn insert(&mut self, park: Park) -> Result<ParkHandle> {
        if self.id_to_handle.contains_key(&park.id()) {
            return Err(Error::DuplicateParkId { id: park.id() });
        }
        Ok(self.push(park))
    }

    fn push(&mut self, park: Park) -> ParkHandle {
        let handle = ParkHandle(self.parks.len());
        self.id_to_handle.insert(park.id(), handle);
        self.order.push(handle);
        self.parks.push(park);
        handle
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    pub fn contains_id(&self, id: ParkId) -> bool {
        self.id_to_handle.contains_key(&id)
    }

    pub fn lookup_by_id(&self, id: ParkId) -> Option<ParkHandle> {
        self.id_to_handle.get(&id).copied()
    }

    pub fn get_by_id(&self, id: ParkId) -> Option<&Park> {
        self.lookup_by_id(id).map(|handle| self.park(handle))
    }

    /// Resolve a handle issued by this catalog.
    pub(crate) fn park(&self, handle: ParkHandle) -> &Park {
        &self.parks[handle.0]
    }

    /// Handles and parks in the current enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (ParkHandle, &Park)> + '_ {
        self.order
            .iter()
            .map(move |&handle| (handle, self.park(handle)))
    }

    /// Parks in the current enumeration order.
    pub fn parks(&self) -> impl Iterator<Item = &Park> + '_ {
        self.entries().map(|(_, park)| park)
    }

    /// Reorder enumeration in place. Park contents and handles are unaffected.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.order.len() < 2 {
            return;
        }
        let parks = &self.parks;
        self.order
            .sort_by(|a, b| key.compare(&parks[a.0], &parks[b.0]));
        debug!(?key, count = self.order.len(), "sorted catalog");
    }

    /// Parks in current order that satisfy `filter`, or all parks when `None`.
    pub fn matching(&self, filter: Option<&CountyFilter>) -> Vec<&Park> {
        self.parks()
            .filter(|park| filter.map_or(true, |f| f.matches(park)))
            .collect()
    }

    /// Files that contributed parks, in load order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    fn record_source(&mut self, path: &Path) {
        self.sources.push(path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{park, ParkBuilder};

    fn ids(parks: &[&Park]) -> Vec<ParkId> {
        parks.iter().map(|p| p.id()).collect()
    }

    fn sample() -> Catalog {
        Catalog::from_parks(vec![
            ParkBuilder::new(3).name("Hanging Rock").counties(&["Stokes"]).build(),
            ParkBuilder::new(1).name("Umstead").counties(&["Wake", "Durham"]).build(),
            ParkBuilder::new(2).name("Falls Lake").counties(&["Wake"]).build(),
            ParkBuilder::new(4).name("Falls Lake").counties(&["Durham"]).build(),
        ])
        .expect("unique ids")
    }

    #[test]
    fn sort_by_id_orders_ascending() {
        let mut catalog = sample();
        catalog.sort_by(SortKey::Id);
        assert_eq!(ids(&catalog.matching(None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_by_name_breaks_ties_by_id() {
        let mut catalog = sample();
        catalog.sort_by(SortKey::Name);
        assert_eq!(ids(&catalog.matching(None)), vec![2, 4, 3, 1]);
    }

    #[test]
    fn resorting_by_id_restores_id_order() {
        let mut catalog = sample();
        catalog.sort_by(SortKey::Id);
        catalog.sort_by(SortKey::Name);
        catalog.sort_by(SortKey::Id);
        assert_eq!(ids(&catalog.matching(None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorting_keeps_handles_stable() {
        let mut catalog = sample();
        let handle = catalog.lookup_by_id(3).expect("present");
        catalog.sort_by(SortKey::Name);
        assert_eq!(catalog.park(handle).name(), "Hanging Rock");
        assert_eq!(catalog.lookup_by_id(3), Some(handle));
    }

    #[test]
    fn county_filter_uses_current_order() {
        let mut catalog = sample();
        let wake = CountyFilter::new("Wake");
        assert_eq!(ids(&catalog.matching(Some(&wake))), vec![1, 2]);
        catalog.sort_by(SortKey::Name);
        assert_eq!(ids(&catalog.matching(Some(&wake))), vec![2, 1]);
    }

    #[test]
    fn unknown_county_yields_empty_listing() {
        let catalog = sample();
        assert!(catalog.matching(Some(&CountyFilter::new("Dare"))).is_empty());
    }

    #[test]
    fn lookup_by_id_reports_missing() {
        let catalog = sample();
        assert!(catalog.lookup_by_id(99).is_none());
        assert_eq!(catalog.get_by_id(2).map(Park::name), Some("Falls Lake"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_parks(vec![park(1, 0.0, 0.0), park(1, 1.0, 1.0)])
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateParkId { id: 1 }));
    }

    #[test]
    fn sorting_tiny_catalog_is_noop() {
        let mut catalog = Catalog::new();
        catalog.sort_by(SortKey::Name);
        assert!(catalog.is_empty());
        let mut single = Catalog::from_parks(vec![park(5, 0.0, 0.0)]).expect("valid");
        single.sort_by(SortKey::Name);
        assert_eq!(single.len(), 1);
    }
}
