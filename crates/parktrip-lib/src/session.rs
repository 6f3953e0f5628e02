//! Session state and command dispatch.
//!
//! A [`Session`] owns the catalog and the trip for the lifetime of the
//! process. [`Session::execute`] applies one command and hands back a
//! [`Response`] that borrows from the session until the caller has rendered
//! it. A failed command never mutates either structure.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CountyFilter, SortKey};
use crate::command::Command;
use crate::error::CommandError;
use crate::nearest::{find_nearest, NearestResult};
use crate::park::Park;
use crate::trip::{Trip, TripLeg};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response<'a> {
    /// Catalog listing in display order.
    Parks { parks: Vec<&'a Park> },
    /// Trip stops with cumulative distance.
    Trip { legs: Vec<TripLeg<'a>> },
    /// Nearest parks to the anchor.
    Nearest(NearestResult<'a>),
    Added { park: &'a Park },
    Removed { park: &'a Park },
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    trip: Trip,
}

impl Session {
    /// Start a session over a loaded catalog with an empty trip.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            trip: Trip::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Parse and execute one command line.
    pub fn execute_line(&mut self, line: &str) -> Result<Response<'_>, CommandError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Response<'_>, CommandError> {
        debug!(%command, "dispatching command");
        match command {
            Command::ListParks => {
                self.catalog.sort_by(SortKey::Id);
                Ok(Response::Parks {
                    parks: self.catalog.matching(None),
                })
            }
            Command::ListNames => {
                self.catalog.sort_by(SortKey::Name);
                Ok(Response::Parks {
                    parks: self.catalog.matching(None),
                })
            }
            Command::ListCounty(county) => {
                let filter = CountyFilter::new(county);
                Ok(Response::Parks {
                    parks: self.catalog.matching(Some(&filter)),
                })
            }
            Command::Add(id) => {
                let handle = self.trip.add(&self.catalog, id)?;
                Ok(Response::Added {
                    park: self.catalog.park(handle),
                })
            }
            Command::Remove(id) => {
                let handle = self.trip.remove(&self.catalog, id)?;
                Ok(Response::Removed {
                    park: self.catalog.park(handle),
                })
            }
            Command::Trip => Ok(Response::Trip {
                legs: self.trip.legs(&self.catalog),
            }),
            Command::Nearest(k) => {
                let anchor = self.trip.last().ok_or(CommandError::EmptyTrip)?;
                find_nearest(&self.catalog, anchor, k).map(Response::Nearest)
            }
            Command::Quit => Ok(Response::Quit),
        }
    }
}
