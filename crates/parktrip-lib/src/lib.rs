//! Park trip planner library entry points.
//!
//! This crate exposes helpers to load park catalog files into memory, sort and
//! filter the catalog, assemble an ordered trip, and search for the parks
//! nearest to the last stop. The `parks` binary should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod command;
pub mod error;
pub mod geo;
pub mod interpreter;
pub mod nearest;
pub mod output;
pub mod park;
pub mod session;
pub mod trip;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::{Catalog, CountyFilter, ParkHandle, SortKey};
pub use command::Command;
pub use error::{CommandError, Error, RecordError, Result};
pub use geo::{distance, Coordinate, EARTH_RADIUS_MILES};
pub use interpreter::{Interpreter, InterpreterOptions, LoopState};
pub use nearest::{find_nearest, Neighbour, NearestResult};
pub use output::RenderMode;
pub use park::{Park, ParkId, MAX_COUNTIES, MAX_COUNTY_NAME_LENGTH, MAX_NAME_LENGTH};
pub use session::{Response, Session};
pub use trip::{Trip, TripLeg};
