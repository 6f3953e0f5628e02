//! Park and catalog fixtures for unit tests.
//!
//! Parks default to the origin in Wake county so a test only spells out the
//! fields it asserts on.

#![allow(dead_code)]

use crate::catalog::Catalog;
use crate::park::{Park, ParkId};

/// Fluent constructor for valid parks; panics if the result breaks a limit.
pub struct ParkBuilder {
    id: ParkId,
    name: String,
    latitude: f64,
    longitude: f64,
    counties: Vec<String>,
}

impl ParkBuilder {
    #[must_use]
    pub fn new(id: ParkId) -> Self {
        Self {
            id,
            name: format!("Park {id}"),
            latitude: 0.0,
            longitude: 0.0,
            counties: vec!["Wake".to_string()],
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn counties(mut self, counties: &[&str]) -> Self {
        self.counties = counties.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn build(self) -> Park {
        Park::new(
            self.id,
            self.name,
            self.latitude,
            self.longitude,
            self.counties,
        )
        .expect("builder produces a valid park")
    }
}

/// Shorthand for a park at the given position with default name and county.
pub fn park(id: ParkId, latitude: f64, longitude: f64) -> Park {
    ParkBuilder::new(id).at(latitude, longitude).build()
}

/// Three parks one degree apart along the equator, named A, B and C.
pub fn equator_catalog() -> Catalog {
    Catalog::from_parks(vec![
        ParkBuilder::new(1).name("A").at(0.0, 0.0).build(),
        ParkBuilder::new(2).name("B").at(0.0, 1.0).build(),
        ParkBuilder::new(3).name("C").at(0.0, 2.0).build(),
    ])
    .expect("unique ids")
}
