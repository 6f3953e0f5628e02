use serde::Serialize;

use crate::error::RecordError;
use crate::geo::{self, Coordinate};

/// Numeric identifier for a park.
pub type ParkId = i64;

/// Maximum number of counties a park may list.
pub const MAX_COUNTIES: usize = 5;

/// Maximum length in bytes of a single county label.
pub const MAX_COUNTY_NAME_LENGTH: usize = 12;

/// Maximum length in bytes of a park name.
pub const MAX_NAME_LENGTH: usize = 40;

/// A single catalog record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Park {
    id: ParkId,
    name: String,
    latitude: f64,
    longitude: f64,
    counties: Vec<String>,
}

impl Park {
    /// Build a park, enforcing the name and county limits.
    pub fn new(
        id: ParkId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        counties: Vec<String>,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if name.len() > MAX_NAME_LENGTH {
            return Err(RecordError::NameTooLong {
                name,
                max: MAX_NAME_LENGTH,
            });
        }
        if counties.is_empty() {
            return Err(RecordError::NoCounties { id });
        }
        if counties.len() > MAX_COUNTIES {
            return Err(RecordError::TooManyCounties {
                id,
                count: counties.len(),
                max: MAX_COUNTIES,
            });
        }
        if let Some(county) = counties
            .iter()
            .find(|county| county.len() > MAX_COUNTY_NAME_LENGTH)
        {
            return Err(RecordError::CountyTooLong {
                county: county.clone(),
                max: MAX_COUNTY_NAME_LENGTH,
            });
        }

        Ok(Self {
            id,
            name,
            latitude,
            longitude,
            counties,
        })
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// County labels in file order.
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_to(&self, other: &Park) -> f64 {
        geo::distance(&self.coordinate(), &other.coordinate())
    }

    /// Exact, case-sensitive county membership.
    pub fn has_county(&self, county: &str) -> bool {
        self.counties.iter().any(|c| c == county)
    }
}
