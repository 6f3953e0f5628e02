//! Great-circle distance on a spherical Earth.
//!
//! Points are converted to unit vectors and the central angle is recovered
//! from their dot product (spherical law of cosines).

use serde::Serialize;

/// Mean radius of the Earth in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn unit_vector(&self) -> [f64; 3] {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        [lon.cos() * lat.cos(), lon.sin() * lat.cos(), lat.sin()]
    }
}

/// Great-circle distance in miles between two coordinates.
///
/// Rounding can push the dot product of (nearly) identical points just above
/// 1.0; that case returns 0 instead of feeding `acos` an out-of-domain value.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let v1 = a.unit_vector();
    let v2 = b.unit_vector();
    let dot: f64 = v1.iter().zip(v2.iter()).map(|(x, y)| x * y).sum();

    if dot > 1.0 {
        return 0.0;
    }
    EARTH_RADIUS_MILES * dot.max(-1.0).acos()
}
