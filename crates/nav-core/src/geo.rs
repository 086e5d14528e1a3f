//! Geographic coordinate type and great-circle distance.
//!
//! Unlike a road-scale simulation, intercontinental routing spans distances
//! where `f32` rounding is visible in the kilometre totals, so `GeoPoint`
//! stores double-precision degrees.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Out-of-range values are not validated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Exactly symmetric (`a.distance_km(b) == b.distance_km(a)`), and
    /// exactly `0.0` for identical coordinates.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        // Absolute differences make both argument orders bit-identical.
        let d_lat = (other.lat - self.lat).abs().to_radians();
        let d_lon = (other.lon - self.lon).abs().to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points.
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
        EARTH_RADIUS_KM * c
    }

    /// Position on the unit sphere as `[x, y, z]`.
    ///
    /// Straight-line (chord) distance between two such vectors grows
    /// monotonically with great-circle distance, which lets a Euclidean
    /// spatial index answer "within N km" queries without antimeridian or
    /// polar special cases.
    pub fn unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Chord length on the unit sphere for a great-circle distance of `km`.
    ///
    /// Inverse mapping for [`unit_vector`](Self::unit_vector) queries.
    pub fn chord_for_km(km: f64) -> f64 {
        let angle = (km / EARTH_RADIUS_KM).min(std::f64::consts::PI);
        2.0 * (angle * 0.5).sin()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
