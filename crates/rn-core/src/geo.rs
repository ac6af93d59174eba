//! Geographic coordinate type and the degree-space metric.
//!
//! `Location` uses `f64` (double-precision) latitude/longitude.  The engine
//! serves planet-scale graphs whose source data carries double-precision
//! coordinates, and the spatial grid compares squared degree offsets that
//! would lose resolution in `f32` near the antimeridian.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Clamp latitude to `[-89, 89]` and wrap longitude into `[-180, 180)`.
    ///
    /// The uniform grid degrades near the poles (meridian convergence), so
    /// queries there are treated as if made at ±89°.  Longitude wraps through
    /// the antimeridian: `185` becomes `-175`, `-200` becomes `160`.
    #[must_use]
    pub fn clamped(self) -> Self {
        let lat = self.lat.clamp(-89.0, 89.0);
        // Double modulo keeps the result in [-180, 180) for any finite input,
        // including large negative longitudes.
        let lon = ((self.lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
        Self { lat, lon }
    }

    /// Squared Euclidean distance in degree space.
    ///
    /// The longitude delta wraps through the antimeridian, so points on
    /// opposite sides of ±180° compare by their short way around.  Not a
    /// metric distance on the sphere — only used to rank candidates within a
    /// small grid neighborhood, where the ordering matches the great-circle
    /// ordering closely enough for nearest-node snapping.
    #[inline]
    pub fn sq_degree_dist(self, other: Location) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = (self.lon - other.lon).abs();
        let d_lon = if d_lon > 180.0 { 360.0 - d_lon } else { d_lon };
        d_lat * d_lat + d_lon * d_lon
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
