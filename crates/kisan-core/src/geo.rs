//! # GPS Coordinates and Fixed-Point Encoding
//!
//! A [`GeoPoint`] is a validated decimal-degree coordinate pair as captured
//! by the phone. [`FixedCoordinates`] is its signed fixed-point form — each
//! degree value scaled by 10^4 and truncated to an integer — which is the
//! representation the proof statement ranges over.
//!
//! ## Invariant
//!
//! `GeoPoint` construction enforces the plausibility bounds (latitude in
//! [-90, 90], longitude in [-180, 180]), so a `FixedCoordinates` obtained
//! through [`GeoPoint::to_fixed`] always lies within [`LAT_FIXED_MAX`] /
//! [`LNG_FIXED_MAX`]. `FixedCoordinates` itself is deliberately
//! unvalidated: the proof layer must be able to represent out-of-range
//! inputs in order to reject them inside the statement.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Scale factor between decimal degrees and fixed-point integers (10^4,
/// roughly 11 m of latitude resolution).
pub const FIXED_POINT_SCALE: f64 = 10_000.0;

/// Largest valid fixed-point latitude magnitude (90 degrees scaled).
pub const LAT_FIXED_MAX: i64 = 900_000;

/// Largest valid fixed-point longitude magnitude (180 degrees scaled).
pub const LNG_FIXED_MAX: i64 = 1_800_000;

/// A validated GPS coordinate pair in decimal degrees.
///
/// Deliberately not `Deserialize`: construction goes through [`GeoPoint::new`]
/// so the bounds cannot be bypassed by a crafted payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, within [-90, 90].
    latitude_deg: f64,
    /// Longitude in decimal degrees, within [-180, 180].
    longitude_deg: f64,
}

impl GeoPoint {
    /// Construct a coordinate pair, rejecting values outside the plausible
    /// GPS domain.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ValidationError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ValidationError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ValidationError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in decimal degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Convert to the signed fixed-point representation used by the proof
    /// statement (degrees scaled by 10^4, rounded to nearest).
    pub fn to_fixed(&self) -> FixedCoordinates {
        FixedCoordinates {
            lat: (self.latitude_deg * FIXED_POINT_SCALE).round() as i64,
            lng: (self.longitude_deg * FIXED_POINT_SCALE).round() as i64,
        }
    }
}

/// A coordinate pair in signed fixed-point form (degrees scaled by 10^4).
///
/// Construction is unchecked by design; the range constraints live in the
/// proof statement, and callers such as the prover's pre-flight need to
/// express out-of-range values to test against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCoordinates {
    /// Fixed-point latitude. Valid domain: [-900_000, 900_000].
    pub lat: i64,
    /// Fixed-point longitude. Valid domain: [-1_800_000, 1_800_000].
    pub lng: i64,
}

impl FixedCoordinates {
    /// Whether both coordinates lie within the valid geographic domain.
    pub fn in_range(&self) -> bool {
        self.lat.abs() <= LAT_FIXED_MAX && self.lng.abs() <= LNG_FIXED_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_delhi_coordinates() {
        let p = GeoPoint::new(28.6139, 77.2090).unwrap();
        let fixed = p.to_fixed();
        assert_eq!(fixed.lat, 286_139);
        assert_eq!(fixed.lng, 772_090);
        assert!(fixed.in_range());
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert_eq!(GeoPoint::new(90.0, 180.0).unwrap().to_fixed().lat, LAT_FIXED_MAX);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = GeoPoint::new(91.0, 0.0).unwrap_err();
        assert!(format!("{err}").contains("91"));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(GeoPoint::new(0.0, 180.5).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn near_boundary_latitude_stays_in_range() {
        // 89.9999 degrees scales to 899_999, one short of the maximum.
        let fixed = GeoPoint::new(89.9999, 0.0).unwrap().to_fixed();
        assert_eq!(fixed.lat, 899_999);
        assert!(fixed.in_range());
    }

    #[test]
    fn fixed_coordinates_out_of_range_detectable() {
        let fixed = FixedCoordinates {
            lat: 910_000,
            lng: 0,
        };
        assert!(!fixed.in_range());
    }

    proptest! {
        #[test]
        fn valid_geopoints_always_scale_into_range(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
        ) {
            let fixed = GeoPoint::new(lat, lng).unwrap().to_fixed();
            prop_assert!(fixed.in_range());
        }
    }
}
