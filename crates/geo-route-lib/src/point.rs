//! Geographic points in millionths of a degree
//!
//! North latitudes and east longitudes are positive. Distances and headings use a
//! flat-earth approximation: degree deltas are scaled by fixed kilometres-per-degree
//! factors measured near the Technion (Haifa) and treated as Cartesian offsets.

use crate::{DataError, Result};
use geo::{Distance, Euclidean, Point};
use std::fmt;

/// Millionths of a degree per degree
const MILLIONTHS: f64 = 1_000_000.0;

/// Kilometres per degree of latitude near the Technion
pub const KM_PER_DEGREE_LATITUDE: f64 = 110.901;

/// Kilometres per degree of longitude near the Technion
pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

/// An immutable point on the earth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PointRecord")
)]
pub struct GeoPoint {
    /// Latitude in millionths of a degree
    latitude: i32,
    /// Longitude in millionths of a degree
    longitude: i32,
}

impl GeoPoint {
    pub const MIN_LATITUDE: i32 = -90 * 1_000_000;
    pub const MAX_LATITUDE: i32 = 90 * 1_000_000;
    pub const MIN_LONGITUDE: i32 = -180 * 1_000_000;
    pub const MAX_LONGITUDE: i32 = 180 * 1_000_000;

    /// Create a point from millionths of a degree
    ///
    /// Fails with [`DataError::OutOfBounds`] outside ±90° latitude or ±180° longitude.
    pub fn new(latitude: i32, longitude: i32) -> Result<Self> {
        if !(Self::MIN_LATITUDE..=Self::MAX_LATITUDE).contains(&latitude)
            || !(Self::MIN_LONGITUDE..=Self::MAX_LONGITUDE).contains(&longitude)
        {
            return Err(DataError::OutOfBounds {
                latitude: latitude.into(),
                longitude: longitude.into(),
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a point from decimal degrees, rounded to the nearest millionth
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        let lat = (latitude * MILLIONTHS).round();
        let lon = (longitude * MILLIONTHS).round();
        let out_of_bounds = || DataError::OutOfBounds {
            latitude: lat as i64,
            longitude: lon as i64,
        };
        if !lat.is_finite() || !lon.is_finite() {
            return Err(out_of_bounds());
        }
        let lat = i32::try_from(lat as i64).map_err(|_| out_of_bounds())?;
        let lon = i32::try_from(lon as i64).map_err(|_| out_of_bounds())?;
        Self::new(lat, lon)
    }

    /// Latitude in millionths of a degree
    #[inline]
    pub fn latitude(&self) -> i32 {
        self.latitude
    }

    /// Longitude in millionths of a degree
    #[inline]
    pub fn longitude(&self) -> i32 {
        self.longitude
    }

    /// Latitude in decimal degrees
    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        f64::from(self.latitude) / MILLIONTHS
    }

    /// Longitude in decimal degrees
    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        f64::from(self.longitude) / MILLIONTHS
    }

    /// Planar position in kilometres (x = east, y = north)
    #[inline]
    fn to_flat_km(self) -> Point<f64> {
        Point::new(
            self.longitude_degrees() * KM_PER_DEGREE_LONGITUDE,
            self.latitude_degrees() * KM_PER_DEGREE_LATITUDE,
        )
    }

    /// Flat-earth distance to `other` in kilometres
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        Euclidean.distance(self.to_flat_km(), other.to_flat_km())
    }

    /// Compass heading from this point to `other` in degrees, within `[0, 360)`
    ///
    /// 0 is north and angles increase clockwise. Returns `None` when the points
    /// coincide, since no direction exists.
    pub fn heading_to(&self, other: &GeoPoint) -> Option<f64> {
        if self == other {
            return None;
        }
        let delta = other.to_flat_km() - self.to_flat_km();
        // atan2(east, north) measures from north towards east
        let mut heading = delta.x().atan2(delta.y()).to_degrees();
        if heading < 0.0 {
            heading += 360.0;
        }
        if heading >= 360.0 {
            heading -= 360.0;
        }
        Some(heading)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6})",
            self.latitude_degrees(),
            self.longitude_degrees()
        )
    }
}

impl From<GeoPoint> for Point<f64> {
    /// Converts to a `geo` point in degrees (x = longitude, y = latitude)
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude_degrees(), point.latitude_degrees())
    }
}

/// Unvalidated wire form of a [`GeoPoint`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PointRecord {
    latitude: i32,
    longitude: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<PointRecord> for GeoPoint {
    type Error = DataError;

    fn try_from(record: PointRecord) -> Result<Self> {
        GeoPoint::new(record.latitude, record.longitude)
    }
}
