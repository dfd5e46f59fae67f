//! Geo Route Library - Immutable Route Model and Directions
//!
//! This library models a walk or drive as a chain of immutable values and renders
//! human-readable directions for it. Distances and headings use a flat-earth
//! approximation that is accurate enough for small areas.
//!
//! # Architecture
//!
//! - **[`GeoPoint`]**: Latitude/longitude in millionths of a degree
//! - **[`GeoSegment`]**: Named straight edge between two points, with length and heading
//! - **[`GeoFeature`]**: Connected run of same-named segments (a street)
//! - **[`Route`]**: Connected segments of any name, grouped into features
//! - **[`RouteFormatter`]**: Strategy turning a route into turn-by-turn text
//!
//! Every "add" operation returns a new value and leaves the receiver untouched.

pub mod catalog;
mod export;
mod feature;
mod formatter;
mod point;
mod route;
mod segment;
mod turn;

// Public API exports
pub use export::{route_to_gpx, write_gpx};
pub use feature::GeoFeature;
pub use formatter::{DrivingRouteFormatter, RouteFormatter, WalkingRouteFormatter};
pub use point::{GeoPoint, KM_PER_DEGREE_LATITUDE, KM_PER_DEGREE_LONGITUDE};
pub use route::Route;
pub use segment::GeoSegment;
pub use turn::{Turn, normalize_delta};

/// Error types for the route model
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Coordinate out of bounds: latitude {latitude}, longitude {longitude}")]
    OutOfBounds { latitude: i64, longitude: i64 },

    #[error("Segment name must not be empty")]
    EmptyName,

    #[error("Heading is undefined for zero-length segment '{0}'")]
    UndefinedHeading(String),

    #[error("Heading {0} is outside [0, 360)")]
    InvalidHeading(f64),

    #[error("Name mismatch: expected '{expected}', got '{found}'")]
    NameMismatch { expected: String, found: String },

    #[error("Disconnected segment '{name}': starts at {start}, expected {expected}")]
    Disconnected {
        name: String,
        start: GeoPoint,
        expected: GeoPoint,
    },

    #[error("Empty route")]
    EmptyRoute,

    #[error("Walking speed must be positive, got {0}")]
    InvalidSpeed(f64),

    #[error("GPX writing error: {0}")]
    GpxWrite(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Returns whether `heading` is a valid compass heading in `[0, 360)`.
#[inline]
pub fn is_valid_heading(heading: f64) -> bool {
    (0.0..360.0).contains(&heading)
}
