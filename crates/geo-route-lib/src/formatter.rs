//! Directions formatting
//!
//! A [`RouteFormatter`] knows how to describe one feature as a single line of text.
//! Directions for a whole route are those lines concatenated, where each feature is
//! entered facing the heading the previous feature ended with.

use crate::{DataError, GeoFeature, Result, Route, Turn, is_valid_heading};

/// Default walking speed in km/h
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Strategy producing human-readable directions for a route
pub trait RouteFormatter {
    /// Newline-terminated instruction for traversing `feature`, entered facing `orig_heading`
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> Result<String>;

    /// Directions for following `route` from its start, initially facing `heading`
    ///
    /// `heading` must lie in `[0, 360)`.
    fn compute_directions(&self, route: &Route, heading: f64) -> Result<String> {
        if !is_valid_heading(heading) {
            return Err(DataError::InvalidHeading(heading));
        }
        let mut directions = String::new();
        let mut current = heading;
        for feature in route.features() {
            directions.push_str(&self.compute_line(feature, current)?);
            current = feature.end_heading();
        }
        Ok(directions)
    }
}

/// Turn phrase for entering `feature` while facing `orig_heading`
fn turn_onto(feature: &GeoFeature, orig_heading: f64) -> Result<Turn> {
    Turn::between(orig_heading, feature.start_heading())
}

/// Walking directions with durations in whole minutes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkingRouteFormatter {
    /// Walking speed in km/h, finite and positive
    speed_kmh: f64,
}

impl WalkingRouteFormatter {
    /// Create a formatter for the given walking speed
    ///
    /// Fails with [`DataError::InvalidSpeed`] unless `speed_kmh` is finite and positive.
    pub fn new(speed_kmh: f64) -> Result<Self> {
        if !(speed_kmh.is_finite() && speed_kmh > 0.0) {
            return Err(DataError::InvalidSpeed(speed_kmh));
        }
        Ok(Self { speed_kmh })
    }

    #[inline]
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Time needed to walk `length_km`, rounded to the nearest minute
    pub fn minutes_for(&self, length_km: f64) -> u64 {
        (length_km / self.speed_kmh * 60.0).round() as u64
    }
}

impl Default for WalkingRouteFormatter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }
}

impl RouteFormatter for WalkingRouteFormatter {
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> Result<String> {
        let turn = turn_onto(feature, orig_heading)?;
        Ok(format!(
            "{} onto {} and walk for {} minutes.\n",
            turn,
            feature.name(),
            self.minutes_for(feature.length())
        ))
    }
}

/// Driving directions with distances in kilometres
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrivingRouteFormatter;

impl RouteFormatter for DrivingRouteFormatter {
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> Result<String> {
        let turn = turn_onto(feature, orig_heading)?;
        Ok(format!(
            "{} onto {} and go {:.1} kilometers.\n",
            turn,
            feature.name(),
            feature.length()
        ))
    }
}
