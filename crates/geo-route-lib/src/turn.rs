//! Turn classification from heading changes

use crate::{DataError, Result, is_valid_heading};
use std::fmt;

/// Below this angle the traveller simply continues
const CONTINUE_LIMIT: f64 = 10.0;
/// Below this angle a turn is slight
const SLIGHT_LIMIT: f64 = 60.0;
/// Below this angle a turn is a plain left/right
const PLAIN_LIMIT: f64 = 120.0;
/// Below this angle a turn is sharp; at or above it is a U-turn
const SHARP_LIMIT: f64 = 179.0;

/// Direction change when moving from one heading to another
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Continue,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
    SlightLeft,
    Left,
    SharpLeft,
}

/// Map a heading delta into `(-180, 180]`
///
/// Positive values turn clockwise (right), negative values counter-clockwise.
pub fn normalize_delta(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

impl Turn {
    /// Classify a raw heading delta in degrees
    ///
    /// `delta` must be finite. A NaN delta compares false against every band and
    /// lands on [`Turn::UTurn`]; use [`Turn::between`] to validate headings first.
    pub fn from_delta(delta: f64) -> Self {
        let delta = normalize_delta(delta);
        let angle = delta.abs();
        let right = delta > 0.0;

        if angle < CONTINUE_LIMIT {
            Turn::Continue
        } else if angle < SLIGHT_LIMIT {
            if right { Turn::SlightRight } else { Turn::SlightLeft }
        } else if angle < PLAIN_LIMIT {
            if right { Turn::Right } else { Turn::Left }
        } else if angle < SHARP_LIMIT {
            if right { Turn::SharpRight } else { Turn::SharpLeft }
        } else {
            Turn::UTurn
        }
    }

    /// Classify the turn needed to go from `orig_heading` to `new_heading`
    ///
    /// Both headings must lie in `[0, 360)`.
    pub fn between(orig_heading: f64, new_heading: f64) -> Result<Self> {
        for heading in [orig_heading, new_heading] {
            if !is_valid_heading(heading) {
                return Err(DataError::InvalidHeading(heading));
            }
        }
        Ok(Self::from_delta(new_heading - orig_heading))
    }

    /// English phrase used at the start of a direction line
    pub fn phrase(&self) -> &'static str {
        match self {
            Turn::Continue => "Continue",
            Turn::SlightRight => "Turn slight right",
            Turn::Right => "Turn right",
            Turn::SharpRight => "Turn sharp right",
            Turn::UTurn => "U-turn",
            Turn::SlightLeft => "Turn slight left",
            Turn::Left => "Turn left",
            Turn::SharpLeft => "Turn sharp left",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
