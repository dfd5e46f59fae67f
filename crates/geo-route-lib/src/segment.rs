//! Named straight segments between two points

use crate::{DataError, GeoPoint, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable, named straight edge from `p1` to `p2`
///
/// Length and heading are computed once at construction. The heading is `None`
/// for a zero-length segment.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SegmentRecord")
)]
pub struct GeoSegment {
    name: String,
    p1: GeoPoint,
    p2: GeoPoint,
    /// Cached length in kilometres
    length: f64,
    /// Cached compass heading from `p1` to `p2`
    heading: Option<f64>,
}

impl GeoSegment {
    /// Create a new segment
    ///
    /// Fails with [`DataError::EmptyName`] when `name` is empty or blank.
    pub fn new(name: impl Into<String>, p1: GeoPoint, p2: GeoPoint) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DataError::EmptyName);
        }
        Ok(Self {
            length: p1.distance_to(&p2),
            heading: p1.heading_to(&p2),
            name,
            p1,
            p2,
        })
    }

    /// Same segment traversed the other way
    pub fn reverse(&self) -> Self {
        Self {
            name: self.name.clone(),
            p1: self.p2,
            p2: self.p1,
            length: self.length,
            heading: self.p2.heading_to(&self.p1),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn p1(&self) -> GeoPoint {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> GeoPoint {
        self.p2
    }

    /// Length in kilometres
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Compass heading in `[0, 360)`, or `None` if `p1 == p2`
    #[inline]
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.heading.is_none()
    }

    /// Heading or an error naming this segment
    pub(crate) fn require_heading(&self) -> Result<f64> {
        self.heading
            .ok_or_else(|| DataError::UndefinedHeading(self.name.clone()))
    }
}

impl PartialEq for GeoSegment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Eq for GeoSegment {}

impl Hash for GeoSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.p1.hash(state);
        self.p2.hash(state);
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.p1, self.p2)
    }
}

/// Wire form of a [`GeoSegment`]; derived fields are recomputed on load
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SegmentRecord {
    name: String,
    p1: GeoPoint,
    p2: GeoPoint,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentRecord> for GeoSegment {
    type Error = DataError;

    fn try_from(record: SegmentRecord) -> Result<Self> {
        GeoSegment::new(record.name, record.p1, record.p2)
    }
}
