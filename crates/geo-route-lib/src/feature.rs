//! Geographic features: connected runs of same-named segments
//!
//! A feature is what a person would call "a street": consecutive segments sharing
//! one name, each starting where the previous one ended.

use crate::{DataError, GeoPoint, GeoSegment, Result};
use std::fmt;

/// An immutable, non-empty chain of connected segments with a common name
#[derive(Clone, Debug)]
pub struct GeoFeature {
    name: String,
    segments: Vec<GeoSegment>,
    /// Cached total length in kilometres
    length: f64,
    /// Cached heading of the first segment
    start_heading: f64,
    /// Cached heading of the last segment
    end_heading: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GeoFeature {
    /// Create a feature holding a single segment
    ///
    /// Zero-length segments are rejected since a feature's headings must be defined.
    pub fn new(segment: GeoSegment) -> Result<Self> {
        let heading = segment.require_heading()?;
        Ok(Self {
            name: segment.name().to_string(),
            length: segment.length(),
            start_heading: heading,
            end_heading: heading,
            segments: vec![segment],
        })
    }

    /// Returns a new feature with `segment` appended at the end
    ///
    /// The segment must carry this feature's name and start at [`Self::end`].
    pub fn add_segment(&self, segment: GeoSegment) -> Result<Self> {
        if segment.name() != self.name {
            return Err(DataError::NameMismatch {
                expected: self.name.clone(),
                found: segment.name().to_string(),
            });
        }
        if segment.p1() != self.end() {
            return Err(DataError::Disconnected {
                name: segment.name().to_string(),
                start: segment.p1(),
                expected: self.end(),
            });
        }
        let heading = segment.require_heading()?;

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        let length = self.length + segment.length();
        segments.push(segment);

        Ok(Self {
            name: self.name.clone(),
            segments,
            length,
            start_heading: self.start_heading,
            end_heading: heading,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start point of the first segment
    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.segments[0].p1()
    }

    /// End point of the last segment
    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.segments[self.segments.len() - 1].p2()
    }

    /// Direction of travel at the start of the feature
    #[inline]
    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    /// Direction of travel at the end of the feature
    #[inline]
    pub fn end_heading(&self) -> f64 {
        self.end_heading
    }

    /// Total length in kilometres
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Segments in traversal order
    #[inline]
    pub fn segments(&self) -> &[GeoSegment] {
        &self.segments
    }
}

impl PartialEq for GeoFeature {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for GeoFeature {}

impl fmt::Display for GeoFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {} ({:.3} km, {} segments)",
            self.name,
            self.start(),
            self.end(),
            self.length,
            self.segments.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: i32, lon: i32) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn seg(name: &str, from: (i32, i32), to: (i32, i32)) -> GeoSegment {
        GeoSegment::new(name, point(from.0, from.1), point(to.0, to.1)).unwrap()
    }

    #[test]
    fn test_feature_creation() {
        let s = seg("Hankin", (0, 0), (1_000, 0));
        let feature = GeoFeature::new(s.clone()).unwrap();
        assert_eq!(feature.name(), "Hankin");
        assert_eq!(feature.start(), s.p1());
        assert_eq!(feature.end(), s.p2());
        assert_eq!(feature.start_heading(), feature.end_heading());
        assert_eq!(feature.segments(), &[s.clone()]);
        assert!((feature.length() - s.length()).abs() < 1e-12);
    }

    #[test]
    fn test_add_segment_returns_new_feature() {
        let first = seg("Hankin", (0, 0), (1_000, 0));
        let second = seg("Hankin", (1_000, 0), (1_000, 1_000));
        let feature = GeoFeature::new(first.clone()).unwrap();
        let extended = feature.add_segment(second.clone()).unwrap();

        // Receiver is untouched
        assert_eq!(feature.segments().len(), 1);
        assert_eq!(extended.segments(), &[first.clone(), second.clone()]);
        assert_eq!(extended.start(), first.p1());
        assert_eq!(extended.end(), second.p2());
        assert!(extended.start_heading().abs() < 1e-9);
        assert!((extended.end_heading() - 90.0).abs() < 1e-9);
        assert!((extended.length() - (first.length() + second.length())).abs() < 1e-12);
    }

    #[test]
    fn test_add_segment_name_mismatch() {
        let feature = GeoFeature::new(seg("Hankin", (0, 0), (1_000, 0))).unwrap();
        let result = feature.add_segment(seg("Horev", (1_000, 0), (2_000, 0)));
        assert!(matches!(result, Err(DataError::NameMismatch { .. })));
    }

    #[test]
    fn test_add_segment_disconnected() {
        let feature = GeoFeature::new(seg("Hankin", (0, 0), (1_000, 0))).unwrap();
        let result = feature.add_segment(seg("Hankin", (1_001, 0), (2_000, 0)));
        assert!(matches!(result, Err(DataError::Disconnected { .. })));
    }

    #[test]
    fn test_degenerate_segment_rejected() {
        assert!(GeoFeature::new(seg("Dot", (1, 1), (1, 1))).is_err());

        let feature = GeoFeature::new(seg("Dot", (0, 0), (1, 1))).unwrap();
        assert!(matches!(
            feature.add_segment(seg("Dot", (1, 1), (1, 1))),
            Err(DataError::UndefinedHeading(_))
        ));
    }

    #[test]
    fn test_equality_by_segments() {
        let a = GeoFeature::new(seg("Hankin", (0, 0), (1_000, 0))).unwrap();
        let b = GeoFeature::new(seg("Hankin", (0, 0), (1_000, 0))).unwrap();
        let c = a.add_segment(seg("Hankin", (1_000, 0), (2_000, 0))).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
