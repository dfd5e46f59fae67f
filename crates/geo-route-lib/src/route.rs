//! Route building module
//!
//! A `Route` is a path over arbitrary, connected segments. Consecutive segments with
//! the same name are grouped into one [`GeoFeature`], which is the unit directions
//! are given in.

use crate::{DataError, GeoFeature, GeoPoint, GeoSegment, Result};
use std::fmt;

/// An immutable route with precomputed length and headings
#[derive(Clone, Debug)]
pub struct Route {
    /// All segments in traversal order
    segments: Vec<GeoSegment>,
    /// Segments grouped into maximal same-named runs
    features: Vec<GeoFeature>,
    /// Cached total length in kilometres
    cached_length: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Route {
    /// Create a route made of a single segment
    pub fn new(segment: GeoSegment) -> Result<Self> {
        let feature = GeoFeature::new(segment.clone())?;
        Ok(Self {
            cached_length: segment.length(),
            segments: vec![segment],
            features: vec![feature],
        })
    }

    /// Build a route from segments in order
    ///
    /// Fails with [`DataError::EmptyRoute`] when `segments` is empty.
    pub fn try_from_segments<I>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        let mut iter = segments.into_iter();
        let first = iter.next().ok_or(DataError::EmptyRoute)?;
        iter.try_fold(Self::new(first)?, |route, segment| route.add_segment(segment))
    }

    /// Returns a new route with `segment` appended at the end
    ///
    /// The segment must start where this route ends. If its name matches the last
    /// feature it extends that feature, otherwise it opens a new one.
    pub fn add_segment(&self, segment: GeoSegment) -> Result<Self> {
        if segment.p1() != self.end() {
            tracing::warn!(
                "Rejecting segment {} not connected to route end {}",
                segment,
                self.end()
            );
            return Err(DataError::Disconnected {
                name: segment.name().to_string(),
                start: segment.p1(),
                expected: self.end(),
            });
        }

        let mut features = self.features.clone();
        let last = self.end_feature();
        if last.name() == segment.name() {
            let extended = last.add_segment(segment.clone())?;
            if let Some(slot) = features.last_mut() {
                *slot = extended;
            }
        } else {
            features.push(GeoFeature::new(segment.clone())?);
        }

        let cached_length = self.cached_length + segment.length();
        let mut segments = self.segments.clone();
        segments.push(segment);

        tracing::debug!(
            "Route extended to {} segments in {} features ({:.3} km)",
            segments.len(),
            features.len(),
            cached_length
        );

        Ok(Self {
            segments,
            features,
            cached_length,
        })
    }

    /// Where the route begins
    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.features[0].start()
    }

    /// Where the route ends
    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.end_feature().end()
    }

    /// Direction of travel at the start of the route
    #[inline]
    pub fn start_heading(&self) -> f64 {
        self.features[0].start_heading()
    }

    /// Direction of travel at the end of the route
    #[inline]
    pub fn end_heading(&self) -> f64 {
        self.end_feature().end_heading()
    }

    /// Total length in kilometres
    ///
    /// This is O(1) as the value is accumulated while the route is built.
    #[inline]
    pub fn length(&self) -> f64 {
        self.cached_length
    }

    /// The feature currently being traversed at the end of the route
    #[inline]
    pub fn end_feature(&self) -> &GeoFeature {
        &self.features[self.features.len() - 1]
    }

    #[inline]
    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    #[inline]
    pub fn segments(&self) -> &[GeoSegment] {
        &self.segments
    }

    #[inline]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl Eq for Route {}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route from {} to {} ({:.3} km)",
            self.start(),
            self.end(),
            self.cached_length
        )?;
        for feature in &self.features {
            write!(f, "\n  {feature}")?;
        }
        Ok(())
    }
}
