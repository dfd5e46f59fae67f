//! Directions session state
//!
//! Mirrors the route panel: the list of chosen segments plus walking and driving
//! directions kept up to date one segment at a time. Extending the current street
//! rewrites its last line, while a new street appends a line.

use geo_route_lib::{
    DataError, DrivingRouteFormatter, GeoSegment, Result, Route, RouteFormatter,
    WalkingRouteFormatter, is_valid_heading,
};

/// Route under construction with its rendered directions
#[derive(Debug)]
pub struct DirectionsSession {
    /// Route built so far (None until the first segment is added)
    route: Option<Route>,

    /// Heading faced before the first segment
    initial_heading: f64,

    /// Heading the last feature was entered with
    entry_heading: f64,

    /// One walking line per feature
    walking_lines: Vec<String>,

    /// One driving line per feature
    driving_lines: Vec<String>,

    walking: WalkingRouteFormatter,
    driving: DrivingRouteFormatter,
}

impl DirectionsSession {
    /// Create an empty session
    ///
    /// Fails with [`DataError::InvalidHeading`] unless `initial_heading` is in `[0, 360)`.
    pub fn new(initial_heading: f64, walking: WalkingRouteFormatter) -> Result<Self> {
        if !is_valid_heading(initial_heading) {
            return Err(DataError::InvalidHeading(initial_heading));
        }
        Ok(Self {
            route: None,
            initial_heading,
            entry_heading: initial_heading,
            walking_lines: Vec::new(),
            driving_lines: Vec::new(),
            walking,
            driving: DrivingRouteFormatter,
        })
    }

    /// Append a segment to the route and refresh the directions
    ///
    /// On error the session is left unchanged.
    pub fn add_segment(&mut self, segment: GeoSegment) -> Result<()> {
        let (route, entry_heading, new_feature) = match &self.route {
            None => (Route::new(segment)?, self.initial_heading, true),
            Some(route) => {
                let same_feature = route.end_feature().name() == segment.name();
                let next = route.add_segment(segment)?;
                if same_feature {
                    (next, self.entry_heading, false)
                } else {
                    (next, route.end_heading(), true)
                }
            }
        };

        let feature = route.end_feature();
        let walking = self.walking.compute_line(feature, entry_heading)?;
        let driving = self.driving.compute_line(feature, entry_heading)?;

        if !new_feature {
            self.walking_lines.pop();
            self.driving_lines.pop();
        }
        self.walking_lines.push(walking);
        self.driving_lines.push(driving);

        tracing::debug!(
            "Session now has {} segments in {} features",
            route.segments().len(),
            route.feature_count()
        );

        self.entry_heading = entry_heading;
        self.route = Some(route);
        Ok(())
    }

    /// The route built so far, if any
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Segments chosen so far, in order
    pub fn segments(&self) -> &[GeoSegment] {
        match &self.route {
            Some(route) => route.segments(),
            None => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_none()
    }

    pub fn initial_heading(&self) -> f64 {
        self.initial_heading
    }

    pub fn walking_directions(&self) -> String {
        self.walking_lines.concat()
    }

    pub fn driving_directions(&self) -> String {
        self.driving_lines.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_route_lib::{GeoPoint, catalog};

    fn point(lat: i32, lon: i32) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn seg(name: &str, from: (i32, i32), to: (i32, i32)) -> GeoSegment {
        GeoSegment::new(name, point(from.0, from.1), point(to.0, to.1)).unwrap()
    }

    fn create_session(heading: f64) -> DirectionsSession {
        DirectionsSession::new(heading, WalkingRouteFormatter::default()).unwrap()
    }

    #[test]
    fn test_empty_session() {
        let session = create_session(0.0);
        assert!(session.is_empty());
        assert!(session.segments().is_empty());
        assert_eq!(session.walking_directions(), "");
        assert_eq!(session.driving_directions(), "");
    }

    #[test]
    fn test_invalid_initial_heading() {
        assert!(DirectionsSession::new(360.0, WalkingRouteFormatter::default()).is_err());
    }

    #[test]
    fn test_same_feature_rewrites_last_line() {
        let mut session = create_session(0.0);
        session.add_segment(seg("Hankin", (0, 0), (9_000, 0))).unwrap();
        assert_eq!(
            session.driving_directions(),
            "Continue onto Hankin and go 1.0 kilometers.\n"
        );

        session.add_segment(seg("Hankin", (9_000, 0), (18_000, 0))).unwrap();
        assert_eq!(
            session.driving_directions(),
            "Continue onto Hankin and go 2.0 kilometers.\n"
        );
        assert_eq!(session.segments().len(), 2);
    }

    #[test]
    fn test_new_feature_appends_line() {
        let mut session = create_session(0.0);
        session.add_segment(seg("Hankin", (0, 0), (9_000, 0))).unwrap();
        session.add_segment(seg("Horev", (9_000, 0), (9_000, 10_675))).unwrap();
        assert_eq!(
            session.driving_directions(),
            "Continue onto Hankin and go 1.0 kilometers.\n\
             Turn right onto Horev and go 1.0 kilometers.\n"
        );
        assert_eq!(session.walking_directions().lines().count(), 2);
    }

    #[test]
    fn test_rejected_segment_leaves_session_unchanged() {
        let mut session = create_session(0.0);
        session.add_segment(seg("Hankin", (0, 0), (9_000, 0))).unwrap();
        let before = session.walking_directions();

        assert!(session.add_segment(seg("Horev", (1, 1), (2, 2))).is_err());
        assert_eq!(session.walking_directions(), before);
        assert_eq!(session.segments().len(), 1);
    }

    #[test]
    fn test_matches_full_recomputation() {
        let segments = catalog::example_segments().unwrap();
        // Ziv square along Trumpeldor, Einstein, up Yotam and back down again
        let chosen = [0, 1, 2, 7, 15];
        let walking = WalkingRouteFormatter::default();

        let mut session = create_session(45.0);
        for &index in &chosen {
            session.add_segment(segments[index].clone()).unwrap();

            let route = session.route().unwrap();
            assert_eq!(
                session.walking_directions(),
                walking.compute_directions(route, 45.0).unwrap()
            );
            assert_eq!(
                session.driving_directions(),
                DrivingRouteFormatter.compute_directions(route, 45.0).unwrap()
            );
        }
        // Both Yotam segments share one line
        assert_eq!(session.driving_directions().lines().count(), 3);
        assert!(session.driving_directions().contains("onto Yotam"));
    }
}
