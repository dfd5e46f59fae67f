//! GPX export of routes
//!
//! Each feature becomes one named track so GPS tools show street names.

use crate::{GeoPoint, Result, Route};
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use std::io::Write;

const CREATOR: &str = "route-formatter";

fn waypoint(point: GeoPoint) -> Waypoint {
    Waypoint::new(point.into())
}

/// Convert a route into GPX data with one track per feature
pub fn route_to_gpx(route: &Route) -> Gpx {
    let mut gpx = Gpx::default();
    gpx.version = GpxVersion::Gpx11;
    gpx.creator = Some(CREATOR.to_string());
    gpx.tracks = route
        .features()
        .iter()
        .map(|feature| {
            let mut segment = TrackSegment::default();
            segment.points.push(waypoint(feature.start()));
            segment
                .points
                .extend(feature.segments().iter().map(|s| waypoint(s.p2())));

            let mut track = Track::default();
            track.name = Some(feature.name().to_string());
            track.segments.push(segment);
            track
        })
        .collect();
    gpx
}

/// Write a route as GPX 1.1 to `writer`
pub fn write_gpx<W: Write>(route: &Route, writer: W) -> Result<()> {
    let gpx = route_to_gpx(route);
    gpx::write(&gpx, writer)?;
    tracing::info!(
        "Exported {} tracks ({:.3} km) as GPX",
        gpx.tracks.len(),
        route.length()
    );
    Ok(())
}
