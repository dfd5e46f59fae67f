//! Built-in example segments around the Technion campus in Haifa
//!
//! The streets form a loop with one branch, so routes with merges, turns and
//! U-turns can be built from them. Every street is listed in both directions.

use crate::{GeoPoint, GeoSegment, Result};

/// (name, start, end) in millionths of a degree
type SegmentDef = (&'static str, (i32, i32), (i32, i32));

const ZIV_SQUARE: (i32, i32) = (32_783_098, 35_014_528);
const TRUMPELDOR_BEND: (i32, i32) = (32_781_900, 35_015_400);
const CAMPUS_GATE: (i32, i32) = (32_780_400, 35_016_900);
const EINSTEIN_MID: (i32, i32) = (32_780_400, 35_019_000);
const LIBRARY: (i32, i32) = (32_779_800, 35_021_000);
const DORMS: (i32, i32) = (32_777_500, 35_021_600);
const SPORTS_CENTER: (i32, i32) = (32_776_900, 35_019_000);
const YOTAM_END: (i32, i32) = (32_782_000, 35_019_500);

const SEGMENTS: &[SegmentDef] = &[
    ("Trumpeldor", ZIV_SQUARE, TRUMPELDOR_BEND),
    ("Trumpeldor", TRUMPELDOR_BEND, CAMPUS_GATE),
    ("Einstein", CAMPUS_GATE, EINSTEIN_MID),
    ("Einstein", EINSTEIN_MID, LIBRARY),
    ("Horev", LIBRARY, DORMS),
    ("Moriah", DORMS, SPORTS_CENTER),
    ("Hankin", SPORTS_CENTER, CAMPUS_GATE),
    ("Yotam", EINSTEIN_MID, YOTAM_END),
];

fn build((name, from, to): &SegmentDef) -> Result<GeoSegment> {
    GeoSegment::new(
        *name,
        GeoPoint::new(from.0, from.1)?,
        GeoPoint::new(to.0, to.1)?,
    )
}

/// Example segments, each street forward followed by all streets reversed
pub fn example_segments() -> Result<Vec<GeoSegment>> {
    let forward = SEGMENTS.iter().map(build).collect::<Result<Vec<_>>>()?;
    let reversed: Vec<GeoSegment> = forward.iter().map(GeoSegment::reverse).collect();
    Ok(forward.into_iter().chain(reversed).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrivingRouteFormatter, Route, RouteFormatter};

    #[test]
    fn test_catalog_is_valid() {
        let segments = example_segments().unwrap();
        assert_eq!(segments.len(), SEGMENTS.len() * 2);
        assert!(segments.iter().all(|s| !s.is_degenerate()));
    }

    #[test]
    fn test_catalog_contains_reverses() {
        let segments = example_segments().unwrap();
        for seg in &segments {
            assert!(segments.contains(&seg.reverse()), "missing reverse of {seg}");
        }
    }

    #[test]
    fn test_catalog_builds_a_loop() {
        let segments = example_segments().unwrap();
        // Campus gate -> library -> dorms -> sports center -> campus gate
        let route = Route::try_from_segments(segments[2..7].iter().cloned()).unwrap();
        assert_eq!(route.start(), route.end());
        let names: Vec<&str> = route.features().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Einstein", "Horev", "Moriah", "Hankin"]);

        let directions = DrivingRouteFormatter.compute_directions(&route, 90.0).unwrap();
        assert_eq!(directions.lines().count(), 4);
    }
}
