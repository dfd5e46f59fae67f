use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Route Formatter - Build a route from street segments and print walking and driving directions
pub struct Settings {
    /// Catalog segment index to append to the route (repeatable, in order)
    #[clap(short, long = "segment", value_name = "INDEX")]
    pub segments: Vec<usize>,

    /// JSON file with the segment catalog (defaults to the built-in Technion streets)
    #[clap(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Heading faced before the first segment, in degrees (0 = north, clockwise)
    #[clap(long, default_value = "0.0")]
    pub initial_heading: f64,

    /// Walking speed in km/h used for walking directions
    #[clap(long, default_value = "5.0")]
    pub walking_speed: f64,

    /// Choose segments interactively from the catalog on stdin
    #[clap(short, long, default_value = "false")]
    pub interactive: bool,

    /// Print the segment catalog and exit
    #[clap(long, default_value = "false")]
    pub list: bool,

    /// Print a JSON report instead of text
    #[clap(long, default_value = "false")]
    pub json: bool,

    /// Write the resulting route as a GPX file
    #[clap(long, value_name = "FILE")]
    pub gpx_out: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["route-formatter"]);
        assert!(settings.segments.is_empty());
        assert_eq!(settings.initial_heading, 0.0);
        assert_eq!(settings.walking_speed, 5.0);
        assert!(!settings.interactive);
        assert!(!settings.json);
        assert!(settings.gpx_out.is_none());
    }

    #[test]
    fn test_repeated_segments_keep_order() {
        let settings = Settings::parse_from(["route-formatter", "-s", "2", "--segment", "3", "-s", "4"]);
        assert_eq!(settings.segments, vec![2, 3, 4]);
    }

    #[test]
    fn test_flags() {
        let settings = Settings::parse_from([
            "route-formatter",
            "-i",
            "--json",
            "--initial-heading",
            "90",
            "--gpx-out",
            "route.gpx",
        ]);
        assert!(settings.interactive);
        assert!(settings.json);
        assert_eq!(settings.initial_heading, 90.0);
        assert_eq!(settings.gpx_out, Some(PathBuf::from("route.gpx")));
    }
}
