//! Application module
//!
//! This module provides the main application structure:
//! - A segment catalog (built-in or loaded from JSON)
//! - A directions session fed from the command line or the chooser dialog
//! - Output as text panes, a JSON report, or a GPX file

mod dialog;
mod session;
pub(crate) mod settings;

use crate::app::dialog::SegmentDialog;
use crate::app::session::DirectionsSession;
use crate::app::settings::Settings;
use geo_route_lib::{DataError, GeoSegment, WalkingRouteFormatter, catalog, write_gpx};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog file: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Segment index {index} out of range (catalog has {len} segments)")]
    UnknownSegment { index: usize, len: usize },
}

/// Summary of one feature in the JSON report
#[derive(Serialize)]
struct FeatureSummary<'a> {
    name: &'a str,
    length_km: f64,
    start_heading: f64,
    end_heading: f64,
}

/// JSON report of the current route and its directions
#[derive(Serialize)]
struct Report<'a> {
    initial_heading: f64,
    length_km: f64,
    segments: &'a [GeoSegment],
    features: Vec<FeatureSummary<'a>>,
    walking_directions: String,
    driving_directions: String,
}

/// Main application structure
pub struct RouteFormatterApp {
    settings: Settings,

    /// Segments the user can choose from
    catalog: Vec<GeoSegment>,

    /// Route and directions built so far
    session: DirectionsSession,
}

impl RouteFormatterApp {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let walking = WalkingRouteFormatter::new(settings.walking_speed)?;
        let catalog = Self::load_catalog(settings.catalog.as_deref())?;
        let session = DirectionsSession::new(settings.initial_heading, walking)?;

        tracing::info!("Initialized with {} catalog segments", catalog.len());

        Ok(Self {
            settings,
            catalog,
            session,
        })
    }

    /// Load the catalog from a JSON file, or fall back to the built-in one
    fn load_catalog(path: Option<&Path>) -> Result<Vec<GeoSegment>, AppError> {
        match path {
            Some(path) => {
                let reader = BufReader::new(File::open(path)?);
                let segments: Vec<GeoSegment> = serde_json::from_reader(reader)?;
                tracing::info!("Loaded {} segments from {}", segments.len(), path.display());
                Ok(segments)
            }
            None => Ok(catalog::example_segments()?),
        }
    }

    /// Add the catalog segment at `index` to the route
    pub fn add_catalog_segment(&mut self, index: usize) -> Result<(), AppError> {
        let segment = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(AppError::UnknownSegment {
                index,
                len: self.catalog.len(),
            })?;
        self.session.add_segment(segment)?;
        Ok(())
    }

    /// Run according to the settings, reading dialog input from `input`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        if self.settings.list {
            SegmentDialog::new(&self.catalog).render(out)?;
            return Ok(());
        }

        for index in self.settings.segments.clone() {
            self.add_catalog_segment(index)?;
        }

        if self.settings.interactive {
            let added = SegmentDialog::new(&self.catalog).run(&mut self.session, input, out)?;
            tracing::info!("Added {} segments interactively", added);
        }

        if let Some(path) = self.settings.gpx_out.clone() {
            self.export_gpx(&path)?;
        }

        if self.settings.json {
            self.write_json_report(out)?;
        } else {
            self.write_text_report(out)?;
        }
        Ok(())
    }

    fn export_gpx(&self, path: &Path) -> Result<(), AppError> {
        match self.session.route() {
            Some(route) => {
                let mut writer = BufWriter::new(File::create(path)?);
                write_gpx(route, &mut writer)?;
                writer.flush()?;
                tracing::info!("Wrote GPX to {}", path.display());
            }
            None => tracing::warn!("Route is empty, not writing {}", path.display()),
        }
        Ok(())
    }

    fn report(&self) -> Report<'_> {
        let route = self.session.route();
        Report {
            initial_heading: self.session.initial_heading(),
            length_km: route.map_or(0.0, |r| r.length()),
            segments: self.session.segments(),
            features: route
                .map(|r| r.features())
                .unwrap_or_default()
                .iter()
                .map(|f| FeatureSummary {
                    name: f.name(),
                    length_km: f.length(),
                    start_heading: f.start_heading(),
                    end_heading: f.end_heading(),
                })
                .collect(),
            walking_directions: self.session.walking_directions(),
            driving_directions: self.session.driving_directions(),
        }
    }

    fn write_json_report<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut *out, &self.report())?;
        writeln!(out)?;
        Ok(())
    }

    fn write_text_report<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        writeln!(out, "Route's GeoSegments:")?;
        if self.session.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for segment in self.session.segments() {
            writeln!(out, "  {segment}")?;
        }
        writeln!(out, "\nWalking Directions:")?;
        write!(out, "{}", self.session.walking_directions())?;
        writeln!(out, "\nDriving Directions:")?;
        write!(out, "{}", self.session.driving_directions())?;
        Ok(())
    }
}
