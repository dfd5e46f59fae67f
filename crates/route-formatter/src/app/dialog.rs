//! Segment chooser dialog
//!
//! Lists the catalog with indices and adds the chosen segments to a session, one
//! choice per input line. Bad input is reported and the dialog keeps going.

use crate::app::AppError;
use crate::app::session::DirectionsSession;
use geo_route_lib::GeoSegment;
use std::io::{BufRead, ErrorKind, Write};

/// A single parsed line of dialog input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Add the catalog segment at this index
    Add(usize),
    /// Close the dialog
    Cancel,
    /// Blank line
    Skip,
    /// Unusable input, with a message for the user
    Invalid(String),
}

/// Modal chooser over a segment catalog
pub struct SegmentDialog<'a> {
    catalog: &'a [GeoSegment],
}

impl<'a> SegmentDialog<'a> {
    pub fn new(catalog: &'a [GeoSegment]) -> Self {
        Self { catalog }
    }

    /// Write the numbered catalog
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "GeoSegments:")?;
        for (index, segment) in self.catalog.iter().enumerate() {
            writeln!(out, "  [{index:>2}] {segment}")?;
        }
        Ok(())
    }

    /// Interpret one line of input
    pub fn parse_choice(&self, line: &str) -> Choice {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Choice::Skip,
            "cancel" | "q" | "quit" => Choice::Cancel,
            _ => match line.parse::<usize>() {
                Ok(_) if self.catalog.is_empty() => {
                    Choice::Invalid("Catalog is empty".to_string())
                }
                Ok(index) if index < self.catalog.len() => Choice::Add(index),
                Ok(index) => Choice::Invalid(format!(
                    "No segment {index}, choose 0-{}",
                    self.catalog.len() - 1
                )),
                Err(_) => Choice::Invalid(format!("Not a segment index: '{line}'")),
            },
        }
    }

    /// Read choices until cancel or end of input, adding segments to `session`
    ///
    /// Returns the number of segments added.
    pub fn run<R: BufRead, W: Write>(
        &self,
        session: &mut DirectionsSession,
        input: R,
        out: &mut W,
    ) -> Result<usize, AppError> {
        self.render(out)?;
        writeln!(out, "Choose a segment index to add, or 'cancel' to finish.")?;

        let mut added = 0;
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    tracing::warn!("Skipping unreadable input line: {}", e);
                    writeln!(out, "Input is not valid UTF-8, try again")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            match self.parse_choice(&line) {
                Choice::Add(index) => {
                    let segment = self.catalog[index].clone();
                    match session.add_segment(segment.clone()) {
                        Ok(()) => {
                            added += 1;
                            writeln!(out, "Added {segment}")?;
                            write!(out, "{}", session.walking_directions())?;
                        }
                        Err(e) => {
                            tracing::warn!("Rejected segment {}: {}", index, e);
                            writeln!(out, "Cannot add segment {index}: {e}")?;
                        }
                    }
                }
                Choice::Cancel => break,
                Choice::Skip => {}
                Choice::Invalid(message) => writeln!(out, "{message}")?,
            }
        }
        Ok(added)
    }
}
