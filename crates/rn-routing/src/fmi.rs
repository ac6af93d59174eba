//! FMI text-format graph loader.
//!
//! # File format
//!
//! The format produced by the FMI `OsmGraphCreator` toolchain: a metadata
//! header terminated by a blank line, two count lines, then fixed-width
//! record sections.
//!
//! ```text
//! # Id : <hash>               ┐
//! # Timestamp : <unix secs>   │ header — skipped up to the first
//! # Type : maxspeed           │ blank line
//! # Revision : 1              ┘
//!                             ← blank separator line
//! <node count>
//! <edge count>
//! <id> <osm id> <lat> <lon> <elevation>     × node count
//! <source> <target> <weight> <type>         × edge count
//! ```
//!
//! Node records are presented in ascending id order starting at 0 and edge
//! records grouped/sorted by ascending source id — that is the writer's
//! contract, and [`RoadGraph::from_sorted`] relies on it rather than
//! re-sorting.  Only `lat`/`lon` and `target`/`weight` are retained; OSM
//! ids, elevations, and edge types are parsed past and dropped.
//!
//! Every failure is fatal ([`LoadError`]): a partially loaded graph is
//! useless, so there is no recovery mode.

use std::io::{BufRead, BufReader};
use std::path::Path;

use rn_core::{Location, NodeId};

use crate::graph::{Edge, RoadGraph};
use crate::LoadError;

// ── Public entry points ───────────────────────────────────────────────────────

/// Load a road graph from an FMI text file.
///
/// # Errors
///
/// [`LoadError::Io`] on file errors, the other [`LoadError`] variants on
/// malformed content (each carries the 1-based line number).
pub fn load_fmi(path: &Path) -> Result<RoadGraph, LoadError> {
    let file = std::fs::File::open(path)?;
    load_fmi_reader(BufReader::new(file))
}

/// Like [`load_fmi`] but accepts any buffered source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_fmi_reader<R: BufRead>(reader: R) -> Result<RoadGraph, LoadError> {
    let mut lines = LineSource::new(reader);

    // ── Header: skip to the blank separator line ──────────────────────────
    loop {
        match lines.next_line() {
            Ok(line) if line.trim().is_empty() => break,
            Ok(_) => continue,
            Err(LoadError::UnexpectedEof { .. }) => return Err(LoadError::MissingHeader),
            Err(e) => return Err(e),
        }
    }

    // ── Counts ────────────────────────────────────────────────────────────
    let node_count: usize = lines.parse_count("node count")?;
    let edge_count: usize = lines.parse_count("edge count")?;

    // ── Node section ──────────────────────────────────────────────────────
    let mut locations: Vec<Location> = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let line = lines.next_line()?;
        let mut fields = line.split_whitespace();
        // id and osm id are positional; values are implied by record order.
        let _id: u64 = lines.parse_field(fields.next(), "node id")?;
        let _osm_id: i64 = lines.parse_field(fields.next(), "osm id")?;
        let lat: f64 = lines.parse_field(fields.next(), "latitude")?;
        let lon: f64 = lines.parse_field(fields.next(), "longitude")?;
        let _elevation: f64 = lines.parse_field(fields.next(), "elevation")?;
        locations.push(Location::new(lat, lon));
    }

    // ── Edge section ──────────────────────────────────────────────────────
    let mut sorted_edges: Vec<(NodeId, Edge)> = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let line = lines.next_line()?;
        let mut fields = line.split_whitespace();
        let source: u32 = lines.parse_field(fields.next(), "source id")?;
        let target: u32 = lines.parse_field(fields.next(), "target id")?;
        let weight: u32 = lines.parse_field(fields.next(), "weight")?;
        let _edge_type: i64 = lines.parse_field(fields.next(), "edge type")?;

        // Range-check ids here, once, at load time; the query path and the
        // CSR builder index without checks.
        for id in [source, target] {
            if id as usize >= node_count {
                return Err(lines.parse_error(format!(
                    "edge references node {id}, but the graph has {node_count} nodes"
                )));
            }
        }
        sorted_edges.push((NodeId(source), Edge { target: NodeId(target), weight }));
    }

    Ok(RoadGraph::from_sorted(locations, sorted_edges))
}

// ── Line-oriented parsing helper ──────────────────────────────────────────────

/// Wraps a `BufRead` with 1-based line tracking so every error can name the
/// offending line.
struct LineSource<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line_no: 0 }
    }

    fn next_line(&mut self) -> Result<String, LoadError> {
        self.line_no += 1;
        match self.lines.next() {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(LoadError::Io(e)),
            None => Err(LoadError::UnexpectedEof { line: self.line_no }),
        }
    }

    /// Read one line holding a single non-negative integer.
    fn parse_count(&mut self, what: &str) -> Result<usize, LoadError> {
        let line = self.next_line()?;
        line.trim()
            .parse()
            .map_err(|_| self.parse_error(format!("invalid {what}: {:?}", line.trim())))
    }

    /// Parse one whitespace-split field of the current line.
    fn parse_field<T: std::str::FromStr>(
        &self,
        field: Option<&str>,
        what: &str,
    ) -> Result<T, LoadError> {
        let raw = field.ok_or_else(|| self.parse_error(format!("missing {what} field")))?;
        raw.parse()
            .map_err(|_| self.parse_error(format!("invalid {what}: {raw:?}")))
    }

    fn parse_error(&self, reason: String) -> LoadError {
        LoadError::Parse { line: self.line_no, reason }
    }
}
