//! Uniform world grid for nearest-node lookup.
//!
//! # Data layout
//!
//! The full latitude/longitude domain is partitioned into uniform cells:
//! `rows = floor(180 / resolution)` latitude bands by
//! `cols = floor(360 / resolution)` longitude bands, addressed as
//! `cell = row * cols + col`.  Node indices are bucketed per cell with the
//! same CSR pattern as the graph's adjacency:
//!
//! ```text
//! node_order[ cell_start[c] .. cell_start[c+1] ]
//! ```
//!
//! Built once from a finished [`RoadGraph`]; read-only and freely shared
//! afterwards.
//!
//! # Approximation contract
//!
//! [`closest_node`](WorldGrid::closest_node) scans only the 3×3 block of
//! cells around the query, so the true nearest node can be missed when the
//! resolution is mismatched to node density.  That is acceptable for
//! "click near a point" snapping and is the documented contract — this is
//! an *approximate* nearest-neighbor index, not an exact one.  Near the
//! poles the cells degenerate with meridian convergence; queries there are
//! clamped to ±89° latitude (accepted limitation, see
//! [`Location::clamped`]).

use rn_core::{Location, NodeId};

use crate::graph::{csr_offsets, RoadGraph};

/// Uniform lat/lon grid over a graph's nodes.
pub struct WorldGrid {
    /// Cell edge length in degrees, both axes.
    resolution: f64,
    /// Latitude bands.
    rows: u32,
    /// Longitude bands; also the row stride of the cell addressing.
    cols: u32,
    /// CSR bucket offsets.  Length = `rows * cols + 1`.
    cell_start: Vec<u32>,
    /// Node ids sorted by cell index (ties broken by node id).
    node_order: Vec<NodeId>,
}

impl WorldGrid {
    /// Bucket every node of `graph` into a grid of `resolution_deg`-sized
    /// cells.
    ///
    /// O(n log n) for the sort by cell index, O(n + cells) for the offset
    /// back-fill.
    ///
    /// # Panics
    ///
    /// If `resolution_deg` is not in `(0, 180]`.
    pub fn build(graph: &RoadGraph, resolution_deg: f64) -> Self {
        assert!(
            resolution_deg > 0.0 && resolution_deg <= 180.0,
            "grid resolution must be in (0, 180] degrees, got {resolution_deg}"
        );
        let rows = (180.0 / resolution_deg).floor() as u32;
        let cols = (360.0 / resolution_deg).floor() as u32;

        let mut grid = Self {
            resolution: resolution_deg,
            rows,
            cols,
            cell_start: Vec::new(),
            node_order: Vec::new(),
        };

        // Sorting (cell, node) pairs keeps equal-cell runs in node order,
        // so the bucket layout is deterministic.
        let mut pairs: Vec<(u32, NodeId)> = (0..graph.node_count())
            .map(|i| (grid.cell_index(graph.location_of(i)), NodeId(i as u32)))
            .collect();
        pairs.sort_unstable();

        grid.node_order = pairs.iter().map(|&(_, node)| node).collect();
        grid.cell_start = csr_offsets(
            pairs.into_iter().map(|(cell, _)| cell),
            (rows as usize) * (cols as usize),
        );
        grid
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    // ── Cell addressing ───────────────────────────────────────────────────

    /// Map a location to its cell index.
    ///
    /// The location is clamped/wrapped into the grid domain first, so any
    /// finite input maps to a valid cell — including longitudes across the
    /// antimeridian and latitudes past the poles.  Row comes from latitude,
    /// column from longitude; both are capped at the last band so
    /// resolutions that do not divide 180/360 evenly stay in range.
    pub fn cell_index(&self, location: Location) -> u32 {
        let loc = location.clamped();
        let row = ((loc.lat + 90.0) / self.resolution) as u32;
        let col = ((loc.lon + 180.0) / self.resolution) as u32;
        row.min(self.rows - 1) * self.cols + col.min(self.cols - 1)
    }

    /// The nodes bucketed into `cell`, sorted by id, as a borrowed slice.
    pub fn nodes_in_cell(&self, cell: u32) -> &[NodeId] {
        let start = self.cell_start[cell as usize] as usize;
        let end = self.cell_start[cell as usize + 1] as usize;
        &self.node_order[start..end]
    }

    // ── Nearest-node query ────────────────────────────────────────────────

    /// Return the node nearest to `location`, by squared degree distance,
    /// among the 3×3 block of cells around it.
    ///
    /// Neighbor cells are found by offsetting the query by ±resolution per
    /// axis and re-running the clamp/wrap cell mapping, so a query next to
    /// the antimeridian scans cells on both sides of it.  Near the poles the
    /// offsets may collapse onto the same cell; scanning a cell twice does
    /// not change the minimum.
    ///
    /// Returns `None` only when the grid holds zero nodes.
    pub fn closest_node(&self, graph: &RoadGraph, location: Location) -> Option<NodeId> {
        let r = self.resolution;
        let mut best: Option<(f64, NodeId)> = None;

        for d_lat in [-r, 0.0, r] {
            for d_lon in [-r, 0.0, r] {
                let probe = Location::new(location.lat + d_lat, location.lon + d_lon);
                for &node in self.nodes_in_cell(self.cell_index(probe)) {
                    let sq_dist = location.sq_degree_dist(graph.location_of(node.index()));
                    if best.is_none_or(|(best_dist, _)| sq_dist < best_dist) {
                        best = Some((sq_dist, node));
                    }
                }
            }
        }

        best.map(|(_, node)| node)
    }
}
