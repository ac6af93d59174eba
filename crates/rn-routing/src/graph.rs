//! Road-network graph store.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ edge_start[n] .. edge_start[n+1] ]
//! ```
//!
//! `edge_start` has `node_count + 1` entries, is monotonic non-decreasing,
//! and ends with `edge_start[node_count] == edge_count`, so the slice above
//! needs no branch for the last node.  Iteration over a node's outgoing
//! edges is a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! # Immutability
//!
//! A [`RoadGraph`] is built once from pre-sorted records and never mutated
//! afterwards.  It is `Send + Sync` and safe for any number of concurrent
//! readers without locks.

use rn_core::{Location, NodeId};

use crate::GraphError;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed edge as seen from its (implicit) source node.
///
/// The source is not stored: it is implied by the edge's position in the CSR
/// layout.  `weight` is a non-negative distance/cost; the unit is whatever
/// the graph description used (metres for FMI road graphs).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub target: NodeId,
    pub weight: u32,
}

// ── CSR offset back-fill ──────────────────────────────────────────────────────

/// Build a CSR offset table from bucket keys sorted ascending.
///
/// Returns `bucket_count + 1` offsets into the payload: bucket `b` owns
/// payload positions `offsets[b] .. offsets[b+1]`.  Keys that never appear
/// (empty buckets) are back-filled with the running payload count, so empty
/// buckets yield empty ranges.  One linear pass, no sorting.
///
/// Sortedness and key range are caller-enforced preconditions, checked only
/// by `debug_assert!`; violating them in release builds produces a
/// meaningless table.
pub(crate) fn csr_offsets(sorted_keys: impl IntoIterator<Item = u32>, bucket_count: usize) -> Vec<u32> {
    let mut offsets: Vec<u32> = Vec::with_capacity(bucket_count + 1);
    let mut filled = 0usize; // buckets whose start offset is already written
    let mut count = 0u32;

    for key in sorted_keys {
        debug_assert!((key as usize) < bucket_count, "bucket key {key} out of range");
        debug_assert!(
            filled == 0 || key as usize + 1 >= filled,
            "bucket keys must be sorted ascending"
        );
        while filled <= key as usize {
            offsets.push(count);
            filled += 1;
        }
        count += 1;
    }
    // Trailing empty buckets plus the dummy end slot.
    while filled <= bucket_count {
        offsets.push(count);
        filled += 1;
    }
    offsets
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Immutable directed road graph in CSR format.
pub struct RoadGraph {
    /// Geographic position of each node.  Indexed by `NodeId`.
    locations: Vec<Location>,

    /// CSR row pointer.  Length = `node_count + 1`.
    edge_start: Vec<u32>,

    /// All edges, grouped by source node, in CSR order.
    edges: Vec<Edge>,
}

impl RoadGraph {
    /// Build a graph from node locations and edges **sorted by source node**.
    ///
    /// `sorted_edges` yields `(source, edge)` pairs grouped by ascending
    /// source id; `locations` must be indexed by node id from 0.  This
    /// ordering is the contract of the graph description format and is *not*
    /// re-validated here (a single `debug_assert!` aside): construction is
    /// one O(n + m) pass with no sort.  Feeding unsorted edges is a
    /// precondition violation and yields a graph with meaningless adjacency.
    pub fn from_sorted(
        locations: Vec<Location>,
        sorted_edges: impl IntoIterator<Item = (NodeId, Edge)>,
    ) -> Self {
        let node_count = locations.len();

        let (sources, edges): (Vec<u32>, Vec<Edge>) =
            sorted_edges.into_iter().map(|(s, e)| (s.0, e)).unzip();
        let edge_start = csr_offsets(sources, node_count);

        debug_assert_eq!(edge_start.len(), node_count + 1);
        debug_assert_eq!(edge_start[node_count] as usize, edges.len());

        Self { locations, edge_start, edges }
    }

    /// A graph with no nodes or edges.
    ///
    /// Any query against it fails with [`GraphError::NodeOutOfRange`]; the
    /// grid built from it answers every lookup with `None`.
    pub fn empty() -> Self {
        Self::from_sorted(Vec::new(), std::iter::empty())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Outgoing edges of `node`, in CSR order, as a borrowed slice (no copy).
    pub fn edges(&self, node: NodeId) -> Result<&[Edge], GraphError> {
        self.check_node(node)?;
        Ok(self.edges_of(node.index()))
    }

    /// Geographic position of `node`.
    pub fn location(&self, node: NodeId) -> Result<Location, GraphError> {
        self.check_node(node)?;
        Ok(self.locations[node.index()])
    }

    /// Number of outgoing edges of `node`.
    pub fn out_degree(&self, node: NodeId) -> Result<usize, GraphError> {
        self.edges(node).map(<[Edge]>::len)
    }

    // ── Crate-internal hot-path accessors ─────────────────────────────────
    //
    // Used by the pathfinder and the grid after ids have been validated
    // once; they index directly and skip the bounds check.

    /// Validate `node`, mapping an out-of-range id to the query error.
    #[inline]
    pub(crate) fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() < self.locations.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node, node_count: self.locations.len() })
        }
    }

    #[inline]
    pub(crate) fn edges_of(&self, node: usize) -> &[Edge] {
        let start = self.edge_start[node] as usize;
        let end = self.edge_start[node + 1] as usize;
        &self.edges[start..end]
    }

    #[inline]
    pub(crate) fn location_of(&self, node: usize) -> Location {
        self.locations[node]
    }
}
