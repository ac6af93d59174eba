//! Single-pair shortest paths over the CSR graph.
//!
//! # Pluggability
//!
//! Consumers call routing via the [`Pathfinder`] trait, so applications can
//! swap in custom implementations (contraction hierarchies, A*) without
//! touching the rest of the engine.  The default [`DijkstraPathfinder`] is
//! the reference algorithm.
//!
//! # Result shape
//!
//! "No path exists" is an ordinary outcome on a directed road graph, so it
//! is `Ok(None)` rather than an error — structurally distinct from the
//! `start == target` case, which is `Ok(Some(..))` with a one-node path and
//! distance 0.  Only an out-of-range id is an `Err`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rn_core::NodeId;

use crate::graph::RoadGraph;
use crate::GraphError;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a successful shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Visited nodes in order, from start to target inclusive.
    pub nodes: Vec<NodeId>,
    /// Sum of the traversed edge weights.
    pub distance: u32,
}

impl Path {
    /// Number of edges traversed (`0` for a `start == target` path).
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` and keep any per-query scratch
/// local to the call, so concurrent queries against one shared [`RoadGraph`]
/// need no locking.
pub trait Pathfinder: Send + Sync {
    /// Compute a shortest path from `start` to `target`.
    ///
    /// Returns `Ok(None)` if `target` is unreachable from `start`, and
    /// [`GraphError::NodeOutOfRange`] (before any search) if either id is
    /// invalid.
    fn calculate_path(
        &self,
        graph: &RoadGraph,
        start: NodeId,
        target: NodeId,
    ) -> Result<Option<Path>, GraphError>;
}

// ── DijkstraPathfinder ────────────────────────────────────────────────────────

/// Classic Dijkstra with a binary min-heap and **lazy deletion**.
///
/// `BinaryHeap` has no decrease-key, so an improved tentative distance is
/// pushed as a fresh entry and the superseded one stays behind; on pop, any
/// entry whose priority exceeds the node's current best distance is stale
/// and gets discarded.  Asymptotically equivalent to decrease-key on sparse
/// graphs: O((n + m) log n).
///
/// The search stops as soon as `target` is *popped* (not merely discovered)
/// — with non-negative weights, Dijkstra pops nodes in non-decreasing final
/// distance, so the first pop of `target` carries its true distance.
/// Negative weights are unrepresentable here (`u32`).
///
/// Scratch state (`dist`, `prev`, heap) is allocated per call and never
/// shared, so one instance may serve any number of concurrent callers.
pub struct DijkstraPathfinder;

impl Pathfinder for DijkstraPathfinder {
    fn calculate_path(
        &self,
        graph: &RoadGraph,
        start: NodeId,
        target: NodeId,
    ) -> Result<Option<Path>, GraphError> {
        graph.check_node(start)?;
        graph.check_node(target)?;
        Ok(dijkstra(graph, start, target))
    }
}

fn dijkstra(graph: &RoadGraph, start: NodeId, target: NodeId) -> Option<Path> {
    if start == target {
        return Some(Path { nodes: vec![start], distance: 0 });
    }

    let n = graph.node_count();
    // dist[v] = best known distance to v; u32::MAX = unreached.
    let mut dist = vec![u32::MAX; n];
    // prev[v] = node that reached v on the best known path.
    let mut prev = vec![NodeId::INVALID; n];

    dist[start.index()] = 0;

    // Min-heap: (distance, node). Reverse makes BinaryHeap (max) behave as
    // min-heap. Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Lazy deletion: a better entry for this node was already popped.
        if cost > dist[node.index()] {
            continue;
        }

        if node == target {
            return Some(reconstruct(&prev, start, target, cost));
        }

        for edge in graph.edges_of(node.index()) {
            let next = cost.saturating_add(edge.weight);
            if next < dist[edge.target.index()] {
                dist[edge.target.index()] = next;
                prev[edge.target.index()] = node;
                heap.push(Reverse((next, edge.target)));
            }
        }
    }

    // Heap exhausted before the target was popped: unreachable.
    None
}

/// Walk `prev` from `target` back to `start`, then reverse.
///
/// Only called once `target` has been popped, so the chain is guaranteed to
/// terminate at `start`.
fn reconstruct(prev: &[NodeId], start: NodeId, target: NodeId, distance: u32) -> Path {
    let mut nodes = vec![target];
    let mut cur = target;
    while cur != start {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Path { nodes, distance }
}
