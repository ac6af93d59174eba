//! Routing-subsystem error types.
//!
//! Two enums, two failure classes:
//!
//! - [`GraphError`] — query-time caller bugs (an id outside the graph).
//!   Surfaced immediately; never produced by well-behaved callers.
//! - [`LoadError`] — construction-time failures.  Always fatal: there is no
//!   degraded mode without a valid graph.
//!
//! "Nothing was found" is **not** an error here.  A missing route is
//! `Ok(None)` from the pathfinder and an empty grid yields `None` from
//! `closest_node`; neither ever passes through these enums.

use thiserror::Error;

use rn_core::NodeId;

/// Errors produced by graph and routing queries.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}

/// Errors produced while loading a graph description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header: end of input before the blank separator line")]
    MissingHeader,

    #[error("unexpected end of input at line {line}")]
    UnexpectedEof { line: usize },

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
