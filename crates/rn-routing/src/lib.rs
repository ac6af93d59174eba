//! `rn-routing` — road-network graph store, loading, routing, and
//! nearest-node lookup.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`graph`]    | `RoadGraph` (CSR adjacency), `Edge`                    |
//! | [`fmi`]      | `load_fmi` / `load_fmi_reader` (FMI text format)       |
//! | [`dijkstra`] | `Pathfinder` trait, `Path`, `DijkstraPathfinder`       |
//! | [`grid`]     | `WorldGrid` (uniform-grid nearest-node index)          |
//! | [`error`]    | `GraphError`, `LoadError`                              |
//!
//! # Lifecycle
//!
//! Construction is a one-time sequential pipeline: loader → [`RoadGraph`] →
//! [`WorldGrid`].  Both structures are immutable afterwards and safe to
//! share across any number of reader threads; pathfinding queries allocate
//! their own scratch per call, so no part of the engine needs a lock.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod dijkstra;
pub mod error;
pub mod fmi;
pub mod graph;
pub mod grid;


pub use dijkstra::{DijkstraPathfinder, Path, Pathfinder};
pub use error::{GraphError, LoadError};
pub use fmi::{load_fmi, load_fmi_reader};
pub use graph::{Edge, RoadGraph};
pub use grid::WorldGrid;
