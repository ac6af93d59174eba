//! route — end-to-end demo of the rn engine.
//!
//! Loads an FMI road graph, builds the world grid, snaps two coordinates to
//! their nearest road nodes, and prints the shortest path between them.
//!
//! ```text
//! route <graph.fmi> <lat,lon> <lat,lon> [resolution_deg]
//! ```
//!
//! Example (Stuttgart graph from the FMI OsmGraphCreator toolchain):
//!
//! ```text
//! route stgt.fmi 48.7449,9.1048 48.7758,9.1829
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use rn_core::Location;
use rn_routing::{load_fmi, DijkstraPathfinder, Pathfinder, WorldGrid};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Default grid cell size.  ~1.1 km per latitude band; dense enough for
/// city-scale graphs, coarse enough to keep the cell table small.
const DEFAULT_RESOLUTION_DEG: f64 = 0.01;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (path, from, to) = match (args.next(), args.next(), args.next()) {
        (Some(p), Some(a), Some(b)) => {
            (PathBuf::from(p), parse_location(&a)?, parse_location(&b)?)
        }
        _ => bail!("usage: route <graph.fmi> <lat,lon> <lat,lon> [resolution_deg]"),
    };
    let resolution: f64 = match args.next() {
        Some(raw) => raw.parse().context("invalid resolution")?,
        None => DEFAULT_RESOLUTION_DEG,
    };

    // ── Load graph ────────────────────────────────────────────────────────
    println!("loading {} ..", path.display());
    let started = Instant::now();
    let graph = load_fmi(&path).with_context(|| format!("loading {}", path.display()))?;
    println!(
        "loaded {} nodes / {} edges in {:.2?}",
        graph.node_count(),
        graph.edge_count(),
        started.elapsed()
    );

    // ── Build grid ────────────────────────────────────────────────────────
    let started = Instant::now();
    let grid = WorldGrid::build(&graph, resolution);
    println!(
        "grid: {} cells at {resolution}° built in {:.2?}",
        grid.cell_count(),
        started.elapsed()
    );

    // ── Snap endpoints ────────────────────────────────────────────────────
    let Some(start) = grid.closest_node(&graph, from) else {
        bail!("graph has no nodes to snap to");
    };
    let Some(target) = grid.closest_node(&graph, to) else {
        bail!("graph has no nodes to snap to");
    };
    println!("snapped {from} -> {start} at {}", graph.location(start)?);
    println!("snapped {to} -> {target} at {}", graph.location(target)?);

    // ── Route ─────────────────────────────────────────────────────────────
    let started = Instant::now();
    let result = DijkstraPathfinder.calculate_path(&graph, start, target)?;
    let elapsed = started.elapsed();

    match result {
        Some(path) => println!(
            "path: {} hops, distance {} ({:.2?})",
            path.hop_count(),
            path.distance,
            elapsed
        ),
        None => println!("no path from {start} to {target} ({elapsed:.2?})"),
    }
    Ok(())
}

fn parse_location(raw: &str) -> Result<Location> {
    let (lat, lon) = raw
        .split_once(',')
        .with_context(|| format!("expected lat,lon — got {raw:?}"))?;
    Ok(Location::new(
        lat.trim().parse().with_context(|| format!("invalid latitude {lat:?}"))?,
        lon.trim().parse().with_context(|| format!("invalid longitude {lon:?}"))?,
    ))
}
