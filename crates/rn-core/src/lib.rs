//! `rn-core` — foundational types for the `rn` road-network engine.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no
//! `rn-*` dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                  |
//! |---------|-------------------------------------------|
//! | [`ids`] | `NodeId`                                  |
//! | [`geo`] | `Location`, grid clamping, degree metric  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Location;
pub use ids::NodeId;
