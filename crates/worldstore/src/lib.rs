//! Entity snapshot types for the world-building data store.
//!
//! These are the plain records the remote query API returns per world:
//! star systems (with their stellar components) and planets. They are
//! read-only snapshots, fetched once per visualization session and never
//! mutated by the client. All layout computation over them lives in the
//! `galaxy-layout` crate.

pub mod planet;
pub mod system;

#[cfg(test)]
mod system_test;

// Re-export record types
pub use planet::Planet;
pub use system::{GalacticPosition, Star, StarSystem, SystemKind};
