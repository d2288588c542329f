//! Recursive structural diff over configuration trees.
//!
//! The engine walks two [`ConfigValue`](confdiff_types::ConfigValue)
//! trees in lockstep and reports every point where they disagree:
//! members present on one side only, leaves whose values differ, and
//! containers whose kinds do not line up. Comparison is read-only and
//! deterministic; object members are visited in sorted key order, so
//! two runs over the same inputs produce identical results.
//!
//! # Key Types
//!
//! - [`DiffEngine`] — Configured comparator, one instance per option set
//! - [`DiffOptions`] — Depth limits, ignore rules, separator choice
//! - [`DiffResult`] — Summary, entries, and provenance for one run
//! - [`DiffEntry`] — A single added/removed/changed/unchanged record
//! - [`DiffPath`] — Structural location of an entry within the tree

pub mod engine;
pub mod entry;
pub mod ignore;
pub mod options;
pub mod path;

pub use engine::DiffEngine;
pub use entry::{CompareSources, DiffEntry, DiffMetadata, DiffOp, DiffResult, DiffSummary};
pub use options::DiffOptions;
pub use path::{DiffPath, PathSegment};
