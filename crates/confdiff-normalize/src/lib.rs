//! Path normalization for confdiff.
//!
//! Configuration trees generated on different machines embed absolute
//! filesystem paths that differ per checkout (`/home/alice/app/public`
//! vs `/home/bob/src/app/public`). Before diffing, this crate rewrites
//! such strings into base-relative, forward-slash form (`./public`) so
//! that two configs built anywhere compare cleanly.
//!
//! # Key Types
//!
//! - [`NormalizedConfig`] — A tree paired with its normalized form and base
//! - [`normalize_config`] — Rewrite every path-like string leaf
//! - [`detect_base_path`] — Infer a base from the absolute paths in a tree
//!
//! All path arithmetic is lexical (string-level) and OS-independent:
//! Windows-style values normalize identically on every host, and no
//! ambient working directory is ever consulted — the base path is always
//! an explicit parameter.

pub mod normalizer;
pub mod paths;

pub use normalizer::{detect_base_path, normalize_config, NormalizedConfig};
