//! Foundation types for confdiff.
//!
//! This crate provides the universal configuration value model shared by
//! every other confdiff crate: a closed set of value kinds covering the
//! JSON/YAML/TOML data model plus the "exotic" kinds found in bundler
//! configs (functions, regular expressions, dates).
//!
//! # Key Types
//!
//! - [`ConfigValue`] — Tagged configuration tree value (null, undefined,
//!   scalars, arrays, objects, functions, regexes, dates)
//! - [`ValueKind`] — The type tag reported for every diff entry
//!
//! Conversions from [`serde_json::Value`], [`serde_yaml::Value`], and
//! [`toml::Value`] live in [`convert`]; display snapshots (the printable
//! renderings carried by diff entries) live in [`display`].

pub mod convert;
pub mod display;
pub mod kind;
pub mod value;

pub use kind::ValueKind;
pub use value::ConfigValue;
