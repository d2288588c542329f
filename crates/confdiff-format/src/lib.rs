//! Output encodings for diff results.
//!
//! One result, four renderings: structural JSON for tooling, YAML with
//! entries grouped by operation, a one-line summary for scripts, and an
//! annotated human-readable report that pulls in key documentation and
//! flags changes with known operational impact.
//!
//! # Key Types
//!
//! - [`format_json`] / [`format_yaml`] — Machine encodings
//! - [`format_summary`] — One-line change count
//! - [`format_detailed`] — Annotated report (alias [`format_contextual`])
//! - [`FormatError`] — Encoding failures

pub mod encode;
pub mod error;
pub mod report;

pub use encode::{format_json, format_yaml};
pub use error::{FormatError, FormatResult};
pub use report::{format_contextual, format_detailed, format_summary};
