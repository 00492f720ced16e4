//! AST Module - pipeline definitions as handed over by the caller
//!
//! Contains the input-side types:
//! - `step`: the `StepDescriptor` seam, `StepSpec`, `NameList`, `StepAux`
//! - `pipeline`: `Pipeline`, the YAML form of an ordered step list
//!
//! These types represent the "what" - declared steps and artifact names.
//! Edges are never declared here; see the `dag` module.

mod pipeline;
mod step;

// Re-export all public types
pub use pipeline::{Pipeline, SCHEMA_V01};
pub use step::{NameList, StepAux, StepDescriptor, StepSpec};
