//! DAG Module - inferred dependency graph (v0.1)
//!
//! Contains edge inference and the resulting graph:
//! - `edge`: Edge, UnmatchedArtifact
//! - `infer`: producer × consumer matching by artifact name
//! - `graph`: ArtifactGraph built from a NodeRegistry
//!
//! Despite the module name, acyclicity is not checked: the graph reflects
//! whatever the pipeline declares. ArtifactGraph is immutable after
//! construction and recomputed from scratch for every snapshot.

mod edge;
mod graph;
mod infer;

// Re-export public types
pub use edge::{Edge, UnmatchedArtifact, UnmatchedKind};
pub use graph::{build_graph, ArtifactGraph, DepVec};
pub use infer::{infer, infer_edges, Inference};
