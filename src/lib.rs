//! Plumbline - artifact-labeled dependency graphs for data pipelines (v0.1)
//!
//! Steps declare the artifacts they consume and produce; nothing declares
//! edges. Plumbline infers one producer → consumer edge per shared artifact
//! name and hands the graph to a renderer.
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOMAIN MODEL                          │
//! │  ast/       StepDescriptor, StepSpec, Pipeline (YAML)        │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      APPLICATION LAYER                       │
//! │  registry/  NodeRegistry: descriptors → Step records         │
//! │  dag/       Edge inference + ArtifactGraph                   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        OUTPUT LAYER                          │
//! │  render/    RenderConfig, DOT / Mermaid / JSON export        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use plumbline::{build_graph, RegistryOptions, StepSpec};
//!
//! let steps = vec![
//!     StepSpec::new("load").outputs(["raw"]),
//!     StepSpec::new("clean").inputs(["raw"]).outputs(["clean"]),
//!     StepSpec::new("report").inputs(["clean"]),
//! ];
//! let graph = build_graph(&steps, &RegistryOptions::default()).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.has_path("load", "report"));
//! ```

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL - caller-supplied step descriptors
// ═══════════════════════════════════════════════════════════════
pub mod ast;

// ═══════════════════════════════════════════════════════════════
// APPLICATION LAYER - normalization and inference
// ═══════════════════════════════════════════════════════════════
pub mod dag;
pub mod registry;

// ═══════════════════════════════════════════════════════════════
// OUTPUT LAYER - rendering hand-off
// ═══════════════════════════════════════════════════════════════
pub mod render;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - Error handling, configuration
// ═══════════════════════════════════════════════════════════════
pub mod config;
pub mod error;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

// Error types
pub use error::{FixSuggestion, PlumbError, Result};

// Config types
pub use config::PlumbConfig;

// AST types (Domain Model)
pub use ast::{NameList, Pipeline, StepAux, StepDescriptor, StepSpec};

// Registry types
pub use registry::{NodeRegistry, RegistryOptions, Step};

// DAG types
pub use dag::{
    build_graph, infer, infer_edges, ArtifactGraph, Edge, Inference, UnmatchedArtifact,
    UnmatchedKind,
};

// Render types
pub use render::{to_dot, to_json, to_mermaid, GraphExport, Layout, RenderConfig};
