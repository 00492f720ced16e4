//! Render Module - hand-off to the rendering layer
//!
//! Visual layout is done by external tools. This module only turns an
//! `ArtifactGraph` plus a `RenderConfig` into formats those tools read:
//! - `dot`: Graphviz (layout engine, canvas size, edge labels)
//! - `mermaid`: Mermaid flowchart
//! - `export`: JSON snapshot (nodes keyed by id, edges carrying `label`)

mod dot;
mod export;
mod mermaid;
mod options;

pub use dot::to_dot;
pub use export::{to_json, to_json_value, GraphExport};
pub use mermaid::to_mermaid;
pub use options::{Layout, RenderConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
