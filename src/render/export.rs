//! Serializable graph snapshot for external renderers

use serde::Serialize;

use crate::dag::{ArtifactGraph, Edge, UnmatchedArtifact};
use crate::error::Result;
use crate::registry::Step;

/// Borrowed view of a graph, shaped for JSON consumers
///
/// ```json
/// {
///   "nodes": [{"id": "a", "inputs": [], "outputs": ["x"]}],
///   "edges": [{"from": "a", "to": "b", "label": "x"}],
///   "unmatched": []
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct GraphExport<'a> {
    pub nodes: &'a [Step],
    pub edges: &'a [Edge],
    pub unmatched: &'a [UnmatchedArtifact],
}

impl<'a> From<&'a ArtifactGraph> for GraphExport<'a> {
    fn from(graph: &'a ArtifactGraph) -> Self {
        Self {
            nodes: graph.nodes(),
            edges: graph.edges(),
            unmatched: graph.unmatched(),
        }
    }
}

/// Pretty-printed JSON snapshot of the graph
pub fn to_json(graph: &ArtifactGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GraphExport::from(graph))?)
}

/// JSON snapshot as a `serde_json::Value`
pub fn to_json_value(graph: &ArtifactGraph) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(GraphExport::from(graph))?)
}
