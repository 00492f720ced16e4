//! Mermaid flowchart export
//!
//! Mermaid has no circular layout and no canvas size: circular maps to a
//! left-to-right flowchart, and `size` is ignored.

use std::fmt::Write;

use crate::dag::ArtifactGraph;
use crate::error::Result;

use super::options::{Layout, RenderConfig};

/// Render the graph as a Mermaid flowchart.
///
/// Node ids are positional (`n0`, `n1`, ...) so arbitrary step identities
/// survive as quoted labels.
pub fn to_mermaid(graph: &ArtifactGraph, config: &RenderConfig) -> Result<String> {
    config.validate()?;

    let direction = match config.layout {
        Layout::Circular => "LR",
        Layout::Hierarchical => "TD",
    };

    let mut out = format!("flowchart {}\n", direction);
    for (i, step) in graph.nodes().iter().enumerate() {
        let _ = writeln!(out, "    n{}[\"{}\"]", i, escape(step.identity()));
    }

    for edge in graph.edges() {
        // Every edge endpoint is a registered node
        let (Some(from), Some(to)) = (graph.position(&edge.from), graph.position(&edge.to)) else {
            continue;
        };
        if config.show_edge_labels {
            let _ = writeln!(out, "    n{} -->|\"{}\"| n{}", from, escape(&edge.label), to);
        } else {
            let _ = writeln!(out, "    n{} --> n{}", from, to);
        }
    }

    Ok(out)
}

/// Mermaid entity-escapes quotes inside quoted labels
fn escape(s: &str) -> String {
    s.replace('"', "#quot;")
}
