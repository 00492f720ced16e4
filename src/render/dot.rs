//! Graphviz DOT export

use std::fmt::Write;

use crate::dag::ArtifactGraph;
use crate::error::Result;

use super::options::{Layout, RenderConfig};

/// Graphviz assumes 96 pixels per inch for `size`
const DPI: f64 = 96.0;

/// Render the graph as a Graphviz digraph.
///
/// Nodes are emitted in pipeline order, edges in `(from, to, label)` order,
/// so the output is stable across runs.
pub fn to_dot(graph: &ArtifactGraph, config: &RenderConfig) -> Result<String> {
    config.validate()?;

    let engine = match config.layout {
        Layout::Circular => "circo",
        Layout::Hierarchical => "dot",
    };
    let (width, height) = config.size;

    let mut out = String::from("digraph \"pipeline\" {\n");
    // Writing to a String cannot fail
    let _ = writeln!(out, "    layout={};", engine);
    let _ = writeln!(
        out,
        "    size=\"{:.2},{:.2}\";",
        f64::from(width) / DPI,
        f64::from(height) / DPI
    );
    out.push_str("    node [shape=box];\n");

    for step in graph.nodes() {
        let _ = writeln!(out, "    \"{}\";", escape(step.identity()));
    }

    for edge in graph.edges() {
        if config.show_edge_labels {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.label)
            );
        } else {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\";",
                escape(&edge.from),
                escape(&edge.to)
            );
        }
    }

    out.push_str("}\n");
    Ok(out)
}

/// Escape a DOT quoted string
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
