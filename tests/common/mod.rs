//! Test fixtures and helpers

#![allow(dead_code)] // Each test binary uses a different subset

use std::path::PathBuf;

use plumbline::{build_graph, ArtifactGraph, RegistryOptions, StepSpec};

/// Install a test-writer subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_test_writer()
        .try_init();
}

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get path to a specific fixture file
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Shorthand step constructor
pub fn step(id: &str, inputs: &[&str], outputs: &[&str]) -> StepSpec {
    StepSpec::new(id)
        .inputs(inputs.iter().copied())
        .outputs(outputs.iter().copied())
}

/// Build a graph with default options, panicking on registry errors
pub fn graph_of(steps: &[StepSpec]) -> ArtifactGraph {
    build_graph(steps, &RegistryOptions::default()).expect("graph should build")
}

/// Edges as owned `(from, to, label)` triples, in graph order
pub fn triples(graph: &ArtifactGraph) -> Vec<(String, String, String)> {
    graph
        .edges()
        .iter()
        .map(|e| (e.from.to_string(), e.to.to_string(), e.label.to_string()))
        .collect()
}

/// Owned triple literal helper
pub fn t(from: &str, to: &str, label: &str) -> (String, String, String) {
    (from.to_string(), to.to_string(), label.to_string())
}

/// Minimal three-step pipeline YAML
pub fn linear_pipeline_yaml() -> &'static str {
    r#"
schema: plumbline/pipeline@0.1
name: linear
steps:
  - id: A
    outputs: [x]
  - id: B
    inputs: [x]
    outputs: [y]
  - id: C
    inputs: [y]
"#
}
