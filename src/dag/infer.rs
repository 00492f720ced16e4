//! Edge Inference - producer/consumer matching by artifact name
//!
//! For every distinct artifact name across all steps:
//! - producers `P(a)`: steps listing `a` in outputs
//! - consumers `C(a)`: steps listing `a` in inputs
//! - one edge `(p, c, a)` per pair in `P(a) × C(a)`, self-edges included
//! - an empty `P(a)` or `C(a)` yields no edges, only an unmatched entry
//!
//! The name index is built in a single pass over the steps, so the cost is
//! O(S·k + E) for S steps declaring k names each and E emitted edges.
//! Output edges are sorted by `(from, to, label)` and duplicate-free.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::registry::Step;

use super::edge::{Edge, UnmatchedArtifact, UnmatchedKind};

/// Producer and consumer identities for one artifact name
#[derive(Default)]
struct ArtifactLinks<'a> {
    producers: SmallVec<[&'a Arc<str>; 4]>,
    consumers: SmallVec<[&'a Arc<str>; 4]>,
}

/// Result of one inference run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    /// Sorted by `(from, to, label)`, no duplicates
    pub edges: Vec<Edge>,
    /// Sorted by name
    pub unmatched: Vec<UnmatchedArtifact>,
}

/// Infer the full edge set plus the unmatched-artifact report.
///
/// Never fails: empty producer or consumer sets are handled structurally.
#[instrument(name = "infer_edges", skip_all, fields(steps = steps.len()))]
pub fn infer(steps: &[Step]) -> Inference {
    // Universe of artifact names, mapped to who produces/consumes them
    let mut links: FxHashMap<&Arc<str>, ArtifactLinks<'_>> = FxHashMap::default();
    for step in steps {
        for name in step.outputs() {
            links.entry(name).or_default().producers.push(step.identity());
        }
        for name in step.inputs() {
            links.entry(name).or_default().consumers.push(step.identity());
        }
    }

    let mut edges: Vec<Edge> = Vec::new();
    let mut unmatched: Vec<UnmatchedArtifact> = Vec::new();

    for (name, link) in &links {
        let kind = match (link.producers.is_empty(), link.consumers.is_empty()) {
            (false, false) => None,
            (false, true) => Some(UnmatchedKind::ProducedOnly),
            // Names only enter the index through a producer or a consumer
            (true, _) => Some(UnmatchedKind::ConsumedOnly),
        };

        if let Some(kind) = kind {
            debug!(artifact = %name, ?kind, "Artifact has no counterpart, skipping");
            unmatched.push(UnmatchedArtifact {
                name: Arc::clone(name),
                kind,
            });
            continue;
        }

        edges.reserve(link.producers.len() * link.consumers.len());
        for producer in &link.producers {
            for consumer in &link.consumers {
                edges.push(Edge {
                    from: Arc::clone(producer),
                    to: Arc::clone(consumer),
                    label: Arc::clone(name),
                });
            }
        }
    }

    edges.sort_unstable();
    edges.dedup();
    unmatched.sort_unstable();

    debug!(
        artifacts = links.len(),
        edges = edges.len(),
        unmatched = unmatched.len(),
        "Inferred edges"
    );

    Inference { edges, unmatched }
}

/// Infer edges only, dropping the unmatched report
pub fn infer_edges(steps: &[Step]) -> Vec<Edge> {
    infer(steps).edges
}
