//! Property-Based Testing for Plumbline
//!
//! Uses proptest to check the inference laws over random pipelines:
//! - one node per descriptor
//! - |P(a)| × |C(a)| edges labeled `a` (cross-product law)
//! - zero edges for names with no producer or no consumer
//! - every edge is justified by its endpoints' declarations
//! - rerunning inference yields the same edge set

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use plumbline::{build_graph, infer, ArtifactGraph, NodeRegistry, RegistryOptions, StepSpec};

/// Small alphabet so names collide often
const NAMES: &[&str] = &["a", "b", "c", "d", "e"];

prop_compose! {
    /// Up to 4 names per side, repeats allowed to exercise deduplication
    fn arb_names()(picks in prop::collection::vec(0..NAMES.len(), 0..4)) -> Vec<&'static str> {
        picks.into_iter().map(|i| NAMES[i]).collect()
    }
}

prop_compose! {
    /// Pipelines of 0-8 steps with unique ids
    fn arb_pipeline()(
        sides in prop::collection::vec((arb_names(), arb_names()), 0..8)
    ) -> Vec<StepSpec> {
        sides
            .into_iter()
            .enumerate()
            .map(|(i, (inputs, outputs))| {
                StepSpec::new(format!("s{i}")).inputs(inputs).outputs(outputs)
            })
            .collect()
    }
}

fn build(specs: &[StepSpec]) -> ArtifactGraph {
    build_graph(specs, &RegistryOptions::default()).expect("unique ids always build")
}

/// Distinct step ids declaring `name` on the given side
fn count_declaring(graph: &ArtifactGraph, name: &str, outputs: bool) -> usize {
    graph
        .nodes()
        .iter()
        .filter(|s| if outputs { s.produces(name) } else { s.consumes(name) })
        .count()
}

proptest! {
    /// Property: node count equals descriptor count
    #[test]
    fn test_node_count_preserved(specs in arb_pipeline()) {
        let graph = build(&specs);
        prop_assert_eq!(graph.node_count(), specs.len());
    }

    /// Property: exactly |P(a)| × |C(a)| edges per artifact name
    #[test]
    fn test_cross_product_law(specs in arb_pipeline()) {
        let graph = build(&specs);
        for name in NAMES {
            let producers = count_declaring(&graph, name, true);
            let consumers = count_declaring(&graph, name, false);
            prop_assert_eq!(graph.edges_labeled(name).count(), producers * consumers);
        }
    }

    /// Property: every edge is backed by declarations, and is unique
    #[test]
    fn test_edges_justified_and_unique(specs in arb_pipeline()) {
        let graph = build(&specs);
        let mut seen = FxHashSet::default();
        for edge in graph.edges() {
            let from = graph.node(&edge.from).unwrap();
            let to = graph.node(&edge.to).unwrap();
            prop_assert!(from.produces(&edge.label));
            prop_assert!(to.consumes(&edge.label));
            prop_assert!(seen.insert(edge.clone()), "duplicate edge {}", edge);
        }
    }

    /// Property: edges come out sorted by (from, to, label)
    #[test]
    fn test_edges_sorted(specs in arb_pipeline()) {
        let graph = build(&specs);
        prop_assert!(graph.edges().windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: unmatched names carry no edges, matched names are never reported
    #[test]
    fn test_unmatched_names_have_no_edges(specs in arb_pipeline()) {
        let graph = build(&specs);
        let unmatched: FxHashSet<&str> = graph.unmatched().iter().map(|u| u.name.as_ref()).collect();
        for name in NAMES {
            let linked = graph.edges_labeled(name).count() > 0;
            let declared = count_declaring(&graph, name, true) + count_declaring(&graph, name, false) > 0;
            prop_assert_eq!(unmatched.contains(name), declared && !linked);
        }
    }

    /// Property: inference is idempotent
    #[test]
    fn test_inference_idempotent(specs in arb_pipeline()) {
        let registry = NodeRegistry::build(&specs, &RegistryOptions::default()).unwrap();
        prop_assert_eq!(infer(registry.steps()), infer(registry.steps()));
    }

    /// Property: a step declaring a name on both sides gets a self-edge for it
    #[test]
    fn test_self_edges_present(specs in arb_pipeline()) {
        let graph = build(&specs);
        for step in graph.nodes() {
            for name in step.inputs() {
                if step.produces(name) {
                    let id = step.identity().as_ref();
                    prop_assert!(graph
                        .edges_between(id, id)
                        .any(|e| e.label.as_ref() == name.as_ref()));
                }
            }
        }
    }
}
