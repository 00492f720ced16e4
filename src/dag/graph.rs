//! ArtifactGraph - nodes plus inferred, labeled edges
//!
//! Performance optimizations:
//! - Arc<str> shared between steps, edges and adjacency lists
//! - FxHashMap for faster hashing (non-crypto)
//! - SmallVec for stack-allocated neighbor lists (0-4 items)
//!
//! The graph is immutable after construction. It is a plain value: no
//! interior mutability, no global state, `Send + Sync`.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::ast::StepDescriptor;
use crate::error::Result;
use crate::registry::{NodeRegistry, RegistryOptions, Step};

use super::edge::{Edge, UnmatchedArtifact};
use super::infer::infer;

/// Stack-allocated neighbors: most steps have 0-4
pub type DepVec = SmallVec<[Arc<str>; 4]>;

/// Directed multigraph of steps and artifact-labeled edges
///
/// May be disconnected, may contain parallel edges (distinct labels) and
/// self-edges, and is not guaranteed to be acyclic.
#[derive(Debug, Clone, Default)]
pub struct ArtifactGraph {
    /// Steps in pipeline order
    steps: Vec<Step>,
    /// identity -> position in `steps`
    index: FxHashMap<Arc<str>, usize>,
    /// Sorted by `(from, to, label)`
    edges: Vec<Edge>,
    /// identity -> distinct successor identities (edge order)
    successors: FxHashMap<Arc<str>, DepVec>,
    /// identity -> distinct predecessor identities (edge order)
    predecessors: FxHashMap<Arc<str>, DepVec>,
    unmatched: Vec<UnmatchedArtifact>,
}

/// Build the graph for one pipeline snapshot: registry, then inference.
#[instrument(skip_all)]
pub fn build_graph<I, D>(descriptors: I, options: &RegistryOptions) -> Result<ArtifactGraph>
where
    I: IntoIterator<Item = D>,
    D: StepDescriptor,
{
    let registry = NodeRegistry::build(descriptors, options)?;
    let graph = ArtifactGraph::from_registry(registry);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built artifact graph"
    );
    Ok(graph)
}

impl ArtifactGraph {
    /// Run edge inference over an already-built registry
    pub fn from_registry(registry: NodeRegistry) -> Self {
        let (steps, index) = registry.into_parts();
        let inference = infer(&steps);

        let capacity = steps.len();
        let mut successors: FxHashMap<Arc<str>, DepVec> =
            FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let mut predecessors: FxHashMap<Arc<str>, DepVec> =
            FxHashMap::with_capacity_and_hasher(capacity, Default::default());

        for step in &steps {
            successors.insert(Arc::clone(step.identity()), DepVec::new());
            predecessors.insert(Arc::clone(step.identity()), DepVec::new());
        }

        // Parallel edges collapse to one neighbor entry
        for edge in &inference.edges {
            let succ = successors.entry(Arc::clone(&edge.from)).or_default();
            if !succ.contains(&edge.to) {
                succ.push(Arc::clone(&edge.to));
            }
            let pred = predecessors.entry(Arc::clone(&edge.to)).or_default();
            if !pred.contains(&edge.from) {
                pred.push(Arc::clone(&edge.from));
            }
        }

        Self {
            steps,
            index,
            edges: inference.edges,
            successors,
            predecessors,
            unmatched: inference.unmatched,
        }
    }

    /// Steps in pipeline order
    #[inline]
    pub fn nodes(&self) -> &[Step] {
        &self.steps
    }

    pub fn node(&self, identity: &str) -> Option<&Step> {
        self.index.get(identity).map(|&i| &self.steps[i])
    }

    /// Position of a step in pipeline order
    pub fn position(&self, identity: &str) -> Option<usize> {
        self.index.get(identity).copied()
    }

    #[inline]
    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    pub fn node_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All edges, sorted by `(from, to, label)`
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges justified by one artifact name
    pub fn edges_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.label.as_ref() == label)
    }

    /// Parallel edges from one step to another, one per shared artifact
    pub fn edges_between<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from.as_ref() == from && e.to.as_ref() == to)
    }

    /// Artifacts that produced no edges
    pub fn unmatched(&self) -> &[UnmatchedArtifact] {
        &self.unmatched
    }

    /// Get successors of a step
    #[inline]
    pub fn successors(&self, identity: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.successors
            .get(identity)
            .map_or(EMPTY, SmallVec::as_slice)
    }

    /// Get predecessors of a step
    #[inline]
    pub fn predecessors(&self, identity: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.predecessors
            .get(identity)
            .map_or(EMPTY, SmallVec::as_slice)
    }

    /// Steps with no incoming edges, in pipeline order
    pub fn sources(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.steps
            .iter()
            .map(Step::identity)
            .filter(|id| self.predecessors(id).is_empty())
    }

    /// Steps with no outgoing edges, in pipeline order
    pub fn sinks(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.steps
            .iter()
            .map(Step::identity)
            .filter(|id| self.successors(id).is_empty())
    }

    /// Check if there's a path from `from` to `to` (BFS).
    ///
    /// A step always reaches itself. Unknown identities reach nothing.
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        if from == to {
            return true;
        }

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<&str> = VecDeque::new();

        queue.push_back(from);
        visited.insert(from);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.successors(current) {
                if neighbor.as_ref() == to {
                    return true;
                }
                if visited.insert(neighbor.as_ref()) {
                    queue.push_back(neighbor.as_ref());
                }
            }
        }

        false
    }
}
