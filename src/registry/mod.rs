//! Node Registry - descriptor normalization (v0.1)
//!
//! Turns an ordered sequence of `StepDescriptor`s into `Step` records:
//! - identity must be present and non-empty (PLUMB-010)
//! - identity must be unique across the pipeline (PLUMB-011)
//! - input/output names are deduplicated, never validated
//! - auxiliary payload is copied only when requested
//!
//! Order is preserved from the input sequence.

mod node;

pub use node::{NameVec, Step};

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::ast::StepDescriptor;
use crate::error::{PlumbError, Result};

/// Registry construction options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryOptions {
    /// Copy each descriptor's auxiliary payload onto its step
    #[serde(default)]
    pub include_aux: bool,
}

impl RegistryOptions {
    pub fn with_aux() -> Self {
        Self { include_aux: true }
    }
}

/// Normalized, ordered node set
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    steps: Vec<Step>,
    /// identity -> position in `steps`
    index: FxHashMap<Arc<str>, usize>,
}

impl NodeRegistry {
    /// Build the registry from descriptors in pipeline order.
    ///
    /// Fails on the first invalid descriptor; no partial registry is returned.
    #[instrument(name = "node_registry", skip_all, fields(include_aux = options.include_aux))]
    pub fn build<I, D>(descriptors: I, options: &RegistryOptions) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: StepDescriptor,
    {
        let descriptors = descriptors.into_iter();
        let (capacity, _) = descriptors.size_hint();
        let mut steps: Vec<Step> = Vec::with_capacity(capacity);
        let mut index: FxHashMap<Arc<str>, usize> =
            FxHashMap::with_capacity_and_hasher(capacity, Default::default());

        for (position, descriptor) in descriptors.enumerate() {
            let identity = match descriptor.identity() {
                Some(id) if !id.is_empty() => id,
                Some(_) => {
                    return Err(PlumbError::InvalidStepDescriptor {
                        index: position,
                        reason: "identity is empty".to_string(),
                    })
                }
                None => {
                    return Err(PlumbError::InvalidStepDescriptor {
                        index: position,
                        reason: "identity is missing".to_string(),
                    })
                }
            };

            if let Some(&first) = index.get(identity) {
                return Err(PlumbError::DuplicateNodeIdentity {
                    id: identity.to_string(),
                    first,
                    second: position,
                });
            }

            let aux = if options.include_aux {
                descriptor.aux()
            } else {
                None
            };
            let step = Step::new(identity, descriptor.inputs(), descriptor.outputs(), aux);

            index.insert(Arc::clone(step.identity()), position);
            steps.push(step);
        }

        debug!(steps = steps.len(), "Registered pipeline steps");
        Ok(Self { steps, index })
    }

    /// Steps in pipeline order
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, identity: &str) -> Option<&Step> {
        self.position(identity).map(|i| &self.steps[i])
    }

    pub fn position(&self, identity: &str) -> Option<usize> {
        self.index.get(identity).copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Step>, FxHashMap<Arc<str>, usize>) {
        (self.steps, self.index)
    }
}
