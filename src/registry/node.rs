//! Step - normalized, immutable node record
//!
//! Performance notes:
//! - Arc<str> for zero-cost cloning of identities and artifact names
//! - SmallVec for stack-allocated name lists (most steps have ≤4)

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use crate::ast::StepAux;

/// Stack-allocated names: most steps declare 0-4 inputs or outputs
pub type NameVec = SmallVec<[Arc<str>; 4]>;

/// One processing unit after normalization
///
/// `inputs` and `outputs` keep first-occurrence order and hold no
/// duplicates. `aux` is display payload only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(rename = "id")]
    identity: Arc<str>,
    inputs: NameVec,
    outputs: NameVec,
    #[serde(skip_serializing_if = "Option::is_none")]
    aux: Option<StepAux>,
}

impl Step {
    pub(crate) fn new<'a>(
        identity: &str,
        inputs: impl IntoIterator<Item = &'a str>,
        outputs: impl IntoIterator<Item = &'a str>,
        aux: Option<StepAux>,
    ) -> Self {
        Self {
            identity: Arc::from(identity),
            inputs: dedup_names(inputs),
            outputs: dedup_names(outputs),
            aux,
        }
    }

    #[inline]
    pub fn identity(&self) -> &Arc<str> {
        &self.identity
    }

    #[inline]
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    #[inline]
    pub fn outputs(&self) -> &[Arc<str>] {
        &self.outputs
    }

    pub fn aux(&self) -> Option<&StepAux> {
        self.aux.as_ref()
    }

    /// Whether this step lists `name` among its inputs
    pub fn consumes(&self, name: &str) -> bool {
        self.inputs.iter().any(|n| n.as_ref() == name)
    }

    /// Whether this step lists `name` among its outputs
    pub fn produces(&self, name: &str) -> bool {
        self.outputs.iter().any(|n| n.as_ref() == name)
    }
}

/// Drop repeated names, keeping the first occurrence
fn dedup_names<'a>(names: impl IntoIterator<Item = &'a str>) -> NameVec {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(Arc::from)
        .collect()
}
