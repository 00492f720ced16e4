//! Step descriptors - one processing unit as declared by the caller
//!
//! `StepDescriptor` is the seam to whatever framework owns the pipeline.
//! `StepSpec` is the built-in implementation, deserializable from YAML
//! and constructible in code.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Anything that can describe a pipeline step.
///
/// Order of `inputs`/`outputs` is kept for display; matching ignores it.
pub trait StepDescriptor {
    /// Stable identity, `None` when the descriptor carries none
    fn identity(&self) -> Option<&str>;

    /// Declared input artifact names, in declaration order
    fn inputs(&self) -> Vec<&str>;

    /// Declared output artifact names, in declaration order
    fn outputs(&self) -> Vec<&str>;

    /// Optional display payload, never used for matching
    fn aux(&self) -> Option<StepAux> {
        None
    }
}

impl<T: StepDescriptor + ?Sized> StepDescriptor for &T {
    fn identity(&self) -> Option<&str> {
        (**self).identity()
    }

    fn inputs(&self) -> Vec<&str> {
        (**self).inputs()
    }

    fn outputs(&self) -> Vec<&str> {
        (**self).outputs()
    }

    fn aux(&self) -> Option<StepAux> {
        (**self).aux()
    }
}

/// Auxiliary, display-only metadata attached to a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepAux {
    /// File the step's computation is defined in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Utf8PathBuf>,
    /// Qualified name of the underlying callable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callable: Option<String>,
    /// Source text of the computation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StepAux {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.callable.is_none() && self.source.is_none()
    }
}

/// Handles string OR array for inputs/outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Single(String),
    Multiple(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Multiple(Vec::new())
    }
}

impl NameList {
    pub fn as_vec(&self) -> Vec<&str> {
        match self {
            NameList::Single(s) => vec![s.as_str()],
            NameList::Multiple(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameList::Multiple(iter.into_iter().map(Into::into).collect())
    }
}

/// A step as written in a pipeline file
///
/// # Example
///
/// ```yaml
/// - id: clean
///   inputs: [raw]
///   outputs: clean
///   func: pipelines.clean.run
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    /// Missing ids are reported by the registry, not by the parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub inputs: NameList,
    #[serde(default)]
    pub outputs: NameList,
    #[serde(default, rename = "func", skip_serializing_if = "Option::is_none")]
    pub callable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Utf8PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StepSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn inputs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = names.into_iter().collect();
        self
    }

    pub fn outputs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = names.into_iter().collect();
        self
    }

    pub fn callable(mut self, callable: impl Into<String>) -> Self {
        self.callable = Some(callable.into());
        self
    }

    pub fn file(mut self, file: impl Into<Utf8PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl StepDescriptor for StepSpec {
    fn identity(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn inputs(&self) -> Vec<&str> {
        self.inputs.as_vec()
    }

    fn outputs(&self) -> Vec<&str> {
        self.outputs.as_vec()
    }

    fn aux(&self) -> Option<StepAux> {
        let aux = StepAux {
            file: self.file.clone(),
            callable: self.callable.clone(),
            source: self.source.clone(),
        };
        (!aux.is_empty()).then_some(aux)
    }
}
