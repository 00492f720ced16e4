//! Edge and unmatched-artifact records

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Producer → consumer relationship justified by one artifact
///
/// Field order gives the `(from, to, label)` sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub label: Arc<str>,
}

impl Edge {
    pub fn new(
        from: impl Into<Arc<str>>,
        to: impl Into<Arc<str>>,
        label: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }

    /// A step that both produces and consumes the label
    #[inline]
    pub fn is_self_edge(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --[{}]--> {}", self.from, self.label, self.to)
    }
}

/// Why an artifact contributed no edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedKind {
    /// Some step outputs it, no step inputs it
    ProducedOnly,
    /// Some step inputs it, no step outputs it (e.g. external input)
    ConsumedOnly,
}

/// Artifact name with an empty producer or consumer set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnmatchedArtifact {
    pub name: Arc<str>,
    pub kind: UnmatchedKind,
}
