//! Pipeline Types - ordered step list parsed from YAML (v0.1)
//!
//! A pipeline only lists steps. There is no `flows:` section: edges are
//! inferred from artifact names by the `dag` module.

use std::fs;
use std::io::ErrorKind;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{PlumbError, Result};

use super::step::StepSpec;

/// Expected schema version for v0.1 pipelines
pub const SCHEMA_V01: &str = "plumbline/pipeline@0.1";

/// Pipeline definition
///
/// # Example
///
/// ```yaml
/// schema: plumbline/pipeline@0.1
/// name: ingest
/// steps:
///   - id: load_raw
///     outputs: [raw]
///   - id: clean
///     inputs: [raw]
///     outputs: [clean]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Missing schemas fail version validation, not parsing
    #[serde(default)]
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

impl Pipeline {
    /// Build an in-memory pipeline with the current schema version
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self {
            schema: SCHEMA_V01.to_string(),
            name: None,
            steps,
        }
    }

    /// Parse and schema-check a pipeline from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let pipeline: Pipeline =
            serde_yaml::from_str(yaml).map_err(|e| PlumbError::ParseError {
                details: e.to_string(),
            })?;
        pipeline.validate_schema()?;
        Ok(pipeline)
    }

    /// Read a pipeline file from disk
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PlumbError::PipelineNotFound {
                path: path.to_string(),
            },
            _ => PlumbError::IoError(e),
        })?;
        tracing::debug!(path = %path, bytes = content.len(), "Read pipeline file");
        Self::from_yaml(&content)
    }

    /// Validate the pipeline schema version
    pub fn validate_schema(&self) -> Result<()> {
        if self.schema != SCHEMA_V01 {
            return Err(PlumbError::InvalidSchemaVersion {
                expected: SCHEMA_V01.to_string(),
                actual: self.schema.clone(),
            });
        }
        Ok(())
    }

    /// Steps in declaration order
    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }
}
