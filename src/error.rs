// The #[error] attribute from thiserror uses struct fields via string interpolation,
// but Rust's unused_assignments lint doesn't recognize this.
#![allow(unused_assignments)]

//! Plumbline Error Types with Error Codes
//!
//! Error code ranges:
//! - PLUMB-000-009: Pipeline definition errors
//! - PLUMB-010-019: Node registry errors
//! - PLUMB-020-029: Configuration errors
//! - PLUMB-030-039: Export errors
//! - PLUMB-090-099: IO/serialization errors
//!
//! Edge inference itself never fails: unmatched artifacts are reported,
//! not raised.

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlumbError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for terminal error display.
#[derive(Error, Debug, Diagnostic)]
#[diagnostic(url(docsrs))]
pub enum PlumbError {
    // ═══════════════════════════════════════════
    // PIPELINE ERRORS (000-009)
    // ═══════════════════════════════════════════
    #[error("[PLUMB-001] Failed to parse pipeline: {details}")]
    #[diagnostic(
        code(plumbline::parse_error),
        help("Check YAML syntax: artifact names must be strings")
    )]
    ParseError { details: String },

    #[error("[PLUMB-002] Invalid schema version: expected '{expected}', got '{actual}'")]
    #[diagnostic(
        code(plumbline::invalid_schema_version),
        help("Use 'plumbline/pipeline@0.1' as the schema version")
    )]
    InvalidSchemaVersion { expected: String, actual: String },

    #[error("[PLUMB-003] Pipeline file not found: {path}")]
    #[diagnostic(code(plumbline::pipeline_not_found), help("Check the file path exists"))]
    PipelineNotFound { path: String },

    // ═══════════════════════════════════════════
    // REGISTRY ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[PLUMB-010] Invalid step descriptor at position {index}: {reason}")]
    #[diagnostic(
        code(plumbline::invalid_step_descriptor),
        help("Every step needs a non-empty identity")
    )]
    InvalidStepDescriptor { index: usize, reason: String },

    #[error(
        "[PLUMB-011] Duplicate step identity '{id}' (positions {first} and {second})"
    )]
    #[diagnostic(
        code(plumbline::duplicate_node_identity),
        help("Give each step a unique id; identities key the graph nodes")
    )]
    DuplicateNodeIdentity {
        id: String,
        first: usize,
        second: usize,
    },

    // ═══════════════════════════════════════════
    // CONFIG ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[PLUMB-020] Configuration error: {reason}")]
    #[diagnostic(
        code(plumbline::config_error),
        help("Check plumbline.toml for syntax errors")
    )]
    ConfigError { reason: String },

    // ═══════════════════════════════════════════
    // EXPORT ERRORS (030-039)
    // ═══════════════════════════════════════════
    #[error("[PLUMB-030] Invalid render size {width}x{height}: both dimensions must be positive")]
    #[diagnostic(code(plumbline::invalid_render_size))]
    InvalidRenderSize { width: u32, height: u32 },

    // ═══════════════════════════════════════════
    // IO / SERIALIZATION ERRORS (090-099)
    // ═══════════════════════════════════════════
    #[error("[PLUMB-093] IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("[PLUMB-094] JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PlumbError {
    /// Get the error code (e.g., "PLUMB-001")
    pub fn code(&self) -> &'static str {
        match self {
            // Pipeline errors
            Self::ParseError { .. } => "PLUMB-001",
            Self::InvalidSchemaVersion { .. } => "PLUMB-002",
            Self::PipelineNotFound { .. } => "PLUMB-003",
            // Registry errors
            Self::InvalidStepDescriptor { .. } => "PLUMB-010",
            Self::DuplicateNodeIdentity { .. } => "PLUMB-011",
            // Config errors
            Self::ConfigError { .. } => "PLUMB-020",
            // Export errors
            Self::InvalidRenderSize { .. } => "PLUMB-030",
            // IO errors
            Self::IoError(_) => "PLUMB-093",
            Self::JsonError(_) => "PLUMB-094",
        }
    }
}

impl FixSuggestion for PlumbError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PlumbError::ParseError { .. } => {
                Some("Check YAML syntax: steps need id, inputs and outputs as string lists")
            }
            PlumbError::InvalidSchemaVersion { .. } => {
                Some("Use 'plumbline/pipeline@0.1' as the schema version")
            }
            PlumbError::PipelineNotFound { .. } => Some("Check the file path exists"),
            PlumbError::InvalidStepDescriptor { .. } => {
                Some("Add an 'id' to the step; it must not be empty")
            }
            PlumbError::DuplicateNodeIdentity { .. } => {
                Some("Rename one of the steps so every id is unique")
            }
            PlumbError::ConfigError { .. } => Some("Check plumbline.toml for syntax errors"),
            PlumbError::InvalidRenderSize { .. } => {
                Some("Set render.size to two positive integers, e.g. [1200, 800]")
            }
            PlumbError::IoError(_) => Some("Check file permissions and paths"),
            PlumbError::JsonError(_) => None,
        }
    }
}
