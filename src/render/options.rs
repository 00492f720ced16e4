//! Render configuration handed to the rendering collaborator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlumbError, Result};

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 800;

/// Node placement strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Nodes on a circle
    Circular,
    /// Layered top-down placement (any non-circular layout)
    #[default]
    #[serde(alias = "other")]
    Hierarchical,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Circular => "circular",
            Layout::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = PlumbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(Layout::Circular),
            "hierarchical" | "other" => Ok(Layout::Hierarchical),
            other => Err(PlumbError::ConfigError {
                reason: format!("unknown layout '{}' (expected circular or hierarchical)", other),
            }),
        }
    }
}

/// Options recognized by the rendering layer
///
/// ```toml
/// [render]
/// layout = "circular"
/// size = [1200, 800]
/// show_edge_labels = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub layout: Layout,
    /// (width, height) in pixels
    pub size: (u32, u32),
    pub show_edge_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            show_edge_labels: true,
        }
    }
}

impl RenderConfig {
    pub fn circular() -> Self {
        Self {
            layout: Layout::Circular,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_edge_labels(mut self, show: bool) -> Self {
        self.show_edge_labels = show;
        self
    }

    /// Reject zero-sized canvases
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(PlumbError::InvalidRenderSize { width, height });
        }
        Ok(())
    }
}
