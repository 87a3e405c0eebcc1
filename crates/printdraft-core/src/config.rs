//! Editor configuration.

use crate::document::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DesignDocument};
use crate::error::EditorResult;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Editor configuration. Every field has a default, so partial JSON works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum history entries, including the initial one.
    pub history_capacity: usize,
    /// Shift applied to pasted and duplicated elements.
    pub paste_offset: [f64; 2],
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            paste_offset: [20.0, 20.0],
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. A zero history capacity becomes one.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.history_capacity = config.history_capacity.max(1);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EditorResult<()> {
        DesignDocument::with_canvas_size(self.canvas_width, self.canvas_height).map(|_| ())
    }

    pub fn paste_offset(&self) -> Vec2 {
        Vec2::new(self.paste_offset[0], self.paste_offset[1])
    }

    /// An empty document sized to this config's artboard.
    pub fn initial_document(&self) -> EditorResult<DesignDocument> {
        DesignDocument::with_canvas_size(self.canvas_width, self.canvas_height)
    }
}
