//! Partial attribute updates.

use super::{DesignElement, ElementKind, FontWeight, PatternVariant, ShapeVariant};
use crate::color::ElementColor;
use serde::{Deserialize, Serialize};

/// A set of attribute changes merged onto an element by `UpdateElement`.
///
/// Unset fields leave the element untouched. Kind-specific fields only apply
/// when the element is of the matching kind; the id and kind never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ElementColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    // Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    // Shape / Pattern / Image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that only moves the element.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_color(mut self, color: ElementColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Check if the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch onto `element`.
    ///
    /// Non-finite numbers are skipped and negative sizes clamp to zero.
    pub fn apply_to(&self, element: &mut DesignElement) {
        let id = element.id().clone();
        let finite = |field: &str, value: Option<f64>| match value {
            Some(v) if !v.is_finite() => {
                log::debug!("Ignoring non-finite {field} for element {id}");
                None
            }
            other => other,
        };

        if let Some(x) = finite("x", self.x) {
            element.x = x;
        }
        if let Some(y) = finite("y", self.y) {
            element.y = y;
        }
        if let Some(width) = finite("width", self.width) {
            element.width = width.max(0.0);
        }
        if let Some(height) = finite("height", self.height) {
            element.height = height.max(0.0);
        }
        if let Some(rotation) = finite("rotation", self.rotation) {
            element.rotation = rotation;
        }
        if let Some(opacity) = finite("opacity", self.opacity) {
            element.opacity = opacity;
        }
        if let Some(color) = self.color {
            element.color = color;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        let new_font_size = finite("font_size", self.font_size);

        let mut ignored = false;
        match &mut element.kind {
            ElementKind::Text {
                content,
                font_family,
                font_size,
                font_weight,
            } => {
                if let Some(value) = &self.content {
                    content.clone_from(value);
                }
                if let Some(value) = &self.font_family {
                    font_family.clone_from(value);
                }
                if let Some(value) = new_font_size {
                    *font_size = value;
                }
                if let Some(value) = self.font_weight {
                    *font_weight = value;
                }
                ignored |= self.shape.is_some() || self.pattern.is_some() || self.src.is_some();
            }
            ElementKind::Shape { shape } => {
                if let Some(value) = self.shape {
                    *shape = value;
                }
                ignored |= self.has_text_fields() || self.pattern.is_some() || self.src.is_some();
            }
            ElementKind::Pattern { pattern } => {
                if let Some(value) = self.pattern {
                    *pattern = value;
                }
                ignored |= self.has_text_fields() || self.shape.is_some() || self.src.is_some();
            }
            ElementKind::Image { src } => {
                if let Some(value) = &self.src {
                    src.clone_from(value);
                }
                ignored |= self.has_text_fields() || self.shape.is_some() || self.pattern.is_some();
            }
        }

        if ignored {
            log::debug!(
                "Ignoring attributes not applicable to {} element {}",
                element.kind.name(),
                element.id()
            );
        }
    }

    fn has_text_fields(&self) -> bool {
        self.content.is_some()
            || self.font_family.is_some()
            || self.font_size.is_some()
            || self.font_weight.is_some()
    }
}
