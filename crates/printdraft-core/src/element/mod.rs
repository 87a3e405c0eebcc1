//! Design elements placed on the canvas.

mod kind;
mod patch;

pub use kind::{ElementKind, FontWeight, PatternVariant, ShapeVariant};
pub(crate) use kind::{default_font_family, default_font_size};
pub use patch::ElementPatch;

use crate::color::ElementColor;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque element identifier. Assigned once at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Maximum characters of text content shown in a layer name.
const LAYER_NAME_MAX_CHARS: usize = 15;

/// A positioned graphical unit on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    id: ElementId,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees. Not wrapped.
    #[serde(default)]
    pub rotation: f64,
    /// Conventionally within [0, 1]; never clamped here.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub color: ElementColor,
    /// Hidden elements stay in the document but are not hit-testable.
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub kind: ElementKind,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

impl DesignElement {
    /// Default width for new elements.
    pub const DEFAULT_WIDTH: f64 = 100.0;
    /// Default height for new elements.
    pub const DEFAULT_HEIGHT: f64 = 50.0;

    /// Create an element at the origin with default size and style.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            rotation: 0.0,
            opacity: default_opacity(),
            color: ElementColor::default(),
            visible: true,
            kind,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size. Negative dimensions are clamped to zero.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self
    }

    pub fn with_color(mut self, color: ElementColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Copy this element under a different id (for paste and duplicate).
    pub fn with_id(&self, id: ElementId) -> Self {
        Self { id, ..self.clone() }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Axis-aligned bounds, ignoring rotation.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Check if a canvas point falls inside this element.
    pub fn hit_test(&self, point: Point) -> bool {
        self.visible && self.bounds().contains(point)
    }

    /// Whether every numeric attribute is a finite number.
    pub fn is_finite(&self) -> bool {
        let font_size = match &self.kind {
            ElementKind::Text { font_size, .. } => *font_size,
            _ => 0.0,
        };
        [
            self.x,
            self.y,
            self.width,
            self.height,
            self.rotation,
            self.opacity,
            font_size,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Name shown in layer listings.
    pub fn display_name(&self) -> String {
        match &self.kind {
            ElementKind::Text { content, .. } if !content.is_empty() => {
                if content.chars().count() > LAYER_NAME_MAX_CHARS {
                    let head: String = content.chars().take(LAYER_NAME_MAX_CHARS).collect();
                    format!("{head}...")
                } else {
                    content.clone()
                }
            }
            ElementKind::Text { .. } => "Text".to_string(),
            ElementKind::Shape { shape } => shape.name().to_string(),
            ElementKind::Pattern { pattern } => pattern.name().to_string(),
            ElementKind::Image { .. } => "Image".to_string(),
        }
    }
}
