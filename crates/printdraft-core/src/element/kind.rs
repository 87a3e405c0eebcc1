//! Element kinds and their kind-specific attributes.

use serde::{Deserialize, Serialize};

/// Predefined shape outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeVariant {
    #[default]
    Rectangle,
    Circle,
    Triangle,
    Star,
    Line,
    Diamond,
    Heart,
    Hexagon,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Pentagon,
    Octagon,
}

impl ShapeVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeVariant::Rectangle => "rectangle",
            ShapeVariant::Circle => "circle",
            ShapeVariant::Triangle => "triangle",
            ShapeVariant::Star => "star",
            ShapeVariant::Line => "line",
            ShapeVariant::Diamond => "diamond",
            ShapeVariant::Heart => "heart",
            ShapeVariant::Hexagon => "hexagon",
            ShapeVariant::ArrowRight => "arrow-right",
            ShapeVariant::ArrowLeft => "arrow-left",
            ShapeVariant::ArrowUp => "arrow-up",
            ShapeVariant::ArrowDown => "arrow-down",
            ShapeVariant::Pentagon => "pentagon",
            ShapeVariant::Octagon => "octagon",
        }
    }
}

/// Fill patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternVariant {
    Stripes,
    #[default]
    Dots,
    Gradient,
    Checkerboard,
    Waves,
}

impl PatternVariant {
    pub fn name(&self) -> &'static str {
        match self {
            PatternVariant::Stripes => "stripes",
            PatternVariant::Dots => "dots",
            PatternVariant::Gradient => "gradient",
            PatternVariant::Checkerboard => "checkerboard",
            PatternVariant::Waves => "waves",
        }
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

/// What an element is, with the attributes only meaningful for that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text {
        content: String,
        #[serde(default = "default_font_family")]
        font_family: String,
        #[serde(default = "default_font_size")]
        font_size: f64,
        #[serde(default)]
        font_weight: FontWeight,
    },
    Shape {
        #[serde(default)]
        shape: ShapeVariant,
    },
    Pattern {
        #[serde(default)]
        pattern: PatternVariant,
    },
    Image {
        /// Image reference (URL, path or data URI); never decoded here.
        src: String,
    },
}

pub(crate) fn default_font_family() -> String {
    "Arial".to_string()
}

pub(crate) fn default_font_size() -> f64 {
    24.0
}

impl ElementKind {
    /// A text kind with the default font settings.
    pub fn text(content: impl Into<String>) -> Self {
        ElementKind::Text {
            content: content.into(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: FontWeight::default(),
        }
    }

    pub fn shape(shape: ShapeVariant) -> Self {
        ElementKind::Shape { shape }
    }

    pub fn pattern(pattern: PatternVariant) -> Self {
        ElementKind::Pattern { pattern }
    }

    pub fn image(src: impl Into<String>) -> Self {
        ElementKind::Image { src: src.into() }
    }

    /// Lowercase discriminant, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Shape { .. } => "shape",
            ElementKind::Pattern { .. } => "pattern",
            ElementKind::Image { .. } => "image",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::Text { .. })
    }
}
