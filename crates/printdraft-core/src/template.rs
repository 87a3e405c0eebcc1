//! Product templates: partial element descriptions that seed a document.

use crate::color::ElementColor;
use crate::element::{
    DesignElement, ElementKind, FontWeight, PatternVariant, ShapeVariant, default_font_family,
    default_font_size,
};
use crate::id::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content used for text descriptors that omit it.
const DEFAULT_TEXT_CONTENT: &str = "Sample Text";
/// Position used for descriptors that omit one.
const DEFAULT_POSITION: f64 = 100.0;

/// Element type named by a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    #[default]
    Text,
    Shape,
    Pattern,
    Image,
}

/// A partial element. Missing fields take builder defaults and the id is
/// always freshly generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementDescriptor {
    #[serde(rename = "type")]
    pub kind: DescriptorKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub color: Option<ElementColor>,
    pub visible: Option<bool>,
    pub content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub shape: Option<ShapeVariant>,
    pub pattern: Option<PatternVariant>,
    pub src: Option<String>,
}

impl ElementDescriptor {
    pub fn new(kind: DescriptorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build a full element with a fresh id.
    pub fn build(&self, ids: &mut dyn IdGenerator) -> DesignElement {
        let kind = match self.kind {
            DescriptorKind::Text => ElementKind::Text {
                content: self
                    .content
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TEXT_CONTENT.to_string()),
                font_family: self.font_family.clone().unwrap_or_else(default_font_family),
                font_size: self.font_size.unwrap_or_else(default_font_size),
                font_weight: self.font_weight.unwrap_or_default(),
            },
            DescriptorKind::Shape => ElementKind::shape(self.shape.unwrap_or_default()),
            DescriptorKind::Pattern => ElementKind::pattern(self.pattern.unwrap_or_default()),
            DescriptorKind::Image => ElementKind::image(self.src.clone().unwrap_or_default()),
        };

        let mut element = DesignElement::new(ids.next_id(), kind)
            .at(
                self.x.unwrap_or(DEFAULT_POSITION),
                self.y.unwrap_or(DEFAULT_POSITION),
            )
            .with_size(
                self.width.unwrap_or(DesignElement::DEFAULT_WIDTH),
                self.height.unwrap_or(DesignElement::DEFAULT_HEIGHT),
            )
            .with_rotation(self.rotation.unwrap_or(0.0))
            .with_opacity(self.opacity.unwrap_or(1.0))
            .with_color(self.color.unwrap_or_default());
        element.visible = self.visible.unwrap_or(true);
        element
    }
}

/// A named product template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Artboard size for the product; the current size is kept when absent.
    pub canvas_size: Option<(f64, f64)>,
    pub elements: Vec<ElementDescriptor>,
}

impl Template {
    pub fn new(id: impl Into<String>, elements: Vec<ElementDescriptor>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            canvas_size: None,
            elements,
        }
    }

    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_size = Some((width, height));
        self
    }

    /// Build every element with fresh ids, in template order.
    pub fn build_elements(&self, ids: &mut dyn IdGenerator) -> Vec<DesignElement> {
        self.elements.iter().map(|desc| desc.build(ids)).collect()
    }
}

/// Looks up templates by id.
pub trait TemplateProvider {
    fn template(&self, template_id: &str) -> Option<Template>;
}

/// In-memory template catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    templates: HashMap<String, Template>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn with(mut self, template: Template) -> Self {
        self.insert(template);
        self
    }

    /// Load a catalog from a JSON array of templates.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        Ok(templates.into_iter().fold(Self::new(), Self::with))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateProvider for StaticCatalog {
    fn template(&self, template_id: &str) -> Option<Template> {
        self.templates.get(template_id).cloned()
    }
}
