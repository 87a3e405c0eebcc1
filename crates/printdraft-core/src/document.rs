//! The design document: elements in paint order, selection and artboard size.

use crate::element::{DesignElement, ElementId};
use crate::error::{EditorError, EditorResult};
use crate::selection;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default artboard width.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Default artboard height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Direction for a z-order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZOrder {
    /// One step towards the top.
    Forward,
    /// One step towards the bottom.
    Backward,
    ToFront,
    ToBack,
}

/// A snapshot of the whole document.
///
/// Element order is paint order: later elements are drawn on top. Every id in
/// the selection refers to an element in `elements`. Values are only changed
/// through [`Command::apply`](crate::command::Command::apply), which returns a
/// new document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    elements: Vec<DesignElement>,
    selected_ids: Vec<ElementId>,
    canvas_width: f64,
    canvas_height: f64,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignDocument {
    /// Create an empty document with the default artboard.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected_ids: Vec::new(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    /// Create an empty document with the given artboard size.
    pub fn with_canvas_size(width: f64, height: f64) -> EditorResult<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::new()
        })
    }

    pub fn elements(&self) -> &[DesignElement] {
        &self.elements
    }

    /// Selected ids in the order they were selected.
    pub fn selected_ids(&self) -> &[ElementId] {
        &self.selected_ids
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|el| el.id() == id)
    }

    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id() == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_ids.is_empty()
    }

    /// Selected elements in paint order.
    pub fn selected_elements(&self) -> Vec<&DesignElement> {
        self.elements
            .iter()
            .filter(|el| self.selected_ids.contains(el.id()))
            .collect()
    }

    /// Elements as a layer panel lists them: topmost first.
    pub fn layers(&self) -> impl Iterator<Item = &DesignElement> {
        self.elements.iter().rev()
    }

    /// Bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        union_bounds(self.elements.iter())
    }

    /// Bounding box of the selected elements.
    pub fn selection_bounds(&self) -> Option<Rect> {
        union_bounds(self.selected_elements().into_iter())
    }

    /// The topmost visible element under a canvas point.
    pub fn element_at(&self, point: Point) -> Option<&ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|el| el.hit_test(point))
            .map(DesignElement::id)
    }

    /// Visible elements whose bounds intersect `rect`, in paint order.
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|el| el.visible && rect.intersect(el.bounds()).area() > 0.0)
            .map(|el| el.id().clone())
            .collect()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a document from JSON, rejecting documents that break
    /// the id or selection invariants.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> EditorResult<()> {
        validate_dimensions(self.canvas_width, self.canvas_height)?;

        let mut seen = HashSet::with_capacity(self.elements.len());
        for el in &self.elements {
            check_element(el)?;
            if !seen.insert(el.id()) {
                return Err(EditorError::DuplicateId(el.id().clone()));
            }
        }

        let mut selected = HashSet::with_capacity(self.selected_ids.len());
        for id in &self.selected_ids {
            if !seen.contains(id) {
                return Err(EditorError::InvalidDocument(format!(
                    "selection references missing element {id}"
                )));
            }
            if !selected.insert(id) {
                return Err(EditorError::InvalidDocument(format!(
                    "element {id} selected twice"
                )));
            }
        }
        Ok(())
    }

    // Mutators below are only reachable through command application.

    pub(crate) fn push_element(&mut self, element: DesignElement) -> EditorResult<()> {
        check_element(&element)?;
        if self.contains(element.id()) {
            return Err(EditorError::DuplicateId(element.id().clone()));
        }
        self.elements.push(element);
        Ok(())
    }

    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<&mut DesignElement> {
        self.elements.iter_mut().find(|el| el.id() == id)
    }

    pub(crate) fn remove_element(&mut self, id: &ElementId) -> Option<DesignElement> {
        let index = self.index_of(id)?;
        self.selected_ids.retain(|selected| selected != id);
        Some(self.elements.remove(index))
    }

    /// Replace every element, keeping the selection for ids that survive.
    pub(crate) fn replace_elements(&mut self, elements: Vec<DesignElement>) -> EditorResult<()> {
        let mut seen = HashSet::with_capacity(elements.len());
        for el in &elements {
            check_element(el)?;
            if !seen.insert(el.id()) {
                return Err(EditorError::DuplicateId(el.id().clone()));
            }
        }
        self.selected_ids.retain(|id| seen.contains(id));
        self.elements = elements;
        Ok(())
    }

    pub(crate) fn set_selection(&mut self, ids: &[ElementId]) {
        self.selected_ids = selection::normalize(self, ids);
    }

    pub(crate) fn toggle_selected(&mut self, id: &ElementId) {
        if !self.contains(id) {
            return;
        }
        if self.is_selected(id) {
            self.selected_ids.retain(|selected| selected != id);
        } else {
            self.selected_ids.push(id.clone());
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
        self.selected_ids.clear();
    }

    pub(crate) fn set_canvas_size(&mut self, width: f64, height: f64) -> EditorResult<()> {
        validate_dimensions(width, height)?;
        self.canvas_width = width;
        self.canvas_height = height;
        Ok(())
    }

    /// Move an element in paint order. Returns false when nothing moved.
    pub(crate) fn reorder(&mut self, id: &ElementId, direction: ZOrder) -> bool {
        let Some(pos) = self.index_of(id) else {
            return false;
        };
        let last = self.elements.len() - 1;
        match direction {
            ZOrder::Forward if pos < last => self.elements.swap(pos, pos + 1),
            ZOrder::Backward if pos > 0 => self.elements.swap(pos, pos - 1),
            ZOrder::ToFront if pos < last => {
                let el = self.elements.remove(pos);
                self.elements.push(el);
            }
            ZOrder::ToBack if pos > 0 => {
                let el = self.elements.remove(pos);
                self.elements.insert(0, el);
            }
            _ => return false,
        }
        true
    }
}

fn validate_dimensions(width: f64, height: f64) -> EditorResult<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(EditorError::InvalidDimension { width, height })
    }
}

/// Elements must hold finite numbers and a non-negative size.
fn check_element(el: &DesignElement) -> EditorResult<()> {
    if !el.is_finite() {
        return Err(EditorError::NonFiniteValue(el.id().clone()));
    }
    if el.width < 0.0 || el.height < 0.0 {
        return Err(EditorError::InvalidDocument(format!(
            "element {} has a negative size {}x{}",
            el.id(),
            el.width,
            el.height
        )));
    }
    Ok(())
}

fn union_bounds<'a>(elements: impl Iterator<Item = &'a DesignElement>) -> Option<Rect> {
    elements.map(DesignElement::bounds).reduce(|acc, b| acc.union(b))
}
