//! Internal clipboard for copy, cut and paste.

use crate::element::DesignElement;
use crate::id::IdGenerator;
use kurbo::Vec2;

/// Holds deep copies of elements. Pasting never empties it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    elements: Vec<DesignElement>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[DesignElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Replace the contents.
    pub fn set(&mut self, elements: Vec<DesignElement>) {
        self.elements = elements;
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

/// Copies of `elements` with fresh ids, shifted by `offset`.
pub fn clone_with_offset<'a>(
    elements: impl IntoIterator<Item = &'a DesignElement>,
    offset: Vec2,
    ids: &mut dyn IdGenerator,
) -> Vec<DesignElement> {
    elements
        .into_iter()
        .map(|el| {
            let mut copy = el.with_id(ids.next_id());
            copy.translate(offset);
            copy
        })
        .collect()
}
