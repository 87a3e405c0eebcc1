//! Selection helpers.
//!
//! The selection itself lives in [`DesignDocument`]; these functions compute
//! what a selection should become without touching the document.

use crate::document::DesignDocument;
use crate::element::ElementId;
use kurbo::{Point, Rect};
use std::collections::HashSet;

/// Minimum marquee extent (in canvas units) before it counts as a rectangle
/// select rather than a click.
pub const MARQUEE_MIN_SIZE: f64 = 2.0;

/// De-duplicate `ids` keeping first occurrences, and drop ids that are not in
/// the document.
pub fn normalize(doc: &DesignDocument, ids: &[ElementId]) -> Vec<ElementId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| doc.contains(id) && seen.insert(*id))
        .cloned()
        .collect()
}

/// Rectangle spanned by two drag corners, in any order.
pub fn marquee_rect(start: Point, end: Point) -> Rect {
    Rect::from_points(start, end)
}

/// Whether a marquee is big enough to select with.
pub fn is_marquee(rect: Rect) -> bool {
    rect.width() >= MARQUEE_MIN_SIZE || rect.height() >= MARQUEE_MIN_SIZE
}

/// Ids a marquee selects. With `additive`, the current selection is kept and
/// the marquee hits are appended.
pub fn marquee_selection(doc: &DesignDocument, rect: Rect, additive: bool) -> Vec<ElementId> {
    let hits = doc.elements_in_rect(rect);
    if !additive {
        return hits;
    }
    let mut ids = doc.selected_ids().to_vec();
    ids.extend(hits);
    normalize(doc, &ids)
}
