//! Document commands.
//!
//! Every change to a [`DesignDocument`] goes through a [`Command`]. Applying a
//! command is pure: it reads a document and returns a new one, leaving the
//! input untouched, so a failed command can never leave a half-applied state.

use crate::document::{DesignDocument, ZOrder};
use crate::element::{DesignElement, ElementId, ElementPatch};
use crate::error::EditorResult;
use serde::{Deserialize, Serialize};

/// A single document mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Append an element on top of the others.
    AddElement { element: DesignElement },
    /// Merge attribute changes onto an element. Unknown ids are ignored.
    UpdateElement { id: ElementId, patch: ElementPatch },
    /// Remove an element and drop it from the selection. Unknown ids are ignored.
    DeleteElement { id: ElementId },
    /// Select a single element, or nothing.
    SelectOne { id: Option<ElementId> },
    /// Select exactly these elements.
    SelectMultiple { ids: Vec<ElementId> },
    /// Add or remove one element from the selection.
    ToggleInSelection { id: ElementId },
    ClearSelection,
    SelectAll,
    /// Remove all elements. The artboard size is kept.
    ClearCanvas,
    SetCanvasSize { width: f64, height: f64 },
    /// Replace every element at once.
    ReplaceElements { elements: Vec<DesignElement> },
    ReorderElement { id: ElementId, direction: ZOrder },
    /// Swap in a whole document. Used to restore history snapshots.
    ReplaceDocument { document: Box<DesignDocument> },
}

impl Command {
    /// Apply this command to `doc`, returning the resulting document.
    ///
    /// Structural errors leave `doc` as it was. Commands that name a missing
    /// element return an unchanged copy.
    pub fn apply(&self, doc: &DesignDocument) -> EditorResult<DesignDocument> {
        let mut next = doc.clone();
        match self {
            Command::AddElement { element } => next.push_element(element.clone())?,
            Command::UpdateElement { id, patch } => match next.element_mut(id) {
                Some(element) => patch.apply_to(element),
                None => log::debug!("Update of unknown element {id} ignored"),
            },
            Command::DeleteElement { id } => {
                if next.remove_element(id).is_none() {
                    log::debug!("Delete of unknown element {id} ignored");
                }
            }
            Command::SelectOne { id } => match id {
                Some(id) => next.set_selection(std::slice::from_ref(id)),
                None => next.clear_selection(),
            },
            Command::SelectMultiple { ids } => next.set_selection(ids),
            Command::ToggleInSelection { id } => next.toggle_selected(id),
            Command::ClearSelection => next.clear_selection(),
            Command::SelectAll => {
                let ids: Vec<ElementId> =
                    next.elements().iter().map(|el| el.id().clone()).collect();
                next.set_selection(&ids);
            }
            Command::ClearCanvas => next.clear(),
            Command::SetCanvasSize { width, height } => next.set_canvas_size(*width, *height)?,
            Command::ReplaceElements { elements } => next.replace_elements(elements.clone())?,
            Command::ReorderElement { id, direction } => {
                next.reorder(id, *direction);
            }
            Command::ReplaceDocument { document } => return Ok(document.as_ref().clone()),
        }
        Ok(next)
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "add_element",
            Command::UpdateElement { .. } => "update_element",
            Command::DeleteElement { .. } => "delete_element",
            Command::SelectOne { .. } => "select_one",
            Command::SelectMultiple { .. } => "select_multiple",
            Command::ToggleInSelection { .. } => "toggle_in_selection",
            Command::ClearSelection => "clear_selection",
            Command::SelectAll => "select_all",
            Command::ClearCanvas => "clear_canvas",
            Command::SetCanvasSize { .. } => "set_canvas_size",
            Command::ReplaceElements { .. } => "replace_elements",
            Command::ReorderElement { .. } => "reorder_element",
            Command::ReplaceDocument { .. } => "replace_document",
        }
    }
}
