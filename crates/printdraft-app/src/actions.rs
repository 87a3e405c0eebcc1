//! Editor actions triggered by shortcuts or session scripts.

use printdraft_core::{Editor, EditorResult};
use serde::{Deserialize, Serialize};

/// A user-level editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    Undo,
    Redo,
    DeleteSelected,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Duplicate,
    ClearSelection,
}

impl EditorAction {
    /// Run the action against an editor.
    pub fn perform(self, editor: &mut Editor) -> EditorResult<()> {
        match self {
            EditorAction::Undo => {
                if !editor.undo() {
                    log::debug!("Nothing to undo");
                }
            }
            EditorAction::Redo => {
                if !editor.redo() {
                    log::debug!("Nothing to redo");
                }
            }
            EditorAction::DeleteSelected => {
                editor.delete_selected()?;
            }
            EditorAction::SelectAll => editor.select_all()?,
            EditorAction::Copy => {
                editor.copy();
            }
            EditorAction::Cut => {
                editor.cut()?;
            }
            EditorAction::Paste => {
                editor.paste()?;
            }
            EditorAction::Duplicate => {
                editor.duplicate()?;
            }
            EditorAction::ClearSelection => editor.clear_selection()?,
        }
        Ok(())
    }

    pub fn description(self) -> &'static str {
        match self {
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
            EditorAction::DeleteSelected => "Delete selected elements",
            EditorAction::SelectAll => "Select all elements",
            EditorAction::Copy => "Copy elements",
            EditorAction::Cut => "Cut elements",
            EditorAction::Paste => "Paste elements",
            EditorAction::Duplicate => "Duplicate selected elements",
            EditorAction::ClearSelection => "Clear selection",
        }
    }
}
