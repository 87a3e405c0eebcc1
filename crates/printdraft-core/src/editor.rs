//! The editor: document, history, clipboard and id source behind one API.

use crate::align::{Alignment, alignment_patches};
use crate::clipboard::{Clipboard, clone_with_offset};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::document::{DesignDocument, ZOrder};
use crate::element::{DesignElement, ElementId, ElementPatch};
use crate::error::{EditorError, EditorResult};
use crate::history::History;
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::platform::PlatformOptimizer;
use crate::template::{ElementDescriptor, TemplateProvider};

/// Where a dispatch came from. Only organic edits are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Organic,
    TimeTravel,
}

/// Owns one editing session.
///
/// All mutations go through [`Editor::dispatch`] or the convenience methods
/// built on it. Each successful edit outside a transaction becomes one
/// history entry.
pub struct Editor {
    document: DesignDocument,
    history: History,
    clipboard: Clipboard,
    ids: Box<dyn IdGenerator>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("document", &self.document)
            .field("history_len", &self.history.len())
            .field("clipboard", &self.clipboard.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Editor {
    /// Create an editor with the default configuration.
    pub fn new() -> Self {
        let config = EditorConfig::default();
        let document = DesignDocument::new();
        Self {
            history: History::new(document.clone(), config.history_capacity),
            document,
            clipboard: Clipboard::new(),
            ids: Box::new(UuidIdGenerator),
            config,
        }
    }

    /// Create an editor from a configuration, validating it first.
    pub fn with_config(config: EditorConfig) -> EditorResult<Self> {
        let document = config.initial_document()?;
        Ok(Self {
            history: History::new(document.clone(), config.history_capacity),
            document,
            clipboard: Clipboard::new(),
            ids: Box::new(UuidIdGenerator),
            config,
        })
    }

    /// Replace the id source (e.g. with a deterministic one in tests).
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn document(&self) -> &DesignDocument {
        &self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Generate a fresh element id.
    pub fn next_id(&mut self) -> ElementId {
        self.ids.next_id()
    }

    /// Apply a command and record the result.
    pub fn dispatch(&mut self, command: Command) -> EditorResult<()> {
        self.apply(&command, Origin::Organic)
    }

    fn apply(&mut self, command: &Command, origin: Origin) -> EditorResult<()> {
        let next = command.apply(&self.document).inspect_err(|err| {
            log::warn!("Rejected {}: {}", command.name(), err);
        })?;
        log::debug!("Applied {}", command.name());
        self.document = next;
        if origin == Origin::Organic {
            self.history.record(&self.document);
        }
        Ok(())
    }

    /// Restore the previous snapshot. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        self.close_transactions();
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot)
    }

    /// Restore the next snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        self.close_transactions();
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot)
    }

    fn restore(&mut self, snapshot: DesignDocument) -> bool {
        self.apply(&Command::ReplaceDocument { document: Box::new(snapshot) }, Origin::TimeTravel)
            .is_ok()
    }

    fn close_transactions(&mut self) {
        while self.history.in_transaction() {
            self.history.commit_transaction(&self.document);
        }
    }

    /// Start grouping edits into one history entry. Transactions nest.
    pub fn begin_transaction(&mut self) {
        self.history.begin_transaction();
    }

    /// Close a transaction. Closing the outermost one records the document
    /// if it changed; returns true in that case.
    pub fn commit_transaction(&mut self) -> bool {
        self.history.commit_transaction(&self.document)
    }

    /// Run `f` as one history entry. On error the document is rolled back.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> EditorResult<T>,
    ) -> EditorResult<T> {
        let before = self.document.clone();
        self.begin_transaction();
        let result = f(self);
        if result.is_err() {
            self.document = before;
        }
        self.commit_transaction();
        result
    }

    /// Build an element from a descriptor with a fresh id and add it on top.
    pub fn add_element(&mut self, descriptor: &ElementDescriptor) -> EditorResult<ElementId> {
        let element = descriptor.build(self.ids.as_mut());
        let id = element.id().clone();
        self.dispatch(Command::AddElement { element })?;
        Ok(id)
    }

    pub fn select_all(&mut self) -> EditorResult<()> {
        self.dispatch(Command::SelectAll)
    }

    pub fn clear_selection(&mut self) -> EditorResult<()> {
        self.dispatch(Command::ClearSelection)
    }

    /// Show or hide an element from the layer list. Hidden elements stay in
    /// the document but are skipped by hit-testing.
    pub fn set_visible(&mut self, id: impl Into<ElementId>, visible: bool) -> EditorResult<()> {
        self.dispatch(Command::UpdateElement {
            id: id.into(),
            patch: ElementPatch::new().with_visible(visible),
        })
    }

    pub fn reorder(&mut self, id: impl Into<ElementId>, direction: ZOrder) -> EditorResult<()> {
        self.dispatch(Command::ReorderElement { id: id.into(), direction })
    }

    /// Copy the selection to the clipboard. An empty selection leaves the
    /// clipboard as it was. Returns the number of copied elements.
    pub fn copy(&mut self) -> usize {
        let selected: Vec<DesignElement> =
            self.document.selected_elements().into_iter().cloned().collect();
        if selected.is_empty() {
            return 0;
        }
        let count = selected.len();
        self.clipboard.set(selected);
        log::debug!("Copied {count} element(s)");
        count
    }

    /// Add offset copies of the clipboard with fresh ids and select them.
    /// Returns the number of pasted elements.
    pub fn paste(&mut self) -> EditorResult<usize> {
        if self.clipboard.is_empty() {
            return Ok(0);
        }
        let copies = clone_with_offset(
            self.clipboard.elements(),
            self.config.paste_offset(),
            self.ids.as_mut(),
        );
        self.insert_and_select(copies)
    }

    /// Copy and paste the selection in one step without touching the clipboard.
    pub fn duplicate(&mut self) -> EditorResult<usize> {
        let selected = self.document.selected_elements();
        if selected.is_empty() {
            return Ok(0);
        }
        let copies = clone_with_offset(selected, self.config.paste_offset(), self.ids.as_mut());
        self.insert_and_select(copies)
    }

    /// Copy the selection, then delete it.
    pub fn cut(&mut self) -> EditorResult<usize> {
        let count = self.copy();
        if count > 0 {
            self.delete_selected()?;
        }
        Ok(count)
    }

    fn insert_and_select(&mut self, elements: Vec<DesignElement>) -> EditorResult<usize> {
        let ids: Vec<ElementId> = elements.iter().map(|el| el.id().clone()).collect();
        let count = ids.len();
        self.transaction(|editor| {
            for element in elements {
                editor.dispatch(Command::AddElement { element })?;
            }
            editor.dispatch(Command::SelectMultiple { ids })
        })?;
        log::debug!("Inserted {count} copied element(s)");
        Ok(count)
    }

    /// Delete every selected element as one history entry.
    pub fn delete_selected(&mut self) -> EditorResult<usize> {
        let ids = self.document.selected_ids().to_vec();
        if ids.is_empty() {
            return Ok(0);
        }
        let count = ids.len();
        self.transaction(|editor| {
            ids.into_iter()
                .try_for_each(|id| editor.dispatch(Command::DeleteElement { id }))
        })?;
        Ok(count)
    }

    /// Align the selected elements. Needs at least two; returns false otherwise.
    pub fn align_selection(&mut self, alignment: Alignment) -> EditorResult<bool> {
        let patches = alignment_patches(&self.document.selected_elements(), alignment);
        if patches.is_empty() {
            return Ok(false);
        }
        self.transaction(|editor| {
            patches
                .into_iter()
                .try_for_each(|(id, patch)| editor.dispatch(Command::UpdateElement { id, patch }))
        })?;
        Ok(true)
    }

    /// Load a whole document and start history over from it. The document is
    /// validated first.
    pub fn load_document(&mut self, document: DesignDocument) -> EditorResult<()> {
        document.validate()?;
        self.history.reset(document.clone());
        self.document = document;
        log::info!("Loaded document with {} element(s)", self.document.len());
        Ok(())
    }

    /// Load a document from JSON. See [`Editor::load_document`].
    pub fn load_json(&mut self, json: &str) -> EditorResult<()> {
        self.load_document(DesignDocument::from_json(json)?)
    }

    /// Replace the canvas contents with a template's elements as one history
    /// entry. Returns the number of elements added.
    pub fn apply_template(
        &mut self,
        provider: &dyn TemplateProvider,
        template_id: &str,
    ) -> EditorResult<usize> {
        let template = provider
            .template(template_id)
            .ok_or_else(|| EditorError::UnknownTemplate(template_id.to_string()))?;
        let elements = template.build_elements(self.ids.as_mut());
        let count = elements.len();

        self.transaction(|editor| {
            editor.dispatch(Command::ClearCanvas)?;
            if let Some((width, height)) = template.canvas_size {
                editor.dispatch(Command::SetCanvasSize { width, height })?;
            }
            elements
                .into_iter()
                .try_for_each(|element| editor.dispatch(Command::AddElement { element }))
        })?;
        log::info!("Applied template {} ({count} element(s))", template.name);
        Ok(count)
    }

    /// Rewrite the whole design for a platform as one history entry.
    pub fn optimize_for(
        &mut self,
        optimizer: &dyn PlatformOptimizer,
        platform: &str,
    ) -> EditorResult<()> {
        let elements = optimizer.optimize(self.document.elements(), platform);
        self.dispatch(Command::ReplaceElements { elements })?;
        log::info!("Optimized design for {platform}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ShapeVariant};
    use crate::id::SequentialIdGenerator;
    use kurbo::Point;

    fn editor() -> Editor {
        Editor::new().with_id_generator(SequentialIdGenerator::new("n"))
    }

    fn add(editor: &mut Editor, id: &str, x: f64) {
        let element = DesignElement::new(id, ElementKind::shape(ShapeVariant::Rectangle)).at(x, x);
        editor.dispatch(Command::AddElement { element }).unwrap();
    }

    #[test]
    fn test_dispatch_records() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        assert_eq!(editor.history_len(), 2);
        assert!(editor.can_undo());
    }

    #[test]
    fn test_rejected_command_records_nothing() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        let before = editor.document().clone();
        let element = DesignElement::new("a", ElementKind::text("dup"));
        assert!(editor.dispatch(Command::AddElement { element }).is_err());
        assert_eq!(editor.document(), &before);
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn test_undo_redo_do_not_record() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        add(&mut editor, "b", 0.0);
        assert!(editor.undo());
        assert!(editor.undo());
        assert!(!editor.undo());
        assert!(editor.document().is_empty());
        assert!(editor.redo());
        assert_eq!(editor.history_len(), 3);
    }

    #[test]
    fn test_undo_commits_open_transaction() {
        let mut editor = editor();
        editor.begin_transaction();
        add(&mut editor, "a", 0.0);
        assert!(editor.undo());
        assert!(editor.document().is_empty());
        assert!(!editor.history().in_transaction());
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        let before = editor.document().clone();
        let result = editor.transaction(|editor| {
            add(editor, "b", 0.0);
            editor.dispatch(Command::SetCanvasSize { width: 0.0, height: 1.0 })
        });
        assert!(result.is_err());
        assert_eq!(editor.document(), &before);
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn test_non_finite_update_records_nothing() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        let len = editor.history_len();
        editor
            .dispatch(Command::UpdateElement {
                id: "a".into(),
                patch: ElementPatch::new().with_x(f64::NAN),
            })
            .unwrap();
        for _ in 0..3 {
            editor
                .dispatch(Command::UpdateElement {
                    id: "ghost".into(),
                    patch: ElementPatch::new().with_x(1.0),
                })
                .unwrap();
        }
        assert_eq!(editor.history_len(), len);
        assert!(editor.document().get(&"a".into()).unwrap().x.abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_visible() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        editor.set_visible("a", false).unwrap();
        assert!(!editor.document().get(&"a".into()).unwrap().visible);
        assert!(editor.document().element_at(Point::new(10.0, 10.0)).is_none());
        assert_eq!(editor.history_len(), 3);

        editor.undo();
        assert!(editor.document().get(&"a".into()).unwrap().visible);
    }

    #[test]
    fn test_paste_selects_new_ids() {
        let mut editor = editor();
        add(&mut editor, "a", 10.0);
        editor.dispatch(Command::SelectOne { id: Some("a".into()) }).unwrap();
        assert_eq!(editor.copy(), 1);
        assert_eq!(editor.paste().unwrap(), 1);

        let doc = editor.document();
        assert_eq!(doc.selected_ids(), &[ElementId::from("n-1")]);
        let pasted = doc.get(&"n-1".into()).unwrap();
        assert!((pasted.x - 30.0).abs() < f64::EPSILON);
        assert_eq!(editor.history_len(), 4);
    }

    #[test]
    fn test_copy_with_empty_selection_keeps_clipboard() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        editor.dispatch(Command::SelectAll).unwrap();
        editor.copy();
        editor.dispatch(Command::ClearSelection).unwrap();
        assert_eq!(editor.copy(), 0);
        assert_eq!(editor.clipboard().len(), 1);
        assert_eq!(editor.paste().unwrap(), 1);
    }

    #[test]
    fn test_cut() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        add(&mut editor, "b", 0.0);
        editor.select_all().unwrap();
        let len = editor.history_len();
        assert_eq!(editor.cut().unwrap(), 2);
        assert!(editor.document().is_empty());
        assert_eq!(editor.clipboard().len(), 2);
        assert_eq!(editor.history_len(), len + 1);
    }

    #[test]
    fn test_align_selection() {
        let mut editor = editor();
        add(&mut editor, "a", 10.0);
        add(&mut editor, "b", 50.0);
        assert!(!editor.align_selection(Alignment::Left).unwrap());
        editor.select_all().unwrap();
        let len = editor.history_len();
        assert!(editor.align_selection(Alignment::Left).unwrap());
        assert_eq!(editor.history_len(), len + 1);
        let b = editor.document().get(&"b".into()).unwrap();
        assert!((b.x - 10.0).abs() < f64::EPSILON);
        assert!((b.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_document_resets_history() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        let mut other = Editor::new();
        add(&mut other, "z", 0.0);
        editor.load_document(other.document().clone()).unwrap();
        assert_eq!(editor.history_len(), 1);
        assert!(editor.document().contains(&"z".into()));
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_optimize_for_is_one_entry() {
        let mut editor = editor();
        add(&mut editor, "a", 0.0);
        let bump = |elements: &[DesignElement], _: &str| -> Vec<DesignElement> {
            elements
                .iter()
                .map(|el| {
                    let mut el = el.clone();
                    ElementPatch::new().with_opacity(0.9).apply_to(&mut el);
                    el
                })
                .collect()
        };
        editor.optimize_for(&bump, "amazon").unwrap();
        assert_eq!(editor.history_len(), 3);
        assert!((editor.document().elements()[0].opacity - 0.9).abs() < f64::EPSILON);
    }
}
