//! Pointer interaction: click to select, drag to move, drag on empty canvas
//! to marquee-select.

use crate::command::Command;
use crate::editor::Editor;
use crate::element::{ElementId, ElementPatch};
use crate::error::EditorResult;
use crate::selection;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Whether a click should add to or remove from the selection.
    pub fn is_additive(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// State for moving the selected elements at once.
#[derive(Debug, Clone)]
pub struct MoveState {
    /// Starting point of the drag.
    pub start_point: Point,
    /// Current point of the drag.
    pub current_point: Point,
    /// Position of each dragged element when the drag began.
    pub origins: Vec<(ElementId, Point)>,
}

impl MoveState {
    pub fn new(start_point: Point, origins: Vec<(ElementId, Point)>) -> Self {
        Self {
            start_point,
            current_point: start_point,
            origins,
        }
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Idle,
    Moving(MoveState),
    Selecting {
        start: Point,
        current: Point,
        additive: bool,
    },
}

/// Pointer gesture state machine.
///
/// A gesture runs from [`press`](Self::press) to [`release`](Self::release)
/// and produces at most one history entry, however many moves it has.
/// Undo, redo or a document load while the gesture is open closes its
/// transaction; the gesture is then dropped without further edits.
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    state: SessionState,
    /// Transaction depth owned by the active gesture.
    depth: usize,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, SessionState::Moving(_))
    }

    pub fn move_state(&self) -> Option<&MoveState> {
        match &self.state {
            SessionState::Moving(state) => Some(state),
            _ => None,
        }
    }

    /// The marquee rectangle while rectangle-selecting.
    pub fn marquee(&self) -> Option<Rect> {
        match self.state {
            SessionState::Selecting { start, current, .. } => {
                Some(selection::marquee_rect(start, current))
            }
            _ => None,
        }
    }

    /// Pointer down at a canvas point.
    pub fn press(
        &mut self,
        editor: &mut Editor,
        point: Point,
        modifiers: Modifiers,
    ) -> EditorResult<()> {
        if !self.is_idle() {
            log::debug!("Press while a gesture is active; ending it first");
            self.release(editor)?;
        }

        let hit = editor.document().element_at(point).cloned();
        match hit {
            Some(id) if modifiers.is_additive() => {
                editor.dispatch(Command::ToggleInSelection { id })?;
            }
            Some(id) => {
                self.begin(editor);
                if !editor.document().is_selected(&id) {
                    editor.dispatch(Command::SelectOne { id: Some(id) })?;
                }
                let origins = editor
                    .document()
                    .selected_elements()
                    .into_iter()
                    .map(|el| (el.id().clone(), el.position()))
                    .collect();
                self.state = SessionState::Moving(MoveState::new(point, origins));
            }
            None => {
                let additive = modifiers.is_additive();
                self.begin(editor);
                if !additive && editor.document().has_selection() {
                    editor.dispatch(Command::ClearSelection)?;
                }
                self.state = SessionState::Selecting {
                    start: point,
                    current: point,
                    additive,
                };
            }
        }
        Ok(())
    }

    /// Pointer moved to a canvas point.
    pub fn move_to(&mut self, editor: &mut Editor, point: Point) -> EditorResult<()> {
        if self.interrupted(editor) {
            log::debug!("Gesture transaction closed elsewhere; dropping the gesture");
            self.state = SessionState::Idle;
            self.depth = 0;
            return Ok(());
        }
        match &mut self.state {
            SessionState::Idle => Ok(()),
            SessionState::Selecting { current, .. } => {
                *current = point;
                Ok(())
            }
            SessionState::Moving(state) => {
                state.current_point = point;
                let delta = state.delta();
                // Elements deleted mid-drag are skipped by the update itself.
                state.origins.iter().try_for_each(|(id, origin)| {
                    let target = *origin + delta;
                    editor.dispatch(Command::UpdateElement {
                        id: id.clone(),
                        patch: ElementPatch::position(target.x, target.y),
                    })
                })
            }
        }
    }

    /// Pointer up. Ends the gesture.
    pub fn release(&mut self, editor: &mut Editor) -> EditorResult<()> {
        let interrupted = self.interrupted(editor);
        let state = std::mem::take(&mut self.state);
        self.depth = 0;
        if interrupted {
            log::debug!("Gesture transaction closed elsewhere; nothing to commit");
            return Ok(());
        }
        match state {
            SessionState::Idle => Ok(()),
            SessionState::Moving(state) => {
                if editor.commit_transaction() {
                    log::debug!("Moved {} element(s) by {:?}", state.origins.len(), state.delta());
                }
                Ok(())
            }
            SessionState::Selecting {
                start,
                current,
                additive,
            } => {
                let rect = selection::marquee_rect(start, current);
                let result = if selection::is_marquee(rect) {
                    let ids = selection::marquee_selection(editor.document(), rect, additive);
                    editor.dispatch(Command::SelectMultiple { ids })
                } else {
                    Ok(())
                };
                // Clearing on press and selecting on release form one entry.
                editor.commit_transaction();
                result
            }
        }
    }

    fn begin(&mut self, editor: &mut Editor) {
        editor.begin_transaction();
        self.depth = editor.history().depth();
    }

    /// Whether the gesture's transaction was closed by someone else.
    fn interrupted(&self, editor: &Editor) -> bool {
        !self.is_idle() && editor.history().depth() < self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{DesignElement, ElementKind, ShapeVariant};

    fn editor_with(ids: &[(&str, f64)]) -> Editor {
        let mut editor = Editor::new();
        for (id, x) in ids {
            let element = DesignElement::new(*id, ElementKind::shape(ShapeVariant::Rectangle))
                .at(*x, 0.0)
                .with_size(50.0, 50.0);
            editor.dispatch(Command::AddElement { element }).unwrap();
        }
        editor
    }

    #[test]
    fn test_click_selects_and_drag_moves() {
        let mut editor = editor_with(&[("a", 0.0)]);
        let len = editor.history_len();
        let mut session = InteractionSession::new();

        session.press(&mut editor, Point::new(10.0, 10.0), Modifiers::NONE).unwrap();
        assert!(session.is_moving());
        assert!(editor.document().is_selected(&"a".into()));
        for step in 1..=10 {
            session.move_to(&mut editor, Point::new(10.0 + step as f64, 10.0)).unwrap();
        }
        session.release(&mut editor).unwrap();

        assert!(session.is_idle());
        let a = editor.document().get(&"a".into()).unwrap();
        assert!((a.x - 10.0).abs() < f64::EPSILON);
        assert_eq!(editor.history_len(), len + 1);
    }

    #[test]
    fn test_modifier_click_toggles() {
        let mut editor = editor_with(&[("a", 0.0), ("b", 100.0)]);
        let mut session = InteractionSession::new();
        session.press(&mut editor, Point::new(10.0, 10.0), Modifiers::NONE).unwrap();
        session.release(&mut editor).unwrap();
        session.press(&mut editor, Point::new(110.0, 10.0), Modifiers::shift()).unwrap();
        assert!(session.is_idle());
        assert_eq!(
            editor.document().selected_ids(),
            &[ElementId::from("a"), ElementId::from("b")]
        );
    }

    #[test]
    fn test_click_on_empty_canvas_clears() {
        let mut editor = editor_with(&[("a", 0.0)]);
        editor.select_all().unwrap();
        let mut session = InteractionSession::new();
        session.press(&mut editor, Point::new(500.0, 500.0), Modifiers::NONE).unwrap();
        session.release(&mut editor).unwrap();
        assert!(!editor.document().has_selection());
    }

    #[test]
    fn test_marquee_select() {
        let mut editor = editor_with(&[("a", 0.0), ("b", 100.0), ("c", 300.0)]);
        let mut session = InteractionSession::new();
        session.press(&mut editor, Point::new(-10.0, -10.0), Modifiers::NONE).unwrap();
        session.move_to(&mut editor, Point::new(160.0, 20.0)).unwrap();
        assert!(session.marquee().is_some());
        session.release(&mut editor).unwrap();
        assert_eq!(
            editor.document().selected_ids(),
            &[ElementId::from("a"), ElementId::from("b")]
        );
    }

    #[test]
    fn test_marquee_is_one_entry() {
        let mut editor = editor_with(&[("a", 0.0), ("b", 100.0)]);
        editor
            .dispatch(Command::SelectOne {
                id: Some("a".into()),
            })
            .unwrap();
        let len = editor.history_len();
        let mut session = InteractionSession::new();

        session.press(&mut editor, Point::new(90.0, -10.0), Modifiers::NONE).unwrap();
        session.move_to(&mut editor, Point::new(160.0, 20.0)).unwrap();
        session.release(&mut editor).unwrap();
        assert_eq!(editor.document().selected_ids(), &[ElementId::from("b")]);
        assert_eq!(editor.history_len(), len + 1);

        assert!(editor.undo());
        assert_eq!(editor.document().selected_ids(), &[ElementId::from("a")]);
    }

    #[test]
    fn test_undo_during_drag_drops_gesture() {
        let mut editor = editor_with(&[("a", 0.0)]);
        let mut session = InteractionSession::new();

        session.press(&mut editor, Point::new(10.0, 10.0), Modifiers::NONE).unwrap();
        session.move_to(&mut editor, Point::new(20.0, 10.0)).unwrap();
        // The undo closes the drag's transaction and steps back over it.
        assert!(editor.undo());
        let len = editor.history_len();
        let x_after_undo = editor.document().get(&"a".into()).unwrap().x;

        for step in 1..=3 {
            session.move_to(&mut editor, Point::new(20.0 + step as f64, 10.0)).unwrap();
        }
        assert!(session.is_idle());
        session.release(&mut editor).unwrap();

        assert_eq!(editor.history_len(), len);
        let a = editor.document().get(&"a".into()).unwrap();
        assert!((a.x - x_after_undo).abs() < f64::EPSILON);
        assert!(!editor.history().in_transaction());
    }

    #[test]
    fn test_element_deleted_mid_drag_is_skipped() {
        let mut editor = editor_with(&[("a", 0.0), ("b", 100.0)]);
        editor.select_all().unwrap();
        let mut session = InteractionSession::new();
        session.press(&mut editor, Point::new(10.0, 10.0), Modifiers::NONE).unwrap();
        editor.dispatch(Command::DeleteElement { id: "a".into() }).unwrap();
        session.move_to(&mut editor, Point::new(30.0, 10.0)).unwrap();
        session.release(&mut editor).unwrap();

        assert!(!editor.document().contains(&"a".into()));
        let b = editor.document().get(&"b".into()).unwrap();
        assert!((b.x - 120.0).abs() < f64::EPSILON);
    }
}
