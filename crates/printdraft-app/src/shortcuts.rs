//! Keyboard shortcut registry and documentation.

use crate::actions::EditorAction;
use printdraft_core::Modifiers;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: EditorAction,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool, action: EditorAction) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Check a key press against this shortcut. Cmd counts as Ctrl.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == (modifiers.ctrl || modifiers.meta)
            && self.shift == modifiers.shift
    }

    pub fn description(&self) -> &'static str {
        self.action.description()
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, EditorAction::Undo),
            Shortcut::new("Z", true, true, EditorAction::Redo),
            Shortcut::new("Y", true, false, EditorAction::Redo),
            Shortcut::new("A", true, false, EditorAction::SelectAll),
            Shortcut::new("C", true, false, EditorAction::Copy),
            Shortcut::new("X", true, false, EditorAction::Cut),
            Shortcut::new("V", true, false, EditorAction::Paste),
            Shortcut::new("D", true, false, EditorAction::Duplicate),
            Shortcut::new("Delete", false, false, EditorAction::DeleteSelected),
            Shortcut::new("Backspace", false, false, EditorAction::DeleteSelected),
            Shortcut::new("Escape", false, false, EditorAction::ClearSelection),
        ]
    }

    /// Find the action bound to a key press.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<EditorAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, modifiers))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn test_undo_redo_bindings() {
        assert_eq!(ShortcutRegistry::resolve("z", ctrl()), Some(EditorAction::Undo));
        let ctrl_shift = Modifiers { shift: true, ..ctrl() };
        assert_eq!(ShortcutRegistry::resolve("Z", ctrl_shift), Some(EditorAction::Redo));
        assert_eq!(ShortcutRegistry::resolve("y", ctrl()), Some(EditorAction::Redo));
    }

    #[test]
    fn test_meta_counts_as_ctrl() {
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutRegistry::resolve("c", cmd), Some(EditorAction::Copy));
    }

    #[test]
    fn test_unmodified_keys() {
        assert_eq!(
            ShortcutRegistry::resolve("Backspace", Modifiers::NONE),
            Some(EditorAction::DeleteSelected)
        );
        assert_eq!(
            ShortcutRegistry::resolve("Escape", Modifiers::NONE),
            Some(EditorAction::ClearSelection)
        );
        // Plain "z" without Ctrl does nothing.
        assert_eq!(ShortcutRegistry::resolve("z", Modifiers::NONE), None);
    }

    #[test]
    fn test_format() {
        let redo = Shortcut::new("Z", true, true, EditorAction::Redo);
        assert_eq!(redo.format(), "Ctrl+Shift+Z");
    }
}
