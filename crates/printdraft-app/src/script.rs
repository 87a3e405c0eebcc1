//! Session scripts: a JSON list of editing steps replayed against an editor.

use crate::actions::EditorAction;
use crate::error::AppResult;
use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use printdraft_core::platform::Passthrough;
use printdraft_core::{
    Alignment, Command, Editor, ElementDescriptor, InteractionSession, Modifiers, StaticCatalog,
    Template,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Dispatch a raw command.
    Dispatch { command: Command },
    /// Add an element built from a descriptor.
    Add { element: ElementDescriptor },
    /// Run an action directly.
    Action { action: EditorAction },
    /// Press a key chord, resolved through the shortcut registry.
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move { x: f64, y: f64 },
    Release,
    Align { alignment: Alignment },
    Template { id: String },
    Optimize { platform: String },
}

/// A full session: templates available to the session and the steps to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub templates: Vec<Template>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replay every step in order, stopping at the first error.
    pub fn run(&self, editor: &mut Editor) -> AppResult<()> {
        let catalog = self
            .templates
            .iter()
            .cloned()
            .fold(StaticCatalog::new(), StaticCatalog::with);
        let mut session = InteractionSession::new();

        for (index, step) in self.steps.iter().enumerate() {
            log::debug!("Step {index}: {step:?}");
            match step {
                Step::Dispatch { command } => editor.dispatch(command.clone())?,
                Step::Add { element } => {
                    editor.add_element(element)?;
                }
                Step::Action { action } => action.perform(editor)?,
                Step::Key { key, modifiers } => match ShortcutRegistry::resolve(key, *modifiers) {
                    Some(action) => action.perform(editor)?,
                    None => log::warn!("No shortcut bound to {key}"),
                },
                Step::Press { x, y, modifiers } => {
                    session.press(editor, Point::new(*x, *y), *modifiers)?
                }
                Step::Move { x, y } => session.move_to(editor, Point::new(*x, *y))?,
                Step::Release => session.release(editor)?,
                Step::Align { alignment } => {
                    editor.align_selection(*alignment)?;
                }
                Step::Template { id } => {
                    editor.apply_template(&catalog, id)?;
                }
                Step::Optimize { platform } => editor.optimize_for(&Passthrough, platform)?,
            }
        }

        // An unfinished gesture still ends as one history entry.
        session.release(editor)?;
        Ok(())
    }
}
