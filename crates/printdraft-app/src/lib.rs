//! PrintDraft Application
//!
//! Command-line shell around the core editor: configuration loading,
//! keyboard shortcuts and session script replay.

mod actions;
mod error;
mod script;
mod shortcuts;

pub use actions::EditorAction;
pub use error::{AppError, AppResult};
pub use script::{Script, Step};
pub use shortcuts::{Shortcut, ShortcutRegistry};

use clap::Parser;
use printdraft_core::{Editor, EditorConfig};
use std::path::{Path, PathBuf};

/// Command-line arguments for printdraft.
#[derive(Debug, Clone, Parser)]
#[command(name = "printdraft")]
#[command(about = "Replay a PrintDraft editing session and print the resulting design")]
#[command(version)]
pub struct CliArgs {
    /// Editor configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the keyboard shortcuts
    #[arg(long)]
    pub shortcuts: bool,

    /// Session script to replay (JSON)
    #[arg(required_unless_present = "shortcuts")]
    pub script: Option<PathBuf>,
}

/// Load an editor configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> AppResult<EditorConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(EditorConfig::from_json(&json)?)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Replay a script file against a fresh editor and return the resulting
/// document as JSON.
pub fn run_session(config: EditorConfig, script: &Path) -> AppResult<String> {
    let script = Script::load(script)?;
    let mut editor = Editor::with_config(config)?;
    script.run(&mut editor)?;
    log::info!(
        "Session finished: {} element(s), {} history entries",
        editor.document().len(),
        editor.history_len()
    );
    Ok(editor.document().to_json()?)
}
