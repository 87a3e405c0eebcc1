//! PrintDraft Core Library
//!
//! Platform-agnostic document model and editing logic for the PrintDraft
//! design editor: elements, command dispatch, undo/redo history, selection,
//! clipboard and pointer interaction.

pub mod align;
pub mod clipboard;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod id;
pub mod interaction;
pub mod platform;
pub mod selection;
pub mod template;

pub use align::Alignment;
pub use clipboard::Clipboard;
pub use color::ElementColor;
pub use command::Command;
pub use config::EditorConfig;
pub use document::{DesignDocument, ZOrder};
pub use editor::Editor;
pub use element::{
    DesignElement, ElementId, ElementKind, ElementPatch, FontWeight, PatternVariant, ShapeVariant,
};
pub use error::{EditorError, EditorResult};
pub use history::History;
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use interaction::{InteractionSession, Modifiers};
pub use platform::PlatformOptimizer;
pub use template::{ElementDescriptor, StaticCatalog, Template, TemplateProvider};
