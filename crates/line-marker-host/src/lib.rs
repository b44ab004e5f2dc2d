#![warn(missing_docs)]
//! `line-marker-host` - host integration for `line-marker`.
//!
//! This crate is the thin adapter between a host editor and the pure planner in
//! `line_marker`: the host collaborator traits ([`EditorHost`], [`TextEditor`]), the
//! insert-markers command handler, a command registry with disposable registrations, the
//! activate/deactivate lifecycle, and the contribution manifest declaring the command and its
//! default key binding.
//!
//! # Example
//!
//! ```rust
//! use line_marker::{Position, Selection};
//! use line_marker_host::{
//!     CommandRegistry, ExtensionContext, INSERT_MARKERS_COMMAND, MemoryHost, activate,
//! };
//!
//! let mut registry = CommandRegistry::new();
//! let mut context = ExtensionContext::new();
//! activate(&mut context, &mut registry).unwrap();
//!
//! let mut host = MemoryHost::new();
//! let id = host.open("a\n  b");
//! host.set_selections(id, vec![Selection::new(Position::new(0, 0), Position::new(1, 0))])
//!     .unwrap();
//!
//! registry.execute(INSERT_MARKERS_COMMAND, &mut host).unwrap();
//! assert_eq!(host.editor(id).unwrap().editor().get_text(), "# a\n  # b");
//!
//! context.dispose_all(&mut registry);
//! assert!(!registry.contains(INSERT_MARKERS_COMMAND));
//! ```

pub mod command;
pub mod error;
pub mod extension;
pub mod host;
pub mod keymap;
pub mod logging;
pub mod manifest;
pub mod memory;
pub mod registry;

pub use command::{
    INSERT_MARKERS_COMMAND, INSERT_MARKERS_TITLE, insert_markers, insert_markers_with,
};
pub use error::{HostError, ManifestError, RegistryError};
pub use extension::{ExtensionContext, activate, deactivate};
pub use host::{EditorHost, HostLines, TextEditor};
pub use keymap::{Keystroke, Modifiers};
pub use manifest::{CommandContribution, Contributes, ExtensionManifest, KeybindingContribution};
pub use memory::{EditorId, MemoryHost};
pub use registry::{CommandHandler, CommandRegistry, Disposable};
