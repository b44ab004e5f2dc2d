//! Host collaborator contract.
//!
//! The host editor owns documents, selections and the undo stack. The command handler only
//! needs three things from it: the active editor, per-line text, and a batched insert that is
//! applied all-or-nothing as one undo step.

use crate::error::HostError;
use line_marker::{Command, CommandExecutor, EditBatch, EditCommand, LineSource, Selection};
use std::borrow::Cow;

/// One text editor surface as seen by a command.
pub trait TextEditor {
    /// Current selections, primary first.
    fn selections(&self) -> Vec<Selection>;

    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text of `line` without its line ending.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Apply every insertion of `batch` or none of them, as a single undo step.
    fn apply_edits(&mut self, batch: EditBatch) -> Result<(), HostError>;
}

/// The application hosting the extension.
pub trait EditorHost {
    /// The editor the user is focused on, if any.
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor>;
}

/// Read-only [`LineSource`] view over a [`TextEditor`].
pub struct HostLines<'a, E: ?Sized>(pub &'a E);

impl<E: TextEditor + ?Sized> LineSource for HostLines<'_, E> {
    fn line_count(&self) -> usize {
        self.0.line_count()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.0.line_text(line).map(Cow::Owned)
    }
}

impl TextEditor for CommandExecutor {
    fn selections(&self) -> Vec<Selection> {
        self.editor().selections().to_vec()
    }

    fn line_count(&self) -> usize {
        self.editor().line_count()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.editor().line_text(line)
    }

    fn apply_edits(&mut self, batch: EditBatch) -> Result<(), HostError> {
        self.execute(Command::Edit(EditCommand::ApplyBatch { batch }))?;
        Ok(())
    }
}
