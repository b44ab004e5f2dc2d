//! In-memory host backed by the reference editor.

use crate::error::HostError;
use crate::host::{EditorHost, TextEditor};
use line_marker::{Command, CommandExecutor, CursorCommand, Selection};

/// Index of an editor opened in a [`MemoryHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorId(usize);

/// A host with any number of open editors and at most one focused.
#[derive(Debug, Default)]
pub struct MemoryHost {
    editors: Vec<CommandExecutor>,
    active: Option<usize>,
}

impl MemoryHost {
    /// Create a host with no open editors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an editor on `text`; the first editor opened becomes active.
    pub fn open(&mut self, text: &str) -> EditorId {
        self.editors.push(CommandExecutor::new(text));
        let index = self.editors.len() - 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        EditorId(index)
    }

    /// Focus `id`, or nothing when `None`.
    pub fn focus(&mut self, id: Option<EditorId>) {
        self.active = id.map(|EditorId(index)| index);
    }

    /// Currently focused editor.
    pub fn active_id(&self) -> Option<EditorId> {
        self.active.map(EditorId)
    }

    /// Borrow an editor.
    pub fn editor(&self, id: EditorId) -> Option<&CommandExecutor> {
        self.editors.get(id.0)
    }

    /// Replace the selections of editor `id`.
    ///
    /// Fails with [`HostError::UnknownEditor`] when `id` was not opened by this host.
    pub fn set_selections(
        &mut self,
        id: EditorId,
        selections: Vec<Selection>,
    ) -> Result<(), HostError> {
        let editor = self
            .editors
            .get_mut(id.0)
            .ok_or(HostError::UnknownEditor(id))?;
        editor.execute(Command::Cursor(CursorCommand::SetSelections { selections }))?;
        Ok(())
    }
}

impl EditorHost for MemoryHost {
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor> {
        let index = self.active?;
        self.editors
            .get_mut(index)
            .map(|editor| editor as &mut dyn TextEditor)
    }
}
