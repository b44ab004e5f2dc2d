//! Command Interface Layer
//!
//! A small headless editor that hosts and tests use as the reference document model for the
//! insert-markers command.
//!
//! # Overview
//!
//! [`CommandExecutor`] wraps an [`EditorCore`] (rope-backed text plus a multi-cursor selection
//! set) and executes [`Command`]s against it:
//!
//! - **Text Editing**: insert line markers for the current selections, apply a planned
//!   [`EditBatch`] atomically, undo and redo
//! - **Cursor Operations**: move the caret and set one or more selections
//!
//! Every batch edit is all-or-nothing and is recorded as exactly one undo step.
//!
//! # Example
//!
//! ```rust
//! use line_marker::{Command, CommandExecutor, CursorCommand, EditCommand, Position};
//!
//! let mut executor = CommandExecutor::new("fn main() {\n    run();\n}");
//!
//! executor.execute(Command::Cursor(CursorCommand::SetSelection {
//!     start: Position::new(0, 4),
//!     end: Position::new(1, 2),
//! })).unwrap();
//! executor.execute(Command::Edit(EditCommand::insert_markers())).unwrap();
//!
//! assert_eq!(executor.editor().get_text(), "# fn main() {\n    # run();\n}");
//!
//! executor.execute(Command::Edit(EditCommand::Undo)).unwrap();
//! assert_eq!(executor.editor().get_text(), "fn main() {\n    run();\n}");
//! ```

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::line_index::LineIndex;
use crate::marker::{
    DEFAULT_MARKER, DuplicateLinePolicy, EditBatch, MarkerError, MarkerInsertion,
    plan_marker_edits,
};
use crate::selection_set::{normalize_selections, selection_direction};
use crate::text::char_len;
use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selection range
///
/// `start` is the anchor and `end` the active end, so `start` may come after `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selection start position
    pub start: Position,
    /// Selection end position
    pub end: Position,
    /// Selection direction
    pub direction: SelectionDirection,
}

impl Selection {
    /// Selection from `start` (anchor) to `end` (active end).
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            direction: selection_direction(start, end),
        }
    }

    /// Empty selection (a caret) at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// Returns `true` if the selection is a bare caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (from start to end)
    Forward,
    /// Backward selection (from end to start)
    Backward,
}

/// Text editing commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert `marker` at the first non-whitespace column of every line spanned by the
    /// current selections, as one atomic undoable edit.
    InsertMarkers {
        /// Literal text to insert on each line.
        marker: String,
        /// How lines spanned by several selections are treated.
        policy: DuplicateLinePolicy,
    },
    /// Apply a pre-planned batch of insertions atomically, as one undo step.
    ApplyBatch {
        /// Insertions, positioned against the current document.
        batch: EditBatch,
    },
    /// Undo the last batch
    Undo,
    /// Redo the last undone batch
    Redo,
}

impl EditCommand {
    /// [`EditCommand::InsertMarkers`] with `"# "` and line de-duplication.
    pub fn insert_markers() -> Self {
        Self::InsertMarkers {
            marker: DEFAULT_MARKER.to_string(),
            policy: DuplicateLinePolicy::Collapse,
        }
    }
}

/// Cursor & selection commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorCommand {
    /// Collapse all selections into one caret at the specified position
    MoveTo {
        /// Target logical line index.
        line: usize,
        /// Target column in characters (will be clamped to line length).
        column: usize,
    },
    /// Replace all selections with a single selection
    SetSelection {
        /// Selection start position.
        start: Position,
        /// Selection end position.
        end: Position,
    },
    /// Set multiple selections/multi-cursor (the first one is primary)
    SetSelections {
        /// All selections, primary first.
        selections: Vec<Selection>,
    },
}

/// Unified command enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text editing commands
    Edit(EditCommand),
    /// Cursor command
    Cursor(CursorCommand),
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// A batch edit was applied
    Inserted {
        /// Number of insertions applied.
        count: usize,
    },
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Invalid position
    #[error("Invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// Planning failed
    #[error(transparent)]
    Marker(#[from] MarkerError),
    /// Undo stack is empty
    #[error("Nothing to undo")]
    NothingToUndo,
    /// Redo stack is empty
    #[error("Nothing to redo")]
    NothingToRedo,
}

#[derive(Debug, Clone)]
struct UndoStep {
    group_id: usize,
    /// Edits in the order they were applied.
    edits: Vec<TextDeltaEdit>,
    before_selections: Vec<Selection>,
    after_selections: Vec<Selection>,
}

#[derive(Debug)]
struct UndoRedoManager {
    undo_stack: Vec<UndoStep>,
    redo_stack: Vec<UndoStep>,
    max_undo: usize,
    /// Clean point tracking. Uses `undo_stack.len()` as the saved position in the linear history.
    /// When `redo_stack` is non-empty, `clean_index` may be greater than `undo_stack.len()`.
    clean_index: Option<usize>,
    next_group_id: usize,
}

impl UndoRedoManager {
    fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            clean_index: Some(0),
            next_group_id: 0,
        }
    }

    fn is_clean(&self) -> bool {
        self.clean_index == Some(self.undo_stack.len())
    }

    fn mark_clean(&mut self) {
        self.clean_index = Some(self.undo_stack.len());
    }

    fn clear_redo_and_adjust_clean(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }

        // If clean point is in redo area, it becomes unreachable after clearing redo.
        if let Some(clean_index) = self.clean_index
            && clean_index > self.undo_stack.len()
        {
            self.clean_index = None;
        }

        self.redo_stack.clear();
    }

    fn push_step(
        &mut self,
        edits: Vec<TextDeltaEdit>,
        before_selections: Vec<Selection>,
        after_selections: Vec<Selection>,
    ) -> usize {
        self.clear_redo_and_adjust_clean();

        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.remove(0);
            self.clean_index = match self.clean_index {
                Some(0) | None => None,
                Some(clean_index) => Some(clean_index - 1),
            };
        }

        let group_id = self.next_group_id;
        self.next_group_id = self.next_group_id.wrapping_add(1);

        self.undo_stack.push(UndoStep {
            group_id,
            edits,
            before_selections,
            after_selections,
        });
        group_id
    }
}

/// Editor Core state
///
/// Text lives in a rope-backed [`LineIndex`]; the selection set always holds at least one
/// selection, the first being primary.
///
/// # Example
///
/// ```rust
/// use line_marker::EditorCore;
///
/// let core = EditorCore::new("Hello\nWorld");
/// assert_eq!(core.line_count(), 2);
/// assert_eq!(core.get_text(), "Hello\nWorld");
/// ```
#[derive(Debug, Clone)]
pub struct EditorCore {
    /// Line index (document text)
    pub line_index: LineIndex,
    selections: Vec<Selection>,
}

impl EditorCore {
    /// Create a new Editor Core with a caret at the start of the document
    pub fn new(text: &str) -> Self {
        Self {
            line_index: LineIndex::from_text(text),
            selections: vec![Selection::caret(Position::new(0, 0))],
        }
    }

    /// Get text content
    pub fn get_text(&self) -> String {
        self.line_index.get_text()
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.line_index.char_count()
    }

    /// Text of one line, without its line ending
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.line_index.get_line_text(line)
    }

    /// Active end of the primary selection
    pub fn cursor_position(&self) -> Position {
        self.selections[0].end
    }

    /// All selections, primary first
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        let line_len = self.line_index.line_len_chars(line).unwrap_or(0);
        Position::new(line, pos.column.min(line_len))
    }

    fn clamp_selection(&self, selection: &Selection) -> Selection {
        Selection::new(
            self.clamp_position(selection.start),
            self.clamp_position(selection.end),
        )
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        let Some(primary) = selections.first().map(|s| self.clamp_selection(s)) else {
            return;
        };

        let rest: Vec<Selection> = selections[1..]
            .iter()
            .map(|s| self.clamp_selection(s))
            .collect();

        let mut out = vec![primary.clone()];
        out.extend(
            normalize_selections(rest)
                .into_iter()
                .filter(|s| *s != primary),
        );
        self.selections = out;
    }
}

/// Command executor
///
/// Owns an [`EditorCore`] plus its undo/redo history, and records a [`TextDelta`] for every
/// text change.
///
/// # Example
///
/// ```rust
/// use line_marker::{Command, CommandExecutor, CursorCommand, Position};
///
/// let mut executor = CommandExecutor::new("Hello");
///
/// executor.execute(Command::Cursor(CursorCommand::MoveTo {
///     line: 0,
///     column: 3,
/// })).unwrap();
///
/// assert_eq!(executor.editor().cursor_position(), Position::new(0, 3));
/// ```
#[derive(Debug)]
pub struct CommandExecutor {
    editor: EditorCore,
    undo_redo: UndoRedoManager,
    /// Structured delta for the last executed text modification (cleared on each `execute()` call).
    last_text_delta: Option<TextDelta>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(text: &str) -> Self {
        Self {
            editor: EditorCore::new(text),
            undo_redo: UndoRedoManager::new(1000),
            last_text_delta: None,
        }
    }

    /// Execute command
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        self.last_text_delta = None;

        match command {
            Command::Edit(edit_cmd) => self.execute_edit(edit_cmd),
            Command::Cursor(cursor_cmd) => self.execute_cursor(cursor_cmd),
        }
    }

    /// Get the structured text delta produced by the last successful `execute()` call, if any.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_ref()
    }

    /// Take the structured text delta produced by the last successful `execute()` call, if any.
    pub fn take_last_text_delta(&mut self) -> Option<TextDelta> {
        self.last_text_delta.take()
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.undo_redo.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.undo_redo.redo_stack.is_empty()
    }

    /// Undo stack depth (one step per applied batch)
    pub fn undo_depth(&self) -> usize {
        self.undo_redo.undo_stack.len()
    }

    /// Redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.undo_redo.redo_stack.len()
    }

    /// Whether current state is at clean point (for dirty tracking)
    pub fn is_clean(&self) -> bool {
        self.undo_redo.is_clean()
    }

    /// Mark current state as clean point (call after saving file)
    pub fn mark_clean(&mut self) {
        self.undo_redo.mark_clean();
    }

    /// Get a reference to the Editor Core
    pub fn editor(&self) -> &EditorCore {
        &self.editor
    }

    fn execute_edit(&mut self, command: EditCommand) -> Result<CommandResult, CommandError> {
        match command {
            EditCommand::InsertMarkers { marker, policy } => {
                let batch = plan_marker_edits(
                    &self.editor.line_index,
                    &self.editor.selections,
                    &marker,
                    policy,
                )?;
                self.apply_batch(batch)
            }
            EditCommand::ApplyBatch { batch } => self.apply_batch(batch),
            EditCommand::Undo => self.execute_undo_command(),
            EditCommand::Redo => self.execute_redo_command(),
        }
    }

    fn execute_cursor(&mut self, command: CursorCommand) -> Result<CommandResult, CommandError> {
        match command {
            CursorCommand::MoveTo { line, column } => {
                if line >= self.editor.line_count() {
                    return Err(CommandError::InvalidPosition { line, column });
                }
                self.editor
                    .set_selections(vec![Selection::caret(Position::new(line, column))]);
            }
            CursorCommand::SetSelection { start, end } => {
                self.editor.set_selections(vec![Selection::new(start, end)]);
            }
            CursorCommand::SetSelections { selections } => {
                self.editor.set_selections(selections);
            }
        }
        Ok(CommandResult::Success)
    }

    /// Validate every insertion, then apply all of them; nothing is applied on error.
    fn apply_batch(&mut self, batch: EditBatch) -> Result<CommandResult, CommandError> {
        if batch.is_empty() {
            return Ok(CommandResult::Inserted { count: 0 });
        }

        let mut resolved: Vec<(usize, MarkerInsertion)> = Vec::with_capacity(batch.len());
        for insertion in batch {
            let Position { line, column } = insertion.position;
            match self.editor.line_index.line_len_chars(line) {
                Some(line_len) if column <= line_len => {}
                _ => return Err(CommandError::InvalidPosition { line, column }),
            }
            let offset = self.editor.line_index.position_to_char_offset(line, column);
            resolved.push((offset, insertion));
        }

        // Stable ascending sort, then apply from the end so earlier offsets stay valid and
        // same-offset insertions keep their batch order in the result.
        resolved.sort_by_key(|(offset, _)| *offset);

        let before_char_count = self.editor.char_count();
        let before_selections = self.editor.selections.clone();

        let mut edits: Vec<TextDeltaEdit> = Vec::with_capacity(resolved.len());
        for (offset, insertion) in resolved.iter().rev() {
            self.editor.line_index.insert(*offset, &insertion.text);
            edits.push(TextDeltaEdit::insertion(*offset, insertion.text.clone()));
        }

        let shifts = CaretShifts::new(resolved.iter().map(|(_, i)| i));
        self.editor.selections = before_selections
            .iter()
            .map(|s| shifts.shift_selection(s))
            .collect();

        let group_id = self.undo_redo.push_step(
            edits.clone(),
            before_selections,
            self.editor.selections.clone(),
        );

        tracing::debug!(
            insertions = edits.len(),
            undo_group = group_id,
            "applied batch edit"
        );

        let count = edits.len();
        self.last_text_delta = Some(TextDelta {
            before_char_count,
            after_char_count: self.editor.char_count(),
            edits,
            undo_group_id: Some(group_id),
        });

        Ok(CommandResult::Inserted { count })
    }

    fn execute_undo_command(&mut self) -> Result<CommandResult, CommandError> {
        let step = self
            .undo_redo
            .undo_stack
            .pop()
            .ok_or(CommandError::NothingToUndo)?;

        let before_char_count = self.editor.char_count();
        let inverse: Vec<TextDeltaEdit> =
            step.edits.iter().rev().map(TextDeltaEdit::inverted).collect();
        self.apply_delta_edits(&inverse);
        self.editor.selections = step.before_selections.clone();

        self.last_text_delta = Some(TextDelta {
            before_char_count,
            after_char_count: self.editor.char_count(),
            edits: inverse,
            undo_group_id: Some(step.group_id),
        });
        self.undo_redo.redo_stack.push(step);

        Ok(CommandResult::Success)
    }

    fn execute_redo_command(&mut self) -> Result<CommandResult, CommandError> {
        let step = self
            .undo_redo
            .redo_stack
            .pop()
            .ok_or(CommandError::NothingToRedo)?;

        let before_char_count = self.editor.char_count();
        self.apply_delta_edits(&step.edits);
        self.editor.selections = step.after_selections.clone();

        self.last_text_delta = Some(TextDelta {
            before_char_count,
            after_char_count: self.editor.char_count(),
            edits: step.edits.clone(),
            undo_group_id: Some(step.group_id),
        });
        self.undo_redo.undo_stack.push(step);

        Ok(CommandResult::Success)
    }

    fn apply_delta_edits(&mut self, edits: &[TextDeltaEdit]) {
        for edit in edits {
            self.editor.line_index.delete(edit.start, edit.deleted_len());
            self.editor.line_index.insert(edit.start, &edit.inserted_text);
        }
    }
}

/// Per-position caret shifts for one applied batch.
///
/// Insertion positions are kept sorted next to a running total of inserted chars, so each
/// endpoint is shifted with two binary searches.
struct CaretShifts {
    positions: Vec<Position>,
    /// `totals[k]` is the number of chars inserted by the first `k` positions.
    totals: Vec<usize>,
}

impl CaretShifts {
    fn new<'a>(insertions: impl IntoIterator<Item = &'a MarkerInsertion>) -> Self {
        let mut sorted: Vec<(Position, usize)> = insertions
            .into_iter()
            .map(|i| (i.position, char_len(&i.text)))
            .collect();
        sorted.sort_by_key(|(position, _)| *position);

        let mut totals = Vec::with_capacity(sorted.len() + 1);
        totals.push(0);
        let mut running = 0;
        for (_, len) in &sorted {
            running += len;
            totals.push(running);
        }

        Self {
            positions: sorted.into_iter().map(|(position, _)| position).collect(),
            totals,
        }
    }

    /// Move `pos` past every insertion made at or before its column on its line.
    fn shift_position(&self, pos: Position) -> Position {
        let line_start = self.positions.partition_point(|p| p.line < pos.line);
        let upto = self.positions.partition_point(|p| *p <= pos);
        let shift = self.totals[upto] - self.totals[line_start];
        Position::new(pos.line, pos.column + shift)
    }

    fn shift_selection(&self, selection: &Selection) -> Selection {
        Selection {
            start: self.shift_position(selection.start),
            end: self.shift_position(selection.end),
            direction: selection.direction,
        }
    }
}
