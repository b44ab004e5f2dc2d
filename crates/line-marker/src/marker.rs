//! Line-marker planning.
//!
//! Pure functions that turn `(document lines, selections)` into the list of insertions the
//! insert-markers command submits. Nothing here touches editor state; hosts feed the current
//! line text and selection set in, and apply the resulting [`EditBatch`] however they apply
//! edits.
//!
//! # Example
//!
//! ```rust
//! use line_marker::{DuplicateLinePolicy, Position, Selection, insertion_points};
//!
//! let lines = ["fn main() {", "    body();", "}"];
//! let selections = [Selection::new(Position::new(0, 3), Position::new(1, 0))];
//!
//! let points = insertion_points(&lines[..], &selections, DuplicateLinePolicy::Collapse).unwrap();
//! assert_eq!(points, vec![Position::new(0, 0), Position::new(1, 4)]);
//! ```

use crate::commands::{Position, Selection};
use crate::line_index::LineIndex;
use crate::selection_set::selection_line_span;
use crate::text::split_lines_preserve_trailing;
use std::borrow::Cow;

/// Marker inserted by the insert-markers command.
pub const DEFAULT_MARKER: &str = "# ";

/// Read-only line access used by the planner.
pub trait LineSource {
    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Text of `line` without its line ending, or `None` past the last line.
    fn line_text(&self, line: usize) -> Option<Cow<'_, str>>;
}

impl LineSource for LineIndex {
    fn line_count(&self) -> usize {
        LineIndex::line_count(self)
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get_line_text(line).map(Cow::Owned)
    }
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get(line).map(|s| Cow::Borrowed(s.as_ref()))
    }
}

/// Lines of a borrowed string, split once with the same line-break rules as [`LineIndex`].
///
/// ```rust
/// use line_marker::{LineSource, TextLines};
///
/// let lines = TextLines::new("a\r\n  b\u{2028}c");
/// assert_eq!(lines.line_count(), 3);
/// assert_eq!(lines.line_text(1).as_deref(), Some("  b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextLines<'a> {
    /// Split `text` into lines; a trailing line break leaves an empty last line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines_preserve_trailing(text),
        }
    }
}

impl<'a> From<&'a str> for TextLines<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl LineSource for TextLines<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.lines.get(line).map(|s| Cow::Borrowed(*s))
    }
}

/// What to do when several selections span the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateLinePolicy {
    /// Each line receives the marker once, however many selections span it.
    #[default]
    Collapse,
    /// Each selection contributes its own insertion, so a line spanned by two selections
    /// receives the marker twice.
    PerSelection,
}

/// Planning error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    /// A selection names a line the document does not have.
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange {
        /// Offending line.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },
}

/// Insertion of literal text at a logical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerInsertion {
    /// Where to insert (column in characters).
    pub position: Position,
    /// Literal text to insert.
    pub text: String,
}

impl MarkerInsertion {
    /// Create an insertion of `text` at `position`.
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Insertions that must be applied together, as one atomic edit and one undo step.
///
/// All positions refer to the document **before** any insertion of the batch is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBatch {
    insertions: Vec<MarkerInsertion>,
}

impl EditBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an insertion to the batch.
    pub fn push(&mut self, insertion: MarkerInsertion) {
        self.insertions.push(insertion);
    }

    /// Insertions in the order they were planned.
    pub fn insertions(&self) -> &[MarkerInsertion] {
        &self.insertions
    }

    /// Number of insertions.
    pub fn len(&self) -> usize {
        self.insertions.len()
    }

    /// Returns `true` if the batch holds no insertions.
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }
}

impl FromIterator<MarkerInsertion> for EditBatch {
    fn from_iter<I: IntoIterator<Item = MarkerInsertion>>(iter: I) -> Self {
        Self {
            insertions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EditBatch {
    type Item = MarkerInsertion;
    type IntoIter = std::vec::IntoIter<MarkerInsertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.insertions.into_iter()
    }
}

/// Column (in characters) of the first non-whitespace character of `line`.
///
/// Empty and whitespace-only lines yield `0`.
pub fn first_non_whitespace_column(line: &str) -> usize {
    line.chars().position(|c| !c.is_whitespace()).unwrap_or(0)
}

/// Compute one insertion point per affected line.
///
/// A selection affects every line from its first to its last endpoint line, inclusive.
/// Points are returned in ascending document order. With
/// [`DuplicateLinePolicy::PerSelection`] a line spanned by `n` selections appears `n` times.
pub fn insertion_points<L>(
    lines: &L,
    selections: &[Selection],
    policy: DuplicateLinePolicy,
) -> Result<Vec<Position>, MarkerError>
where
    L: LineSource + ?Sized,
{
    let mut touched: Vec<usize> = selections.iter().flat_map(selection_line_span).collect();
    touched.sort_unstable();
    if policy == DuplicateLinePolicy::Collapse {
        touched.dedup();
    }

    touched
        .into_iter()
        .map(|line| {
            let text = lines
                .line_text(line)
                .ok_or_else(|| MarkerError::LineOutOfRange {
                    line,
                    line_count: lines.line_count(),
                })?;
            Ok(Position::new(line, first_non_whitespace_column(&text)))
        })
        .collect()
}

/// Plan the batch that inserts `marker` at every insertion point.
pub fn plan_marker_edits<L>(
    lines: &L,
    selections: &[Selection],
    marker: &str,
    policy: DuplicateLinePolicy,
) -> Result<EditBatch, MarkerError>
where
    L: LineSource + ?Sized,
{
    let points = insertion_points(lines, selections, policy)?;
    tracing::trace!(
        selections = selections.len(),
        insertions = points.len(),
        "planned marker edits"
    );

    Ok(points
        .into_iter()
        .map(|position| MarkerInsertion::new(position, marker))
        .collect())
}
