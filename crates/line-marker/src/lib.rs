#![warn(missing_docs)]
//! Line Marker - headless planning for the insert-markers editor command
//!
//! # Overview
//!
//! `line-marker` inserts a fixed marker (`"# "`) at the first non-whitespace column of every
//! line spanned by the current selections. It is split in two layers:
//!
//! - a **pure planner** ([`insertion_points`], [`plan_marker_edits`]) that takes document
//!   lines and selections explicitly and returns the insertions to make;
//! - a **reference editor** ([`CommandExecutor`]) that applies a planned [`EditBatch`]
//!   atomically, as one undo step, and reports a structured [`TextDelta`].
//!
//! Host integration (command registration, activation, the active-editor lookup) lives in the
//! `line-marker-host` crate.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (reference editor)       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Marker planning (pure)                     │  ← Insertion points
//! ├─────────────────────────────────────────────┤
//! │  Selection set helpers                      │  ← Line spans
//! ├─────────────────────────────────────────────┤
//! │  Line Index (Rope-based)                    │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use line_marker::{
//!     DuplicateLinePolicy, Position, Selection, TextLines, DEFAULT_MARKER, plan_marker_edits,
//! };
//!
//! let lines = TextLines::new("a\n  hello\n   \n");
//! let selections = [Selection::new(Position::new(1, 3), Position::new(2, 0))];
//!
//! let batch =
//!     plan_marker_edits(&lines, &selections, DEFAULT_MARKER, DuplicateLinePolicy::Collapse)
//!         .unwrap();
//!
//! let columns: Vec<_> = batch.insertions().iter().map(|i| i.position).collect();
//! assert_eq!(columns, vec![Position::new(1, 2), Position::new(2, 0)]);
//! ```
//!
//! # Module Description
//!
//! - [`marker`] - insertion-point planning and edit batches
//! - [`commands`] - reference editor and command interface
//! - [`line_index`] - Rope based line index
//! - [`delta`] - structured text deltas

pub mod commands;
pub mod delta;
pub mod line_index;
pub mod marker;
mod selection_set;
mod text;

pub use commands::{
    Command, CommandError, CommandExecutor, CommandResult, CursorCommand, EditCommand, EditorCore,
    Position, Selection, SelectionDirection,
};
pub use delta::{TextDelta, TextDeltaEdit};
pub use line_index::LineIndex;
pub use marker::{
    DEFAULT_MARKER, DuplicateLinePolicy, EditBatch, LineSource, MarkerError, MarkerInsertion,
    TextLines, first_non_whitespace_column, insertion_points, plan_marker_edits,
};
pub use selection_set::{selection_line_span, selection_min_max};
