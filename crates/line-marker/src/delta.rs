//! Structured text change deltas.
//!
//! Every successful batch edit, undo or redo produces a [`TextDelta`] so hosts can mirror the
//! change (incremental sync, change highlighting) without diffing old and new text.
//! Offsets are **character offsets** (Unicode scalar values).

/// A single text edit expressed in character offsets.
///
/// - `start` is a character offset in the document **at the time this edit is applied**.
/// - The deleted range is defined by the length (in `char`s) of `deleted_text`.
/// - Edits inside a [`TextDelta`] must be applied **in order**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextDeltaEdit {
    /// Pure insertion of `text` at `start`.
    pub fn insertion(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: String::new(),
            inserted_text: text.into(),
        }
    }

    /// Pure deletion of `text` found at `start`.
    pub fn deletion(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: text.into(),
            inserted_text: String::new(),
        }
    }

    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// The edit that reverts this one.
    pub fn inverted(&self) -> Self {
        Self {
            start: self.start,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
        }
    }
}

/// A structured description of a document text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Character count before applying `edits`.
    pub before_char_count: usize,
    /// Character count after applying `edits`.
    pub after_char_count: usize,
    /// Ordered list of edits that transforms the "before" document into the "after" document.
    pub edits: Vec<TextDeltaEdit>,
    /// Undo group id associated with this change.
    pub undo_group_id: Option<usize>,
}

impl TextDelta {
    /// Returns `true` if this delta contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the delta to a plain string. Mostly useful for hosts keeping a shadow copy.
    pub fn apply_to(&self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        for edit in &self.edits {
            let start = edit.start.min(chars.len());
            let end = start.saturating_add(edit.deleted_len()).min(chars.len());
            chars.splice(start..end, edit.inserted_text.chars());
        }
        chars.into_iter().collect()
    }
}
