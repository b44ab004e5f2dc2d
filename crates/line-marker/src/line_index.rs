//! Logical Line Index
//!
//! Rope-backed document text with O(log N) line access and character-offset editing.

use crate::text::is_line_break;
use ropey::{Rope, RopeSlice};

/// Logical line index - implemented using Rope data structure
///
/// Lines and columns are counted in `char`s (Unicode scalar values). Line breaks (including
/// lone `\r`, U+0085, U+2028 and U+2029) are never part of a line's text.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index (one empty line).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding its line ending)
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        self.line_slice(line_number).map(|slice| slice.to_string())
    }

    /// Length of the specified line in characters (excluding its line ending)
    pub fn line_len_chars(&self, line_number: usize) -> Option<usize> {
        self.line_slice(line_number).map(|slice| slice.len_chars())
    }

    /// Get character offset from line number and column number.
    ///
    /// The column is clamped to the line length; a line past the end maps to the end of the
    /// document.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start_char = self.rope.line_to_char(line);
        let line_len = self.line_len_chars(line).unwrap_or(0);
        line_start_char + column.min(line_len)
    }

    /// Insert text (at specified character offset)
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete text range (character offset)
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = start_char.saturating_add(len_chars).min(self.rope.len_chars());

        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }

    fn line_slice(&self, line_number: usize) -> Option<RopeSlice<'_>> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let line = self.rope.line(line_number);
        let mut len = line.len_chars();

        if len > 0 && is_line_break(line.char(len - 1)) {
            let last = line.char(len - 1);
            len -= 1;
            if last == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }

        Some(line.slice(..len))
    }
}
