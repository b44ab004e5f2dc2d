/// Returns `true` for every char ropey treats as a line break (with its default
/// `unicode_lines` feature): LF, VT, FF, CR, NEL, LS and PS. CRLF counts as one break.
pub(crate) fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into logical lines, without their line breaks.
///
/// `N` line breaks yield `N + 1` lines (a trailing empty line is kept), the same count
/// `ropey::Rope::len_lines` reports for `text`.
pub(crate) fn split_lines_preserve_trailing(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r'
            && let Some(&(next, '\n')) = chars.peek()
        {
            chars.next();
            start = next + 1;
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Number of `char`s in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
