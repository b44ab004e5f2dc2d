//! Selection-set helpers shared by the planner and the reference editor.

use crate::commands::{Position, Selection, SelectionDirection};
use std::ops::RangeInclusive;

/// Direction of a selection running from `start` to `end`.
pub fn selection_direction(start: Position, end: Position) -> SelectionDirection {
    if start <= end {
        SelectionDirection::Forward
    } else {
        SelectionDirection::Backward
    }
}

/// `(min, max)` endpoints of a selection, whichever way it was made.
pub fn selection_min_max(selection: &Selection) -> (Position, Position) {
    if selection.start <= selection.end {
        (selection.start, selection.end)
    } else {
        (selection.end, selection.start)
    }
}

/// Lines spanned by a selection, both endpoint lines included.
///
/// Columns are ignored: a selection that only touches the tail of its first line or the head
/// of its last line still spans the whole of those lines.
pub fn selection_line_span(selection: &Selection) -> RangeInclusive<usize> {
    let (min_pos, max_pos) = selection_min_max(selection);
    min_pos.line..=max_pos.line
}

/// Sort selections by position and drop exact duplicates.
///
/// Overlapping selections are kept apart: each one is still a separate caret for the host.
/// Directions are recomputed from the endpoints.
pub(crate) fn normalize_selections(mut selections: Vec<Selection>) -> Vec<Selection> {
    for sel in &mut selections {
        sel.direction = selection_direction(sel.start, sel.end);
    }

    selections.sort_by(|a, b| {
        let (a_min, a_max) = selection_min_max(a);
        let (b_min, b_max) = selection_min_max(b);
        a_min.cmp(&b_min).then_with(|| a_max.cmp(&b_max))
    });

    selections.dedup_by(|b, a| selection_min_max(a) == selection_min_max(b));
    selections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(start: (usize, usize), end: (usize, usize)) -> Selection {
        Selection::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn test_line_span_ignores_columns_and_direction() {
        assert_eq!(selection_line_span(&sel((2, 7), (4, 0))), 2..=4);
        assert_eq!(selection_line_span(&sel((4, 0), (2, 7))), 2..=4);
        assert_eq!(selection_line_span(&sel((5, 3), (5, 3))), 5..=5);
    }

    #[test]
    fn test_normalize_sorts_and_drops_exact_duplicates() {
        let out = normalize_selections(vec![
            sel((3, 0), (3, 2)),
            sel((1, 4), (0, 0)),
            sel((3, 2), (3, 0)),
        ]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].start, Position::new(1, 4));
        assert_eq!(out[0].direction, SelectionDirection::Backward);
        assert_eq!(out[1].direction, SelectionDirection::Forward);
    }
}
