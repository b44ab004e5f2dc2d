use line_marker::{
    Command, CommandExecutor, CommandResult, CursorCommand, DuplicateLinePolicy, EditCommand,
    Position, Selection,
};
use pretty_assertions::assert_eq;

fn caret(line: usize, column: usize) -> Selection {
    Selection::caret(Position::new(line, column))
}

fn select(executor: &mut CommandExecutor, selections: Vec<Selection>) {
    executor
        .execute(Command::Cursor(CursorCommand::SetSelections { selections }))
        .unwrap();
}

fn insert_markers(executor: &mut CommandExecutor) -> CommandResult {
    executor
        .execute(Command::Edit(EditCommand::insert_markers()))
        .unwrap()
}

#[test]
fn test_whitespace_only_line_gets_marker_at_column_zero() {
    let mut ex = CommandExecutor::new("   ");
    select(&mut ex, vec![caret(0, 1)]);

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "#    ");
}

#[test]
fn test_indented_line_gets_marker_after_indentation() {
    let mut ex = CommandExecutor::new("  hello");
    select(&mut ex, vec![caret(0, 5)]);

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "  # hello");
}

#[test]
fn test_multi_line_selection_marks_every_spanned_line_in_one_step() {
    let mut ex = CommandExecutor::new("zero\none\n  two\nthree\n\tfour\nfive");
    // Partial first and last lines still count as whole lines.
    select(
        &mut ex,
        vec![Selection::new(Position::new(2, 4), Position::new(4, 1))],
    );

    let result = insert_markers(&mut ex);

    assert_eq!(result, CommandResult::Inserted { count: 3 });
    assert_eq!(
        ex.editor().get_text(),
        "zero\none\n  # two\n# three\n\t# four\nfive"
    );
    assert_eq!(ex.undo_depth(), 1);

    let delta = ex.last_text_delta().unwrap();
    assert_eq!(delta.edits.len(), 3);
    assert_eq!(delta.after_char_count, delta.before_char_count + 6);
}

#[test]
fn test_backward_selection_spans_same_lines() {
    let mut ex = CommandExecutor::new("a\nb\nc");
    select(
        &mut ex,
        vec![Selection::new(Position::new(2, 1), Position::new(1, 0))],
    );

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "a\n# b\n# c");
}

#[test]
fn test_two_selections_on_one_line_mark_it_once() {
    let mut ex = CommandExecutor::new("0\n1\n2\n3\n4\n    five\n6");
    select(
        &mut ex,
        vec![
            Selection::new(Position::new(5, 4), Position::new(5, 6)),
            Selection::new(Position::new(5, 7), Position::new(5, 8)),
        ],
    );

    let result = insert_markers(&mut ex);

    assert_eq!(result, CommandResult::Inserted { count: 1 });
    assert_eq!(ex.editor().line_text(5).as_deref(), Some("    # five"));
}

#[test]
fn test_per_selection_policy_keeps_duplicate_insertions() {
    let mut ex = CommandExecutor::new("0\n1\n2\n3\n4\n    five\n6");
    select(
        &mut ex,
        vec![
            Selection::new(Position::new(5, 4), Position::new(5, 6)),
            Selection::new(Position::new(5, 7), Position::new(5, 8)),
        ],
    );

    ex.execute(Command::Edit(EditCommand::InsertMarkers {
        marker: "# ".to_string(),
        policy: DuplicateLinePolicy::PerSelection,
    }))
    .unwrap();

    assert_eq!(ex.editor().line_text(5).as_deref(), Some("    # # five"));
    // Still a single undo step.
    ex.execute(Command::Edit(EditCommand::Undo)).unwrap();
    assert_eq!(ex.editor().line_text(5).as_deref(), Some("    five"));
}

#[test]
fn test_overlapping_multi_line_selections_union_their_lines() {
    let mut ex = CommandExecutor::new("a\nb\nc\nd\ne");
    select(
        &mut ex,
        vec![
            Selection::new(Position::new(0, 0), Position::new(2, 0)),
            Selection::new(Position::new(1, 0), Position::new(3, 1)),
        ],
    );

    let result = insert_markers(&mut ex);

    assert_eq!(result, CommandResult::Inserted { count: 4 });
    assert_eq!(ex.editor().get_text(), "# a\n# b\n# c\n# d\ne");
}

#[test]
fn test_running_twice_inserts_twice() {
    // No existing-marker detection: a second run adds a second marker.
    let mut ex = CommandExecutor::new("  x");
    select(&mut ex, vec![caret(0, 0)]);

    insert_markers(&mut ex);
    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "  # # x");
    assert_eq!(ex.undo_depth(), 2);
}

#[test]
fn test_carets_after_marker_column_move_with_text() {
    let mut ex = CommandExecutor::new("  hello\nworld");
    select(&mut ex, vec![caret(0, 4), caret(0, 1), caret(1, 0)]);

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "  # hello\n# world");
    let selections = ex.editor().selections();
    assert_eq!(selections[0].end, Position::new(0, 6));
    assert_eq!(selections[1].end, Position::new(0, 1));
    assert_eq!(selections[2].end, Position::new(1, 2));
}

#[test]
fn test_crlf_and_unicode_columns() {
    let mut ex = CommandExecutor::new("\u{3000}你好\r\n\t世界");
    select(
        &mut ex,
        vec![Selection::new(Position::new(0, 0), Position::new(1, 0))],
    );

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "\u{3000}# 你好\r\n\t# 世界");
}

#[test]
fn test_unicode_line_separators_are_line_breaks() {
    let mut ex = CommandExecutor::new("a\u{2028}  b\rc\u{85}\td");
    assert_eq!(ex.editor().line_count(), 4);
    select(
        &mut ex,
        vec![Selection::new(Position::new(0, 0), Position::new(3, 0))],
    );

    insert_markers(&mut ex);

    assert_eq!(ex.editor().get_text(), "# a\u{2028}  # b\r# c\u{85}\t# d");
    assert_eq!(ex.editor().line_text(0).as_deref(), Some("# a"));
    assert_eq!(ex.editor().line_text(3).as_deref(), Some("\t# d"));
}

#[test]
fn test_custom_marker_text() {
    let mut ex = CommandExecutor::new("a\n  b");
    select(
        &mut ex,
        vec![Selection::new(Position::new(0, 0), Position::new(1, 0))],
    );

    ex.execute(Command::Edit(EditCommand::InsertMarkers {
        marker: "// ".to_string(),
        policy: DuplicateLinePolicy::Collapse,
    }))
    .unwrap();

    assert_eq!(ex.editor().get_text(), "// a\n  // b");
}
