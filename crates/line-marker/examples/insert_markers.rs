use line_marker::{Command, CommandExecutor, CursorCommand, EditCommand, Position, Selection};

fn main() {
    let mut executor = CommandExecutor::new("def main():\n    run()\n\n    stop()\n");

    // Two carets: one on the `def` line, one spanning the body.
    executor
        .execute(Command::Cursor(CursorCommand::SetSelections {
            selections: vec![
                Selection::caret(Position::new(0, 0)),
                Selection::new(Position::new(1, 2), Position::new(3, 0)),
            ],
        }))
        .unwrap();
    executor
        .execute(Command::Edit(EditCommand::insert_markers()))
        .unwrap();

    assert_eq!(
        executor.editor().get_text(),
        "# def main():\n    # run()\n# \n    # stop()\n"
    );
    println!("{}", executor.editor().get_text());
}
