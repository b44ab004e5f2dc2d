use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use line_marker::{
    Command, CommandExecutor, CursorCommand, DEFAULT_MARKER, DuplicateLinePolicy, EditCommand,
    LineIndex, Position, Selection, TextLines, plan_marker_edits,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        let indent = "    ".repeat(i % 4);
        out.push_str(&format!(
            "{indent}{i:06} the quick brown fox jumps over the lazy dog\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_plan_whole_document(c: &mut Criterion) {
    let text = large_text(50_000);
    let index = LineIndex::from_text(&text);
    let selections = [Selection::new(
        Position::new(0, 0),
        Position::new(index.line_count() - 1, 0),
    )];

    c.bench_function("plan/50k_lines_one_selection", |b| {
        b.iter(|| {
            let batch = plan_marker_edits(
                black_box(&index),
                black_box(&selections),
                DEFAULT_MARKER,
                DuplicateLinePolicy::Collapse,
            )
            .unwrap();
            black_box(batch.len());
        })
    });

    c.bench_function("plan/50k_lines_one_selection_str", |b| {
        b.iter(|| {
            let lines = TextLines::new(black_box(&text));
            let batch = plan_marker_edits(
                &lines,
                black_box(&selections),
                DEFAULT_MARKER,
                DuplicateLinePolicy::Collapse,
            )
            .unwrap();
            black_box(batch.len());
        })
    });
}

fn bench_insert_markers_many_carets(c: &mut Criterion) {
    let text = large_text(50_000);
    let selections: Vec<Selection> = (0..50_000)
        .step_by(10)
        .map(|line| Selection::caret(Position::new(line, 0)))
        .collect();

    c.bench_function("insert_markers/5k_carets", |b| {
        b.iter_batched(
            || {
                let mut executor = CommandExecutor::new(&text);
                executor
                    .execute(Command::Cursor(CursorCommand::SetSelections {
                        selections: selections.clone(),
                    }))
                    .unwrap();
                executor
            },
            |mut executor| {
                executor
                    .execute(Command::Edit(EditCommand::insert_markers()))
                    .unwrap();
                black_box(executor.editor().char_count());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_plan_whole_document,
    bench_insert_markers_many_carets
);
criterion_main!(benches);
