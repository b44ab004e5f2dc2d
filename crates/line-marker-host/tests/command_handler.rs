use line_marker::{EditBatch, Position, Selection};
use line_marker_host::{
    EditorHost, HostError, MemoryHost, TextEditor, insert_markers, insert_markers_with,
};
use pretty_assertions::assert_eq;

/// Editor that records every batch it is handed.
struct RecordingEditor {
    lines: Vec<String>,
    selections: Vec<Selection>,
    batches: Vec<EditBatch>,
    reject: bool,
}

impl RecordingEditor {
    fn new(lines: &[&str], selections: Vec<Selection>) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            selections,
            batches: Vec::new(),
            reject: false,
        }
    }
}

impl TextEditor for RecordingEditor {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.lines.get(line).cloned()
    }

    fn apply_edits(&mut self, batch: EditBatch) -> Result<(), HostError> {
        if self.reject {
            return Err(HostError::EditRejected("document is read-only".to_string()));
        }
        self.batches.push(batch);
        Ok(())
    }
}

struct SingleEditorHost(Option<RecordingEditor>);

impl EditorHost for SingleEditorHost {
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor> {
        self.0.as_mut().map(|e| e as &mut dyn TextEditor)
    }
}

fn span(first: (usize, usize), last: (usize, usize)) -> Selection {
    Selection::new(Position::new(first.0, first.1), Position::new(last.0, last.1))
}

#[test]
fn test_no_active_editor_is_a_silent_no_op() {
    let mut host = MemoryHost::new();
    let id = host.open("  hello");
    host.focus(None);

    insert_markers(&mut host).unwrap();

    assert_eq!(host.editor(id).unwrap().editor().get_text(), "  hello");
    assert!(!host.editor(id).unwrap().can_undo());
}

#[test]
fn test_lines_two_to_four_submit_one_batch_of_three() {
    let editor = RecordingEditor::new(
        &["a", "b", "  c", "\td", "e", "f"],
        vec![span((2, 1), (4, 0))],
    );
    let mut host = SingleEditorHost(Some(editor));

    insert_markers(&mut host).unwrap();

    let editor = host.0.unwrap();
    assert_eq!(editor.batches.len(), 1);
    let positions: Vec<Position> = editor.batches[0]
        .insertions()
        .iter()
        .map(|i| i.position)
        .collect();
    assert_eq!(
        positions,
        vec![
            Position::new(2, 2),
            Position::new(3, 1),
            Position::new(4, 0)
        ]
    );
    assert!(editor.batches[0].insertions().iter().all(|i| i.text == "# "));
}

#[test]
fn test_no_selections_submits_nothing() {
    let mut host = SingleEditorHost(Some(RecordingEditor::new(&["a"], Vec::new())));

    insert_markers(&mut host).unwrap();

    assert!(host.0.unwrap().batches.is_empty());
}

#[test]
fn test_host_failure_propagates_unchanged() {
    let mut editor = RecordingEditor::new(&["a"], vec![span((0, 0), (0, 1))]);
    editor.reject = true;
    let mut host = SingleEditorHost(Some(editor));

    let err = insert_markers(&mut host).unwrap_err();

    assert!(matches!(err, HostError::EditRejected(msg) if msg == "document is read-only"));
}

#[test]
fn test_overlapping_selections_collapse_by_default() {
    let mut host = MemoryHost::new();
    let id = host.open("0\n1\n2\n3\n4\n  five");
    host.set_selections(id, vec![span((5, 2), (5, 3)), span((5, 4), (5, 6))])
        .unwrap();

    insert_markers(&mut host).unwrap();

    assert_eq!(
        host.editor(id).unwrap().editor().line_text(5).as_deref(),
        Some("  # five")
    );
}

#[test]
fn test_per_selection_policy_reproduces_double_insertion() {
    let mut host = MemoryHost::new();
    let id = host.open("0\n1\n2\n3\n4\n  five");
    host.set_selections(id, vec![span((5, 2), (5, 3)), span((5, 4), (5, 6))])
        .unwrap();

    insert_markers_with(&mut host, "# ", line_marker::DuplicateLinePolicy::PerSelection)
        .unwrap();

    let executor = host.editor(id).unwrap();
    assert_eq!(executor.editor().line_text(5).as_deref(), Some("  # # five"));
    assert_eq!(executor.undo_depth(), 1);
}

#[test]
fn test_only_the_active_editor_is_edited() {
    let mut host = MemoryHost::new();
    let first = host.open("one");
    let second = host.open("two");
    assert_eq!(host.active_id(), Some(first));
    host.focus(Some(second));
    assert_eq!(host.active_id(), Some(second));

    insert_markers(&mut host).unwrap();

    assert_eq!(host.editor(first).unwrap().editor().get_text(), "one");
    assert_eq!(host.editor(second).unwrap().editor().get_text(), "# two");
}

#[test]
fn test_invoking_twice_inserts_twice() {
    let mut host = MemoryHost::new();
    let id = host.open("   ");

    insert_markers(&mut host).unwrap();
    insert_markers(&mut host).unwrap();

    assert_eq!(host.editor(id).unwrap().editor().get_text(), "# #    ");
}

#[test]
fn test_selecting_in_an_unknown_editor_is_an_error() {
    let mut other = MemoryHost::new();
    other.open("x");
    let foreign = other.open("y");

    let mut host = MemoryHost::new();
    let id = host.open("z");

    let err = host
        .set_selections(foreign, vec![span((0, 0), (0, 0))])
        .unwrap_err();

    assert!(matches!(err, HostError::UnknownEditor(missing) if missing == foreign));
    assert_eq!(host.editor(id).unwrap().editor().get_text(), "z");
}
