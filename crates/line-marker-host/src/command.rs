//! The insert-markers command handler.

use crate::error::HostError;
use crate::host::{EditorHost, HostLines};
use line_marker::{DEFAULT_MARKER, DuplicateLinePolicy, plan_marker_edits};

/// Identifier the insert-markers command is registered under.
pub const INSERT_MARKERS_COMMAND: &str = "lineMarker.insertMarkers";

/// Human-readable title shown in the host's command palette.
pub const INSERT_MARKERS_TITLE: &str = "Insert Line Markers";

/// Insert `"# "` at the first non-whitespace column of every line spanned by the active
/// editor's selections.
///
/// Without an active editor this does nothing and succeeds. Errors from the host while
/// applying the batch are returned unchanged.
pub fn insert_markers(host: &mut dyn EditorHost) -> Result<(), HostError> {
    insert_markers_with(host, DEFAULT_MARKER, DuplicateLinePolicy::Collapse)
}

/// [`insert_markers`] with an explicit marker and duplicate-line policy.
pub fn insert_markers_with(
    host: &mut dyn EditorHost,
    marker: &str,
    policy: DuplicateLinePolicy,
) -> Result<(), HostError> {
    let Some(editor) = host.active_editor() else {
        tracing::debug!("no active editor, skipping insert-markers");
        return Ok(());
    };

    let selections = editor.selections();
    let batch = plan_marker_edits(&HostLines(&*editor), &selections, marker, policy)?;
    if batch.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        selections = selections.len(),
        insertions = batch.len(),
        "submitting marker batch"
    );
    editor
        .apply_edits(batch)
        .inspect_err(|err| tracing::warn!(%err, "host failed to apply marker batch"))
}
