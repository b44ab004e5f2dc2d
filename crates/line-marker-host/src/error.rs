//! Error types for the host adapter.

use crate::memory::EditorId;
use line_marker::{CommandError, MarkerError};

/// Failure while running a command against the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host refused or failed to apply an edit batch.
    #[error("host rejected edit: {0}")]
    EditRejected(String),
    /// The reference editor refused the batch.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// Planning the batch failed.
    #[error(transparent)]
    Marker(#[from] MarkerError),
    /// The host has no editor with this id.
    #[error("no open editor with id {0:?}")]
    UnknownEditor(EditorId),
    /// Dispatch through the command registry failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Command registration/dispatch error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A command with this id is already registered.
    #[error("command `{0}` is already registered")]
    AlreadyRegistered(String),
    /// No command with this id is registered.
    #[error("command `{0}` is not registered")]
    UnknownCommand(String),
}

/// Contribution manifest error.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON for the expected shape.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// A key binding string could not be parsed.
    #[error("invalid key binding `{0}`")]
    InvalidKey(String),
    /// A key binding targets a command the manifest does not declare.
    #[error("key binding `{key}` targets undeclared command `{command}`")]
    UndeclaredCommand {
        /// Key binding string.
        key: String,
        /// Target command id.
        command: String,
    },
}
