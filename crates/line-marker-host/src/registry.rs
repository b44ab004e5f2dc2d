//! Command registry.
//!
//! The host keeps one registry; extensions add handlers to it on activation and the host
//! disposes them on unload.

use crate::error::{HostError, RegistryError};
use crate::host::EditorHost;
use std::collections::BTreeMap;

/// A registered command callback.
pub type CommandHandler = Box<dyn Fn(&mut dyn EditorHost) -> Result<(), HostError>>;

/// Token returned by [`CommandRegistry::register`]; hand it back to
/// [`CommandRegistry::dispose`] to unregister the command.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Disposable leaks the registration until the registry is dropped"]
pub struct Disposable {
    command_id: String,
}

impl Disposable {
    /// Id of the command this token unregisters.
    pub fn command_id(&self) -> &str {
        &self.command_id
    }
}

/// Maps command ids to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandHandler>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `id`.
    pub fn register<F>(
        &mut self,
        id: impl Into<String>,
        handler: F,
    ) -> Result<Disposable, RegistryError>
    where
        F: Fn(&mut dyn EditorHost) -> Result<(), HostError> + 'static,
    {
        let id = id.into();
        if self.commands.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        tracing::trace!(command = %id, "registering command");
        self.commands.insert(id.clone(), Box::new(handler));
        Ok(Disposable { command_id: id })
    }

    /// Run the command registered under `id` against `host`.
    pub fn execute(&self, id: &str, host: &mut dyn EditorHost) -> Result<(), HostError> {
        let handler = self
            .commands
            .get(id)
            .ok_or_else(|| RegistryError::UnknownCommand(id.to_string()))?;

        tracing::debug!(command = id, "executing command");
        handler(host)
    }

    /// Returns `true` if a command is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    /// Registered command ids, sorted.
    pub fn command_ids(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Unregister the command behind `disposable`. Returns `false` if it was already gone.
    pub fn dispose(&mut self, disposable: Disposable) -> bool {
        tracing::trace!(command = %disposable.command_id, "disposing command");
        self.commands.remove(&disposable.command_id).is_some()
    }
}
