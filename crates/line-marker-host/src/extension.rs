//! Activation lifecycle.

use crate::command::{INSERT_MARKERS_COMMAND, insert_markers};
use crate::error::RegistryError;
use crate::registry::{CommandRegistry, Disposable};

/// Per-activation state the host hands to [`activate`].
#[derive(Debug, Default)]
pub struct ExtensionContext {
    /// Registrations to dispose when the extension is unloaded.
    pub subscriptions: Vec<Disposable>,
}

impl ExtensionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose every recorded registration. This is the host's unload path.
    pub fn dispose_all(&mut self, registry: &mut CommandRegistry) {
        for disposable in self.subscriptions.drain(..) {
            registry.dispose(disposable);
        }
    }
}

/// Called once when the host loads the extension.
pub fn activate(
    context: &mut ExtensionContext,
    registry: &mut CommandRegistry,
) -> Result<(), RegistryError> {
    let disposable = registry.register(INSERT_MARKERS_COMMAND, insert_markers)?;
    context.subscriptions.push(disposable);

    tracing::debug!(command = INSERT_MARKERS_COMMAND, "line-marker activated");
    Ok(())
}

/// Called when the host unloads the extension.
///
/// Registrations are released by [`ExtensionContext::dispose_all`], so there is nothing to do.
pub fn deactivate() {}
