//! Contribution manifest: what the extension declares to the host before activation.
//!
//! The JSON shape follows the usual extension package manifest:
//!
//! ```json
//! {
//!   "name": "line-marker",
//!   "version": "0.1.0",
//!   "contributes": {
//!     "commands": [{ "command": "lineMarker.insertMarkers", "title": "Insert Line Markers" }],
//!     "keybindings": [{ "command": "lineMarker.insertMarkers", "key": "ctrl+alt+3", "mac": "cmd+alt+3" }]
//!   }
//! }
//! ```

use crate::command::{INSERT_MARKERS_COMMAND, INSERT_MARKERS_TITLE};
use crate::error::ManifestError;
use crate::keymap::Keystroke;
use serde::{Deserialize, Serialize};

/// Root of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    /// Extension name.
    pub name: String,
    /// Extension version.
    pub version: String,
    /// Declared contributions.
    #[serde(default)]
    pub contributes: Contributes,
}

/// Commands and key bindings the extension contributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributes {
    /// Palette commands.
    #[serde(default)]
    pub commands: Vec<CommandContribution>,
    /// Default key bindings.
    #[serde(default)]
    pub keybindings: Vec<KeybindingContribution>,
}

/// A command shown in the host's command palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContribution {
    /// Command id.
    pub command: String,
    /// Palette title.
    pub title: String,
}

/// A default key binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingContribution {
    /// Target command id.
    pub command: String,
    /// Key string used on every platform without an override.
    pub key: String,
    /// macOS override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

impl KeybindingContribution {
    /// The key string for the platform this binary was built for.
    pub fn platform_key(&self) -> &str {
        match &self.mac {
            Some(mac) if cfg!(target_os = "macos") => mac,
            _ => &self.key,
        }
    }
}

impl ExtensionManifest {
    /// The manifest this crate ships with.
    pub fn builtin() -> Self {
        Self {
            name: "line-marker".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contributes: Contributes {
                commands: vec![CommandContribution {
                    command: INSERT_MARKERS_COMMAND.to_string(),
                    title: INSERT_MARKERS_TITLE.to_string(),
                }],
                keybindings: vec![KeybindingContribution {
                    command: INSERT_MARKERS_COMMAND.to_string(),
                    key: "ctrl+alt+3".to_string(),
                    mac: Some("cmd+alt+3".to_string()),
                }],
            },
        }
    }

    /// Parse and validate a manifest.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every key binding parses and targets a declared command.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for binding in &self.contributes.keybindings {
            if !self
                .contributes
                .commands
                .iter()
                .any(|c| c.command == binding.command)
            {
                return Err(ManifestError::UndeclaredCommand {
                    key: binding.key.clone(),
                    command: binding.command.clone(),
                });
            }

            binding.key.parse::<Keystroke>()?;
            if let Some(mac) = &binding.mac {
                mac.parse::<Keystroke>()?;
            }
        }
        Ok(())
    }

    /// Command bound to `stroke` on this platform, if any.
    pub fn command_for(&self, stroke: &Keystroke) -> Option<&str> {
        self.contributes
            .keybindings
            .iter()
            .find(|b| {
                b.platform_key()
                    .parse::<Keystroke>()
                    .is_ok_and(|bound| &bound == stroke)
            })
            .map(|b| b.command.as_str())
    }
}
