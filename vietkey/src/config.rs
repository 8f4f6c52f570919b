//! Host configuration layered over the core engine settings.
//!
//! `VietkeyConfig` flattens [`EngineSettings`] and adds the host-side
//! concerns: the excluded-application list and TOML loading. Persistence is
//! the UI layer's business; this module only reads, and offers a JSON
//! exchange format for the exclusion list the UI edits.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use vietkey_core::{EngineSettings, ExclusionFilter};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VietkeyConfig {
    /// Engine settings (input method, language, code table, ...).
    #[serde(flatten)]
    pub base: EngineSettings,

    /// Application identifiers the IME must never touch.
    #[serde(default)]
    pub excluded_apps: Vec<String>,
}

impl Default for VietkeyConfig {
    fn default() -> Self {
        Self {
            base: EngineSettings::default(),
            excluded_apps: Vec::new(),
        }
    }
}

impl VietkeyConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid vietkey config")
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// Consume into the core settings.
    pub fn into_base(self) -> EngineSettings {
        self.base
    }

    pub fn base(&self) -> &EngineSettings {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut EngineSettings {
        &mut self.base
    }

    /// Push the configured exclusions into a live filter.
    pub fn apply_exclusions(&self, filter: &ExclusionFilter) {
        filter.replace_all(self.excluded_apps.iter().cloned());
    }
}

/// Serialize the current exclusion list for the UI layer.
pub fn exclusions_to_json(filter: &ExclusionFilter) -> String {
    serde_json::to_string(&filter.ids()).unwrap_or_else(|_| "[]".to_string())
}

/// Parse an exclusion list edited by the UI layer.
pub fn exclusions_from_json(s: &str) -> anyhow::Result<Vec<String>> {
    serde_json::from_str(s).context("invalid exclusion list")
}
