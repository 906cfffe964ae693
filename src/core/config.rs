//! Harness configuration: TOML file + smart defaults.
//!
//! The browser-era runner configuration (DOM environment selection, style
//! import remapping, per-file setup hooks) collapses to a handful of knobs in
//! the call-based model: how fields are located, what the submit control is
//! labelled, and how far a microtask flush drains the scheduler.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{FbError, Result};

/// Default number of zero-delay scheduler turns drained by a microtask flush.
pub const DEFAULT_FLUSH_TURNS: usize = 16;

/// How the harness resolves a string selector to a field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Accessible-label lookup first, structural field-name lookup as
    /// fallback. This is the preferred mode.
    #[default]
    LabelFirst,
    /// Degraded mode: structural field-name lookup only, the equivalent of
    /// querying the form element directly instead of going through labels.
    NameOnly,
}

/// Full harness configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Field-resolution strategy.
    pub lookup: LookupMode,
    /// Overrides the label used to locate the submit control on the click
    /// path. `None` uses the component's own declared label.
    pub submit_label: Option<String>,
    /// Scheduler turns drained per microtask flush. Must be non-zero.
    pub flush_turns: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            lookup: LookupMode::default(),
            submit_label: None,
            flush_turns: DEFAULT_FLUSH_TURNS,
        }
    }
}

impl HarnessConfig {
    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| FbError::ConfigParse {
            context: "config file",
            details: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reject configurations that would make lookups or flushes degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.flush_turns == 0 {
            return Err(FbError::InvalidConfig {
                details: "flush_turns must be non-zero".to_string(),
            });
        }
        if let Some(label) = &self.submit_label
            && label.trim().is_empty()
        {
            return Err(FbError::InvalidConfig {
                details: "submit_label override must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
