//! Per-invocation rename configuration.
//!
//! Hosts hand the engine a `rename` configuration section; field names in
//! JSON are camelCase (`renameUndeclared`, ...). Every field defaults, so a
//! missing or partial section degrades to "nothing to do" rather than an
//! error. Options are immutable for the duration of a transform and carry
//! no cross-invocation state: construct fresh, pass by reference, discard.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RenameResult;

/// Immutable settings for one rename invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenameOptions {
    /// Rename targets for variable identifiers: current name → new name.
    pub variables: HashMap<String, String>,

    /// Rename targets for label identifiers. Labels occupy a namespace
    /// disjoint from variable scoping, so no safety guards apply.
    pub labels: HashMap<String, String>,

    /// Allow renaming undeclared occurrences (could be globals or
    /// host-provided bindings). Off by default.
    pub rename_undeclared: bool,

    /// Allow renaming declared occurrences whose binding lives in the
    /// outermost scope. Off by default.
    pub rename_top_level: bool,

    /// Allow renaming occurrences used under a dynamic-scope construct,
    /// where static analysis cannot prove the binding is safe. Off by
    /// default.
    pub ignore_dynamic_scope: bool,
}

impl RenameOptions {
    /// Build options from a host's JSON configuration section.
    ///
    /// Missing fields take their defaults; unknown fields are ignored, the
    /// way hosts pass whole configuration objects around.
    ///
    /// # Errors
    ///
    /// [`RenameError::InvalidOptions`] if present fields have the wrong
    /// shape (e.g. `variables` is not a string map).
    ///
    /// [`RenameError::InvalidOptions`]: crate::error::RenameError::InvalidOptions
    pub fn from_json(value: serde_json::Value) -> RenameResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Register a variable rename.
    pub fn rename_variable(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.variables.insert(from.into(), to.into());
        self
    }

    /// Register a label rename.
    pub fn rename_label(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.labels.insert(from.into(), to.into());
        self
    }
}
