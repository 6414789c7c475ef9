//! Error types for the rename engine.
//!
//! The rename path itself never hard-fails: an unsafe rename opportunity
//! degrades to a skip plus a diagnostic. The variants here cover the fatal
//! conditions that originate outside the core — a scope table that
//! contradicts the tree it claims to describe (a contract violation by the
//! external annotator), or host configuration that does not deserialize.

use thiserror::Error;

use crate::nodes::NodeId;

/// Errors that can occur during a rename transform.
#[derive(Debug, Error)]
pub enum RenameError {
    /// A node id does not resolve in the tree it was used against.
    #[error("unknown node {node:?}")]
    UnknownNode { node: NodeId },

    /// A scope table entry references a node that is not in the tree.
    #[error("scope metadata references unknown node {node:?}")]
    StaleScopeEntry { node: NodeId },

    /// Scope metadata is attached to a node that is not an identifier.
    #[error("scope metadata attached to non-identifier node {node:?}")]
    NotAnIdentifier { node: NodeId },

    /// Configuration JSON did not deserialize into [`RenameOptions`].
    ///
    /// [`RenameOptions`]: crate::options::RenameOptions
    #[error("invalid rename options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for rename operations.
pub type RenameResult<T> = Result<T, RenameError>;
