//! Visitor infrastructure and the rename transform built on it.
//!
//! This module provides traits and utilities for traversing the node
//! arena, plus the transform that is the point of the crate:
//!
//! - [`Visitor`] / [`walk`]: depth-first, pre-order traversal with
//!   post-order `leave_node` callbacks, visiting children in source order.
//! - [`transform`] / [`transform_with_sink`]: the scope-aware rename pass.
//! - [`decide`]: the guard engine, usable on its own to ask "would this
//!   occurrence rename?" without touching a tree.

mod dispatch;
mod rename;
mod traits;

pub use dispatch::{walk, walk_from};
pub use rename::{
    decide, transform, transform_with_sink, Decision, RenameRequest, RenameSummary, SkipReason,
};
pub use traits::{VisitResult, Visitor};
