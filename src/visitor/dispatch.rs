//! Walk functions for tree traversal.
//!
//! - **Pre-order**: [`Visitor::visit_node`] is called before descending
//!   into children.
//! - **Post-order**: [`Visitor::leave_node`] is called after all children
//!   have been visited.
//! - **Source order**: children are visited left-to-right.
//!
//! # Control Flow
//!
//! - [`VisitResult::Continue`] - traverse into children
//! - [`VisitResult::SkipChildren`] - skip children but still call `leave_node`
//! - [`VisitResult::Stop`] - halt traversal immediately (no `leave_node` called)

use super::traits::{VisitResult, Visitor};
use crate::nodes::{NodeId, SyntaxTree};

/// Walk the whole tree from its root.
pub fn walk<V: Visitor>(tree: &SyntaxTree, visitor: &mut V) -> VisitResult {
    walk_from(tree, tree.root(), visitor)
}

/// Walk the subtree rooted at `node`.
///
/// Returns [`VisitResult::Stop`] if the visitor halted traversal,
/// [`VisitResult::Continue`] otherwise.
pub fn walk_from<V: Visitor>(tree: &SyntaxTree, node: NodeId, visitor: &mut V) -> VisitResult {
    match visitor.visit_node(tree, node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(current) = tree.node(node) {
                for &child in current.children() {
                    if walk_from(tree, child, visitor) == VisitResult::Stop {
                        return VisitResult::Stop;
                    }
                }
            }
        }
    }
    visitor.leave_node(tree, node);
    VisitResult::Continue
}
