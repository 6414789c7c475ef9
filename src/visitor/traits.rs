//! Visitor trait definitions for tree traversal.

use crate::nodes::{NodeId, SyntaxTree};

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the
/// walker proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, [`Visitor::leave_node`] will be called for
    /// this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but
    /// [`Visitor::leave_node`] will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_node` or `leave_node` calls are made. The walk
    /// function returns immediately.
    Stop,
}

/// Immutable visitor for tree traversal.
///
/// # Traversal Order
///
/// - `visit_node` is called in **pre-order** (before children)
/// - `leave_node` is called in **post-order** (after children)
/// - Children are visited in source order (left-to-right)
///
/// # Example
///
/// ```
/// use esrename::nodes::{NodeId, NodeKind, SyntaxTree, TreeBuilder};
/// use esrename::visitor::{walk, VisitResult, Visitor};
///
/// struct IdentifierCounter {
///     count: usize,
/// }
///
/// impl Visitor for IdentifierCounter {
///     fn visit_node(&mut self, tree: &SyntaxTree, node: NodeId) -> VisitResult {
///         if tree.node(node).is_some_and(|n| n.is_identifier()) {
///             self.count += 1;
///         }
///         VisitResult::Continue
///     }
/// }
///
/// let mut builder = TreeBuilder::new(NodeKind::Program);
/// let stmt = builder.child(builder.root(), NodeKind::ExpressionStatement);
/// builder.identifier(stmt, "a");
/// let tree = builder.finish();
///
/// let mut counter = IdentifierCounter { count: 0 };
/// walk(&tree, &mut counter);
/// assert_eq!(counter.count, 1);
/// ```
pub trait Visitor {
    /// Visit a node.
    ///
    /// Called before descending into children. Return a [`VisitResult`] to
    /// control traversal.
    #[allow(unused_variables)]
    fn visit_node(&mut self, tree: &SyntaxTree, node: NodeId) -> VisitResult {
        VisitResult::Continue
    }

    /// Leave a node.
    ///
    /// Called after all children have been visited. Called even if
    /// [`VisitResult::SkipChildren`] was returned.
    #[allow(unused_variables)]
    fn leave_node(&mut self, tree: &SyntaxTree, node: NodeId) {}
}
