//! Incremental construction of the dual node/token representation.
//!
//! Parsing is an external concern, so hosts (parser adapters) and tests
//! assemble trees through [`TreeBuilder`]. Nodes and tokens are appended in
//! source order; [`TreeBuilder::identifier`] is the one entry point that
//! creates a node and its paired token together, so every identifier in a
//! finished tree has a live token back-reference.
//!
//! ```
//! use esrename::nodes::{NodeKind, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new(NodeKind::Program);
//! let decl = builder.child(builder.root(), NodeKind::VariableDeclaration);
//! builder.keyword("var");
//! builder.whitespace(" ");
//! builder.identifier(decl, "a");
//! builder.punctuator(";");
//! let tree = builder.finish();
//! assert_eq!(tree.to_source(), "var a;");
//! ```

use super::{NodeId, NodeKind, SyntaxTree, TokenId, TokenKind};

/// Builds a [`SyntaxTree`] node by node, token by token.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: SyntaxTree,
}

impl TreeBuilder {
    /// Start a tree whose root has the given kind (normally
    /// [`NodeKind::Program`]).
    pub fn new(root_kind: NodeKind) -> Self {
        TreeBuilder {
            tree: SyntaxTree::with_root(root_kind),
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Append a non-identifier child node under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` did not come from this builder.
    pub fn child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        self.tree.add_child(parent, kind, None)
    }

    /// Append an identifier node under `parent` together with its paired
    /// token, which is appended at the current end of the token stream.
    ///
    /// # Panics
    ///
    /// Panics if `parent` did not come from this builder.
    pub fn identifier(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let token = self.tree.tokens_mut().push(TokenKind::Identifier, name.clone());
        self.tree.add_child(parent, NodeKind::Identifier, Some((name, token)))
    }

    /// Append a keyword token (`var`, `with`, `break`, ...).
    pub fn keyword(&mut self, text: &str) -> TokenId {
        self.tree.tokens_mut().push(TokenKind::Keyword, text)
    }

    /// Append a punctuator token (`=`, `;`, `{`, ...).
    pub fn punctuator(&mut self, text: &str) -> TokenId {
        self.tree.tokens_mut().push(TokenKind::Punctuator, text)
    }

    /// Append a whitespace token.
    pub fn whitespace(&mut self, text: &str) -> TokenId {
        self.tree.tokens_mut().push(TokenKind::Whitespace, text)
    }

    /// Finish building and return the tree.
    pub fn finish(self) -> SyntaxTree {
        self.tree
    }
}
