//! Syntax tree node arena and the identifier mutator.
//!
//! A [`SyntaxTree`] owns two parallel representations of one program:
//!
//! - the node arena — typed [`Node`]s addressed by [`NodeId`], with parent
//!   back-references and ordered child lists;
//! - the token stream — a [`TokenList`] holding the exact program text.
//!
//! Identifier nodes carry both a semantic `name` and the [`TokenId`] of
//! their lexical token. The two are kept in lockstep by
//! [`SyntaxTree::rename_identifier`], the only write path for identifier
//! text; the fields themselves are private so no other code can update one
//! representation without the other.
//!
//! Trees are assembled by an external parser adapter (or tests) through
//! [`TreeBuilder`]; this crate never parses source text.

mod builder;
mod tokens;

pub use builder::TreeBuilder;
pub use tokens::{Token, TokenId, TokenKind, TokenList};

use crate::error::{RenameError, RenameResult};

/// Index of a node in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Array index for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a syntax tree node.
///
/// The set covers the constructs the rename engine must recognize (label
/// containers, dynamic-scope statements) plus enough expression and
/// statement kinds to represent realistic programs in fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    FunctionDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    Literal,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    WithStatement,
    BlockStatement,
    ExpressionStatement,
    CallExpression,
    MemberExpression,
    ObjectExpression,
    ForStatement,
}

impl NodeKind {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::WithStatement => "WithStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::ForStatement => "ForStatement",
        }
    }

    /// True for constructs whose child identifier names a statement label:
    /// a labeled statement, or a break/continue naming its jump target.
    pub fn is_label_container(&self) -> bool {
        matches!(
            self,
            NodeKind::LabeledStatement | NodeKind::BreakStatement | NodeKind::ContinueStatement
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier payload: the semantic name and its paired lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ident {
    name: String,
    token: TokenId,
}

/// One node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    ident: Option<Ident>,
}

impl Node {
    /// The node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node's parent, if any (the root has none).
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children in source order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if this is an identifier node.
    pub fn is_identifier(&self) -> bool {
        self.ident.is_some()
    }

    /// The identifier's current name, if this is an identifier node.
    pub fn identifier_name(&self) -> Option<&str> {
        self.ident.as_ref().map(|ident| ident.name.as_str())
    }

    /// The identifier's paired token, if this is an identifier node.
    pub fn identifier_token(&self) -> Option<TokenId> {
        self.ident.as_ref().map(|ident| ident.token)
    }
}

/// A program's syntax tree: node arena plus paired token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    tokens: TokenList,
    root: NodeId,
}

impl SyntaxTree {
    pub(crate) fn with_root(kind: NodeKind) -> Self {
        SyntaxTree {
            nodes: vec![Node {
                kind,
                parent: None,
                children: Vec::new(),
                ident: None,
            }],
            tokens: TokenList::new(),
            root: NodeId(0),
        }
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, kind: NodeKind, ident: Option<(String, TokenId)>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            ident: ident.map(|(name, token)| Ident { name, token }),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut TokenList {
        &mut self.tokens
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// True if the tree contains a node with this id.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes. Trees built through [`TreeBuilder`]
    /// always have at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The paired token stream.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Serialize the token stream; see [`TokenList::to_source`].
    pub fn to_source(&self) -> String {
        self.tokens.to_source()
    }

    /// True if `id` sits in label position: its parent is a labeled
    /// statement or a break/continue naming a jump target.
    pub fn is_label_position(&self, id: NodeId) -> bool {
        self.node(id)
            .and_then(Node::parent)
            .and_then(|parent| self.node(parent))
            .is_some_and(|parent| parent.kind().is_label_container())
    }

    /// Rename an identifier node, updating the semantic name and the paired
    /// token's text in the same step.
    ///
    /// This is the only mutation path for identifier text; the node and
    /// token representations cannot diverge.
    ///
    /// # Errors
    ///
    /// [`RenameError::UnknownNode`] if `id` is not in the tree,
    /// [`RenameError::NotAnIdentifier`] if the node carries no identifier.
    pub fn rename_identifier(&mut self, id: NodeId, new_name: &str) -> RenameResult<()> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(RenameError::UnknownNode { node: id })?;
        let ident = node
            .ident
            .as_mut()
            .ok_or(RenameError::NotAnIdentifier { node: id })?;
        ident.name = new_name.to_string();
        self.tokens.set_text(ident.token, new_name);
        Ok(())
    }
}
