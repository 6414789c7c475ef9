//! Scope metadata consumed by the rename guards.
//!
//! The classification itself is computed by an external scope annotator;
//! this crate only consumes it. Metadata lives in a [`ScopeTable`] keyed by
//! [`NodeId`] — a side table, never attached to the tree — so traversal
//! utilities never see it as tree structure and nothing has to be stripped
//! afterwards: the transform takes the table by value and drops it.
//!
//! Identifier occurrences without a table entry are non-variable
//! identifiers (property keys, labels) and are never touched by the
//! variable-rename path.

use std::collections::{hash_map, HashMap};

use crate::nodes::NodeId;

/// Whether an occurrence's binding is introduced by a visible declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationState {
    /// The binding is declared within the analyzed scope.
    Declared,
    /// The occurrence refers to something outside the analyzed scope,
    /// e.g. a global or host-provided binding.
    Undeclared,
}

/// Whether an occurrence's binding lives in the outermost scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevel {
    Yes,
    No,
}

/// Whether the occurrence's binding could be shadowed at runtime by a
/// dynamic-scope construct (a `with`-like block).
///
/// Anything but [`DynamicScopeUse::No`] makes a static rename unsafe by
/// default: the analyzer cannot prove which binding the name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicScopeUse {
    /// Never used under a dynamic-scope construct.
    No,
    /// Possibly resolved through a dynamic-scope construct.
    Maybe,
    /// Definitely used under a dynamic-scope construct.
    Yes,
}

impl DynamicScopeUse {
    /// True unless the occurrence is provably free of dynamic-scope use.
    pub fn is_used(&self) -> bool {
        !matches!(self, DynamicScopeUse::No)
    }
}

/// Classification of one identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeInfo {
    /// Declaration status of the occurrence's binding.
    pub declaration: DeclarationState,
    /// Whether the binding lives in the outermost scope.
    pub top_level: TopLevel,
    /// Dynamic-scope exposure of the binding.
    pub dynamic_scope: DynamicScopeUse,
}

impl ScopeInfo {
    /// A declared, nested, statically-resolvable occurrence — the
    /// unconditionally safe case.
    pub fn declared() -> Self {
        ScopeInfo {
            declaration: DeclarationState::Declared,
            top_level: TopLevel::No,
            dynamic_scope: DynamicScopeUse::No,
        }
    }

    /// An undeclared occurrence. Undeclared bindings always resolve to the
    /// outermost scope, so the annotator flags them top-level as well.
    pub fn undeclared() -> Self {
        ScopeInfo {
            declaration: DeclarationState::Undeclared,
            top_level: TopLevel::Yes,
            dynamic_scope: DynamicScopeUse::No,
        }
    }

    /// Mark the occurrence's binding as top-level.
    pub fn at_top_level(mut self) -> Self {
        self.top_level = TopLevel::Yes;
        self
    }

    /// Mark the occurrence as used under a dynamic-scope construct.
    pub fn in_dynamic_scope(mut self, usage: DynamicScopeUse) -> Self {
        self.dynamic_scope = usage;
        self
    }
}

/// Side table of per-occurrence scope metadata, keyed by node identity.
///
/// Populated by the external annotator before a transform; consumed by
/// value and destroyed by the transform. There is no cross-invocation
/// state: a reused tree must be re-annotated with a fresh table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeTable {
    entries: HashMap<NodeId, ScopeInfo>,
}

impl ScopeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach metadata to an identifier occurrence, replacing any previous
    /// entry for the same node.
    pub fn insert(&mut self, node: NodeId, info: ScopeInfo) {
        self.entries.insert(node, info);
    }

    /// Metadata for an occurrence, if the annotator classified it.
    pub fn get(&self, node: NodeId) -> Option<&ScopeInfo> {
        self.entries.get(&node)
    }

    /// Number of classified occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no occurrence is classified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over classified occurrences (arbitrary order).
    pub fn iter(&self) -> hash_map::Iter<'_, NodeId, ScopeInfo> {
        self.entries.iter()
    }

    /// Iterate over the classified node ids (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.keys().copied()
    }
}
