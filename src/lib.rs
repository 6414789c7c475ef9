//! Scope-aware identifier renaming for ECMAScript syntax trees.
//!
//! Given a syntax tree annotated with per-occurrence scope metadata and a
//! mapping from old names to new names, this crate renames exactly the
//! occurrences that are provably safe to rename and leaves everything else
//! untouched, including the tree's structural shape. Parsing, scope
//! analysis, and pretty-printing are external collaborators: trees come in
//! through [`TreeBuilder`], scope classifications through [`ScopeTable`],
//! and the renamed program goes back out through the token stream.
//!
//! # Overview
//!
//! - **Safety guards**: an occurrence renames only if it is declared,
//!   not top-level, and never used under a dynamic-scope construct —
//!   unless the caller overrides a specific guard
//!   ([`RenameOptions::rename_undeclared`],
//!   [`RenameOptions::rename_top_level`],
//!   [`RenameOptions::ignore_dynamic_scope`]). Every blocked rename emits
//!   one diagnostic through a [`DiagnosticSink`].
//! - **Labels**: statement labels live in their own namespace and rename
//!   unconditionally via [`RenameOptions::labels`].
//! - **Dual representation**: a rename updates the identifier node and its
//!   paired lexical token in one step; they can never diverge.
//!
//! # Quick Start
//!
//! ```
//! use esrename::{transform, NodeKind, RenameOptions, ScopeInfo, ScopeTable, TreeBuilder};
//!
//! // var a;
//! let mut builder = TreeBuilder::new(NodeKind::Program);
//! let decl = builder.child(builder.root(), NodeKind::VariableDeclaration);
//! builder.keyword("var");
//! builder.whitespace(" ");
//! let occurrence = builder.identifier(decl, "a");
//! builder.punctuator(";");
//! let mut tree = builder.finish();
//!
//! // Classification normally comes from an external scope annotator.
//! let mut scopes = ScopeTable::new();
//! scopes.insert(occurrence, ScopeInfo::declared());
//!
//! let options = RenameOptions::default().rename_variable("a", "renamed");
//! let summary = transform(&mut tree, scopes, &options).expect("transform error");
//!
//! assert_eq!(summary.variables_renamed, 1);
//! assert_eq!(tree.to_source(), "var renamed;");
//! ```

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Error types for the rename engine.
pub mod error;
pub use error::{RenameError, RenameResult};

/// Syntax tree arena, token stream, and tree builder.
pub mod nodes;
pub use nodes::{Node, NodeId, NodeKind, SyntaxTree, Token, TokenId, TokenKind, TokenList, TreeBuilder};

/// Per-invocation rename configuration.
pub mod options;
pub use options::RenameOptions;

/// Scope metadata side table consumed by the guards.
pub mod scope;
pub use scope::{DeclarationState, DynamicScopeUse, ScopeInfo, ScopeTable, TopLevel};

/// Diagnostic sink for blocked rename attempts.
pub mod diag;
pub use diag::{CollectedDiagnostics, DiagnosticSink, LogSink};

/// Visitor infrastructure and the rename transform.
pub mod visitor;
pub use visitor::{
    decide, transform, transform_with_sink, Decision, RenameSummary, SkipReason, VisitResult,
    Visitor,
};
