//! The scope-aware rename transform.
//!
//! This module holds the decision core of the crate: for every identifier
//! occurrence, ordered safety guards weigh the occurrence's scope metadata
//! against the active [`RenameOptions`] and produce a [`Decision`] —
//! rename, or skip with a reason. Occurrences without scope metadata take
//! the label path instead: if their parent consumes a label name, the label
//! map applies unconditionally, since label names occupy a namespace
//! disjoint from variable scoping.
//!
//! # How it Works
//!
//! [`transform`] runs in two phases over one traversal each way:
//!
//! 1. **Plan**: a pre-order, document-order walk collects a
//!    [`RenameRequest`] per accepted rename and emits one diagnostic per
//!    blocked attempt. Nothing is mutated.
//! 2. **Apply**: each request is applied through
//!    [`SyntaxTree::rename_identifier`], which updates the node and its
//!    paired token in one step.
//!
//! Traversal order never affects the final tree — each decision depends
//! only on that occurrence's own metadata and the immutable configuration —
//! but it fixes the order diagnostics are emitted in, which is therefore
//! document order.
//!
//! The scope table is taken by value and dropped on return; scope metadata
//! cannot outlive the invocation or leak into later passes.
//!
//! # Guard Ordering
//!
//! Guards run from most certain to cause breakage to most likely
//! intentional: an undeclared occurrence could be a global or
//! host-provided binding, so it is gated first; a top-level declared
//! occurrence next; dynamic-scope usage is gated last and independently,
//! because static analysis cannot prove such a binding safe even when the
//! earlier guards pass. Each guard has its own override flag so callers
//! can widen rename scope progressively.

use serde::{Deserialize, Serialize};

use super::dispatch::walk;
use super::traits::{VisitResult, Visitor};
use crate::diag::{DiagnosticSink, LogSink};
use crate::error::{RenameError, RenameResult};
use crate::nodes::{NodeId, SyntaxTree};
use crate::options::RenameOptions;
use crate::scope::{DeclarationState, ScopeInfo, ScopeTable, TopLevel};

// ============================================================================
// Guard Engine
// ============================================================================

/// Why an occurrence was not renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No mapping for this name, or the mapping is the current name.
    /// Silent: nothing to do is not a safety issue.
    NoOp,
    /// Blocked by the undeclared-variable guard.
    Undeclared,
    /// Blocked by the top-level-variable guard.
    TopLevel,
    /// Blocked by the dynamic-scope guard.
    DynamicScope,
}

impl SkipReason {
    /// The diagnostic for a blocked rename of `name`, or `None` for the
    /// silent no-op case.
    pub fn message(&self, name: &str) -> Option<String> {
        match self {
            SkipReason::NoOp => None,
            SkipReason::Undeclared => Some(format!(
                "saw matching undeclared variable \"{name}\" but did not rename due to \
                 potential issues; set the `renameUndeclared` option to `true` to force a rename"
            )),
            SkipReason::TopLevel => Some(format!(
                "saw matching top level variable \"{name}\" but did not rename due to \
                 potential issues; set the `renameTopLevel` option to `true` to force a rename"
            )),
            SkipReason::DynamicScope => Some(format!(
                "saw matching variable \"{name}\" used inside a dynamic scope but did not \
                 rename due to potential issues; set the `ignoreDynamicScope` option to `true` \
                 to force a rename"
            )),
        }
    }
}

/// Outcome of the guard engine for one identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Rename the occurrence to the given name.
    Rename(String),
    /// Leave the occurrence alone.
    Skip(SkipReason),
}

/// Run the ordered safety guards for one variable occurrence.
///
/// Guards short-circuit on the first refusal, so a blocked rename reports
/// exactly one reason. When the undeclared guard passes under its override,
/// the top-level guard is not additionally consulted: every undeclared
/// occurrence is also flagged top-level by the annotator, and that flag is
/// not separately gated on this path. The dynamic-scope guard is
/// independent and always evaluated last when reached.
pub fn decide(name: &str, info: &ScopeInfo, options: &RenameOptions) -> Decision {
    let new_name = match options.variables.get(name) {
        Some(new_name) if new_name != name => new_name,
        _ => return Decision::Skip(SkipReason::NoOp),
    };

    if info.declaration == DeclarationState::Undeclared {
        if !options.rename_undeclared {
            return Decision::Skip(SkipReason::Undeclared);
        }
    } else if info.top_level == TopLevel::Yes && !options.rename_top_level {
        return Decision::Skip(SkipReason::TopLevel);
    }

    if info.dynamic_scope.is_used() && !options.ignore_dynamic_scope {
        return Decision::Skip(SkipReason::DynamicScope);
    }

    Decision::Rename(new_name.clone())
}

// ============================================================================
// Rename Plan
// ============================================================================

/// Which namespace a request renames in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Variable,
    Label,
}

/// One accepted rename, to be applied after planning completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    node: NodeId,
    new_name: String,
    kind: RequestKind,
}

impl RenameRequest {
    /// The identifier node to rename.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The replacement name.
    pub fn new_name(&self) -> &str {
        &self.new_name
    }
}

/// What a transform did, for host reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSummary {
    /// Variable occurrences renamed.
    pub variables_renamed: usize,
    /// Label occurrences renamed.
    pub labels_renamed: usize,
    /// Rename attempts blocked by a guard (one diagnostic each).
    pub skipped: usize,
}

// ============================================================================
// Traversal Controller
// ============================================================================

/// Pre-order planner: collects rename requests and emits diagnostics.
struct RenamePlanner<'a> {
    scopes: &'a ScopeTable,
    options: &'a RenameOptions,
    sink: &'a mut dyn DiagnosticSink,
    requests: Vec<RenameRequest>,
    skipped: usize,
}

impl Visitor for RenamePlanner<'_> {
    fn visit_node(&mut self, tree: &SyntaxTree, node: NodeId) -> VisitResult {
        let Some(name) = tree.node(node).and_then(|n| n.identifier_name()) else {
            return VisitResult::Continue;
        };

        if let Some(info) = self.scopes.get(node) {
            // Variable path: guarded by scope metadata.
            match decide(name, info, self.options) {
                Decision::Rename(new_name) => self.requests.push(RenameRequest {
                    node,
                    new_name,
                    kind: RequestKind::Variable,
                }),
                Decision::Skip(reason) => {
                    if let Some(message) = reason.message(name) {
                        self.sink.warn(&message);
                        self.skipped += 1;
                    }
                }
            }
        } else if tree.is_label_position(node) {
            // Label path: disjoint namespace, no guards.
            if let Some(new_name) = self.options.labels.get(name) {
                if new_name != name {
                    self.requests.push(RenameRequest {
                        node,
                        new_name: new_name.clone(),
                        kind: RequestKind::Label,
                    });
                }
            }
        }

        VisitResult::Continue
    }
}

/// Rename identifiers in `tree` according to `options`, consuming the
/// scope metadata in `scopes`.
///
/// Every node is visited exactly once; diagnostics for blocked renames go
/// to `sink` in document order. The tree is only mutated through the
/// dual-representation mutator, and only after the whole plan is built, so
/// a contract violation surfaces before any rename is applied.
///
/// # Errors
///
/// [`RenameError::StaleScopeEntry`] if the scope table references a node
/// that is not in the tree, [`RenameError::NotAnIdentifier`] if it
/// references a non-identifier node. Both are contract violations by the
/// external annotator; the tree is untouched when they are reported.
pub fn transform_with_sink(
    tree: &mut SyntaxTree,
    scopes: ScopeTable,
    options: &RenameOptions,
    sink: &mut dyn DiagnosticSink,
) -> RenameResult<RenameSummary> {
    // The annotator contract: metadata describes identifier occurrences of
    // this tree, nothing else.
    for node in scopes.nodes() {
        match tree.node(node) {
            None => return Err(RenameError::StaleScopeEntry { node }),
            Some(n) if !n.is_identifier() => {
                return Err(RenameError::NotAnIdentifier { node });
            }
            Some(_) => {}
        }
    }

    let mut planner = RenamePlanner {
        scopes: &scopes,
        options,
        sink,
        requests: Vec::new(),
        skipped: 0,
    };
    walk(tree, &mut planner);
    let RenamePlanner {
        requests, skipped, ..
    } = planner;

    let mut summary = RenameSummary {
        skipped,
        ..RenameSummary::default()
    };
    for request in &requests {
        tree.rename_identifier(request.node, &request.new_name)?;
        match request.kind {
            RequestKind::Variable => summary.variables_renamed += 1,
            RequestKind::Label => summary.labels_renamed += 1,
        }
    }

    tracing::debug!(
        target: "esrename",
        variables = summary.variables_renamed,
        labels = summary.labels_renamed,
        skipped = summary.skipped,
        "rename transform complete"
    );

    // Scope metadata must not outlive the invocation.
    drop(scopes);

    Ok(summary)
}

/// [`transform_with_sink`] with the default `tracing`-backed sink.
pub fn transform(
    tree: &mut SyntaxTree,
    scopes: ScopeTable,
    options: &RenameOptions,
) -> RenameResult<RenameSummary> {
    let mut sink = LogSink;
    transform_with_sink(tree, scopes, options, &mut sink)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectedDiagnostics;
    use crate::nodes::{NodeKind, TreeBuilder};
    use crate::scope::DynamicScopeUse;

    fn options_with(name: &str, new_name: &str) -> RenameOptions {
        RenameOptions::default().rename_variable(name, new_name)
    }

    mod guard_engine {
        use super::*;

        #[test]
        fn no_mapping_is_a_silent_noop() {
            let decision = decide("a", &ScopeInfo::declared(), &RenameOptions::default());
            assert_eq!(decision, Decision::Skip(SkipReason::NoOp));
            assert!(SkipReason::NoOp.message("a").is_none());
        }

        #[test]
        fn identity_mapping_is_a_silent_noop() {
            let decision = decide("a", &ScopeInfo::declared(), &options_with("a", "a"));
            assert_eq!(decision, Decision::Skip(SkipReason::NoOp));
        }

        #[test]
        fn declared_nested_static_occurrence_renames() {
            let decision = decide("a", &ScopeInfo::declared(), &options_with("a", "b"));
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }

        #[test]
        fn undeclared_is_blocked_by_default() {
            let decision = decide("a", &ScopeInfo::undeclared(), &options_with("a", "b"));
            assert_eq!(decision, Decision::Skip(SkipReason::Undeclared));
        }

        #[test]
        fn undeclared_renames_under_override() {
            let mut options = options_with("a", "b");
            options.rename_undeclared = true;
            let decision = decide("a", &ScopeInfo::undeclared(), &options);
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }

        #[test]
        fn undeclared_override_does_not_consult_top_level_guard() {
            // Undeclared occurrences are always flagged top-level; passing
            // the undeclared guard must not trip the top-level guard.
            let mut options = options_with("a", "b");
            options.rename_undeclared = true;
            assert!(!options.rename_top_level);
            let decision = decide("a", &ScopeInfo::undeclared(), &options);
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }

        #[test]
        fn top_level_declared_is_blocked_by_default() {
            let info = ScopeInfo::declared().at_top_level();
            let decision = decide("a", &info, &options_with("a", "b"));
            assert_eq!(decision, Decision::Skip(SkipReason::TopLevel));
        }

        #[test]
        fn top_level_declared_renames_under_override() {
            let mut options = options_with("a", "b");
            options.rename_top_level = true;
            let info = ScopeInfo::declared().at_top_level();
            let decision = decide("a", &info, &options);
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }

        #[test]
        fn dynamic_scope_blocks_even_declared_nested_occurrences() {
            let info = ScopeInfo::declared().in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options_with("a", "b"));
            assert_eq!(decision, Decision::Skip(SkipReason::DynamicScope));
        }

        #[test]
        fn maybe_dynamic_scope_blocks_too() {
            let info = ScopeInfo::declared().in_dynamic_scope(DynamicScopeUse::Maybe);
            let decision = decide("a", &info, &options_with("a", "b"));
            assert_eq!(decision, Decision::Skip(SkipReason::DynamicScope));
        }

        #[test]
        fn dynamic_scope_renames_under_override() {
            let mut options = options_with("a", "b");
            options.ignore_dynamic_scope = true;
            let info = ScopeInfo::declared().in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options);
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }

        #[test]
        fn undeclared_guard_reports_before_dynamic_scope_guard() {
            let info = ScopeInfo::undeclared().in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options_with("a", "b"));
            assert_eq!(decision, Decision::Skip(SkipReason::Undeclared));
        }

        #[test]
        fn dynamic_scope_guard_still_applies_after_undeclared_override() {
            let mut options = options_with("a", "b");
            options.rename_undeclared = true;
            let info = ScopeInfo::undeclared().in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options);
            assert_eq!(decision, Decision::Skip(SkipReason::DynamicScope));
        }

        #[test]
        fn dynamic_scope_guard_still_applies_after_top_level_override() {
            let mut options = options_with("a", "b");
            options.rename_top_level = true;
            let info = ScopeInfo::declared()
                .at_top_level()
                .in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options);
            assert_eq!(decision, Decision::Skip(SkipReason::DynamicScope));
        }

        #[test]
        fn all_overrides_rename_the_riskiest_occurrence() {
            let mut options = options_with("a", "b");
            options.rename_undeclared = true;
            options.ignore_dynamic_scope = true;
            let info = ScopeInfo::undeclared().in_dynamic_scope(DynamicScopeUse::Yes);
            let decision = decide("a", &info, &options);
            assert_eq!(decision, Decision::Rename("b".to_string()));
        }
    }

    mod messages {
        use super::*;

        #[test]
        fn undeclared_names_variable_and_override() {
            let message = SkipReason::Undeclared.message("jQuery").unwrap();
            assert!(message.contains("\"jQuery\""));
            assert!(message.contains("`renameUndeclared`"));
        }

        #[test]
        fn top_level_names_variable_and_override() {
            let message = SkipReason::TopLevel.message("app").unwrap();
            assert!(message.contains("\"app\""));
            assert!(message.contains("`renameTopLevel`"));
        }

        #[test]
        fn dynamic_scope_names_variable_and_override() {
            let message = SkipReason::DynamicScope.message("world").unwrap();
            assert!(message.contains("\"world\""));
            assert!(message.contains("`ignoreDynamicScope`"));
        }
    }

    mod controller {
        use super::*;

        /// `var a; a;` with both occurrences declared and nested.
        fn declared_pair() -> (SyntaxTree, ScopeTable) {
            let mut builder = TreeBuilder::new(NodeKind::Program);
            let decl = builder.child(builder.root(), NodeKind::VariableDeclaration);
            builder.keyword("var");
            builder.whitespace(" ");
            let first = builder.identifier(decl, "a");
            builder.punctuator(";");
            builder.whitespace(" ");
            let stmt = builder.child(builder.root(), NodeKind::ExpressionStatement);
            let second = builder.identifier(stmt, "a");
            builder.punctuator(";");
            let tree = builder.finish();

            let mut scopes = ScopeTable::new();
            scopes.insert(first, ScopeInfo::declared());
            scopes.insert(second, ScopeInfo::declared());
            (tree, scopes)
        }

        #[test]
        fn renames_every_occurrence_in_node_and_source() {
            let (mut tree, scopes) = declared_pair();
            let options = options_with("a", "renamedA");
            let mut sink = CollectedDiagnostics::new();

            let summary = transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap();

            assert_eq!(summary.variables_renamed, 2);
            assert_eq!(summary.skipped, 0);
            assert!(sink.is_empty());
            assert_eq!(tree.to_source(), "var renamedA; renamedA;");
        }

        #[test]
        fn blocked_renames_leave_the_tree_untouched() {
            let (mut tree, mut scopes) = declared_pair();
            // Reclassify both occurrences as undeclared.
            let ids: Vec<_> = scopes.nodes().collect();
            for id in ids {
                scopes.insert(id, ScopeInfo::undeclared());
            }
            let options = options_with("a", "renamedA");
            let mut sink = CollectedDiagnostics::new();

            let summary = transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap();

            assert_eq!(summary.variables_renamed, 0);
            assert_eq!(summary.skipped, 2);
            assert_eq!(sink.len(), 2);
            assert_eq!(tree.to_source(), "var a; a;");
        }

        #[test]
        fn diagnostics_follow_document_order() {
            let mut builder = TreeBuilder::new(NodeKind::Program);
            let stmt = builder.child(builder.root(), NodeKind::ExpressionStatement);
            let first = builder.identifier(stmt, "alpha");
            builder.punctuator(";");
            let second = builder.identifier(stmt, "beta");
            builder.punctuator(";");
            let mut tree = builder.finish();

            let mut scopes = ScopeTable::new();
            scopes.insert(first, ScopeInfo::undeclared());
            scopes.insert(second, ScopeInfo::undeclared());

            let options = RenameOptions::default()
                .rename_variable("alpha", "a2")
                .rename_variable("beta", "b2");
            let mut sink = CollectedDiagnostics::new();
            transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap();

            assert_eq!(sink.len(), 2);
            assert!(sink.messages()[0].contains("\"alpha\""));
            assert!(sink.messages()[1].contains("\"beta\""));
        }

        #[test]
        fn stale_scope_entry_fails_before_any_mutation() {
            let (mut tree, mut scopes) = declared_pair();
            scopes.insert(NodeId(999), ScopeInfo::declared());
            let options = options_with("a", "renamedA");
            let mut sink = CollectedDiagnostics::new();

            let err = transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap_err();

            assert!(matches!(err, RenameError::StaleScopeEntry { .. }));
            assert_eq!(tree.to_source(), "var a; a;");
        }

        #[test]
        fn metadata_on_non_identifier_fails_before_any_mutation() {
            let (mut tree, mut scopes) = declared_pair();
            scopes.insert(tree.root(), ScopeInfo::declared());
            let options = options_with("a", "renamedA");
            let mut sink = CollectedDiagnostics::new();

            let err = transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap_err();

            assert!(matches!(err, RenameError::NotAnIdentifier { .. }));
            assert_eq!(tree.to_source(), "var a; a;");
        }

        #[test]
        fn identifiers_without_metadata_or_label_position_are_untouched() {
            // `obj.a` — the property identifier has no scope metadata and
            // is not in label position, so even a matching map entry must
            // not rename it.
            let mut builder = TreeBuilder::new(NodeKind::Program);
            let stmt = builder.child(builder.root(), NodeKind::ExpressionStatement);
            let member = builder.child(stmt, NodeKind::MemberExpression);
            let object = builder.identifier(member, "obj");
            builder.punctuator(".");
            builder.identifier(member, "a");
            builder.punctuator(";");
            let mut tree = builder.finish();

            let mut scopes = ScopeTable::new();
            scopes.insert(object, ScopeInfo::declared());

            let options = options_with("a", "renamedA");
            let mut sink = CollectedDiagnostics::new();
            let summary = transform_with_sink(&mut tree, scopes, &options, &mut sink).unwrap();

            assert_eq!(summary.variables_renamed, 0);
            assert_eq!(summary.labels_renamed, 0);
            assert!(sink.is_empty());
            assert_eq!(tree.to_source(), "obj.a;");
        }

        #[test]
        fn default_sink_transform_reports_the_same_summary() {
            let (mut tree, scopes) = declared_pair();
            let options = options_with("a", "renamedA");
            let summary = transform(&mut tree, scopes, &options).unwrap();
            assert_eq!(summary.variables_renamed, 2);
        }

        #[test]
        fn summary_serializes_for_host_reporting() {
            let summary = RenameSummary {
                variables_renamed: 2,
                labels_renamed: 1,
                skipped: 3,
            };
            let value = serde_json::to_value(summary).unwrap();
            assert_eq!(value["variables_renamed"], 2);
            assert_eq!(value["labels_renamed"], 1);
            assert_eq!(value["skipped"], 3);
        }
    }

    mod labels {
        use super::*;

        /// `loop: for (;;) { break loop; }`
        fn labeled_loop() -> (SyntaxTree, NodeId, NodeId) {
            let mut builder = TreeBuilder::new(NodeKind::Program);
            let labeled = builder.child(builder.root(), NodeKind::LabeledStatement);
            let label = builder.identifier(labeled, "loop");
            builder.punctuator(":");
            builder.whitespace(" ");
            let for_stmt = builder.child(labeled, NodeKind::ForStatement);
            builder.keyword("for");
            builder.whitespace(" ");
            builder.punctuator("(;;)");
            builder.whitespace(" ");
            builder.punctuator("{");
            builder.whitespace(" ");
            let block = builder.child(for_stmt, NodeKind::BlockStatement);
            let break_stmt = builder.child(block, NodeKind::BreakStatement);
            builder.keyword("break");
            builder.whitespace(" ");
            let target = builder.identifier(break_stmt, "loop");
            builder.punctuator(";");
            builder.whitespace(" ");
            builder.punctuator("}");
            (builder.finish(), label, target)
        }

        #[test]
        fn labels_rename_without_guards_or_metadata() {
            let (mut tree, label, target) = labeled_loop();
            let options = RenameOptions::default().rename_label("loop", "outer");
            let mut sink = CollectedDiagnostics::new();

            let summary =
                transform_with_sink(&mut tree, ScopeTable::new(), &options, &mut sink).unwrap();

            assert_eq!(summary.labels_renamed, 2);
            assert!(sink.is_empty());
            assert_eq!(tree.node(label).unwrap().identifier_name(), Some("outer"));
            assert_eq!(tree.node(target).unwrap().identifier_name(), Some("outer"));
            assert_eq!(tree.to_source(), "outer: for (;;) { break outer; }");
        }

        #[test]
        fn label_not_in_map_is_a_noop() {
            let (mut tree, _, _) = labeled_loop();
            let options = RenameOptions::default().rename_label("other", "renamed");
            let summary = transform(&mut tree, ScopeTable::new(), &options).unwrap();

            assert_eq!(summary.labels_renamed, 0);
            assert_eq!(tree.to_source(), "loop: for (;;) { break loop; }");
        }

        #[test]
        fn variable_map_does_not_touch_labels() {
            let (mut tree, _, _) = labeled_loop();
            let options = options_with("loop", "renamed");
            let summary = transform(&mut tree, ScopeTable::new(), &options).unwrap();

            assert_eq!(summary.variables_renamed, 0);
            assert_eq!(tree.to_source(), "loop: for (;;) { break loop; }");
        }
    }
}
