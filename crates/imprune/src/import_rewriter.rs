//! Import rewriter: decides, per top-level import statement, whether it
//! stays untouched, loses a subset of its named bindings, or disappears,
//! and turns each decision into a line edit against the original text.
//!
//! Specifier order inside a surviving statement is preserved; sorting and
//! reflowing are the downstream formatter's job.

use indexmap::IndexSet;
use swc_core::common::sync::Lrc;
use swc_core::common::SourceMap;
use swc_core::ecma::ast::{ImportDecl, ImportSpecifier, Module, ModuleDecl, ModuleItem};

use crate::config::Config;
use crate::emit;
use crate::error::Result;
use crate::splice::LineEdit;

/// What happens to one import statement.
#[derive(Debug, Clone)]
pub enum ImportAction {
    /// Statement survives textually untouched.
    Keep,
    /// Statement survives with only the given specifiers.
    Narrow(ImportDecl),
    /// Statement is deleted entirely.
    Remove,
}

/// A specifier survives iff it is a default import, a namespace import
/// (usage analysis for namespace member access is not attempted), or a
/// named import whose local binding the module references.
fn specifier_survives(specifier: &ImportSpecifier, used: &IndexSet<String>) -> bool {
    match specifier {
        ImportSpecifier::Default(_) | ImportSpecifier::Namespace(_) => true,
        ImportSpecifier::Named(named) => used.contains(&*named.local.sym),
    }
}

/// Classify one import statement against the used-name set.
pub fn plan_import(decl: &ImportDecl, used: &IndexSet<String>, config: &Config) -> ImportAction {
    // A side-effect import binds nothing; usage analysis has no say over it.
    if decl.specifiers.is_empty() {
        return ImportAction::Keep;
    }

    let surviving: Vec<ImportSpecifier> = decl
        .specifiers
        .iter()
        .filter(|specifier| specifier_survives(specifier, used))
        .cloned()
        .collect();

    if surviving.len() == decl.specifiers.len() {
        return ImportAction::Keep;
    }

    if surviving.is_empty() {
        // Always-keep modules are exempt from deletion: their import can be
        // load-bearing without ever producing a visible identifier
        // reference (the UI library behind JSX markup being the canonical
        // case). The statement stays verbatim rather than degrading to a
        // side-effect import.
        if config.always_keep_modules.contains(&*decl.src.value) {
            log::debug!(
                "keeping import of always-keep module '{}' despite no detected usage",
                decl.src.value
            );
            return ImportAction::Keep;
        }
        log::debug!("removing import of '{}': no specifier is referenced", decl.src.value);
        return ImportAction::Remove;
    }

    log::debug!(
        "narrowing import of '{}': kept {} of {} specifiers",
        decl.src.value,
        surviving.len(),
        decl.specifiers.len()
    );
    let mut narrowed = decl.clone();
    narrowed.specifiers = surviving;
    ImportAction::Narrow(narrowed)
}

/// Plan edits for every top-level import statement in the module.
///
/// Statements that share a physical line form one edit group: removing or
/// narrowing one of them rewrites the whole line, so the group's surviving
/// statements are re-emitted rather than silently drained with it. A group
/// in which every statement is `Keep` produces no edit at all, which is
/// what keeps untouched statements byte-identical to the input.
pub fn rewrite_imports(
    module: &Module,
    used: &IndexSet<String>,
    config: &Config,
    cm: &Lrc<SourceMap>,
) -> Result<Vec<LineEdit>> {
    let mut edits = Vec::new();
    let mut group: Vec<(usize, usize, &ImportDecl)> = Vec::new();
    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) = item else {
            continue;
        };
        let (start, end) = statement_lines(cm, decl);
        if let Some(&(_, group_end, _)) = group.last() {
            if start > group_end {
                flush_group(&mut edits, &group, used, config, cm)?;
                group.clear();
            }
        }
        group.push((start, end, decl));
    }
    flush_group(&mut edits, &group, used, config, cm)?;
    Ok(edits)
}

fn flush_group(
    edits: &mut Vec<LineEdit>,
    group: &[(usize, usize, &ImportDecl)],
    used: &IndexSet<String>,
    config: &Config,
    cm: &Lrc<SourceMap>,
) -> Result<()> {
    let Some(&(start, _, _)) = group.first() else {
        return Ok(());
    };
    let actions: Vec<ImportAction> = group
        .iter()
        .map(|(_, _, decl)| plan_import(decl, used, config))
        .collect();
    if actions
        .iter()
        .all(|action| matches!(action, ImportAction::Keep))
    {
        return Ok(());
    }

    let end = group.iter().map(|&(_, end, _)| end).max().unwrap_or(start);
    let mut surviving = Vec::new();
    for (&(_, _, decl), action) in group.iter().zip(&actions) {
        match action {
            ImportAction::Keep => surviving.push(emit::print_import(decl, cm.clone())?),
            ImportAction::Narrow(narrowed) => {
                surviving.push(emit::print_import(narrowed, cm.clone())?);
            }
            ImportAction::Remove => {}
        }
    }
    edits.push(LineEdit {
        start,
        end,
        replacement: if surviving.is_empty() {
            None
        } else {
            Some(surviving.join("\n"))
        },
    });
    Ok(())
}

/// First and last line of a statement, 0-based inclusive.
fn statement_lines(cm: &SourceMap, decl: &ImportDecl) -> (usize, usize) {
    (
        cm.lookup_char_pos(decl.span.lo).line - 1,
        cm.lookup_char_pos(decl.span.hi).line - 1,
    )
}
