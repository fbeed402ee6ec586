//! Textual splice: line-oriented edits against the original source.
//!
//! The import region boundary comes from the parsed tree's span metadata,
//! never from scanning raw lines for `import` prefixes; the line-scanning
//! heuristic misclassifies comment lines between imports. Everything
//! outside an edited range is carried over byte-for-byte, comments and
//! blank lines included.

use swc_core::common::SourceMap;
use swc_core::ecma::ast::{Module, ModuleDecl, ModuleItem};

/// A replacement or deletion of a contiguous run of lines, 0-based
/// inclusive. `replacement: None` deletes the lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: Option<String>,
}

/// Line index (0-based, exclusive) immediately after the last top-level
/// import statement. Zero when the module has no import statements, in
/// which case the caller must return the input unmodified.
pub fn import_region_end(cm: &SourceMap, module: &Module) -> usize {
    module
        .body
        .iter()
        .filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => {
                Some(cm.lookup_char_pos(decl.span.hi).line)
            }
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Apply line edits to `source`. Edits are applied bottom-up so earlier
/// line numbers stay valid; edit ranges must not overlap.
pub fn apply_line_edits(source: &str, edits: &[LineEdit]) -> String {
    if edits.is_empty() {
        return source.to_owned();
    }

    let mut lines: Vec<String> = source.split('\n').map(ToOwned::to_owned).collect();

    let mut ordered: Vec<&LineEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| edit.start);

    for edit in ordered.iter().rev() {
        match &edit.replacement {
            Some(text) => {
                lines.splice(edit.start..=edit.end, std::iter::once(text.clone()));
            }
            None => {
                lines.drain(edit.start..=edit.end);
                collapse_blank_at(&mut lines, edit.start);
            }
        }
    }

    lines.join("\n")
}

/// Deleting a statement can strand its separator blank line: at the top of
/// the file, or doubled against the blank that preceded the statement. At
/// most one line is removed; any further blanks belong to the surrounding
/// text and are kept.
fn collapse_blank_at(lines: &mut Vec<String>, at: usize) {
    if at < lines.len()
        && lines[at].trim().is_empty()
        && (at == 0 || lines[at - 1].trim().is_empty())
    {
        lines.remove(at);
    }
}
