//! Re-serialization of individual import statements.
//!
//! Only import statements are ever re-emitted; the rest of the module never
//! goes through the printer, so the emitter configuration here has no
//! bearing on anything outside the import region.

use swc_core::common::sync::Lrc;
use swc_core::common::{SourceMap, DUMMY_SP};
use swc_core::ecma::ast::{ImportDecl, Module, ModuleDecl, ModuleItem, Program};
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config, Emitter};

use crate::error::Result;

/// Print a single import statement on one line.
///
/// `cm` must be the source map the statement was parsed against: the node's
/// spans (and those of a narrowed clone, which keeps its parent's spans)
/// only resolve there. The statement keeps its original quote style: the
/// parser records the raw text of the source string and the emitter reuses
/// it.
pub fn print_import(decl: &ImportDecl, cm: Lrc<SourceMap>) -> Result<String> {
    let module = Module {
        span: DUMMY_SP,
        body: vec![ModuleItem::ModuleDecl(ModuleDecl::Import(decl.clone()))],
        shebang: None,
    };
    let program = Program::Module(module);

    let mut buf = Vec::new();
    {
        let wr = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default(),
            cm,
            comments: None,
            wr,
        };
        emitter.emit_program(&program)?;
    }

    Ok(String::from_utf8_lossy(&buf).trim_end().to_owned())
}
