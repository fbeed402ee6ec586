use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::parser::parse_file_as_module;

use crate::dialect::Dialect;
use crate::error::{PreprocessError, Result};

/// A freshly parsed module together with the source map its spans resolve
/// against. Created per invocation and discarded afterwards; nothing is
/// cached or shared between files.
pub struct ParsedModule {
    pub cm: Lrc<SourceMap>,
    pub module: Module,
}

/// Parse one module's source text under the given dialect.
pub fn parse_module(source: &str, dialect: Dialect) -> Result<ParsedModule> {
    let cm: Lrc<SourceMap> = Lrc::default();
    let fm = cm.new_source_file(FileName::Anon, source.to_owned());

    let mut recovered = Vec::new();
    let module = parse_file_as_module(
        &fm,
        dialect.syntax(),
        EsVersion::latest(),
        None,
        &mut recovered,
    )
    .map_err(|e| PreprocessError::Parse(e.kind().msg().to_string()))?;

    // A recovered diagnostic means the tree may be incomplete, and rewriting
    // an incomplete tree can drop imports the module actually references.
    if let Some(err) = recovered.into_iter().next() {
        return Err(PreprocessError::Parse(err.kind().msg().to_string()));
    }

    Ok(ParsedModule { cm, module })
}
