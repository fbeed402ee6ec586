//! Invocation contract: `preprocess(source) -> rewritten source`.
//!
//! Control flow per call: parse the module, collect the used-name set, plan
//! line edits for the import statements, splice the edits into the original
//! text. Each invocation owns all of its state, so concurrent calls for
//! different files need no locking.

use crate::config::Config;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::import_rewriter;
use crate::parser;
use crate::splice;
use crate::visitors::UsedNameCollector;

/// One registered front end of the host formatter: a dialect plus the
/// configuration shared by every invocation through it. All formatting
/// behavior other than import pruning stays with the host.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    dialect: Dialect,
    config: Config,
}

impl Preprocessor {
    pub fn new(dialect: Dialect, config: Config) -> Self {
        Self { dialect, config }
    }

    /// Remove unused import bindings from `source`.
    ///
    /// Everything outside the import statements comes back byte-for-byte
    /// intact, and a module without imports comes back unmodified as a
    /// whole (an invariant, not an optimization: the splice must never run
    /// without an import region to anchor it).
    pub fn preprocess(&self, source: &str) -> Result<String> {
        let parsed = parser::parse_module(source, self.dialect)?;

        let region_end = splice::import_region_end(&parsed.cm, &parsed.module);
        if region_end == 0 {
            return Ok(source.to_owned());
        }
        log::debug!("import region covers lines 0..{region_end}");

        let used = UsedNameCollector::collect(&parsed.module);
        let edits = import_rewriter::rewrite_imports(&parsed.module, &used, &self.config, &parsed.cm)?;

        Ok(splice::apply_line_edits(source, &edits))
    }
}

/// One-shot convenience over [`Preprocessor`].
pub fn preprocess(source: &str, dialect: Dialect, config: &Config) -> Result<String> {
    Preprocessor::new(dialect, config.clone()).preprocess(source)
}
