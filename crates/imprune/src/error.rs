use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Failures surfaced by [`crate::preprocess`].
///
/// Both variants propagate synchronously to the caller; the preprocessor
/// performs no retries and no partial recovery. A file that fails to parse
/// is left untouched by the host formatter.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// The input is not a syntactically valid module under the configured
    /// dialect.
    #[error("failed to parse module: {0}")]
    Parse(String),

    /// A rewritten import statement could not be re-serialized. This is an
    /// internal invariant violation: the mutated tree only ever contains
    /// nodes produced by the parser.
    #[error("failed to print rewritten import: {0}")]
    Print(#[from] io::Error),
}
