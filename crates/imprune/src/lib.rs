//! Removes unused import bindings from a JavaScript/TypeScript module
//! before a formatter renders it.
//!
//! The entry point is [`preprocess`] (or a reusable [`Preprocessor`]). A
//! call parses the module, collects every identifier the body actually
//! references — in expressions, JSX element names, and type annotations —
//! filters each import statement's bound names against that set, and
//! splices the regenerated import lines back into the original text.
//! Everything outside the import statements is preserved byte-for-byte,
//! which is what lets the output feed straight into a formatting pipeline
//! that re-parses the whole file.
//!
//! The core never opens files, logs no errors, and keeps no state across
//! invocations; parse and print failures propagate synchronously as
//! [`PreprocessError`].

pub mod config;
pub mod dialect;
pub mod emit;
pub mod error;
pub mod import_rewriter;
pub mod parser;
pub mod preprocessor;
pub mod splice;
pub mod visitors;

pub use config::Config;
pub use dialect::Dialect;
pub use error::{PreprocessError, Result};
pub use preprocessor::{preprocess, Preprocessor};
