//! AST visitor implementations for imprune.
//!
//! Currently a single visitor: the reference collector that decides which
//! imported names the module body actually uses.

mod used_names;

pub use used_names::UsedNameCollector;
