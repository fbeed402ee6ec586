use swc_core::ecma::parser::{EsConfig, Syntax, TsConfig};

/// The two language-variant front ends the preprocessor registers against.
///
/// Both accept JSX: the plain-module front end mirrors a parse
/// configuration of `['jsx']`, the statically-typed one `['jsx',
/// 'typescript']`. Everything else about dialect handling (notably which
/// front end a given file gets) is the host formatter's decision and is
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Ecmascript,
    Typescript,
}

impl Dialect {
    /// The parser syntax configuration for this front end.
    pub fn syntax(self) -> Syntax {
        match self {
            Dialect::Ecmascript => Syntax::Es(EsConfig {
                jsx: true,
                ..EsConfig::default()
            }),
            Dialect::Typescript => Syntax::Typescript(TsConfig {
                tsx: true,
                ..TsConfig::default()
            }),
        }
    }

    /// Convenience mapping from a file extension, for hosts that detect the
    /// dialect per file.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "js" | "jsx" | "mjs" | "cjs" => Some(Dialect::Ecmascript),
            "ts" | "tsx" | "mts" | "cts" => Some(Dialect::Typescript),
            _ => None,
        }
    }
}
