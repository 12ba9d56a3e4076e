//! Error types raised by parsing and by the theorem-prover bridge.
//!
//! Modeled the way `alethe-proof-checker`'s `SubstitutionError` and
//! `hyperion`'s `hycore::HyError` are: a `thiserror`-derived enum with one
//! variant per failure mode and a message naming the offending token.

use thiserror::Error;

/// Both error kinds: a malformed input, or a token stream
/// that ended early / didn't match an expected lexeme set. Both are fatal
/// to the current parse; no partial AST is ever returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("parse error: unexpected end of input")]
    UnexpectedEnd,

    #[error("parse error, unexpected token: {found}")]
    UnexpectedToken { found: String },

    #[error("parse error, unexpected token: {found}. Expected one of: {expected:?}")]
    UnexpectedTokenExpected {
        found: String,
        expected: Vec<String>,
    },

    #[error("parse error: trailing input starting at {found}")]
    TrailingInput { found: String },

    #[error("parse error: '{head}' is not a Lambda or Application expression, so it may not take arguments")]
    NotApplicable { head: String },
}

/// Top-level error for embedding applications: wraps everything that can go
/// wrong across the crate's fallible subsystems (parsing, the prover
/// bridge, config loading) into one `Result` an `anyhow`-based caller can
/// propagate.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no theorem prover registered under the name {0:?}")]
    ProverNotFound(String),

    #[error("failed to load config: {0}")]
    Config(String),
}
