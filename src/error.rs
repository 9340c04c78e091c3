//! Crate-level error types.

use std::fmt;

/// Errors produced by the photocloud crate.
///
/// Navigation itself never fails: missing host data and empty history are
/// handled as no-ops. Only configuration and script I/O surface errors.
#[derive(Debug)]
pub enum NavError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Session script parsing failure.
    ScriptParse(String),
    /// Layout name that does not map to a known layout.
    UnknownLayout(String),
    /// Easing id that does not map to a known curve.
    UnknownEasing(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "session script parse error: {msg}")
            }
            Self::UnknownLayout(name) => write!(f, "unknown layout: {name}"),
            Self::UnknownEasing(id) => write!(f, "unknown easing: {id}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
