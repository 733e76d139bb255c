//! Error type shared by every fallible gloss operation

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which kind of output a write operation was asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The full glossary document
    Document,
    /// The standalone table of contents
    TableOfContents,
}

/// Errors raised while configuring or writing a glossary
#[derive(Debug)]
pub enum GlossError {
    /// A write was requested with neither an explicit nor a stored destination path
    MissingDestination(Destination),
    /// The destination could not be opened or appended to
    Io { path: PathBuf, source: io::Error },
    /// A dialect name that is neither plaintext nor rst
    UnknownDialect(String),
    /// Configuration files or overrides failed to load
    Config(config::ConfigError),
}

impl fmt::Display for GlossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossError::MissingDestination(Destination::Document) => {
                write!(f, "No output file for glossary specified")
            }
            GlossError::MissingDestination(Destination::TableOfContents) => {
                write!(f, "No output file for TOC specified")
            }
            GlossError::Io { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
            GlossError::UnknownDialect(name) => write!(
                f,
                "Unknown dialect '{name}' (expected one of: plaintext, txt, rst)"
            ),
            GlossError::Config(err) => write!(f, "Configuration error: {err}"),
        }
    }
}

impl std::error::Error for GlossError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlossError::Io { source, .. } => Some(source),
            GlossError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for GlossError {
    fn from(err: config::ConfigError) -> Self {
        GlossError::Config(err)
    }
}
