//! Output dialects
//!
//! A glossary renders to exactly one of two dialects. Dispatch over the closed
//! [`Dialect`] enum picks the [`Formatter`] that knows the dialect's layout rules.

use crate::gloss::error::GlossError;
use crate::gloss::formats::{Formatter, PlaintextFormatter, RstFormatter};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Represents the output dialect of a rendered entry or document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Plain UTF-8 text, no markup and no links
    #[serde(alias = "txt", alias = "text", alias = "plain")]
    Plaintext,
    /// Sphinx-compatible reStructuredText
    #[serde(alias = "restructuredtext")]
    Rst,
}

impl Dialect {
    /// All dialects, in a stable order
    pub const ALL: [Dialect; 2] = [Dialect::Plaintext, Dialect::Rst];

    /// Canonical name of this dialect
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Plaintext => "plaintext",
            Dialect::Rst => "rst",
        }
    }

    /// Conventional file extension for documents in this dialect
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Plaintext => "txt",
            Dialect::Rst => "rst",
        }
    }

    /// The formatter that renders this dialect
    pub fn formatter(self) -> &'static dyn Formatter {
        match self {
            Dialect::Plaintext => &PlaintextFormatter,
            Dialect::Rst => &RstFormatter,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = GlossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" | "plain" | "text" | "txt" => Ok(Dialect::Plaintext),
            "rst" | "restructuredtext" => Ok(Dialect::Rst),
            _ => Err(GlossError::UnknownDialect(s.to_string())),
        }
    }
}
