//! Output format implementations for entries and glossary documents
//!
//! Each [`Dialect`] has one formatter implementing [`Formatter`]:
//! - [`PlaintextFormatter`]: readable text, no links
//! - [`RstFormatter`]: Sphinx-compatible reStructuredText with anchors and `:ref:` links
//!
//! Output is whitespace-exact. Blank lines in rst are structural (a note block
//! directly followed by a paragraph, or a line directly followed by a rule,
//! changes how the document parses), so every section carries its own
//! trailing newlines and the formatters never post-process the result.

pub mod plaintext;
pub mod rst;

pub use plaintext::PlaintextFormatter;
pub use rst::RstFormatter;

use crate::gloss::dialect::Dialect;
use crate::gloss::entry::Entry;
use crate::gloss::text::{underline, ENTRY_RULE, TITLE_RULE};

/// Trait for dialect formatters
///
/// Implementors render single entries and the blocks a full document is
/// assembled from.
pub trait Formatter: Send + Sync {
    /// The dialect this formatter produces
    fn dialect(&self) -> Dialect;

    /// The name of this format (e.g., "rst", "plaintext")
    fn name(&self) -> &str {
        self.dialect().name()
    }

    /// Render one entry, optionally ending with its last-updated stamp
    fn entry(&self, entry: &Entry, timestamp: bool) -> String;

    /// The glossary's own title, underlined with the heavier rule
    fn glossary_title(&self, title: &str) -> String {
        underline(title, TITLE_RULE)
    }

    /// Table of contents lines for the given entry names.
    ///
    /// `columns` only matters for dialects with a multi-column layout.
    fn table_of_contents(&self, names: &[&str], columns: i32) -> Vec<String>;

    /// Note saying the document was generated and should not be edited by hand
    fn provenance_note(&self, source_file: Option<&str>) -> String;
}

/// Entry title block shared by both dialects.
///
/// The leading blank lines keep consecutive entries far enough apart for rst.
fn entry_title(name: &str) -> String {
    format!("\n\n{}", underline(name, ENTRY_RULE))
}

/// Terminates an entry rendered without a timestamp. rst needs at least one
/// newline after the last section for the next entry's anchor to register.
const ENTRY_SEPARATOR: &str = "\n\n\n";
