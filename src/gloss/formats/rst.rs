//! reStructuredText formatter
//!
//! Each entry starts with an anchor, `.. _dict <slug>:`, followed by its title
//! as a section header. Acronym expansions, definitions and "see also" text go
//! through the link resolver so `[Term]` becomes `:ref:`dict Term``.
//!
//! Spacing rules
//!
//!     Most sections end with two trailing spaces and a blank line. The note
//!     block (institute) and "see also" end with a single newline instead, so
//!     the section after them must start with its own newline, otherwise
//!     docutils folds it into the preceding block.
//!
//! Limitations
//!
//!     Anchors use the slug (spaces replaced by hyphens) while references keep
//!     the bracketed text as written, so `[Seven Bridges]` and the table of
//!     contents emit `:ref:`dict Seven Bridges`` against an anchor labelled
//!     `dict Seven-Bridges`. docutils does not equate the two; links to
//!     multi-word names stay unresolved. Single-word names are unaffected.

use super::{entry_title, Formatter, ENTRY_SEPARATOR};
use crate::gloss::dialect::Dialect;
use crate::gloss::entry::{Entry, Section};
use crate::gloss::links::{resolve, resolve_text};
use crate::gloss::text::{provenance_message, rst_url, LinkTarget};

/// Formatter for Sphinx-compatible reStructuredText
pub struct RstFormatter;

fn linked(text: &str) -> String {
    resolve_text(text, Dialect::Rst).text()
}

fn anchor(entry: &Entry) -> String {
    format!(".. _dict {}:", entry.slug())
}

fn see_also(entry: &Entry) -> String {
    let lead = if entry.has(Section::Institute) { "\n" } else { "" };
    format!("{lead}see also {}  \n", linked(&entry.see_also))
}

fn further_reading(entry: &Entry) -> String {
    let lead = if entry.has(Section::Institute) || entry.has(Section::SeeAlso) {
        "\n"
    } else {
        ""
    };
    let target = LinkTarget::classify(&entry.further_reading);
    format!(
        "{lead}Further reading: {}  \n",
        rst_url(&entry.further_reading, target)
    )
}

impl Formatter for RstFormatter {
    fn dialect(&self) -> Dialect {
        Dialect::Rst
    }

    fn entry(&self, entry: &Entry, timestamp: bool) -> String {
        let mut out = anchor(entry);

        for section in entry.sections() {
            match section {
                Section::Title => out.push_str(&entry_title(&entry.name)),
                Section::Pronunciation => {
                    out.push_str(&format!("[pronounced {}]  \n\n", entry.pronunciation))
                }
                // the blank line keeps the acronym from reading as a header over the definition
                Section::Acronym => out.push_str(&format!(
                    "*abbreviation for* {}  \n\n",
                    linked(&entry.acronym_full)
                )),
                Section::Definition => {
                    out.push_str(&format!("    {}  \n\n", linked(&entry.definition)))
                }
                Section::Institute => out.push_str(&format!(
                    ".. note:: This term as we define it here is associated with {} and may \
                     have different definitions in other contexts.  \n",
                    entry.institute
                )),
                Section::SeeAlso => out.push_str(&see_also(entry)),
                Section::FurtherReading => out.push_str(&further_reading(entry)),
            }
        }

        if timestamp {
            out.push_str(
                &entry
                    .updated
                    .format("\n.. updated %Y-%m-%d  \n\n\n\n")
                    .to_string(),
            );
        } else {
            out.push_str(ENTRY_SEPARATOR);
        }
        out
    }

    fn table_of_contents(&self, names: &[&str], columns: i32) -> Vec<String> {
        let header = if columns <= 0 {
            ".. contents:: Table of Contents \n\t:local:\n\n".to_string()
        } else {
            format!(".. hlist:: \n\t:columns: {columns}\n\n")
        };

        let mut lines = Vec::with_capacity(names.len() + 1);
        lines.push(header);
        for name in names {
            let link = resolve([format!("[{name}]")], Dialect::Rst).text();
            lines.push(format!("\t* {link}\n"));
        }
        lines
    }

    fn provenance_note(&self, source_file: Option<&str>) -> String {
        format!(".. {}\n\n", provenance_message(source_file))
    }
}
