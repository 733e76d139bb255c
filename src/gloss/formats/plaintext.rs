//! Plaintext formatter
//!
//! Fields are emitted verbatim: bracketed text stays bracketed and further
//! reading is printed as-is behind a fixed label.

use super::{entry_title, Formatter, ENTRY_SEPARATOR};
use crate::gloss::dialect::Dialect;
use crate::gloss::entry::{Entry, Section};
use crate::gloss::text::provenance_message;

/// Formatter for plain UTF-8 text
pub struct PlaintextFormatter;

impl Formatter for PlaintextFormatter {
    fn dialect(&self) -> Dialect {
        Dialect::Plaintext
    }

    fn entry(&self, entry: &Entry, timestamp: bool) -> String {
        let mut out = String::new();

        for section in entry.sections() {
            match section {
                Section::Title => out.push_str(&entry_title(&entry.name)),
                Section::Pronunciation => {
                    out.push_str(&format!("[pronounced {}]\n", entry.pronunciation))
                }
                Section::Acronym => {
                    out.push_str(&format!("abbreviation for {}\n", entry.acronym_full))
                }
                Section::Definition => out.push_str(&format!("    {}\n", entry.definition)),
                Section::Institute => out.push_str(&format!(
                    "This term as we define it here is associated with {} and may have \
                     different definitions in other contexts.\n",
                    entry.institute
                )),
                Section::SeeAlso => out.push_str(&format!("see also {}\n", entry.see_also)),
                Section::FurtherReading => {
                    out.push_str(&format!("Further reading: {}\n", entry.further_reading))
                }
            }
        }

        if timestamp {
            out.push_str(&entry.updated.format("updated %Y-%m-%d\n").to_string());
        } else {
            out.push_str(ENTRY_SEPARATOR);
        }
        out
    }

    fn table_of_contents(&self, names: &[&str], _columns: i32) -> Vec<String> {
        names.iter().map(|name| format!("{name}\n")).collect()
    }

    fn provenance_note(&self, source_file: Option<&str>) -> String {
        format!("{}\n\n", provenance_message(source_file))
    }
}
