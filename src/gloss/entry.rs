//! A single glossary term
//!
//! Every field except the name is optional; an empty string means "absent" and
//! the corresponding section is left out of the rendered output entirely.
//!
//! When rendered as rst, the acronym expansion, the definition and the "see
//! also" field have their `[bracketed]` text turned into internal links, so
//! `"I use [Seven Bridges]"` becomes `"I use :ref:`dict Seven Bridges`"`.

use crate::gloss::dialect::Dialect;
use crate::gloss::links::{resolve_text, LinkWarning};
use chrono::{Local, NaiveDate};
use std::borrow::Cow;

/// The sections an entry can render, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Title,
    Pronunciation,
    Acronym,
    Definition,
    Institute,
    SeeAlso,
    FurtherReading,
}

impl Section {
    /// All sections in the fixed order they are rendered
    pub const ORDER: [Section; 7] = [
        Section::Title,
        Section::Pronunciation,
        Section::Acronym,
        Section::Definition,
        Section::Institute,
        Section::SeeAlso,
        Section::FurtherReading,
    ];
}

/// One glossary term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The term itself; spaces are fine, brackets are not
    pub name: String,
    /// Full form, when the name is an acronym
    pub acronym_full: String,
    pub definition: String,
    /// A URL, or the name of another document in the same Sphinx project
    pub further_reading: String,
    /// Institution the term is associated with; rendered as a caveat
    pub institute: String,
    pub pronunciation: String,
    /// Related but not equivalent entries, may contain `[links]`
    pub see_also: String,
    pub updated: NaiveDate,
}

impl Entry {
    /// Create an entry with only a name, last updated today
    pub fn new(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            acronym_full: String::new(),
            definition: String::new(),
            further_reading: String::new(),
            institute: String::new(),
            pronunciation: String::new(),
            see_also: String::new(),
            updated: Local::now().date_naive(),
        }
    }

    pub fn with_acronym_full(mut self, acronym_full: impl Into<String>) -> Self {
        self.acronym_full = acronym_full.into();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_further_reading(mut self, further_reading: impl Into<String>) -> Self {
        self.further_reading = further_reading.into();
        self
    }

    pub fn with_institute(mut self, institute: impl Into<String>) -> Self {
        self.institute = institute.into();
        self
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    pub fn with_see_also(mut self, see_also: impl Into<String>) -> Self {
        self.see_also = see_also.into();
        self
    }

    pub fn with_updated(mut self, updated: NaiveDate) -> Self {
        self.updated = updated;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name with every space replaced by a hyphen, used as the anchor id
    pub fn slug(&self) -> String {
        self.name.replace(' ', "-")
    }

    /// Key used when sorting entries by name
    pub fn sort_key(&self, case_insensitive: bool) -> Cow<'_, str> {
        if case_insensitive {
            Cow::Owned(self.name.to_uppercase())
        } else {
            Cow::Borrowed(&self.name)
        }
    }

    /// Whether the given section has content to render
    pub fn has(&self, section: Section) -> bool {
        match section {
            Section::Title => true,
            Section::Pronunciation => !self.pronunciation.is_empty(),
            Section::Acronym => !self.acronym_full.is_empty(),
            Section::Definition => !self.definition.is_empty(),
            Section::Institute => !self.institute.is_empty(),
            Section::SeeAlso => !self.see_also.is_empty(),
            Section::FurtherReading => !self.further_reading.is_empty(),
        }
    }

    /// Sections that will appear in this entry's output, in render order
    pub fn sections(&self) -> Vec<Section> {
        Section::ORDER
            .into_iter()
            .filter(|section| self.has(*section))
            .collect()
    }

    /// Malformed bracket adjacency in the fields that carry links.
    ///
    /// These are the same diagnostics rst rendering logs; rendering still
    /// completes when any are present.
    pub fn link_warnings(&self) -> Vec<LinkWarning> {
        [&self.acronym_full, &self.definition, &self.see_also]
            .into_iter()
            .flat_map(|field| resolve_text(field, Dialect::Rst).warnings)
            .collect()
    }

    /// Render this entry in the given dialect
    pub fn render(&self, dialect: Dialect, timestamp: bool) -> String {
        dialect.formatter().entry(self, timestamp)
    }

    pub fn to_plaintext(&self, timestamp: bool) -> String {
        self.render(Dialect::Plaintext, timestamp)
    }

    pub fn to_rst(&self, timestamp: bool) -> String {
        self.render(Dialect::Rst, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_replaces_spaces() {
        assert_eq!(Entry::new("Seven Bridges").slug(), "Seven-Bridges");
        assert_eq!(Entry::new("cat").slug(), "cat");
    }

    #[test]
    fn test_sort_key() {
        let entry = Entry::new("banana");
        assert_eq!(entry.sort_key(true), "BANANA");
        assert_eq!(entry.sort_key(false), "banana");
    }

    #[test]
    fn test_name_only_has_title_section() {
        assert_eq!(Entry::new("cat").sections(), vec![Section::Title]);
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let entry = Entry::new("WDL")
            .with_further_reading("https://openwdl.org")
            .with_see_also("[CWL]")
            .with_pronunciation("widdle")
            .with_acronym_full("Workflow Description Language");
        assert_eq!(
            entry.sections(),
            vec![
                Section::Title,
                Section::Pronunciation,
                Section::Acronym,
                Section::SeeAlso,
                Section::FurtherReading,
            ]
        );
    }

    #[test]
    fn test_link_warnings_cover_linked_fields() {
        let entry = Entry::new("felid")
            .with_acronym_full("[Fel]is")
            .with_definition("Any of the [cat]s")
            .with_pronunciation("[fee]lid")
            .with_see_also("[lion]");
        let tokens: Vec<String> = entry
            .link_warnings()
            .into_iter()
            .map(|warning| warning.token)
            .collect();
        assert_eq!(tokens, vec!["[Fel]is", "[cat]s"]);
    }

    #[test]
    fn test_defaults_to_today() {
        let before = Local::now().date_naive();
        let entry = Entry::new("cat");
        let after = Local::now().date_naive();
        assert!(before <= entry.updated && entry.updated <= after);
    }
}
