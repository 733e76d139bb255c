//! Glossary aggregation and document output
//!
//! A [`Glossary`] owns an ordered list of entries. Entries are added explicitly
//! and kept in insertion order until [`Glossary::sort_entries`] is called;
//! rendering never reorders them.
//!
//! Writes append. Running a generation twice against the same destination
//! produces the document twice, so callers that regenerate in place must
//! truncate or remove the destination first.

use crate::gloss::config::{DocumentConfig, SortingConfig, TocConfig};
use crate::gloss::dialect::Dialect;
use crate::gloss::entry::Entry;
use crate::gloss::error::{Destination, GlossError};
use crate::gloss::links::LinkWarning;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for writing a full glossary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub dialect: Dialect,
    /// Columns of the rst table of contents; zero or less uses a local contents directive
    pub toc_columns: i32,
    pub skip_toc: bool,
    pub skip_provenance: bool,
    /// End each entry with its last-updated date
    pub timestamps: bool,
    /// File the glossary was built from, named in the provenance note
    pub source_file: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            dialect: Dialect::Rst,
            toc_columns: 3,
            skip_toc: false,
            skip_provenance: false,
            timestamps: false,
            source_file: None,
        }
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        DocumentOptions {
            dialect: config.dialect,
            toc_columns: config.toc_columns,
            skip_toc: config.skip_toc,
            skip_provenance: config.skip_provenance,
            timestamps: config.timestamps,
            source_file: None,
        }
    }
}

/// Options for writing a standalone table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
    pub dialect: Dialect,
    pub columns: i32,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            dialect: Dialect::Plaintext,
            columns: 0,
        }
    }
}

impl From<&TocConfig> for TocOptions {
    fn from(config: &TocConfig) -> Self {
        TocOptions {
            dialect: config.dialect,
            columns: config.columns,
        }
    }
}

/// An entire glossary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glossary {
    pub title: String,
    /// Default destination of [`Glossary::write_document`]
    pub output_path: Option<PathBuf>,
    /// Default destination of [`Glossary::write_table_of_contents`]
    pub toc_path: Option<PathBuf>,
    entries: Vec<Entry>,
}

impl Glossary {
    pub fn new(title: impl Into<String>) -> Self {
        Glossary {
            title: title.into(),
            output_path: None,
            toc_path: None,
            entries: Vec::new(),
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_toc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.toc_path = Some(path.into());
        self
    }

    /// Add a new entry to the glossary
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Add several entries, keeping their order
    pub fn add_entries(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable sort of the entries by name.
    ///
    /// Case-insensitive sorting compares upper-cased names; entries whose keys
    /// compare equal keep their relative order. Duplicates are kept.
    pub fn sort_entries(&mut self, case_insensitive: bool) {
        self.entries
            .sort_by(|a, b| a.sort_key(case_insensitive).cmp(&b.sort_key(case_insensitive)));
    }

    /// Sort as configured by the `[sorting]` table
    pub fn sort_with(&mut self, config: &SortingConfig) {
        self.sort_entries(config.case_insensitive);
    }

    /// Every malformed bracket adjacency in the collection, paired with the entry name
    pub fn link_warnings(&self) -> Vec<(&str, LinkWarning)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .link_warnings()
                    .into_iter()
                    .map(move |warning| (entry.name(), warning))
            })
            .collect()
    }

    /// Table of contents lines listing every entry name in collection order
    pub fn table_of_contents(&self, dialect: Dialect, columns: i32) -> Vec<String> {
        let names: Vec<&str> = self.entries.iter().map(Entry::name).collect();
        dialect.formatter().table_of_contents(&names, columns)
    }

    /// Render the whole document: provenance note, title, table of contents, entries
    pub fn render_document(&self, options: &DocumentOptions) -> String {
        let formatter = options.dialect.formatter();
        let mut out = String::new();

        if !options.skip_provenance {
            out.push_str(&formatter.provenance_note(options.source_file.as_deref()));
        }
        out.push_str(&formatter.glossary_title(&self.title));
        if !options.skip_toc {
            out.push_str(
                &self
                    .table_of_contents(options.dialect, options.toc_columns)
                    .concat(),
            );
            // a blank line must separate the toc directive from the first anchor
            out.push('\n');
        }
        for entry in &self.entries {
            out.push_str(&formatter.entry(entry, options.timestamps));
        }
        out
    }

    pub fn render_table_of_contents(&self, options: &TocOptions) -> String {
        self.table_of_contents(options.dialect, options.columns)
            .concat()
    }

    /// Append the full document to `destination`, or to the stored output path.
    ///
    /// Fails with [`GlossError::MissingDestination`] before touching the
    /// filesystem when neither path is set.
    #[tracing::instrument(skip_all, fields(dialect = %options.dialect, entries = self.entries.len()))]
    pub fn write_document(
        &self,
        destination: Option<&Path>,
        options: &DocumentOptions,
    ) -> Result<(), GlossError> {
        let path = resolve_destination(destination, self.output_path.as_deref())
            .ok_or(GlossError::MissingDestination(Destination::Document))?;
        append(path, &self.render_document(options))
    }

    /// Append the table of contents to `destination`, or to the stored toc path.
    #[tracing::instrument(skip_all, fields(dialect = %options.dialect, entries = self.entries.len()))]
    pub fn write_table_of_contents(
        &self,
        destination: Option<&Path>,
        options: &TocOptions,
    ) -> Result<(), GlossError> {
        let path = resolve_destination(destination, self.toc_path.as_deref())
            .ok_or(GlossError::MissingDestination(Destination::TableOfContents))?;
        append(path, &self.render_table_of_contents(options))
    }
}

/// The explicit destination wins over the stored default; empty paths count as unset.
fn resolve_destination<'a>(
    explicit: Option<&'a Path>,
    stored: Option<&'a Path>,
) -> Option<&'a Path> {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| stored.filter(|path| !path.as_os_str().is_empty()))
}

fn append(path: &Path, contents: &str) -> Result<(), GlossError> {
    tracing::debug!(path = %path.display(), bytes = contents.len(), "appending");
    let io_error = |source| GlossError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(glossary: &Glossary) -> Vec<&str> {
        glossary.entries().iter().map(Entry::name).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut glossary = Glossary::new("Animals");
        glossary.add_entry(Entry::new("wolf"));
        glossary.add_entries([Entry::new("cat"), Entry::new("canine")]);
        assert_eq!(names(&glossary), vec!["wolf", "cat", "canine"]);
        assert_eq!(glossary.len(), 3);
    }

    #[test]
    fn test_sort_case_sensitive_puts_uppercase_first() {
        let mut glossary = Glossary::new("Fruit");
        glossary.add_entries(["banana", "Apple", "cherry"].map(Entry::new));
        glossary.sort_entries(false);
        assert_eq!(names(&glossary), vec!["Apple", "banana", "cherry"]);

        glossary.add_entry(Entry::new("Zebra"));
        glossary.sort_entries(false);
        assert_eq!(names(&glossary), vec!["Apple", "Zebra", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_with_follows_sorting_override() {
        let fruit = || {
            let mut glossary = Glossary::new("Fruit");
            glossary.add_entries(["banana", "Apple", "cherry", "Zebra"].map(Entry::new));
            glossary
        };

        let defaults = crate::gloss::config::load_defaults().unwrap();
        let mut glossary = fruit();
        glossary.sort_with(&defaults.sorting);
        assert_eq!(names(&glossary), vec!["Apple", "banana", "cherry", "Zebra"]);

        let case_sensitive = crate::gloss::config::Loader::new()
            .set_override("sorting.case_insensitive", false)
            .unwrap()
            .build()
            .unwrap();
        let mut glossary = fruit();
        glossary.sort_with(&case_sensitive.sorting);
        assert_eq!(names(&glossary), vec!["Apple", "Zebra", "banana", "cherry"]);
    }

    #[test]
    fn test_resolve_destination() {
        let explicit = Path::new("explicit.rst");
        let stored = Path::new("stored.rst");
        assert_eq!(resolve_destination(Some(explicit), Some(stored)), Some(explicit));
        assert_eq!(resolve_destination(None, Some(stored)), Some(stored));
        assert_eq!(resolve_destination(Some(Path::new("")), Some(stored)), Some(stored));
        assert_eq!(resolve_destination(None, Some(Path::new(""))), None);
        assert_eq!(resolve_destination(None, None), None);
    }

    #[test]
    fn test_missing_destination_is_reported() {
        let glossary = Glossary::new("Animals");
        let err = glossary
            .write_table_of_contents(None, &TocOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            GlossError::MissingDestination(Destination::TableOfContents)
        ));
    }

    #[test]
    fn test_empty_glossary_document() {
        let glossary = Glossary::new("Empty");
        let options = DocumentOptions {
            skip_provenance: true,
            ..DocumentOptions::default()
        };
        assert_eq!(
            glossary.render_document(&options),
            "Empty\n=====\n.. hlist:: \n\t:columns: 3\n\n\n"
        );
    }
}
