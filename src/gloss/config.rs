//! Configuration loading for glossary generation.
//!
//! `defaults/gloss.default.toml` is embedded into the library so documented
//! defaults and runtime behavior stay in sync. Callers layer project-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`GlossConfig`].

use crate::gloss::dialect::Dialect;
use crate::gloss::error::GlossError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/gloss.default.toml");

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossConfig {
    pub document: DocumentConfig,
    pub toc: TocConfig,
    pub sorting: SortingConfig,
}

/// Defaults for full-document output.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub dialect: Dialect,
    pub toc_columns: i32,
    pub skip_toc: bool,
    pub skip_provenance: bool,
    pub timestamps: bool,
}

/// Defaults for standalone table of contents output.
#[derive(Debug, Clone, Deserialize)]
pub struct TocConfig {
    pub dialect: Dialect,
    pub columns: i32,
}

/// How [`Glossary::sort_with`](crate::gloss::glossary::Glossary::sort_with) orders entries.
#[derive(Debug, Clone, Deserialize)]
pub struct SortingConfig {
    pub case_insensitive: bool,
}

/// Stacks project files and single-key overrides on the embedded defaults.
///
/// Later layers win; nothing is read from disk until [`Loader::build`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only `defaults/gloss.default.toml` so far.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file; `build` fails with [`GlossError::Config`] if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that may be missing, such as a per-project `gloss.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("document.dialect", "plaintext")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, GlossError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Read every layer and merge them into a [`GlossConfig`].
    pub fn build(self) -> Result<GlossConfig, GlossError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with no files or overrides layered on.
pub fn load_defaults() -> Result<GlossConfig, GlossError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gloss::glossary::{DocumentOptions, TocOptions};
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.document.dialect, Dialect::Rst);
        assert_eq!(config.document.toc_columns, 3);
        assert_eq!(config.toc.dialect, Dialect::Plaintext);
        assert!(config.sorting.case_insensitive);
    }

    #[test]
    fn defaults_match_option_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            DocumentOptions::from(&config.document),
            DocumentOptions::default()
        );
        assert_eq!(TocOptions::from(&config.toc), TocOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("document.dialect", "txt")
            .expect("override to apply")
            .set_override("toc.columns", 4i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.document.dialect, Dialect::Plaintext);
        assert_eq!(config.toc.columns, 4);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[document]\ntimestamps = true\nskip_toc = true").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.document.timestamps);
        assert!(config.document.skip_toc);
        assert_eq!(config.document.toc_columns, 3);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert!(!config.document.skip_provenance);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let err = Loader::new()
            .with_file("does/not/exist.toml")
            .build()
            .unwrap_err();
        assert!(matches!(err, GlossError::Config(_)));
    }
}
