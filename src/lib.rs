//! # gloss
//!
//! Generates glossary documents from term entries, in reStructuredText (Sphinx
//! compatible) and plaintext.
//!
//! A [`Glossary`](gloss::glossary::Glossary) holds [`Entry`](gloss::entry::Entry)
//! values added explicitly by the caller. Each entry renders itself through the
//! [`Formatter`](gloss::formats::Formatter) of the requested
//! [`Dialect`](gloss::dialect::Dialect); in rst, `[bracketed]` text in
//! definitions, acronyms and "see also" fields becomes an internal `:ref:` link
//! (see [`links`](gloss::links)).
//!
//! ```rust,ignore
//! use gloss::{DocumentOptions, Entry, Glossary};
//!
//! let mut glossary = Glossary::new("Very Cool Animals").with_output_path("animals.rst");
//! glossary.add_entries([
//!     Entry::new("cat").with_definition("A digitigrade carnivorous animal"),
//!     Entry::new("tiger").with_definition("An orange-and-black striped [cat]"),
//! ]);
//! glossary.sort_entries(true);
//! glossary.write_document(None, &DocumentOptions::default())?;
//! ```

pub mod gloss;

pub use gloss::config::{load_defaults, GlossConfig, Loader, SortingConfig};
pub use gloss::dialect::Dialect;
pub use gloss::entry::{Entry, Section};
pub use gloss::error::{Destination, GlossError};
pub use gloss::formats::{Formatter, PlaintextFormatter, RstFormatter};
pub use gloss::glossary::{DocumentOptions, Glossary, TocOptions};
pub use gloss::links::{resolve, resolve_text, LinkWarning, Resolution};
pub use gloss::text::LinkTarget;
