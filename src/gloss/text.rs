//! Text utilities shared by the entry and glossary renderers

/// Rule character under entry titles
pub const ENTRY_RULE: char = '-';

/// Rule character under the glossary title
pub const TITLE_RULE: char = '=';

/// Prefixes that mark a further-reading value as an external URL
pub const EXTERNAL_PREFIXES: [&str; 3] = ["https://", "http://", "www"];

const TOOL_NAME: &str = "gloss";

/// Underline `text` with `rule` repeated to the text's display length.
///
/// The result is a valid rst section header and reads well as plaintext:
/// `"cat\n---\n"`.
pub fn underline(text: &str, rule: char) -> String {
    let width = text.chars().count();
    let mut out = String::with_capacity(text.len() + width + 2);
    out.push_str(text);
    out.push('\n');
    out.extend(std::iter::repeat(rule).take(width));
    out.push('\n');
    out
}

/// Where a further-reading value points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A web page outside the documentation set
    External,
    /// Another document in the same Sphinx project
    Internal,
}

impl LinkTarget {
    pub fn classify(reference: &str) -> Self {
        if EXTERNAL_PREFIXES
            .iter()
            .any(|prefix| reference.starts_with(prefix))
        {
            LinkTarget::External
        } else {
            LinkTarget::Internal
        }
    }
}

/// Render `url` as an rst link of the given kind.
pub fn rst_url(url: &str, target: LinkTarget) -> String {
    match target {
        LinkTarget::Internal => format!(":doc:`{url} <{url}>`"),
        LinkTarget::External => format!("`<{url}>`_"),
    }
}

/// The advisory text telling readers a document was generated.
pub fn provenance_message(source_file: Option<&str>) -> String {
    let origin = match source_file {
        Some(source) if !source.is_empty() => format!("{TOOL_NAME} from {source}"),
        _ => TOOL_NAME.to_string(),
    };
    format!(
        "This file was created using {origin}. It is highly recommended to update the \
         source file that this page was generated from rather than modifying it directly."
    )
}
