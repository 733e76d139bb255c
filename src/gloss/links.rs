//! Bracket cross-reference resolution
//!
//! Turns `[Term]` in free text into an rst internal link, `:ref:`dict Term``,
//! which targets the anchor the rst formatter places above every entry title.
//!
//! The resolver works on whitespace-split tokens with a single left-to-right
//! scan. A bracket pair may span tokens (`[Seven` `Bridges]`); an "inside a
//! link" flag carries across tokens until the closing bracket is seen.
//!
//! Limitations
//!
//!     - A closing bracket directly followed by a letter (`[cat]s`) cannot be
//!       expressed in rst. The token is reported as a [`LinkWarning`] and then
//!       processed as usual, so the output link is most likely wrong.
//!     - Brackets inside the brackets (`[Seven Br]idges]`) close the link at
//!       the first `]`. This is accepted, not handled.
//!     - Links are not checked against existing entries; broken references
//!       are left for the documentation build to report.

use crate::gloss::dialect::Dialect;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Opening marker of an rst cross-reference to a glossary entry
pub const REF_OPEN: &str = ":ref:`dict ";

/// Closing marker of an rst cross-reference
pub const REF_CLOSE: &str = "`";

static CLOSE_BEFORE_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\][a-zA-Z]+").unwrap());

/// A token whose closing bracket is immediately followed by a letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWarning {
    pub token: String,
}

impl fmt::Display for LinkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "An entry will have an invalid internal link due to rst limitations. Put some sort \
             of whitespace or punctuation before any additional letters after the ending \
             bracket. Problematic word: {}",
            self.token
        )
    }
}

/// Output of a resolver pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub tokens: Vec<String>,
    pub warnings: Vec<LinkWarning>,
}

impl Resolution {
    /// Re-join the resolved tokens with single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Resolve bracketed references in a sequence of whitespace-split tokens.
///
/// Plaintext has no link syntax, so its tokens pass through unchanged.
pub fn resolve<I, S>(tokens: I, dialect: Dialect) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match dialect {
        Dialect::Plaintext => Resolution {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_string())
                .collect(),
            warnings: Vec::new(),
        },
        Dialect::Rst => resolve_rst(tokens),
    }
}

/// Split `text` on whitespace and resolve it
pub fn resolve_text(text: &str, dialect: Dialect) -> Resolution {
    resolve(text.split_whitespace(), dialect)
}

fn resolve_rst<I, S>(tokens: I) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolution = Resolution::default();
    let mut in_link = false;

    for token in tokens {
        let token = token.as_ref();

        if CLOSE_BEFORE_LETTER.is_match(token) {
            let warning = LinkWarning {
                token: token.to_string(),
            };
            tracing::warn!(token, "{warning}");
            resolution.warnings.push(warning);
        }

        let processed = if let Some(inner) = token.strip_prefix('[') {
            if inner.contains(']') {
                in_link = false;
                format!("{REF_OPEN}{}", inner.replace(']', REF_CLOSE))
            } else {
                in_link = true;
                format!("{REF_OPEN}{inner}")
            }
        } else if in_link {
            // continuation of a link opened by an earlier token
            if token.contains(']') {
                in_link = false;
                token.replace(']', REF_CLOSE)
            } else {
                token.to_string()
            }
        } else {
            token.to_string()
        };

        resolution.tokens.push(processed);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rst(text: &str) -> String {
        resolve_text(text, Dialect::Rst).text()
    }

    #[test]
    fn test_single_token_link() {
        assert_eq!(rst("[Term]"), ":ref:`dict Term`");
    }

    #[test]
    fn test_multi_token_link() {
        let resolution = resolve(["[Multi", "Word]"], Dialect::Rst);
        assert_eq!(resolution.tokens, vec![":ref:`dict Multi", "Word`"]);
        assert_eq!(resolution.text(), ":ref:`dict Multi Word`");
    }

    #[test]
    fn test_link_in_sentence_keeps_punctuation() {
        assert_eq!(
            rst("A large [canine], found across the Northern Hemisphere"),
            "A large :ref:`dict canine`, found across the Northern Hemisphere"
        );
    }

    #[test]
    fn test_long_link_spans_interior_tokens() {
        assert_eq!(
            rst("see [the very long term] here"),
            "see :ref:`dict the very long term` here"
        );
    }

    #[test]
    fn test_unclosed_link_runs_to_the_end() {
        assert_eq!(rst("[open ended"), ":ref:`dict open ended");
    }

    #[test]
    fn test_closing_bracket_without_opening_is_untouched() {
        assert_eq!(rst("stray] bracket"), "stray] bracket");
    }

    #[test]
    fn test_adjacent_letter_warns_but_still_renders() {
        let resolution = resolve_text("many [cat]s here", Dialect::Rst);
        assert_eq!(resolution.text(), "many :ref:`dict cat`s here");
        assert_eq!(
            resolution.warnings,
            vec![LinkWarning {
                token: "[cat]s".to_string()
            }]
        );
    }

    #[test]
    fn test_nested_bracket_is_a_known_limitation() {
        assert_eq!(
            rst("[Seven Br]idges] platform"),
            ":ref:`dict Seven Br`idges` platform"
        );
    }

    #[test]
    fn test_plaintext_passes_tokens_through() {
        let resolution = resolve(["[Term]", "plain"], Dialect::Plaintext);
        assert_eq!(resolution.tokens, vec!["[Term]", "plain"]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(rst("  a\n\tb  "), "a b");
    }
}
