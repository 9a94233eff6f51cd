//! Analyzed token model consumed by the matching core.
//!
//! Tokens are produced by an external tokenizer and POS tagger; this crate
//! only reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reserved POS marker matched by tokens without any POS tag.
///
/// Rules can target untagged tokens explicitly by matching this marker,
/// either as a literal or through a POS regex that accepts it.
pub const UNKNOWN_TAG: &str = "UNKNOWN";

/// POS tag carried by the artificial sentence-start token, when the
/// tokenizer emits one.
pub const SENTENCE_START_TAG: &str = "SENT_START";

/// One analyzed token of a tokenized sentence.
///
/// Immutable after construction: surface text, optional lemma (dictionary
/// base form), optional POS tag, and whether whitespace precedes the token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    text: String,
    lemma: Option<String>,
    pos_tag: Option<String>,
    whitespace_before: bool,
}

impl Token {
    /// Creates a token with the given surface text, no lemma, no POS tag,
    /// and no preceding whitespace.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: None,
            pos_tag: None,
            whitespace_before: false,
        }
    }

    /// Sets the lemma (dictionary base form).
    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Sets the POS tag.
    #[must_use]
    pub fn with_pos_tag(mut self, pos_tag: impl Into<String>) -> Self {
        self.pos_tag = Some(pos_tag.into());
        self
    }

    /// Sets the preceding-whitespace flag.
    #[must_use]
    pub fn with_whitespace_before(mut self, whitespace_before: bool) -> Self {
        self.whitespace_before = whitespace_before;
        self
    }

    /// The surface text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lemma, if the tagger produced one.
    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    /// The POS tag, or `None` for untagged tokens.
    #[must_use]
    pub fn pos_tag(&self) -> Option<&str> {
        self.pos_tag.as_deref()
    }

    /// Whether whitespace precedes this token in the sentence.
    #[must_use]
    pub fn whitespace_before(&self) -> bool {
        self.whitespace_before
    }

    /// The text a string pattern compares against: the lemma when inflected
    /// matching is requested and a lemma exists, else the surface text.
    #[must_use]
    pub fn reading_text(&self, inflected: bool) -> &str {
        if inflected {
            self.lemma.as_deref().unwrap_or(&self.text)
        } else {
            &self.text
        }
    }
}
