//! Match slots: one position's compiled condition within a pattern rule.
//!
//! A slot combines a string condition (literal or anchored regex, possibly
//! lemma-based), a POS condition, independent negation toggles for both,
//! and a whitespace-before requirement. Exceptions, AND-groups, and
//! references hang off the slot but live in their own modules.

use std::fmt;

use glossa_foundation::{Error, Result, Token, UNKNOWN_TAG};
use regex::Regex;

use crate::exception::Exception;
use crate::reference::SlotReference;

// =============================================================================
// Compiled Pattern Modes
// =============================================================================

/// String-matching mode of a slot. Exactly one mode is active at a time.
#[derive(Clone, Debug)]
pub(crate) enum TextPattern {
    /// No pattern configured: any token text is acceptable.
    Any,
    /// Literal comparison. The case-folded form is precomputed so
    /// case-insensitive slots fold only the token side per call.
    Literal { raw: String, folded: String },
    /// Anchored regular expression (full match only).
    Regex(Regex),
}

/// POS-matching mode of a slot.
#[derive(Clone, Debug)]
pub(crate) enum PosPattern {
    /// Literal tag equality.
    Literal(String),
    /// Anchored regular expression over the tag.
    Regex { raw: String, compiled: Regex },
}

/// Compiles a pattern anchored at both ends, so matching is always a full
/// match and never a substring search. `(?i)` is prepended for
/// case-insensitive slots; the `regex` crate folds case Unicode-aware.
pub(crate) fn compile_anchored(pattern: &str, case_sensitive: bool) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 9);
    if !case_sensitive {
        source.push_str("(?i)");
    }
    source.push_str("^(?:");
    source.push_str(pattern);
    source.push_str(")$");
    Regex::new(&source).map_err(|e| Error::invalid_pattern(pattern, e.to_string()))
}

// =============================================================================
// Unification Metadata
// =============================================================================

/// Agreement metadata read by the external unifier; the matcher itself only
/// stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unification {
    /// Agreement feature name (e.g. `gender`).
    pub feature: String,
    /// Feature type restriction (e.g. `feminine`).
    pub kind: String,
}

// =============================================================================
// Match Slot
// =============================================================================

/// One position's match condition within an ordered pattern.
///
/// Slots are built once at rule-compile time and reused for every sentence
/// the rule driver evaluates. All matching methods take `&self`; the only
/// per-attempt mutable state is the separate [`GroupProgress`] session
/// value, so compiled slots can be shared across parallel workers.
///
/// [`GroupProgress`]: crate::GroupProgress
#[derive(Clone, Debug)]
pub struct MatchSlot {
    /// Pattern text as configured; also the default reference template.
    pub(crate) raw: String,
    pub(crate) text: TextPattern,
    pub(crate) case_sensitive: bool,
    pub(crate) regexp: bool,
    pub(crate) inflected: bool,
    pub(crate) negation: bool,

    pub(crate) pos: Option<PosPattern>,
    pub(crate) pos_negation: bool,

    pub(crate) whitespace_before: Option<bool>,
    pub(crate) skip: i32,

    pub(crate) phrase_name: Option<String>,
    pub(crate) unification: Option<Unification>,
    pub(crate) unification_negation: bool,

    /// Exceptions valid for the current token and/or some next tokens.
    pub(crate) exceptions: Vec<Exception>,
    /// Exceptions valid for the previous token.
    pub(crate) previous_exceptions: Vec<Exception>,

    pub(crate) and_group: Vec<MatchSlot>,

    pub(crate) reference: Option<SlotReference>,
    pub(crate) reference_template: Option<String>,
}

impl MatchSlot {
    /// Creates a slot matching `pattern`.
    ///
    /// An empty pattern produces a wildcard slot that accepts any token
    /// text. With `regexp` set, the pattern compiles eagerly and matching
    /// is anchored at both ends. With `inflected` set, string comparison
    /// targets the token's lemma, falling back to its surface text.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] when `regexp` is set and the
    /// pattern does not compile.
    ///
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn new(pattern: &str, case_sensitive: bool, regexp: bool, inflected: bool) -> Result<Self> {
        let mut slot = Self {
            raw: String::new(),
            text: TextPattern::Any,
            case_sensitive,
            regexp,
            inflected,
            negation: false,
            pos: None,
            pos_negation: false,
            whitespace_before: None,
            skip: 0,
            phrase_name: None,
            unification: None,
            unification_negation: false,
            exceptions: Vec::new(),
            previous_exceptions: Vec::new(),
            and_group: Vec::new(),
            reference: None,
            reference_template: None,
        };
        slot.set_string_pattern(pattern)?;
        Ok(slot)
    }

    /// Replaces the string pattern, recompiling and discarding any cached
    /// regex. An empty pattern reverts the slot to wildcard mode.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] when the slot is in regex mode
    /// and the pattern does not compile.
    ///
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn set_string_pattern(&mut self, pattern: &str) -> Result<()> {
        pattern.clone_into(&mut self.raw);
        self.text = if pattern.is_empty() {
            TextPattern::Any
        } else if self.regexp {
            TextPattern::Regex(compile_anchored(pattern, self.case_sensitive)?)
        } else {
            TextPattern::Literal {
                raw: pattern.to_string(),
                folded: pattern.to_lowercase(),
            }
        };
        Ok(())
    }

    /// Sets the POS condition and its negation toggle. POS regexes are
    /// anchored like string regexes but always case-sensitive.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] when `regexp` is set and the
    /// tag pattern does not compile.
    ///
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn set_pos_pattern(&mut self, pos: &str, regexp: bool, negation: bool) -> Result<()> {
        self.pos_negation = negation;
        self.pos = Some(if regexp {
            PosPattern::Regex {
                raw: pos.to_string(),
                compiled: compile_anchored(pos, true)?,
            }
        } else {
            PosPattern::Literal(pos.to_string())
        });
        Ok(())
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Checks whether this slot's base condition matches `token`.
    ///
    /// With a string pattern configured the verdict is
    /// `(string ^ negation) && (pos ^ pos_negation) && whitespace`;
    /// without one it is `!negation && (pos ^ pos_negation)`. Pure: no
    /// session state is touched, so exceptions and AND-group members reuse
    /// this method freely.
    #[must_use]
    pub fn is_matched(&self, token: &Token) -> bool {
        if self.tests_string() {
            (self.string_matches(token) ^ self.negation)
                && (self.pos_matches(token) ^ self.pos_negation)
                && self.whitespace_matches(token)
        } else {
            !self.negation && (self.pos_matches(token) ^ self.pos_negation)
        }
    }

    pub(crate) fn tests_string(&self) -> bool {
        !matches!(self.text, TextPattern::Any)
    }

    fn string_matches(&self, token: &Token) -> bool {
        let text = token.reading_text(self.inflected);
        match &self.text {
            TextPattern::Any => true,
            TextPattern::Literal { raw, folded } => {
                if self.case_sensitive {
                    raw == text
                } else {
                    *folded == text.to_lowercase()
                }
            }
            TextPattern::Regex(re) => re.is_match(text),
        }
    }

    fn pos_matches(&self, token: &Token) -> bool {
        let Some(pos) = &self.pos else {
            // no POS condition, wildcard
            return true;
        };
        // untagged tokens are compared as the reserved UNKNOWN marker
        let tag = token.pos_tag().unwrap_or(UNKNOWN_TAG);
        match pos {
            PosPattern::Literal(expected) => expected == tag,
            PosPattern::Regex { compiled, .. } => compiled.is_match(tag),
        }
    }

    fn whitespace_matches(&self, token: &Token) -> bool {
        self.whitespace_before
            .is_none_or(|required| required == token.whitespace_before())
    }

    // =========================================================================
    // Configuration Surface
    // =========================================================================

    /// Negates the meaning of the string condition.
    pub fn set_negation(&mut self, negation: bool) {
        self.negation = negation;
    }

    /// Whether the string condition is negated.
    #[must_use]
    pub fn negation(&self) -> bool {
        self.negation
    }

    /// Whether the POS condition is negated.
    #[must_use]
    pub fn pos_negation(&self) -> bool {
        self.pos_negation
    }

    /// Requires the token's preceding-whitespace flag to equal
    /// `whitespace_before`.
    pub fn set_whitespace_before(&mut self, whitespace_before: bool) {
        self.whitespace_before = Some(whitespace_before);
    }

    /// The skip budget: how many tokens the driver may skip while this
    /// slot's exception scope stays open. Negative means unbounded.
    #[must_use]
    pub fn skip_next(&self) -> i32 {
        self.skip
    }

    /// Sets the skip budget.
    pub fn set_skip_next(&mut self, skip: i32) {
        self.skip = skip;
    }

    /// The string pattern as configured (empty for wildcard slots).
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.raw
    }

    /// The POS pattern as configured, if any.
    #[must_use]
    pub fn pos_tag(&self) -> Option<&str> {
        match &self.pos {
            None => None,
            Some(PosPattern::Literal(tag)) => Some(tag),
            Some(PosPattern::Regex { raw, .. }) => Some(raw),
        }
    }

    /// Whether the string pattern is a regular expression.
    #[must_use]
    pub fn is_regular_expression(&self) -> bool {
        self.regexp
    }

    /// Whether string comparison targets the lemma.
    #[must_use]
    pub fn is_inflected(&self) -> bool {
        self.inflected
    }

    /// Whether literal/regex comparison is case-sensitive.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Sets the ID of the phrase this slot belongs to.
    pub fn set_phrase_name(&mut self, name: impl Into<String>) {
        self.phrase_name = Some(name.into());
    }

    /// The phrase ID, if the slot belongs to one.
    #[must_use]
    pub fn phrase_name(&self) -> Option<&str> {
        self.phrase_name.as_deref()
    }

    /// Whether this slot belongs to a phrase.
    #[must_use]
    pub fn is_part_of_phrase(&self) -> bool {
        self.phrase_name.is_some()
    }

    /// Marks this slot for unification with the given feature and type.
    pub fn set_unification(&mut self, feature: impl Into<String>, kind: impl Into<String>) {
        self.unification = Some(Unification {
            feature: feature.into(),
            kind: kind.into(),
        });
    }

    /// The unification metadata, if the slot takes part in unification.
    #[must_use]
    pub fn unification(&self) -> Option<&Unification> {
        self.unification.as_ref()
    }

    /// Whether this slot takes part in unification.
    #[must_use]
    pub fn is_unified(&self) -> bool {
        self.unification.is_some()
    }

    /// Negates the unification condition.
    pub fn set_unification_negation(&mut self) {
        self.unification_negation = true;
    }

    /// Whether the unification condition is negated.
    #[must_use]
    pub fn unification_negation(&self) -> bool {
        self.unification_negation
    }
}

impl fmt::Display for MatchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negation {
            write!(f, "!")?;
        }
        f.write_str(&self.raw)?;
        if let Some(name) = &self.phrase_name {
            write!(f, " {{{name}}}")?;
        }
        if let Some(pos) = self.pos_tag() {
            write!(f, "/{pos}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
