//! Scoped exceptions: negative sub-conditions that disqualify an otherwise
//! matching slot.
//!
//! An exception is the matcher itself wrapped in a lightweight scope tag,
//! not a separate condition language. Which of the two owner-side lists
//! receives it is decided solely by the scope flags supplied at add time;
//! exactly one of {current, next, previous} applies per instance.

use glossa_foundation::{Result, Token};

use crate::slot::MatchSlot;

/// A [`MatchSlot`] reused as a disqualifying condition, tagged with the
/// stream position it applies to.
#[derive(Clone, Debug)]
pub struct Exception {
    pub(crate) slot: MatchSlot,
    pub(crate) scope_next: bool,
}

impl Exception {
    pub(crate) fn new(slot: MatchSlot, scope_next: bool) -> Self {
        Self { slot, scope_next }
    }

    /// The underlying matching condition.
    #[must_use]
    pub fn slot(&self) -> &MatchSlot {
        &self.slot
    }

    /// True when the exception applies to a later stream position.
    #[must_use]
    pub fn is_scope_next(&self) -> bool {
        self.scope_next
    }
}

impl MatchSlot {
    /// Adds a string-typed exception. The exception slot inherits this
    /// slot's case sensitivity; `scope_previous` routes it to the
    /// previous-token list, otherwise it lands in the current/next list
    /// with `scope_next` deciding which query surfaces it.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] when `regexp` is set and the
    /// pattern does not compile.
    ///
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn set_string_exception(
        &mut self,
        pattern: &str,
        regexp: bool,
        inflected: bool,
        negation: bool,
        scope_next: bool,
        scope_previous: bool,
    ) -> Result<()> {
        let mut slot = MatchSlot::new(pattern, self.is_case_sensitive(), regexp, inflected)?;
        slot.set_negation(negation);
        self.push_exception(Exception::new(slot, scope_next), scope_previous);
        Ok(())
    }

    /// Adds a POS-typed exception, judged purely by POS and negation.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] when `regexp` is set and the
    /// tag pattern does not compile.
    ///
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn set_pos_exception(
        &mut self,
        pos: &str,
        regexp: bool,
        negation: bool,
        scope_next: bool,
        scope_previous: bool,
    ) -> Result<()> {
        let mut slot = MatchSlot::new("", self.is_case_sensitive(), false, false)?;
        slot.set_pos_pattern(pos, regexp, negation)?;
        self.push_exception(Exception::new(slot, scope_next), scope_previous);
        Ok(())
    }

    fn push_exception(&mut self, exception: Exception, scope_previous: bool) {
        if scope_previous {
            self.previous_exceptions.push(exception);
        } else {
            self.exceptions.push(exception);
        }
    }

    /// Applies a whitespace-before requirement to the most recently added
    /// current/next-scope exception. No-op when none exists.
    pub fn set_exception_whitespace_before(&mut self, whitespace_before: bool) {
        if let Some(last) = self.exceptions.last_mut() {
            last.slot.set_whitespace_before(whitespace_before);
        }
    }

    /// Checks whether any current-scope exception disqualifies `token`.
    /// Next-flagged members are skipped; the first hit short-circuits, as
    /// exception checks carry no progress state.
    #[must_use]
    pub fn is_exception_matched(&self, token: &Token) -> bool {
        self.exceptions
            .iter()
            .filter(|e| !e.scope_next)
            .any(|e| e.slot.is_matched(token))
    }

    /// Checks whether any next-flagged exception matches `token`. The
    /// driver calls this against later stream positions while the slot's
    /// exception scope stays open.
    #[must_use]
    pub fn is_matched_by_scope_next_exception(&self, token: &Token) -> bool {
        self.exceptions
            .iter()
            .filter(|e| e.scope_next)
            .any(|e| e.slot.is_matched(token))
    }

    /// Checks whether any previous-scope exception matches `token`, the
    /// token one position back in the stream.
    #[must_use]
    pub fn is_matched_by_scope_previous_exception(&self, token: &Token) -> bool {
        self.previous_exceptions
            .iter()
            .filter(|e| !e.scope_next)
            .any(|e| e.slot.is_matched(token))
    }

    /// True when any previous-scope exception exists.
    #[must_use]
    pub fn has_previous_exception(&self) -> bool {
        !self.previous_exceptions.is_empty()
    }

    /// Disjunction of the AND-group members' current-scope exception
    /// checks.
    #[must_use]
    pub fn is_and_exception_group_matched(&self, token: &Token) -> bool {
        self.and_group.iter().any(|m| m.is_exception_matched(token))
    }

    /// Exception check over the slot and its AND-group members.
    /// Short-circuiting is fine here, unlike the progress-tracking match
    /// calls.
    #[must_use]
    pub fn is_exception_matched_completely(&self, token: &Token) -> bool {
        self.is_exception_matched(token) || self.is_and_exception_group_matched(token)
    }
}

// =============================================================================
// Tests
// =============================================================================
