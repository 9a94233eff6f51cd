//! Cross-slot references: rewriting a slot's live pattern from another,
//! already-resolved slot's token, for agreement rules (e.g. a verb form
//! agreeing with an earlier noun).
//!
//! Rewriting is a pure transformation: [`MatchSlot::compile_reference`]
//! returns a fresh effective slot for one evaluation pass and never
//! mutates the reusable compiled definition.

use glossa_foundation::{Error, Result, Synthesizer, Token};

use crate::slot::MatchSlot;

/// Reference from one slot to another slot's resolved token.
///
/// `\n` markers in the owning slot's template (where *n* is the referenced
/// slot number) are spliced at compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotReference {
    token_ref: usize,
    pos_tag: Option<String>,
    pos_regexp: bool,
}

impl SlotReference {
    /// Creates a reference to slot number `token_ref`.
    #[must_use]
    pub fn new(token_ref: usize) -> Self {
        Self {
            token_ref,
            pos_tag: None,
            pos_regexp: false,
        }
    }

    /// Requests a POS rewrite: the effective slot matches the referenced
    /// token's lemma under `pos_tag`. With `regexp` set the tag is a
    /// pattern the synthesizer resolves to a concrete category.
    #[must_use]
    pub fn with_pos_tag(mut self, pos_tag: impl Into<String>, regexp: bool) -> Self {
        self.pos_tag = Some(pos_tag.into());
        self.pos_regexp = regexp;
        self
    }

    /// The referenced slot number.
    #[must_use]
    pub fn token_ref(&self) -> usize {
        self.token_ref
    }

    /// True when this reference rewrites the slot's POS condition.
    #[must_use]
    pub fn sets_pos(&self) -> bool {
        self.pos_tag.is_some()
    }

    /// True when the target POS tag is a pattern, not a literal tag.
    #[must_use]
    pub fn is_pos_regexp(&self) -> bool {
        self.pos_regexp
    }

    /// The splice marker this reference replaces, e.g. `\2`.
    fn marker(&self) -> String {
        format!("\\{}", self.token_ref)
    }

    /// The target POS category: literal tags pass through, tag patterns
    /// are resolved by the synthesizer against the referenced lemma.
    fn target_pos_tag(
        &self,
        token: &Token,
        synthesizer: &dyn Synthesizer,
    ) -> Result<Option<String>> {
        match &self.pos_tag {
            None => Ok(None),
            Some(tag) if !self.pos_regexp => Ok(Some(tag.clone())),
            Some(pattern) => synthesizer.resolve_pos_tag(token.reading_text(true), pattern),
        }
    }

    /// The surface text spliced for this reference: the first synthesized
    /// form when a POS tag is requested, else the referenced token's own
    /// surface text.
    fn spliced_text(&self, token: &Token, synthesizer: &dyn Synthesizer) -> Result<String> {
        if let Some(tag) = &self.pos_tag {
            let mut forms = synthesizer.synthesize(token.reading_text(true), tag)?;
            if !forms.is_empty() {
                return Ok(forms.swap_remove(0));
            }
        }
        Ok(token.text().to_string())
    }
}

impl MatchSlot {
    /// Binds a reference to another slot's token.
    pub fn set_reference(&mut self, reference: SlotReference) {
        self.reference = Some(reference);
    }

    /// True when this slot is rewritten from another slot's token.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// The configured reference, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&SlotReference> {
        self.reference.as_ref()
    }

    /// Sets an explicit literal template for reference splicing. Without
    /// one, the slot's original pattern is the template.
    pub fn set_reference_template(&mut self, template: impl Into<String>) {
        self.reference_template = Some(template.into());
    }

    /// Produces the effective slot for one evaluation pass by rewriting
    /// the live pattern from `token`, the referenced slot's resolved
    /// token.
    ///
    /// With a resolved POS rewrite the effective slot is POS-only: the
    /// marker is stripped from the template and lemma matching is forced.
    /// Otherwise the marker is replaced by one rendered surface form and
    /// the effective slot is a literal-string slot. Exceptions, AND-group
    /// membership, skip budget, and the other compiled settings carry
    /// over; this definition itself is never mutated.
    ///
    /// # Errors
    /// Returns [`ErrorKind::MissingReference`] when no reference is bound,
    /// [`ErrorKind::InvalidPattern`] when the rewritten POS pattern fails
    /// to compile; synthesizer errors pass through.
    ///
    /// [`ErrorKind::MissingReference`]: glossa_foundation::ErrorKind::MissingReference
    /// [`ErrorKind::InvalidPattern`]: glossa_foundation::ErrorKind::InvalidPattern
    pub fn compile_reference(
        &self,
        token: &Token,
        synthesizer: &dyn Synthesizer,
    ) -> Result<MatchSlot> {
        let Some(reference) = &self.reference else {
            return Err(Error::missing_reference());
        };
        let template = self
            .reference_template
            .as_deref()
            .unwrap_or(self.pattern())
            .to_string();
        let marker = reference.marker();

        let mut effective = self.clone();
        // the rewritten pattern is always literal, whatever this
        // definition was compiled as
        effective.regexp = false;

        if let Some(pos) = reference.target_pos_tag(token, synthesizer)? {
            effective.set_pos_pattern(&pos, reference.is_pos_regexp(), self.negation())?;
            effective.set_string_pattern(&template.replace(&marker, ""))?;
            effective.inflected = true;
        } else if reference.sets_pos() {
            // POS requested but unresolved: splice a synthesized form
            let spliced = reference.spliced_text(token, synthesizer)?;
            effective.set_string_pattern(&template.replace(&marker, &spliced))?;
            effective.inflected = true;
        } else {
            effective.set_string_pattern(&template.replace(&marker, token.text()))?;
        }
        Ok(effective)
    }
}

// =============================================================================
// Tests
// =============================================================================
