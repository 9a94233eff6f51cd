//! Interface to the external morphological synthesizer.

use crate::error::Result;

/// Produces surface realizations of a lemma for a target POS category.
///
/// Implemented outside this core, per language. The reference binder
/// consumes exactly one candidate per call; a synthesizer returning many
/// forms decides their order, and a driver wanting alternation resolves it
/// on its own side.
pub trait Synthesizer {
    /// Generates surface forms of `lemma` carrying the POS tag `pos_tag`.
    ///
    /// Zero, one, or many candidates are all legitimate results.
    ///
    /// # Errors
    /// Returns an error when the underlying morphology data cannot be
    /// consulted.
    fn synthesize(&self, lemma: &str, pos_tag: &str) -> Result<Vec<String>>;

    /// Resolves a POS tag regular expression to one concrete tag that
    /// `lemma` can realize.
    ///
    /// The default implementation resolves nothing.
    ///
    /// # Errors
    /// Returns an error when the underlying morphology data cannot be
    /// consulted.
    fn resolve_pos_tag(&self, lemma: &str, pos_tag_regex: &str) -> Result<Option<String>> {
        let _ = (lemma, pos_tag_regex);
        Ok(None)
    }
}
