//! Integration tests for cross-slot references
//!
//! Plays through an agreement scenario the way a rule driver would:
//! resolve an earlier slot, compile the reference, then match the
//! effective slot at a later position.

use glossa_foundation::{Result, Synthesizer, Token};
use glossa_pattern::{MatchSlot, SlotReference};

/// Toy English noun morphology: enough to pluralize a few lemmas.
struct ToyMorphology;

impl Synthesizer for ToyMorphology {
    fn synthesize(&self, lemma: &str, pos_tag: &str) -> Result<Vec<String>> {
        Ok(match (lemma, pos_tag) {
            ("dog", "NNS") => vec!["dogs".to_string()],
            ("child", "NNS") => vec!["children".to_string()],
            _ => Vec::new(),
        })
    }

    fn resolve_pos_tag(&self, _lemma: &str, pos_tag_regex: &str) -> Result<Option<String>> {
        Ok((pos_tag_regex == "NN.?").then(|| "NNS".to_string()))
    }
}

#[test]
fn agreement_rule_end_to_end() {
    // pattern: [noun slot] ... [slot that must repeat the noun's surface]
    let mut echo = MatchSlot::new("\\1", false, false, false).unwrap();
    echo.set_reference(SlotReference::new(1));

    let sentence = [
        Token::new("dogs").with_lemma("dog").with_pos_tag("NNS"),
        Token::new("and").with_pos_tag("CC"),
        Token::new("dogs").with_lemma("dog").with_pos_tag("NNS"),
    ];

    // the driver resolved slot 1 to sentence[0]; compile just before use
    let effective = echo.compile_reference(&sentence[0], &ToyMorphology).unwrap();
    assert!(effective.is_matched(&sentence[2]));
    assert!(!effective.is_matched(&sentence[1]));
}

#[test]
fn pos_rewrite_matches_any_inflection_of_the_category() {
    let mut agree = MatchSlot::new("\\1", false, false, false).unwrap();
    agree.set_reference(SlotReference::new(1).with_pos_tag("NN.?", true));

    let noun = Token::new("dog").with_lemma("dog").with_pos_tag("NN");
    let effective = agree.compile_reference(&noun, &ToyMorphology).unwrap();

    assert_eq!(effective.pos_tag(), Some("NNS"));
    assert!(effective.is_matched(&Token::new("children").with_pos_tag("NNS")));
    assert!(!effective.is_matched(&Token::new("child").with_pos_tag("NN")));
}

#[test]
fn synthesized_splice_builds_the_expected_literal() {
    let mut plural = MatchSlot::new("two \\3", false, false, false).unwrap();
    // tag pattern unknown to the resolver, so the splice path synthesizes
    plural.set_reference(SlotReference::new(3).with_pos_tag("NNS", true));

    let noun = Token::new("child").with_lemma("child").with_pos_tag("NN");
    let effective = plural.compile_reference(&noun, &ToyMorphology).unwrap();

    assert_eq!(effective.pattern(), "two children");
    assert!(effective.is_matched(&Token::new("two children")));
}

#[test]
fn reference_recompiles_per_resolved_token() {
    let mut echo = MatchSlot::new("\\1", false, false, false).unwrap();
    echo.set_reference(SlotReference::new(1));

    let first = echo
        .compile_reference(&Token::new("dogs"), &ToyMorphology)
        .unwrap();
    let second = echo
        .compile_reference(&Token::new("cats"), &ToyMorphology)
        .unwrap();

    // each evaluation pass gets its own effective slot
    assert!(first.is_matched(&Token::new("dogs")));
    assert!(!first.is_matched(&Token::new("cats")));
    assert!(second.is_matched(&Token::new("cats")));
    assert_eq!(echo.pattern(), "\\1");
}

#[test]
fn reference_metadata_is_inspectable() {
    let mut slot = MatchSlot::new("\\2", false, false, false).unwrap();
    assert!(!slot.is_reference());
    slot.set_reference(SlotReference::new(2).with_pos_tag("VB", false));

    let reference = slot.reference().unwrap();
    assert!(slot.is_reference());
    assert_eq!(reference.token_ref(), 2);
    assert!(reference.sets_pos());
    assert!(!reference.is_pos_regexp());
}
