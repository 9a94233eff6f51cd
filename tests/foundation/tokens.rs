//! Integration tests for the Token model
//!
//! Tests builder construction, accessors, and lemma fallback.

use glossa_foundation::{SENTENCE_START_TAG, Token, UNKNOWN_TAG};

#[test]
fn token_builder_round_trip() {
    let token = Token::new("corriendo")
        .with_lemma("correr")
        .with_pos_tag("VBG")
        .with_whitespace_before(true);

    assert_eq!(token.text(), "corriendo");
    assert_eq!(token.lemma(), Some("correr"));
    assert_eq!(token.pos_tag(), Some("VBG"));
    assert!(token.whitespace_before());
}

#[test]
fn untagged_token_has_no_pos() {
    let token = Token::new("blargh");
    assert_eq!(token.pos_tag(), None);
}

#[test]
fn reading_text_lemma_preference_and_fallback() {
    let with_lemma = Token::new("running").with_lemma("run");
    assert_eq!(with_lemma.reading_text(true), "run");
    assert_eq!(with_lemma.reading_text(false), "running");

    let without_lemma = Token::new("running");
    assert_eq!(without_lemma.reading_text(true), "running");
}

#[test]
fn reserved_tags_are_distinct() {
    assert_ne!(UNKNOWN_TAG, SENTENCE_START_TAG);
    assert_eq!(UNKNOWN_TAG, "UNKNOWN");
    assert_eq!(SENTENCE_START_TAG, "SENT_START");
}

#[test]
fn tokens_compare_by_value() {
    let a = Token::new("dog").with_pos_tag("NN");
    let b = Token::new("dog").with_pos_tag("NN");
    assert_eq!(a, b);
    assert_ne!(a, Token::new("dog"));
}
