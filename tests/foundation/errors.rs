//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use glossa_foundation::{Error, ErrorKind};

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("(?<bad", "look-around is not supported");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("(?<bad"));
    assert!(msg.contains("look-around"));
}

#[test]
fn error_missing_reference() {
    let err = Error::missing_reference();
    assert!(matches!(err.kind, ErrorKind::MissingReference));
    let msg = format!("{err}");
    assert!(msg.contains("reference"));
}

#[test]
fn error_synthesis() {
    let err = Error::synthesis("unknown lemma");
    assert!(matches!(err.kind, ErrorKind::Synthesis(_)));
    let msg = format!("{err}");
    assert!(msg.contains("unknown lemma"));
}

#[test]
fn error_kind_display_matches_error_display() {
    let err = Error::invalid_pattern("a(", "unclosed group");
    assert_eq!(format!("{err}"), format!("{}", err.kind));
}
