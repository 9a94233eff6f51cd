//! Glossa - token-level pattern matching core for a rule-based natural
//! language style and grammar checker.
//!
//! This crate re-exports all layers of the Glossa system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: glossa_pattern    — match slots, exceptions, AND-groups, references
//! Layer 0: glossa_foundation — Token, Error, Synthesizer interface
//! ```

pub use glossa_foundation as foundation;
pub use glossa_pattern as pattern;
