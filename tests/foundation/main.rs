//! Integration tests for Layer 0: Foundation
//!
//! Tests for the token model, error types, and the synthesizer interface.

mod errors;
mod tokens;
