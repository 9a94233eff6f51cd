//! Integration tests for Layer 1: Pattern
//!
//! Tests for match slots, exceptions, AND-groups, references, and the
//! algebraic matching laws.

mod references;
