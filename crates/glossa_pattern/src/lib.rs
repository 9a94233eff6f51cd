//! Match-slot pattern engine for Glossa.
//!
//! This crate provides:
//! - [`MatchSlot`] - One position's compiled match condition
//! - [`Exception`] - Scoped disqualifying sub-conditions
//! - [`GroupProgress`] - Per-attempt AND-group completion state
//! - [`SlotReference`] - Cross-slot morphological references
//!
//! Slots are compiled once at rule-load time and reused, immutably, across
//! every sentence a rule driver walks; all per-attempt mutable state lives
//! in [`GroupProgress`], so one compiled rule set can serve parallel
//! workers without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod exception;
mod group;
mod reference;
mod slot;

pub use exception::Exception;
pub use group::GroupProgress;
pub use reference::SlotReference;
pub use slot::{MatchSlot, Unification};
