//! AND-groups: sibling conditions that must all hold, possibly across
//! retries, for a slot's full satisfaction.
//!
//! The compiled [`MatchSlot`] stays immutable during matching; everything
//! one alignment attempt mutates lives in [`GroupProgress`], a session
//! value the driver creates per attempt. This keeps one compiled rule set
//! shareable across parallel workers without locking.

use glossa_foundation::Token;

use crate::slot::MatchSlot;

/// Per-attempt completion state for a slot's AND-group.
///
/// Flag 0 tracks the owner slot's own match; flags `1..=N` track the group
/// members. Flags only ever go from false to true within an attempt; they
/// reset only when [`MatchSlot::setup_and_group`] produces a fresh value.
/// Empty when the slot carries no AND-group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupProgress {
    flags: Vec<bool>,
}

impl GroupProgress {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    pub(crate) fn member_flags_mut(&mut self) -> &mut [bool] {
        &mut self.flags[1..]
    }

    pub(crate) fn any_member_complete(&self) -> bool {
        self.flags[1..].iter().any(|&f| f)
    }

    /// Records the owner slot's own match verdict into flag 0.
    ///
    /// The driver protocol requires this recording for every base-condition
    /// check, even when the overall verdict is already known; run the match
    /// call and the recording unconditionally and combine booleans
    /// afterwards instead of short-circuiting.
    pub fn record_owner(&mut self, matched: bool) {
        if let Some(flag) = self.flags.first_mut() {
            *flag |= matched;
        }
    }

    /// True when every tracked flag (owner and all members) is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }
}

impl MatchSlot {
    /// Adds a sibling condition that must also hold (at some point within
    /// the attempt) for this slot's full satisfaction.
    pub fn set_and_group_slot(&mut self, slot: MatchSlot) {
        self.and_group.push(slot);
    }

    /// Whether this slot carries an AND-group.
    #[must_use]
    pub fn has_and_group(&self) -> bool {
        !self.and_group.is_empty()
    }

    /// The sibling conditions linked with this slot.
    #[must_use]
    pub fn and_group(&self) -> &[MatchSlot] {
        &self.and_group
    }

    /// Creates fresh, all-false completion state for one alignment attempt.
    /// Must run before any progress-recording call of the attempt. Empty
    /// when the slot has no AND-group, so [`check_and_group`] passes the
    /// prior verdict through.
    ///
    /// [`check_and_group`]: MatchSlot::check_and_group
    #[must_use]
    pub fn setup_and_group(&self) -> GroupProgress {
        if self.and_group.is_empty() {
            GroupProgress::default()
        } else {
            GroupProgress::with_len(self.and_group.len() + 1)
        }
    }

    /// Attempts every not-yet-complete member against `token`, marking the
    /// ones that match. Completed members stay marked for the rest of the
    /// attempt and are not re-evaluated. Returns true if at least one
    /// member is (newly or previously) complete. Exceptions are not
    /// consulted here.
    ///
    /// # Panics
    /// Panics when `progress` was not produced by this slot's
    /// [`setup_and_group`], which is a driver contract violation.
    ///
    /// [`setup_and_group`]: MatchSlot::setup_and_group
    pub fn is_and_group_matched(&self, token: &Token, progress: &mut GroupProgress) -> bool {
        if self.and_group.is_empty() {
            return false;
        }
        assert_eq!(
            progress.len(),
            self.and_group.len() + 1,
            "setup_and_group must run before matching"
        );
        for (member, flag) in self.and_group.iter().zip(progress.member_flags_mut()) {
            if !*flag && member.is_matched(token) {
                *flag = true;
            }
        }
        progress.any_member_complete()
    }

    /// Folds AND-group completeness into a prior verdict: with a group,
    /// true iff every tracked flag is set; without one, `previous` passes
    /// through unchanged so callers compose uniformly.
    #[must_use]
    pub fn check_and_group(&self, previous: bool, progress: &GroupProgress) -> bool {
        if self.and_group.is_empty() {
            previous
        } else {
            progress.is_complete()
        }
    }

    /// Base condition and AND-group advancement in one call: records the
    /// owner verdict into flag 0, advances member completion, and combines
    /// the two booleans. Both halves always execute for their progress
    /// side effects; the OR is deliberately non-short-circuiting.
    ///
    /// # Panics
    /// Panics when `progress` was not produced by this slot's
    /// [`setup_and_group`], which is a driver contract violation.
    ///
    /// [`setup_and_group`]: MatchSlot::setup_and_group
    pub fn is_matched_completely(&self, token: &Token, progress: &mut GroupProgress) -> bool {
        let own = self.is_matched(token);
        progress.record_owner(own);
        let group = self.is_and_group_matched(token, progress);
        own | group
    }
}

// =============================================================================
// Tests
// =============================================================================
