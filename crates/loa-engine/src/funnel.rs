#![forbid(unsafe_code)]

//! Activity counters and their invariant-preserving mutators.
//!
//! [`FunnelCounts`] tracks one day's logged activity. The score total is
//! always the sum of its breakdown (`qualified + nq == scores`); that
//! invariant is enforced by construction — fields are private and every
//! mutation path rederives or preserves the total, so call sites cannot
//! drift the breakdown out of sync.

/// How a logged score was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChoice {
    /// Met the minimum qualifying criteria.
    Qualified,
    /// Did not qualify.
    Nq,
}

/// Counters that increment and decrement one unit at a time.
///
/// Scores are excluded: they only move through [`FunnelCounts::record_score`]
/// and [`FunnelCounts::remove_score`] so the qualified/NQ breakdown stays
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKey {
    /// Sales pitches made.
    Pitches,
    /// Tours booked.
    Booked,
}

/// Snapshot of logged funnel activity.
///
/// Invariant: `qualified() + nq() == scores()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunnelCounts {
    pitches: u32,
    scores: u32,
    qualified: u32,
    nq: u32,
    booked: u32,
}

impl FunnelCounts {
    /// All counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from its independent parts.
    ///
    /// The score total is derived from the breakdown, so the invariant
    /// holds for any inputs. Saturates rather than overflowing.
    #[must_use]
    pub fn from_parts(pitches: u32, qualified: u32, nq: u32, booked: u32) -> Self {
        Self {
            pitches,
            scores: qualified.saturating_add(nq),
            qualified,
            nq,
            booked,
        }
    }

    /// Pitches made.
    #[must_use]
    pub fn pitches(&self) -> u32 {
        self.pitches
    }

    /// Total scores taken.
    #[must_use]
    pub fn scores(&self) -> u32 {
        self.scores
    }

    /// Scores that qualified.
    #[must_use]
    pub fn qualified(&self) -> u32 {
        self.qualified
    }

    /// Scores that did not qualify.
    #[must_use]
    pub fn nq(&self) -> u32 {
        self.nq
    }

    /// Tours booked.
    #[must_use]
    pub fn booked(&self) -> u32 {
        self.booked
    }

    /// Log one score, classified as qualified or NQ.
    pub fn record_score(&mut self, choice: ScoreChoice) {
        self.scores = self.scores.saturating_add(1);
        match choice {
            ScoreChoice::Qualified => self.qualified = self.qualified.saturating_add(1),
            ScoreChoice::Nq => self.nq = self.nq.saturating_add(1),
        }
    }

    /// Remove the most recently relevant score.
    ///
    /// NQ entries are removed before qualified ones (qualification happens
    /// after non-qualifying attempts are already on the board, so removal
    /// runs last-in-first-out). No-op when there are no scores.
    pub fn remove_score(&mut self) {
        if self.scores == 0 {
            return;
        }
        if self.nq > 0 {
            self.nq -= 1;
            self.scores -= 1;
            return;
        }
        if self.qualified > 0 {
            self.qualified -= 1;
            self.scores -= 1;
        }
    }

    /// Increment a simple counter by one.
    pub fn increment(&mut self, key: CounterKey) {
        match key {
            CounterKey::Pitches => self.pitches = self.pitches.saturating_add(1),
            CounterKey::Booked => self.booked = self.booked.saturating_add(1),
        }
    }

    /// Decrement a simple counter by one, clamped at zero.
    pub fn decrement(&mut self, key: CounterKey) {
        match key {
            CounterKey::Pitches => self.pitches = self.pitches.saturating_sub(1),
            CounterKey::Booked => self.booked = self.booked.saturating_sub(1),
        }
    }

    /// Set the pitch total directly.
    pub fn set_pitches(&mut self, pitches: u32) {
        self.pitches = pitches;
    }

    /// Set the booked total directly.
    pub fn set_booked(&mut self, booked: u32) {
        self.booked = booked;
    }

    /// Set the qualified count directly; the score total follows.
    pub fn set_qualified(&mut self, qualified: u32) {
        self.qualified = qualified;
        self.scores = self.qualified.saturating_add(self.nq);
    }

    /// Set the NQ count directly; the score total follows.
    pub fn set_nq(&mut self, nq: u32) {
        self.nq = nq;
        self.scores = self.qualified.saturating_add(self.nq);
    }

    /// Set the score total directly, rebalancing the breakdown.
    ///
    /// Qualified is capped at the new total and NQ absorbs the remainder,
    /// so a shrink discards NQ entries first — the same order as
    /// [`FunnelCounts::remove_score`].
    pub fn set_scores(&mut self, scores: u32) {
        self.scores = scores;
        self.qualified = self.qualified.min(scores);
        self.nq = scores - self.qualified;
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
