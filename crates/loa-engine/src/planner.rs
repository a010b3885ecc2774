#![forbid(unsafe_code)]

//! Inverse-funnel planner.
//!
//! The forward funnel is pitches → scores → qualified → booked → revenue.
//! [`plan`] runs it backwards: given a revenue target, a per-person value,
//! and observed (or fallback) conversion rates, it derives how many
//! bookings, qualified scores, total scores, and pitches are still
//! required. Every stage rounds up — a partial pitch is a whole pitch of
//! required effort — and each stage divides the *integer* output of the
//! previous one, matching how a person would chain the arithmetic.
//!
//! Degenerate configurations (zero per-person value, zero closing ratio)
//! produce an all-zero plan flagged unachievable. That is a user-facing
//! warning state, not an error.

use crate::config::Config;
use crate::funnel::FunnelCounts;
use crate::hurdle::net_per_person;
use crate::ratio::{FALLBACK_QUALIFIED_RATE, FALLBACK_SCORE_RATE, RatioEstimate, safe_ratio};

/// Output of the inverse funnel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Net commission per booking used for the inversion.
    pub per_person: f64,
    /// Closing ratio as a decimal; in `(0, 1]` for valid configurations,
    /// normalized to 0 when the configured percent is non-positive or
    /// non-finite (which makes the plan unachievable).
    pub closing_decimal: f64,
    /// Qualified-per-score rate used, observed or fallback.
    pub qualified_ratio: RatioEstimate,
    /// Score-per-pitch rate used, observed or fallback.
    pub score_rate: RatioEstimate,
    /// Bookings required to hit the target.
    pub booked_needed: u64,
    /// Qualified scores required to produce those bookings.
    pub qualified_needed: u64,
    /// Total scores required to produce those qualified scores.
    pub scores_needed: u64,
    /// Pitches required to produce those scores.
    pub pitches_needed: u64,
    /// False when the configuration cannot reach any target (per-person
    /// value or closing ratio is zero).
    pub achievable: bool,
}

impl Plan {
    /// True when either conversion rate came from a fallback constant
    /// rather than logged activity.
    #[must_use]
    pub fn uses_any_fallback(&self) -> bool {
        self.qualified_ratio.using_fallback || self.score_rate.using_fallback
    }
}

/// Divide and round up, for "how many whole units of effort" questions.
///
/// Saturating: a quotient beyond `u64` range, including one that
/// overflows to infinity, comes back as `u64::MAX` rather than
/// collapsing to 0.
fn ceil_units(numerator: f64, denominator: f64) -> u64 {
    // The cast saturates: NaN and negatives map to 0, overflow to MAX.
    (numerator / denominator).ceil() as u64
}

/// Derive the activity required to hit `config.target_revenue`.
///
/// Pure and idempotent: the same snapshot always yields the same plan.
#[must_use]
pub fn plan(counts: &FunnelCounts, config: &Config) -> Plan {
    let per_person = net_per_person(config.hurdle_level, config.avg_gift_cost);
    let closing_decimal = {
        let raw = config.closing_ratio_percent / 100.0;
        if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
    };

    let qualified_ratio = safe_ratio(
        f64::from(counts.qualified()),
        f64::from(counts.scores()),
        FALLBACK_QUALIFIED_RATE,
    );
    let score_rate = safe_ratio(
        f64::from(counts.scores()),
        f64::from(counts.pitches()),
        FALLBACK_SCORE_RATE,
    );

    if per_person <= 0.0 || closing_decimal <= 0.0 {
        return Plan {
            per_person,
            closing_decimal,
            qualified_ratio,
            score_rate,
            booked_needed: 0,
            qualified_needed: 0,
            scores_needed: 0,
            pitches_needed: 0,
            achievable: false,
        };
    }

    let booked_needed = ceil_units(config.target_revenue, per_person);
    let qualified_needed = ceil_units(booked_needed as f64, closing_decimal);
    let scores_needed = ceil_units(qualified_needed as f64, qualified_ratio.value);
    let pitches_needed = ceil_units(scores_needed as f64, score_rate.value);

    Plan {
        per_person,
        closing_decimal,
        qualified_ratio,
        score_rate,
        booked_needed,
        qualified_needed,
        scores_needed,
        pitches_needed,
        achievable: true,
    }
}

/// Commission revenue of the currently booked tours.
#[must_use]
pub fn revenue(counts: &FunnelCounts, config: &Config) -> f64 {
    let per_person = net_per_person(config.hurdle_level, config.avg_gift_cost);
    f64::from(counts.booked()) * per_person
}

/// Observed qualified-to-booked conversion as a percentage.
///
/// `None` until at least one qualified score is logged (rendered as "0%").
#[must_use]
pub fn observed_closing_ratio(counts: &FunnelCounts) -> Option<f64> {
    if counts.qualified() == 0 {
        return None;
    }
    Some(f64::from(counts.booked()) / f64::from(counts.qualified()) * 100.0)
}
