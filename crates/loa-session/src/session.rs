#![forbid(unsafe_code)]

//! Session controller: message-driven state mutation and derived numbers.
//!
//! Single-threaded and synchronous. Every applied message runs the same
//! two steps: mutate the owned state through the engine's
//! invariant-preserving paths, then recompute the full [`Derived`]
//! snapshot. Recomputation is pure and cheap, so there is no dirty
//! tracking — the snapshot after a message is always consistent with the
//! counters.

use loa_engine::format;
use loa_engine::{
    Config, CounterKey, FunnelCounts, Plan, ScoreChoice, observed_closing_ratio, plan, revenue,
};
use tracing::{debug, trace};

/// Quantities a value prompt can edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// Total pitches made.
    Pitches,
    /// Total tours booked.
    Booked,
    /// Total scores (breakdown rebalances).
    Scores,
    /// Qualified score count.
    Qualified,
    /// Non-qualifying score count.
    Nq,
    /// Planner revenue target, dollars.
    TargetRevenue,
    /// Planner closing ratio, percent in (0, 100].
    ClosingRatio,
    /// Average hurdle level, possibly fractional, in [1, 5].
    AverageHurdle,
    /// Average gift cost, dollars.
    GiftCost,
}

impl EditField {
    /// Title the presentation layer puts on the value prompt.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pitches => "Set total pitches",
            Self::Booked => "Set total booked",
            Self::Scores => "Set total scores",
            Self::Qualified => "Set qualified count",
            Self::Nq => "Set NQ count",
            Self::TargetRevenue => "Set target revenue",
            Self::ClosingRatio => "Set closing ratio",
            Self::AverageHurdle => "Set average hurdle",
            Self::GiftCost => "Set average gift cost",
        }
    }
}

/// Confirmed result of the hurdle setup dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurdleSetup {
    /// Selected hurdle tier, 1..=5.
    pub hurdle: u8,
    /// Average gift cost entered alongside it, dollars.
    pub avg_gift_cost: f64,
}

/// A discrete user decision, ready to apply.
///
/// Prompt variants carry `Option`s: `None` is a cancelled dialog and
/// leaves all state untouched — cancellation discards the pending action
/// with no partial mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionMsg {
    /// Bump a pitch/booked counter.
    Increment(CounterKey),
    /// Drop a pitch/booked counter, clamped at zero.
    Decrement(CounterKey),
    /// Remove the most recent score (NQ first, then qualified).
    RemoveScore,
    /// Score dialog resolved with a classification, or cancelled.
    ScorePromptResolved(Option<ScoreChoice>),
    /// Hurdle setup dialog resolved, or cancelled.
    HurdlePromptResolved(Option<HurdleSetup>),
    /// Value prompt for `field` resolved, or cancelled.
    ValuePromptResolved {
        /// Which quantity was being edited.
        field: EditField,
        /// The entered value, or `None` on cancel.
        value: Option<f64>,
    },
    /// Zero all activity counters (config is untouched).
    Reset,
}

/// Everything recomputed from the current snapshot after each message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Inverse-funnel requirements for the configured target.
    pub plan: Plan,
    /// Commission revenue of the currently booked tours, dollars.
    pub revenue: f64,
    /// Observed qualified-to-booked conversion, percent; `None` until a
    /// qualified score exists.
    pub observed_closing_ratio: Option<f64>,
}

impl Derived {
    fn compute(counts: &FunnelCounts, config: &Config) -> Self {
        Self {
            plan: plan(counts, config),
            revenue: revenue(counts, config),
            observed_closing_ratio: observed_closing_ratio(counts),
        }
    }

    /// Revenue, formatted per the currency policy.
    #[must_use]
    pub fn revenue_display(&self) -> String {
        format::currency_smart(self.revenue)
    }

    /// Net per-person value, formatted per the currency policy.
    #[must_use]
    pub fn per_person_display(&self) -> String {
        format::currency_smart(self.plan.per_person)
    }

    /// Observed closing ratio for display; "0%" before any qualified score.
    #[must_use]
    pub fn closing_ratio_display(&self) -> String {
        match self.observed_closing_ratio {
            Some(ratio) => format::ratio_percent(ratio),
            None => "0%".to_string(),
        }
    }

    /// Human-readable note naming the fallback rates the plan substituted,
    /// or `None` when every rate came from logged activity.
    #[must_use]
    pub fn assumptions_note(&self) -> Option<String> {
        let mut assumed = Vec::new();
        if self.plan.qualified_ratio.using_fallback {
            assumed.push(format!(
                "a {} qualified rate",
                format::percent(self.plan.qualified_ratio.value * 100.0, 0)
            ));
        }
        if self.plan.score_rate.using_fallback {
            assumed.push(format!(
                "a {} score rate",
                format::percent(self.plan.score_rate.value * 100.0, 0)
            ));
        }
        if assumed.is_empty() {
            return None;
        }
        Some(format!(
            "Assumes {} until more activity is logged.",
            assumed.join(" and ")
        ))
    }
}

/// Owns the funnel counters and configuration for one working session.
///
/// State lives here and nowhere else; the presentation layer holds a
/// reference for rendering and sends [`SessionMsg`]s to change anything.
#[derive(Debug, Clone)]
pub struct Session {
    counts: FunnelCounts,
    config: Config,
    derived: Derived,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session with zeroed counters and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Fresh session with a preloaded configuration (see
    /// [`crate::settings`]).
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let counts = FunnelCounts::new();
        let derived = Derived::compute(&counts, &config);
        Self {
            counts,
            config,
            derived,
        }
    }

    /// Current activity counters.
    #[must_use]
    pub fn counts(&self) -> &FunnelCounts {
        &self.counts
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derived numbers for the current snapshot.
    #[must_use]
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Apply one user decision and recompute the derived snapshot.
    pub fn apply(&mut self, msg: SessionMsg) -> &Derived {
        debug!(?msg, "applying session message");
        match msg {
            SessionMsg::Increment(key) => self.counts.increment(key),
            SessionMsg::Decrement(key) => self.counts.decrement(key),
            SessionMsg::RemoveScore => self.counts.remove_score(),
            SessionMsg::ScorePromptResolved(Some(choice)) => self.counts.record_score(choice),
            SessionMsg::HurdlePromptResolved(Some(setup)) => self.apply_hurdle_setup(setup),
            SessionMsg::ValuePromptResolved {
                field,
                value: Some(value),
            } => self.apply_edit(field, value),
            SessionMsg::ScorePromptResolved(None)
            | SessionMsg::HurdlePromptResolved(None)
            | SessionMsg::ValuePromptResolved { value: None, .. } => {
                trace!("prompt cancelled, state unchanged");
            }
            SessionMsg::Reset => self.counts.reset(),
        }

        self.derived = Derived::compute(&self.counts, &self.config);
        trace!(
            achievable = self.derived.plan.achievable,
            pitches_needed = self.derived.plan.pitches_needed,
            "plan recomputed"
        );
        &self.derived
    }

    fn apply_hurdle_setup(&mut self, setup: HurdleSetup) {
        if !(1..=5).contains(&setup.hurdle)
            || !setup.avg_gift_cost.is_finite()
            || setup.avg_gift_cost < 0.0
        {
            debug!(?setup, "rejecting invalid hurdle setup");
            return;
        }
        self.config.hurdle_level = f64::from(setup.hurdle);
        self.config.avg_gift_cost = format::round_to_decimals(setup.avg_gift_cost, 2);
    }

    /// Apply a value-prompt edit, sanitized per field. Invalid input is
    /// ignored — the same observable outcome as a cancelled prompt.
    fn apply_edit(&mut self, field: EditField, value: f64) {
        match field {
            EditField::Pitches => self.counts.set_pitches(format::to_count(value)),
            EditField::Booked => self.counts.set_booked(format::to_count(value)),
            EditField::Scores => self.counts.set_scores(format::to_count(value)),
            EditField::Qualified => self.counts.set_qualified(format::to_count(value)),
            EditField::Nq => self.counts.set_nq(format::to_count(value)),
            EditField::TargetRevenue => {
                if value.is_finite() && value >= 0.0 {
                    self.config.target_revenue = format::round_to_decimals(value, 2);
                }
            }
            EditField::ClosingRatio => {
                if value.is_finite() && value > 0.0 && value <= 100.0 {
                    self.config.closing_ratio_percent = value;
                }
            }
            EditField::AverageHurdle => {
                if value.is_finite() && (1.0..=5.0).contains(&value) {
                    self.config.hurdle_level = value;
                }
            }
            EditField::GiftCost => {
                if value.is_finite() && value >= 0.0 {
                    self.config.avg_gift_cost = format::round_to_decimals(value, 2);
                }
            }
        }
    }
}
