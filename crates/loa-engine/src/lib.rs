#![forbid(unsafe_code)]

//! Funnel math and reverse-planning core for the Law of Averages calculator.
//!
//! A salesperson logs daily activity (pitches made, scores taken, tours
//! booked) and wants to know two things: how much commission the current
//! activity is worth, and how much activity is still required to hit a
//! revenue target. This crate is the arithmetic behind both answers:
//!
//! - [`hurdle`] — the tiered commission table and the interpolator that
//!   turns a fractional average hurdle level into a per-person dollar value.
//! - [`ratio`] — guarded division for observed conversion rates, with
//!   flagged fallback constants when there is not enough data yet.
//! - [`funnel`] — the activity counters and the invariant-preserving
//!   mutators that are the only way to change them.
//! - [`config`] — the tunable snapshot (hurdle level, gift cost, target
//!   revenue, closing ratio).
//! - [`planner`] — the inverse funnel: revenue target back to bookings,
//!   qualified scores, total scores, and pitches, ceiling at every stage.
//! - [`format`] — the display rounding policy and input sanitizers.
//!
//! Everything here is pure and total: degenerate inputs (zero denominators,
//! out-of-range hurdle levels, unachievable targets) produce sentinel
//! values and flags, never errors. The presentation layer is an external
//! collaborator that feeds in numbers and renders the results.

pub mod config;
pub mod format;
pub mod funnel;
pub mod hurdle;
pub mod planner;
pub mod ratio;

pub use config::Config;
pub use funnel::{CounterKey, FunnelCounts, ScoreChoice};
pub use hurdle::{base_per_person, net_per_person};
pub use planner::{Plan, observed_closing_ratio, plan, revenue};
pub use ratio::{FALLBACK_QUALIFIED_RATE, FALLBACK_SCORE_RATE, RatioEstimate, safe_ratio};
