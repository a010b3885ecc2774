#![forbid(unsafe_code)]

//! Tunable configuration snapshot.
//!
//! Every field has a default matching the calculator's startup values, so
//! `Config::default()` behaves exactly like a fresh session and a settings
//! file only needs to name the fields it overrides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hurdle::{MAX_HURDLE, MIN_HURDLE};

/// Planner and commission configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Average hurdle level, in `[1, 5]`. May be fractional.
    pub hurdle_level: f64,
    /// Average gift/incentive cost per booking, in dollars.
    pub avg_gift_cost: f64,
    /// Revenue target the planner inverts toward, in dollars.
    pub target_revenue: f64,
    /// Expected qualified-to-booked conversion, as a percentage in `(0, 100]`.
    pub closing_ratio_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hurdle_level: 2.0,
            avg_gift_cost: 75.0,
            target_revenue: 5000.0,
            closing_ratio_percent: 25.0,
        }
    }
}

impl Config {
    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.hurdle_level.is_finite()
            || self.hurdle_level < MIN_HURDLE
            || self.hurdle_level > MAX_HURDLE
        {
            errors.push(format!(
                "hurdle_level must be in [{MIN_HURDLE}, {MAX_HURDLE}], got {}",
                self.hurdle_level
            ));
        }

        if !self.avg_gift_cost.is_finite() || self.avg_gift_cost < 0.0 {
            errors.push(format!(
                "avg_gift_cost must be >= 0, got {}",
                self.avg_gift_cost
            ));
        }

        if !self.target_revenue.is_finite() || self.target_revenue < 0.0 {
            errors.push(format!(
                "target_revenue must be >= 0, got {}",
                self.target_revenue
            ));
        }

        if !self.closing_ratio_percent.is_finite()
            || self.closing_ratio_percent <= 0.0
            || self.closing_ratio_percent > 100.0
        {
            errors.push(format!(
                "closing_ratio_percent must be in (0, 100], got {}",
                self.closing_ratio_percent
            ));
        }

        errors
    }
}
