#![forbid(unsafe_code)]

//! Guarded conversion-rate estimation.
//!
//! Funnel ratios (qualified/scores, scores/pitches) feed straight into the
//! planner's division chain, so they must never carry a divide-by-zero,
//! negative, or out-of-range value downstream. [`safe_ratio`] computes the
//! ratio when the data supports it and otherwise substitutes a caller-chosen
//! fallback, flagging which happened so the UI can surface the assumption.
//!
//! # Failure modes
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Denominator non-finite or ≤ 0 | fallback, flagged |
//! | Numerator non-finite or < 0 | fallback, flagged |
//! | Computed ratio non-finite or ≤ 0 | fallback, flagged |
//! | Computed ratio > 1 | clamped to 1, unflagged |

/// Default qualified-per-score rate when no activity is logged yet.
pub const FALLBACK_QUALIFIED_RATE: f64 = 0.5;

/// Default score-per-pitch rate when no activity is logged yet.
pub const FALLBACK_SCORE_RATE: f64 = 0.6;

/// A conversion ratio in `[0, 1]`, tagged with whether it was computed
/// from observed counts or substituted from a fallback constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEstimate {
    /// The ratio, clamped to `[0, 1]`.
    pub value: f64,
    /// True when `value` is a fallback rather than observed data.
    pub using_fallback: bool,
}

impl RatioEstimate {
    fn observed(value: f64) -> Self {
        Self {
            value,
            using_fallback: false,
        }
    }

    fn fallback(value: f64) -> Self {
        Self {
            value,
            using_fallback: true,
        }
    }
}

/// Compute `numerator / denominator` as a conversion rate, substituting
/// `fallback` whenever the inputs cannot produce a usable ratio.
///
/// A negative numerator is invalid input and short-circuits to the
/// fallback before the division happens.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> RatioEstimate {
    if !numerator.is_finite() || numerator < 0.0 || !denominator.is_finite() || denominator <= 0.0 {
        return RatioEstimate::fallback(fallback);
    }

    let ratio = numerator / denominator;
    if !ratio.is_finite() || ratio <= 0.0 {
        return RatioEstimate::fallback(fallback);
    }

    RatioEstimate::observed(ratio.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_ratio_is_unflagged() {
        let est = safe_ratio(5.0, 10.0, 0.5);
        assert_eq!(est.value, 0.5);
        assert!(!est.using_fallback);
    }

    #[test]
    fn zero_denominator_falls_back() {
        let est = safe_ratio(0.0, 0.0, 0.5);
        assert_eq!(est.value, 0.5);
        assert!(est.using_fallback);
    }

    #[test]
    fn negative_denominator_falls_back() {
        assert!(safe_ratio(5.0, -10.0, 0.6).using_fallback);
    }

    #[test]
    fn negative_numerator_falls_back() {
        let est = safe_ratio(-1.0, 10.0, 0.5);
        assert_eq!(est.value, 0.5);
        assert!(est.using_fallback);
    }

    #[test]
    fn zero_numerator_falls_back() {
        // 0/n is a valid division but a useless planning rate.
        assert!(safe_ratio(0.0, 10.0, 0.6).using_fallback);
    }

    #[test]
    fn non_finite_inputs_fall_back() {
        assert!(safe_ratio(f64::NAN, 10.0, 0.5).using_fallback);
        assert!(safe_ratio(5.0, f64::NAN, 0.5).using_fallback);
        assert!(safe_ratio(5.0, f64::INFINITY, 0.5).using_fallback);
    }

    #[test]
    fn ratio_above_one_clamps_unflagged() {
        let est = safe_ratio(30.0, 10.0, 0.5);
        assert_eq!(est.value, 1.0);
        assert!(!est.using_fallback);
    }
}
