#![forbid(unsafe_code)]

//! Hurdle value table and per-person commission interpolation.
//!
//! A "hurdle" is a tiered minimum sales level; each integer tier maps to a
//! base commission dollar amount. A salesperson's *average* hurdle over a
//! period is usually fractional, so the base value is linearly interpolated
//! between the adjacent tiers. Net per-person value subtracts the average
//! gift/incentive cost and floors at zero.

/// Base commission by hurdle level, indexed by `level - 1` for levels 1..=5.
///
/// Strictly increasing in level.
pub const HURDLE_VALUES: [f64; 5] = [160.0, 224.0, 288.0, 314.0, 352.0];

/// Lowest hurdle tier.
pub const MIN_HURDLE: f64 = 1.0;
/// Highest hurdle tier.
pub const MAX_HURDLE: f64 = 5.0;

/// Base commission for a possibly-fractional hurdle level.
///
/// The level is clamped to `[1, 5]` (non-finite input is treated as level
/// 1). Integer levels return the table entry exactly; fractional levels
/// interpolate linearly between the adjacent entries.
#[must_use]
pub fn base_per_person(hurdle_level: f64) -> f64 {
    let clamped = if hurdle_level.is_finite() {
        hurdle_level.clamp(MIN_HURDLE, MAX_HURDLE)
    } else {
        MIN_HURDLE
    };

    let lower = clamped.floor();
    let upper = clamped.ceil();

    let lower_value = HURDLE_VALUES[lower as usize - 1];
    if lower == upper {
        return lower_value;
    }
    let upper_value = HURDLE_VALUES[upper as usize - 1];

    lower_value + (upper_value - lower_value) * (clamped - lower)
}

/// Net commission per booked person after the average gift cost.
///
/// Floored at zero; a non-finite gift cost is treated as zero so the
/// result is always finite and nonnegative.
#[must_use]
pub fn net_per_person(hurdle_level: f64, avg_gift_cost: f64) -> f64 {
    let cost = if avg_gift_cost.is_finite() {
        avg_gift_cost
    } else {
        0.0
    };
    (base_per_person(hurdle_level) - cost).max(0.0)
}
