/// How many candidate recipes to request per plan entry.
///
/// A pool of `days * meals_per_day * OVERSAMPLE_FACTOR` gives the balancer
/// enough spare candidates to swap toward the calorie target.
pub const OVERSAMPLE_FACTOR: usize = 30;

/// Exclusive upper bound for the randomized pool offset.
pub const MAX_OFFSET: usize = 20;

/// Accepted deviation from the daily target, as a fraction of the target.
pub const TOLERANCE_FRACTION: f64 = 0.15;

// ─────────────────────────────────────────────────────────────────────────────
// Prompt defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Default daily calorie target when the user just presses Enter.
pub const DEFAULT_TARGET_CALORIES: f64 = 2000.0;

/// Default number of days to plan for.
pub const DEFAULT_DAYS: usize = 7;

/// Default number of meals per day.
pub const DEFAULT_MEALS_PER_DAY: usize = 3;

/// Absolute calorie deviation accepted for a given daily target.
pub fn max_diff(target_calories: f64) -> f64 {
    TOLERANCE_FRACTION * target_calories
}

/// Whether a day's realized total landed within tolerance of the target.
pub fn within_tolerance(total: f64, target_calories: f64) -> bool {
    (total - target_calories).abs() <= max_diff(target_calories)
}

/// Pool size to request for a plan of the given shape.
///
/// `None` when the product overflows `usize`; callers reject the request.
pub fn requested_pool_size(days: usize, meals_per_day: usize) -> Option<usize> {
    days.checked_mul(meals_per_day)?.checked_mul(OVERSAMPLE_FACTOR)
}
