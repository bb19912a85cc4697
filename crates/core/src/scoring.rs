//! Scoring module - line awards, levels and the fall-speed curve
//!
//! The policy is deliberately simple:
//! - The first row cleared by a lock is worth `first_line_award`; every further
//!   row in the same lock is worth twice the previous one.
//! - `level = min(score / points_per_level, max_level)`.
//! - `fall_interval = max(base_interval - step_per_level * level, min_interval)`.
//!
//! The constants live in [`ScoringRules`] and [`SpeedCurve`] so they can be tuned.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_FALL_INTERVAL, FALL_INTERVAL_STEP, FIRST_LINE_AWARD, MAX_LEVEL, MIN_FALL_INTERVAL,
    POINTS_PER_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub first_line_award: u32,
    pub points_per_level: u32,
    pub max_level: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            first_line_award: FIRST_LINE_AWARD,
            points_per_level: POINTS_PER_LEVEL,
            max_level: MAX_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedCurve {
    pub base_interval: u32,
    pub step_per_level: u32,
    pub min_interval: u32,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            base_interval: BASE_FALL_INTERVAL,
            step_per_level: FALL_INTERVAL_STEP,
            min_interval: MIN_FALL_INTERVAL,
        }
    }
}

/// Award for the `nth` row (0-based) cleared within one lock
pub fn nth_line_award(nth: u32, rules: &ScoringRules) -> u32 {
    let factor = 1u32.checked_shl(nth).unwrap_or(u32::MAX);
    rules.first_line_award.saturating_mul(factor)
}

/// Total award for clearing `lines` rows with one lock
pub fn line_clear_award(lines: u32, rules: &ScoringRules) -> u32 {
    (0..lines).fold(0u32, |acc, nth| acc.saturating_add(nth_line_award(nth, rules)))
}

/// Level derived from score, clamped to `max_level`
pub fn calculate_level(score: u32, rules: &ScoringRules) -> u32 {
    (score / rules.points_per_level.max(1)).min(rules.max_level)
}

/// Ticks between gravity steps at `level`; never below `min_interval` or 1
pub fn fall_interval(level: u32, curve: &SpeedCurve) -> u32 {
    curve
        .base_interval
        .saturating_sub(curve.step_per_level.saturating_mul(level))
        .max(curve.min_interval)
        .max(1)
}
