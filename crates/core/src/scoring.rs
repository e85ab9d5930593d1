//! Scoring module - display score and score-driven step pacing
//!
//! The board counts cleared rows. The game loop shows that count scaled by
//! `SCORE_DISPLAY_MULTIPLIER` and shortens the step interval as rows pile up.

use crate::types::{
    BASE_TICK_MS, MIN_TICK_MS, SCORE_DISPLAY_MULTIPLIER, TICK_DECAY_MS, TICK_DECAY_SCORE,
};

/// Points shown for `score` cleared rows
pub fn display_score(score: u32) -> u32 {
    score.saturating_mul(SCORE_DISPLAY_MULTIPLIER)
}

/// Step interval for `score` cleared rows with the default pacing
pub fn tick_interval_ms(score: u32) -> u32 {
    tick_interval_from(BASE_TICK_MS, score)
}

/// Step interval starting from `base_ms`.
///
/// Every `TICK_DECAY_SCORE` cleared rows take `TICK_DECAY_MS` off the
/// interval, clamped at `MIN_TICK_MS` (or `base_ms` if that is smaller).
pub fn tick_interval_from(base_ms: u32, score: u32) -> u32 {
    let steps = score / TICK_DECAY_SCORE;
    let floor = MIN_TICK_MS.min(base_ms);
    base_ms
        .saturating_sub(steps.saturating_mul(TICK_DECAY_MS))
        .max(floor)
}
