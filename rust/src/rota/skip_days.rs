//! Random selection of non-working days.

use rand::Rng;

use crate::log_draws;

/// Outcome of the skip-day draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipDraw {
    /// Remaining days, ascending.
    pub working: Vec<usize>,
    /// Removed days, in the order they were drawn.
    pub skipped: Vec<usize>,
}

/// Remove `skip_days` days from `1..=days`, one uniform positional draw per
/// removal against the shared generator.
///
/// Removal keeps the order of the remaining days, so each draw indexes into
/// the current ascending list. `skip_days == 0` performs no draws.
pub fn select_working_days<R: Rng + ?Sized>(
    days: usize,
    skip_days: usize,
    rng: &mut R,
    verbosity: u8,
) -> SkipDraw {
    let mut working: Vec<usize> = (1..=days).collect();
    let mut skipped = Vec::with_capacity(skip_days);

    for _ in 0..skip_days.min(days) {
        let position = rng.gen_range(0..working.len());
        let day = working.remove(position);
        log_draws!(
            verbosity,
            "Skip draw: position {} of {} -> day {}",
            position,
            working.len() + 1,
            day
        );
        skipped.push(day);
    }

    SkipDraw { working, skipped }
}
