//! Quota-driven assignment of working days.

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::models::{PersonIndex, ScheduleRecord};
use crate::{log_assignments, log_debug, log_draws};

use super::generator::RotaError;
use super::pool::RotationPool;

/// Fill every working day with a person drawn from `pool`.
///
/// `working_days` must be ascending; each day takes one draw from `rng`.
/// A person is retired as soon as their running count reaches the cap, which
/// starts at `max(quota, 1)`. If the pool runs dry while days remain, it is
/// refilled with the whole roster and the cap rises by one, so the leftover
/// days go to distinct people.
pub fn allocate<R: Rng + ?Sized>(
    days: usize,
    working_days: &[usize],
    pool: &mut RotationPool,
    quota: usize,
    rng: &mut R,
    verbosity: u8,
) -> Result<ScheduleRecord, RotaError> {
    let mut record = ScheduleRecord::new(days);
    let mut tally: FxHashMap<PersonIndex, usize> = FxHashMap::default();
    let mut cap = quota.max(1);

    for &day in working_days {
        if pool.is_empty() {
            pool.refill();
            cap += 1;
            log_assignments!(
                verbosity,
                "Day {}: pool exhausted, leftover round with cap {}",
                day,
                cap
            );
        }

        log_debug!(verbosity, "Day {}: pool {:?}", day, pool.members());
        let person = pool
            .pick_random(rng)
            .ok_or(RotaError::EmptyPool { day })?;
        log_draws!(
            verbosity,
            "Day {}: drew person {} from {} eligible",
            day,
            person,
            pool.len()
        );

        record.assign(day, person);
        let count = tally.entry(person).or_insert(0);
        *count += 1;
        log_assignments!(verbosity, "Day {} -> person {} ({} day(s))", day, person, *count);

        if *count >= cap {
            pool.retire(person);
            log_assignments!(verbosity, "Person {} retired at {} day(s)", person, *count);
        }
    }

    Ok(record)
}
