//! Core data types for the rota.

use pyo3::prelude::*;
use rustc_hash::FxHashMap;

/// 1-based position of a person in the roster.
pub type PersonIndex = u32;

/// What a single day holds in the finished rota.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DaySlot {
    /// Non-working day.
    Off,
    /// Working day assigned to a person.
    Duty(PersonIndex),
}

impl DaySlot {
    pub fn person(self) -> Option<PersonIndex> {
        match self {
            DaySlot::Off => None,
            DaySlot::Duty(person) => Some(person),
        }
    }
}

/// Day-indexed record of the rota. Day `d` (1-based) lives at slot `d - 1`.
///
/// Starts with every slot [`DaySlot::Off`]; only the allocator writes to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRecord {
    slots: Vec<DaySlot>,
}

impl ScheduleRecord {
    pub(crate) fn new(days: usize) -> Self {
        Self {
            slots: vec![DaySlot::Off; days],
        }
    }

    pub(crate) fn assign(&mut self, day: usize, person: PersonIndex) {
        self.slots[day - 1] = DaySlot::Duty(person);
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot for a 1-based day, `None` when out of range.
    pub fn get(&self, day: usize) -> Option<DaySlot> {
        day.checked_sub(1).and_then(|i| self.slots.get(i)).copied()
    }

    pub fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    /// `(day, slot)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, DaySlot)> + '_ {
        self.slots.iter().enumerate().map(|(i, slot)| (i + 1, *slot))
    }

    pub fn working_days(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, slot)| *slot != DaySlot::Off)
            .map(|(day, _)| day)
            .collect()
    }

    pub fn skip_days(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, slot)| *slot == DaySlot::Off)
            .map(|(day, _)| day)
            .collect()
    }

    /// Days assigned to one person.
    pub fn days_for(&self, person: PersonIndex) -> Vec<usize> {
        self.iter()
            .filter(|(_, slot)| *slot == DaySlot::Duty(person))
            .map(|(day, _)| day)
            .collect()
    }

    /// Assigned-day count per person. People with no days are absent.
    pub fn counts(&self) -> FxHashMap<PersonIndex, usize> {
        let mut counts: FxHashMap<PersonIndex, usize> = FxHashMap::default();
        for person in self.slots.iter().filter_map(|slot| slot.person()) {
            *counts.entry(person).or_insert(0) += 1;
        }
        counts
    }

    /// Spread of per-person counts across a roster of `roster_size` people.
    pub fn fairness(&self, roster_size: usize, quota: usize) -> FairnessSummary {
        let counts = self.counts();
        let per_person: Vec<usize> = (1..=roster_size as PersonIndex)
            .map(|p| counts.get(&p).copied().unwrap_or(0))
            .collect();
        let min = per_person.iter().copied().min().unwrap_or(0);
        let max = per_person.iter().copied().max().unwrap_or(0);
        let above_quota = per_person.iter().filter(|&&c| c > quota).count();

        FairnessSummary {
            quota,
            min,
            max,
            above_quota,
        }
    }
}

/// Per-person load figures for a finished rota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FairnessSummary {
    pub quota: usize,
    pub min: usize,
    pub max: usize,
    /// People who received a leftover day on top of the quota.
    pub above_quota: usize,
}

impl FairnessSummary {
    pub fn spread(&self) -> usize {
        self.max - self.min
    }
}

/// Everything a run produced, ready for formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotaOutcome {
    pub record: ScheduleRecord,
    pub names: Vec<String>,
    pub quota: usize,
    pub seed_material: Vec<u64>,
}

impl RotaOutcome {
    /// Name of a 1-based person index.
    pub fn name_of(&self, person: PersonIndex) -> Option<&str> {
        (person as usize)
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(|s| s.as_str())
    }

    pub fn fairness(&self) -> FairnessSummary {
        self.record.fairness(self.names.len(), self.quota)
    }
}

/// Result handed to Python.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct RotaResult {
    /// One entry per day: 1-based person index, or `None` for a non-working day.
    #[pyo3(get)]
    pub slots: Vec<Option<PersonIndex>>,
    /// Roster after validation (possibly truncated).
    #[pyo3(get)]
    pub names: Vec<String>,
    #[pyo3(get)]
    pub quota: usize,
    #[pyo3(get)]
    pub seed_material: Vec<u64>,
}

#[pymethods]
impl RotaResult {
    /// Name assigned to a 1-based day, `None` for non-working days.
    fn assignee(&self, day: usize) -> Option<String> {
        let person = (*self.slots.get(day.checked_sub(1)?)?)?;
        self.names.get(person as usize - 1).cloned()
    }

    fn __len__(&self) -> usize {
        self.slots.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "RotaResult(days={}, people={}, quota={})",
            self.slots.len(),
            self.names.len(),
            self.quota
        )
    }
}

impl From<&RotaOutcome> for RotaResult {
    fn from(outcome: &RotaOutcome) -> Self {
        Self {
            slots: outcome.record.slots().iter().map(|s| s.person()).collect(),
            names: outcome.names.clone(),
            quota: outcome.quota,
            seed_material: outcome.seed_material.clone(),
        }
    }
}

impl TryFrom<&RotaResult> for RotaOutcome {
    type Error = String;

    fn try_from(result: &RotaResult) -> Result<Self, Self::Error> {
        let mut record = ScheduleRecord::new(result.slots.len());
        for (i, slot) in result.slots.iter().enumerate() {
            if let Some(person) = *slot {
                if person == 0 || person as usize > result.names.len() {
                    return Err(format!(
                        "Day {} refers to person {} but the roster has {} names",
                        i + 1,
                        person,
                        result.names.len()
                    ));
                }
                record.assign(i + 1, person);
            }
        }
        Ok(Self {
            record,
            names: result.names.clone(),
            quota: result.quota,
            seed_material: result.seed_material.clone(),
        })
    }
}
