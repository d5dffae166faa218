//! Configuration types for the rota generator.

use pyo3::prelude::*;
use thiserror::Error;

use crate::log_assignments;

/// Largest roster the generator accepts.
pub const MAX_ROSTER_SIZE: usize = 10;

/// Configuration rejected before any random draw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Day count is required")]
    MissingDays,
    #[error("Roster is empty: at least one name is required")]
    InvalidRoster,
    #[error("Invalid day range: {skip_days} non-working day(s) out of {days} leaves no working days")]
    InvalidDayRange { days: usize, skip_days: usize },
    #[error("Roster has {size} names, at most {max} are supported")]
    ExcessiveRosterSize { size: usize, max: usize },
}

/// What to do with a roster longer than [`MAX_ROSTER_SIZE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RosterOverflow {
    /// Fail validation with [`ConfigError::ExcessiveRosterSize`].
    #[default]
    Reject,
    /// Keep the first [`MAX_ROSTER_SIZE`] names and drop the rest.
    Truncate,
}

/// Run configuration as supplied by a caller. Unset fields are resolved by
/// [`RotaConfig::validate`].
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct RotaConfig {
    /// Total number of days in the rota (required, >= 1).
    #[pyo3(get, set)]
    pub days: Option<usize>,
    /// Number of randomly chosen non-working days (default 0).
    #[pyo3(get, set)]
    pub skip_days: Option<usize>,
    /// Roster, in rotation order.
    #[pyo3(get, set)]
    pub names: Vec<String>,
    /// Free-form label mixed into the seed (default empty).
    #[pyo3(get, set)]
    pub date: Option<String>,
    /// Keep the first ten names instead of rejecting a longer roster.
    #[pyo3(get, set)]
    pub truncate_roster: bool,
    /// Verbosity level: 0=silent, 1=assignments, 2=draws, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

#[pymethods]
impl RotaConfig {
    #[new]
    #[pyo3(signature = (
        days=None,
        names=None,
        skip_days=None,
        date=None,
        truncate_roster=false,
        verbosity=0
    ))]
    fn py_new(
        days: Option<usize>,
        names: Option<Vec<String>>,
        skip_days: Option<usize>,
        date: Option<String>,
        truncate_roster: bool,
        verbosity: u8,
    ) -> Self {
        Self {
            days,
            skip_days,
            names: names.unwrap_or_default(),
            date,
            truncate_roster,
            verbosity,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "RotaConfig(days={:?}, skip_days={:?}, names={:?}, date={:?})",
            self.days, self.skip_days, self.names, self.date
        )
    }
}

impl RotaConfig {
    /// Create a configuration with the required fields set.
    pub fn new(days: usize, names: Vec<String>) -> Self {
        Self {
            days: Some(days),
            names,
            ..Self::default()
        }
    }

    pub fn with_skip_days(mut self, skip_days: usize) -> Self {
        self.skip_days = Some(skip_days);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_roster_overflow(mut self, policy: RosterOverflow) -> Self {
        self.truncate_roster = policy == RosterOverflow::Truncate;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn roster_overflow(&self) -> RosterOverflow {
        if self.truncate_roster {
            RosterOverflow::Truncate
        } else {
            RosterOverflow::Reject
        }
    }

    /// Resolve defaults and check every invariant the allocator relies on.
    ///
    /// Runs before the generator is seeded, so a rejected configuration
    /// never produces a partial schedule.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let days = self.days.ok_or(ConfigError::MissingDays)?;
        let skip_days = self.skip_days.unwrap_or(0);

        if days == 0 || skip_days >= days {
            return Err(ConfigError::InvalidDayRange { days, skip_days });
        }

        if self.names.is_empty() {
            return Err(ConfigError::InvalidRoster);
        }

        let mut names = self.names.clone();
        if names.len() > MAX_ROSTER_SIZE {
            match self.roster_overflow() {
                RosterOverflow::Reject => {
                    return Err(ConfigError::ExcessiveRosterSize {
                        size: names.len(),
                        max: MAX_ROSTER_SIZE,
                    });
                }
                RosterOverflow::Truncate => {
                    log_assignments!(
                        self.verbosity,
                        "Roster truncated from {} to {} names (dropped: {:?})",
                        names.len(),
                        MAX_ROSTER_SIZE,
                        &names[MAX_ROSTER_SIZE..]
                    );
                    names.truncate(MAX_ROSTER_SIZE);
                }
            }
        }

        Ok(ValidatedConfig {
            days,
            skip_days,
            names,
            date: self.date.clone().unwrap_or_default(),
            verbosity: self.verbosity,
        })
    }
}

/// Configuration whose invariants have been checked: `1 <= days`,
/// `skip_days < days`, `1 <= names.len() <= MAX_ROSTER_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub days: usize,
    pub skip_days: usize,
    pub names: Vec<String>,
    pub date: String,
    pub verbosity: u8,
}

impl ValidatedConfig {
    /// Number of days that need a person.
    pub fn working_days(&self) -> usize {
        self.days - self.skip_days
    }

    pub fn roster_size(&self) -> usize {
        self.names.len()
    }

    /// Fair share per person: `floor(working_days / roster_size)`.
    pub fn quota(&self) -> usize {
        self.working_days() / self.roster_size()
    }

    /// Working days left over once everyone has taken their quota.
    pub fn leftover_days(&self) -> usize {
        self.working_days() % self.roster_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_resolved() {
        let validated = RotaConfig::new(7, names(&["A", "B"])).validate().unwrap();
        assert_eq!(validated.skip_days, 0);
        assert_eq!(validated.date, "");
        assert_eq!(validated.working_days(), 7);
        assert_eq!(validated.quota(), 3);
        assert_eq!(validated.leftover_days(), 1);
    }

    #[test]
    fn test_missing_days_rejected() {
        let config = RotaConfig {
            names: names(&["A"]),
            ..RotaConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingDays));
    }

    #[test]
    fn test_all_days_skipped_rejected() {
        let config = RotaConfig::new(5, names(&["A"])).with_skip_days(5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDayRange {
                days: 5,
                skip_days: 5
            })
        );
    }

    #[test]
    fn test_zero_days_rejected() {
        let config = RotaConfig::new(0, names(&["A"]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDayRange { days: 0, .. })
        ));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let config = RotaConfig::new(3, vec![]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidRoster));
    }

    #[test]
    fn test_oversized_roster_rejected_by_default() {
        let roster: Vec<String> = (0..11).map(|i| format!("p{}", i)).collect();
        let config = RotaConfig::new(30, roster);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ExcessiveRosterSize { size: 11, max: 10 })
        );
    }

    #[test]
    fn test_oversized_roster_truncated_on_request() {
        let roster: Vec<String> = (0..12).map(|i| format!("p{}", i)).collect();
        let validated = RotaConfig::new(30, roster)
            .with_roster_overflow(RosterOverflow::Truncate)
            .validate()
            .unwrap();
        assert_eq!(validated.roster_size(), MAX_ROSTER_SIZE);
        assert_eq!(validated.names.last().map(String::as_str), Some("p9"));
    }

    #[test]
    fn test_quota_zero_when_fewer_days_than_people() {
        let validated = RotaConfig::new(2, names(&["A", "B", "C"]))
            .validate()
            .unwrap();
        assert_eq!(validated.quota(), 0);
        assert_eq!(validated.leftover_days(), 2);
    }

    #[test]
    fn test_error_messages_name_the_values() {
        let err = ConfigError::InvalidDayRange {
            days: 5,
            skip_days: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('7'));
    }
}
