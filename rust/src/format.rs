//! Printable rendering of a finished rota.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::models::{DaySlot, RotaOutcome};

/// Marker printed for non-working days.
pub const OFF_MARKER: &str = "-";

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Language of weekday labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        match self {
            Locale::English => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
            Locale::Russian => match weekday {
                Weekday::Mon => "Понедельник",
                Weekday::Tue => "Вторник",
                Weekday::Wed => "Среда",
                Weekday::Thu => "Четверг",
                Weekday::Fri => "Пятница",
                Weekday::Sat => "Суббота",
                Weekday::Sun => "Воскресенье",
            },
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ru" | "russian" => Ok(Locale::Russian),
            other => Err(format!("Unknown locale: {} (expected en or ru)", other)),
        }
    }
}

/// Weekday of a 1-based day index. Day 1 is a Monday; the week wraps.
pub fn weekday_of(day: usize) -> Weekday {
    WEEK[(day.max(1) - 1) % 7]
}

/// One line per day: `"<weekday> <name>"`, or the off marker for
/// non-working days.
pub fn render_lines(outcome: &RotaOutcome, locale: Locale) -> Vec<String> {
    outcome
        .record
        .iter()
        .map(|(day, slot)| {
            let who = match slot {
                DaySlot::Off => OFF_MARKER,
                DaySlot::Duty(person) => outcome.name_of(person).unwrap_or("?"),
            };
            format!("{} {}", locale.weekday_name(weekday_of(day)), who)
        })
        .collect()
}

/// `Display` adapter printing [`render_lines`] separated by newlines.
pub struct RotaDisplay<'a> {
    outcome: &'a RotaOutcome,
    locale: Locale,
}

impl<'a> RotaDisplay<'a> {
    pub fn new(outcome: &'a RotaOutcome, locale: Locale) -> Self {
        Self { outcome, locale }
    }
}

impl fmt::Display for RotaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(self.outcome, self.locale) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotaConfig;
    use crate::rota::generate_rota;

    #[test]
    fn test_weekday_wraps() {
        assert_eq!(weekday_of(1), Weekday::Mon);
        assert_eq!(weekday_of(7), Weekday::Sun);
        assert_eq!(weekday_of(8), Weekday::Mon);
        assert_eq!(weekday_of(17), Weekday::Wed);
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Russian));
        assert_eq!("English".parse::<Locale>(), Ok(Locale::English));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_render_marks_off_days() {
        let config = RotaConfig::new(9, vec!["Ann".to_string(), "Bob".to_string()])
            .with_skip_days(2)
            .with_date("w1");
        let outcome = generate_rota(&config).unwrap();
        let lines = render_lines(&outcome, Locale::English);

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("Monday "));
        assert!(lines[7].starts_with("Monday "));
        let off = lines.iter().filter(|l| l.ends_with(" -")).count();
        assert_eq!(off, 2);
        assert!(lines
            .iter()
            .all(|l| l.ends_with(" -") || l.ends_with(" Ann") || l.ends_with(" Bob")));
    }

    #[test]
    fn test_russian_labels() {
        let config = RotaConfig::new(2, vec!["A".to_string()]);
        let outcome = generate_rota(&config).unwrap();
        let text = RotaDisplay::new(&outcome, Locale::Russian).to_string();
        assert_eq!(text, "Понедельник A\nВторник A\n");
    }
}
