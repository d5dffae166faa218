use clap::{ArgAction, Parser};
use std::process::ExitCode;

use rota_rust::{generate_rota, Locale, RosterOverflow, RotaConfig, RotaDisplay};

#[derive(Parser)]
#[command(name = "rota")]
#[command(version = "0.1.0")]
#[command(about = "Generate a reproducible duty rota", long_about = None)]
struct Cli {
    /// Total number of days
    #[arg(long)]
    days: Option<usize>,

    /// Number of randomly chosen non-working days
    #[arg(long = "non-active-days", visible_alias = "nad", alias = "non_active_days")]
    non_active_days: Option<usize>,

    /// Roster, in rotation order (at most 10 names)
    #[arg(long, num_args = 1..)]
    names: Vec<String>,

    /// Label mixed into the seed, usually the start date
    #[arg(long)]
    date: Option<String>,

    /// Keep the first 10 names instead of rejecting a longer roster
    #[arg(long, default_value_t = false)]
    truncate_roster: bool,

    /// Weekday label language (en, ru)
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Print per-person totals after the rota
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Diagnostics on stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_config(&self) -> RotaConfig {
        let overflow = if self.truncate_roster {
            RosterOverflow::Truncate
        } else {
            RosterOverflow::Reject
        };
        RotaConfig {
            days: self.days,
            skip_days: self.non_active_days,
            names: self.names.clone(),
            date: self.date.clone(),
            ..RotaConfig::default()
        }
        .with_roster_overflow(overflow)
        .with_verbosity(self.verbose)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match generate_rota(&cli.to_config()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    print!("{}", RotaDisplay::new(&outcome, cli.locale));

    if cli.summary {
        let counts = outcome.record.counts();
        println!();
        for (i, name) in outcome.names.iter().enumerate() {
            let person = (i + 1) as u32;
            println!("{}: {}", name, counts.get(&person).copied().unwrap_or(0));
        }
        let fairness = outcome.fairness();
        println!(
            "quota {} (min {}, max {}, {} above quota)",
            fairness.quota, fairness.min, fairness.max, fairness.above_quota
        );
    }

    ExitCode::SUCCESS
}
