//! Diagnostic macros for the rota generator, gated by a verbosity level.
//!
//! Nothing is formatted when the level is below the threshold, so verbosity 0
//! costs a single comparison per call site.
//! - 0: SILENT (errors only, reported by the caller)
//! - 1: ASSIGNMENTS (day assignments, retirements, pool refills)
//! - 2: DRAWS (every random draw against the shared generator)
//! - 3: DEBUG (seed material, pool contents)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_ASSIGNMENTS: u8 = 1;
pub const VERBOSITY_DRAWS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at ASSIGNMENTS level (verbosity >= 1).
#[macro_export]
macro_rules! log_assignments {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_ASSIGNMENTS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DRAWS level (verbosity >= 2).
#[macro_export]
macro_rules! log_draws {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DRAWS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
