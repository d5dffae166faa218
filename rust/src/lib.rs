//! Deterministic duty rota generator.
//!
//! Assigns a rotating duty to a roster over a fixed number of days. Some days
//! are drawn as non-working, the rest are shared out so nobody takes more
//! than their fair share. The same configuration always produces the same
//! rota.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod config;
pub mod format;
pub mod logging;
pub mod models;
pub mod rota;

pub use config::{ConfigError, RosterOverflow, RotaConfig, ValidatedConfig, MAX_ROSTER_SIZE};
pub use format::{render_lines, weekday_of, Locale, RotaDisplay};
pub use models::{DaySlot, FairnessSummary, PersonIndex, RotaOutcome, RotaResult, ScheduleRecord};
pub use rota::{generate_rota, RotaError, RotaGenerator};

/// Generate the rota for a configuration.
///
/// # Raises
/// * ValueError if the configuration is invalid (missing day count, empty or
///   oversized roster, no working days)
#[pyfunction]
#[pyo3(name = "generate_rota")]
fn py_generate_rota(config: RotaConfig) -> PyResult<RotaResult> {
    match generate_rota(&config) {
        Ok(outcome) => Ok(RotaResult::from(&outcome)),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Render a rota as one `"<weekday> <name>"` line per day.
///
/// # Arguments
/// * `result` - Output of `generate_rota`
/// * `locale` - "en" or "ru"
#[pyfunction]
#[pyo3(name = "format_rota", signature = (result, locale="en"))]
fn py_format_rota(result: &RotaResult, locale: &str) -> PyResult<Vec<String>> {
    let locale: Locale = locale
        .parse()
        .map_err(pyo3::exceptions::PyValueError::new_err)?;
    let outcome = RotaOutcome::try_from(result)
        .map_err(pyo3::exceptions::PyValueError::new_err)?;
    Ok(render_lines(&outcome, locale))
}

/// The rota.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RotaConfig>()?;
    m.add_class::<RotaResult>()?;

    m.add_function(wrap_pyfunction!(py_generate_rota, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_rota, m)?)?;

    m.add("MAX_ROSTER_SIZE", MAX_ROSTER_SIZE)?;

    Ok(())
}
