//! End-to-end rota generation.

use thiserror::Error;

use crate::config::{ConfigError, RotaConfig, ValidatedConfig};
use crate::{log_assignments, log_debug};
use crate::models::RotaOutcome;

use super::allocator::allocate;
use super::pool::RotationPool;
use super::seed::SeedMaterial;
use super::skip_days::select_working_days;

/// Errors that can occur while generating a rota.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotaError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No eligible person left for day {day}")]
    EmptyPool { day: usize },
}

/// Generator for a single validated configuration.
pub struct RotaGenerator {
    config: ValidatedConfig,
}

impl RotaGenerator {
    /// Validate the configuration. Nothing is drawn until [`generate`](Self::generate).
    pub fn new(config: &RotaConfig) -> Result<Self, RotaError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Run both phases against one generator seeded from the configuration.
    pub fn generate(&self) -> Result<RotaOutcome, RotaError> {
        let config = &self.config;
        let verbosity = config.verbosity;

        let seed_material = SeedMaterial::derive(config);
        log_debug!(
            verbosity,
            "Seed material: {:?} (folded {:#018x})",
            seed_material.terms(),
            seed_material.fold()
        );
        let mut rng = seed_material.rng();

        let skip = select_working_days(config.days, config.skip_days, &mut rng, verbosity);
        log_assignments!(verbosity, "Non-working days: {:?}", skip.skipped);

        let quota = config.quota();
        log_assignments!(
            verbosity,
            "Quota: {} day(s) per person, {} leftover",
            quota,
            config.leftover_days()
        );

        let mut pool = RotationPool::new(config.roster_size());
        let record = allocate(
            config.days,
            &skip.working,
            &mut pool,
            quota,
            &mut rng,
            verbosity,
        )?;

        Ok(RotaOutcome {
            record,
            names: config.names.clone(),
            quota,
            seed_material: seed_material.into_terms(),
        })
    }
}

/// Validate `config` and generate its rota.
pub fn generate_rota(config: &RotaConfig) -> Result<RotaOutcome, RotaError> {
    RotaGenerator::new(config)?.generate()
}
