//! Rota generation: seeded skip-day selection followed by quota-driven
//! rotation of duty over the working days.
//!
//! Both phases draw from one generator seeded from the configuration, so a
//! configuration always yields the same rota.

mod allocator;
mod generator;
mod pool;
mod seed;
mod skip_days;

pub use allocator::allocate;
pub use generator::{generate_rota, RotaError, RotaGenerator};
pub use pool::RotationPool;
pub use seed::{RotaRng, SeedMaterial};
pub use skip_days::{select_working_days, SkipDraw};
