//! Core types shared by cards and registries: ids, errors, tariff configuration.

pub mod config;
pub mod error;
pub mod id;

pub use config::{TariffConfig, DEFAULT_CALL_RATE};
pub use error::{SimError, SimResult};
pub use id::SimId;
