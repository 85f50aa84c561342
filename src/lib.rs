//! # sim-registry
//!
//! In-memory SIM card lifecycle and usage tracking.
//!
//! ## Design Principles
//!
//! 1. **Structured Outcomes**: Every operation returns a typed result.
//!    Rejections (inactive card, low balance, duplicate id) are `Err`
//!    values, never panics.
//!
//! 2. **No I/O in the Core**: Cards and registries only mutate state and
//!    emit `tracing` events. Rendering lives in `report`.
//!
//! 3. **Single Owner**: A `SimProvider` owns its cards. Lookups hand out
//!    references into that storage, so mutations are visible to later
//!    lookups and listings.
//!
//! ## Modules
//!
//! - `core`: SIM ids, the error taxonomy, tariff configuration
//! - `cards`: `SimCard`, `SimProvider`, outcome types
//! - `report`: human-readable rendering of outcomes and listings

pub mod core;
pub mod cards;
pub mod report;

// Re-export commonly used types
pub use crate::core::{SimError, SimId, SimResult, TariffConfig, DEFAULT_CALL_RATE};

pub use crate::cards::{
    CallReceipt, CardStatus, CardSummary, Recharge, SimCard, SimProvider, StatusChange,
};

pub use crate::report::{CardInfo, Listing};
