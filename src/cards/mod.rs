//! SIM cards and the provider registry that owns them.
//!
//! ## Key Types
//!
//! - `SimCard`: balance and activation state of one SIM
//! - `CardStatus`: `Active` / `Inactive`
//! - `SimProvider`: named registry, creates and looks up cards
//! - `Recharge`, `CallReceipt`, `StatusChange`, `CardSummary`: structured outcomes
//!
//! Cards hold a copy of their provider's name and call rate; they never
//! point back at the registry.

pub mod instance;
pub mod receipt;
pub mod registry;
pub mod status;

pub use instance::SimCard;
pub use receipt::{CallReceipt, CardSummary, Recharge, StatusChange};
pub use registry::SimProvider;
pub use status::CardStatus;
