//! SIM identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a SIM card within one provider.
///
/// Implements `Borrow<str>` so registry lookups accept plain `&str`.
///
/// ```
/// use sim_registry::core::SimId;
///
/// let id = SimId::from("12345");
/// assert_eq!(id.as_str(), "12345");
/// assert_eq!(format!("{}", id), "12345");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimId(String);

impl SimId {
    /// Create a new SIM id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SimId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SimId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SimId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
