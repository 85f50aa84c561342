//! Card activation status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-state usability flag. Transitions are free in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Recharges and calls are accepted.
    #[default]
    Active,
    /// Recharges and calls are rejected.
    Inactive,
}

impl CardStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Display label: `"Active"` or `"Inactive"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
