use serde::{Deserialize, Serialize};

/// A single employee, either in transit or as read back from the table.
///
/// Nothing here is validated: empty names and negative pay are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub first: String,
    pub last: String,
    pub pay: i64,
}

impl Employee {
    pub fn new(first: impl Into<String>, last: impl Into<String>, pay: i64) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            pay,
        }
    }

    /// Derived address, never persisted.
    #[must_use]
    pub fn email(&self) -> String {
        format!("{}.{}@email.com", self.first, self.last)
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}
