use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::model::Employee;

/// Named parameter container bound to `:placeholder` markers.
///
/// Values are always bound through rusqlite, never spliced into SQL text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParams(pub Vec<(&'static str, Value)>);

impl NamedParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// All three columns, for `INSERT`.
    #[must_use]
    pub fn for_insert(emp: &Employee) -> Self {
        Self::identity(emp).with(":pay", emp.pay)
    }

    /// `:first` and `:last` only; pay is not part of row identity.
    #[must_use]
    pub fn identity(emp: &Employee) -> Self {
        Self::new()
            .with(":first", emp.first.clone())
            .with(":last", emp.last.clone())
    }

    #[must_use]
    pub fn for_pay_update(emp: &Employee, pay: i64) -> Self {
        Self::identity(emp).with(":pay", pay)
    }

    #[must_use]
    pub fn last_name(last: &str) -> Self {
        Self::new().with(":last", last.to_owned())
    }

    /// Borrowed slice suitable for `execute`/`query` with named parameters.
    #[must_use]
    pub fn as_refs(&self) -> Vec<(&str, &dyn ToSql)> {
        self.0
            .iter()
            .map(|(name, value)| (*name, value as &dyn ToSql))
            .collect()
    }
}
