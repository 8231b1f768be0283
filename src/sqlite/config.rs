use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::StoreError;
use crate::store::EmployeeStore;

const MEMORY_TARGET: &str = ":memory:";

/// Backing medium for the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StorageTarget {
    /// Fresh, empty database on every open.
    InMemory,
    /// Durable file; the schema survives reopening.
    File(PathBuf),
}

impl StorageTarget {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        matches!(self, StorageTarget::InMemory)
    }
}

impl FromStr for StorageTarget {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // paths are kept verbatim; only the memory marker tolerates padding
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StoreError::Config("storage target must not be empty".into()));
        }
        if trimmed == MEMORY_TARGET {
            Ok(StorageTarget::InMemory)
        } else {
            Ok(StorageTarget::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for StorageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTarget::InMemory => f.write_str(MEMORY_TARGET),
            StorageTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What to do about the `employees` table when opening a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SchemaMode {
    /// Always issue `CREATE TABLE`; an existing table is a `SchemaConflict`.
    #[default]
    Create,
    /// Skip creation when the table is already present.
    CreateIfMissing,
}

/// Options for opening an [`EmployeeStore`].
#[derive(Debug, Clone, Serialize)]
pub struct StoreOptions {
    pub target: StorageTarget,
    pub schema_mode: SchemaMode,
    pub wal: bool,
}

impl StoreOptions {
    #[must_use]
    pub fn new(target: StorageTarget) -> Self {
        Self {
            target,
            schema_mode: SchemaMode::default(),
            wal: false,
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(StorageTarget::InMemory)
    }

    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::new(StorageTarget::File(path.as_ref().to_path_buf()))
    }

    #[must_use]
    pub fn with_schema_mode(mut self, schema_mode: SchemaMode) -> Self {
        self.schema_mode = schema_mode;
        self
    }

    #[must_use]
    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Fluent builder for store options.
#[derive(Debug, Clone)]
pub struct StoreOptionsBuilder {
    opts: StoreOptions,
}

impl StoreOptionsBuilder {
    #[must_use]
    pub fn new(target: StorageTarget) -> Self {
        Self {
            opts: StoreOptions::new(target),
        }
    }

    /// Start from a configuration string such as `":memory:"` or `"employee.db"`.
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the string is empty.
    pub fn parse(target: &str) -> Result<Self, StoreError> {
        Ok(Self::new(target.parse()?))
    }

    #[must_use]
    pub fn schema_mode(mut self, schema_mode: SchemaMode) -> Self {
        self.opts.schema_mode = schema_mode;
        self
    }

    #[must_use]
    pub fn if_missing(self) -> Self {
        self.schema_mode(SchemaMode::CreateIfMissing)
    }

    #[must_use]
    pub fn wal(mut self, wal: bool) -> Self {
        self.opts.wal = wal;
        self
    }

    #[must_use]
    pub fn finish(self) -> StoreOptions {
        self.opts
    }

    /// Open a store with the accumulated options.
    ///
    /// # Errors
    /// Returns `StoreError` if the connection cannot be opened or the schema step fails.
    pub fn open(self) -> Result<EmployeeStore, StoreError> {
        EmployeeStore::open(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_string_selects_in_memory_target() {
        assert_eq!(":memory:".parse::<StorageTarget>().unwrap(), StorageTarget::InMemory);
        assert_eq!(" :memory: ".parse::<StorageTarget>().unwrap(), StorageTarget::InMemory);
    }

    #[test]
    fn file_paths_are_not_trimmed_or_case_folded() {
        assert_eq!(
            " emp.db ".parse::<StorageTarget>().unwrap(),
            StorageTarget::File(PathBuf::from(" emp.db "))
        );
        assert_eq!(
            ":MEMORY:".parse::<StorageTarget>().unwrap(),
            StorageTarget::File(PathBuf::from(":MEMORY:"))
        );
    }

    #[test]
    fn other_strings_select_file_target() {
        let target: StorageTarget = "employee.db".parse().unwrap();
        assert_eq!(target, StorageTarget::File(PathBuf::from("employee.db")));
        assert_eq!(target.to_string(), "employee.db");
    }

    #[test]
    fn empty_target_is_config_error() {
        let err = "  ".parse::<StorageTarget>().unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn builder_accumulates_options() {
        let opts = StoreOptionsBuilder::parse("data/emp.db")
            .unwrap()
            .if_missing()
            .wal(true)
            .finish();
        assert_eq!(opts.schema_mode, SchemaMode::CreateIfMissing);
        assert!(opts.wal);
        assert!(!opts.target.is_in_memory());
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let opts = StoreOptions::default();
        assert!(opts.target.is_in_memory());
        assert_eq!(opts.schema_mode, SchemaMode::Create);
        assert!(!opts.wal);
    }
}
