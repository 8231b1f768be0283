//! The employee record store.
//!
//! Each operation maps to exactly one parameterized statement against the
//! `employees` table. Mutations run inside a scoped transaction; reads do not.
//!
//! Row identity for [`EmployeeStore::update_pay`] and [`EmployeeStore::delete`]
//! is the `(first, last)` pair. There is no key column, so every row sharing
//! that pair is affected, and the returned count says how many.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::Employee;
use crate::sqlite::config::{SchemaMode, StorageTarget, StoreOptions, StoreOptionsBuilder};
use crate::sqlite::params::NamedParams;
use crate::sqlite::query::{collect_employees, first_employee};
use crate::sqlite::transaction::with_transaction;

pub const TABLE_NAME: &str = "employees";

const CREATE_TABLE: &str = "CREATE TABLE employees (
            first TEXT,
            last TEXT,
            pay INTEGER
        )";
const TABLE_EXISTS: &str = "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE";
const INSERT: &str = "INSERT INTO employees VALUES (:first, :last, :pay)";
const SELECT_BY_LAST: &str = "SELECT first, last, pay FROM employees WHERE last = :last";
const UPDATE_PAY: &str = "UPDATE employees SET pay = :pay WHERE first = :first AND last = :last";
const DELETE: &str = "DELETE FROM employees WHERE first = :first AND last = :last";
const COUNT: &str = "SELECT COUNT(*) FROM employees";

/// Owned handle over one connection and the `employees` table.
#[derive(Debug)]
pub struct EmployeeStore {
    conn: Connection,
    target: StorageTarget,
}

impl EmployeeStore {
    #[must_use]
    pub fn builder(target: StorageTarget) -> StoreOptionsBuilder {
        StoreOptionsBuilder::new(target)
    }

    /// Open the connection and prepare the schema according to `opts`.
    ///
    /// # Errors
    /// Returns `StoreError::SchemaConflict` when the table exists and
    /// `SchemaMode::Create` was requested, or `StoreError::Sqlite` if opening fails.
    pub fn open(opts: StoreOptions) -> Result<Self, StoreError> {
        let conn = match &opts.target {
            StorageTarget::InMemory => Connection::open_in_memory()?,
            StorageTarget::File(path) => Connection::open(path)?,
        };
        if opts.wal && !opts.target.is_in_memory() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        }
        let store = Self {
            conn,
            target: opts.target,
        };
        store.init_schema(opts.schema_mode)?;
        info!(db = %store.target, "employee store opened");
        Ok(store)
    }

    /// # Errors
    /// See [`EmployeeStore::open`].
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(StoreOptions::in_memory())
    }

    /// Open a file-backed store, creating the table only if it is missing.
    ///
    /// # Errors
    /// See [`EmployeeStore::open`].
    pub fn open_file(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        Self::open(StoreOptions::file(path).with_schema_mode(SchemaMode::CreateIfMissing))
    }

    fn init_schema(&self, mode: SchemaMode) -> Result<(), StoreError> {
        if self.table_exists()? {
            return match mode {
                SchemaMode::Create => Err(StoreError::SchemaConflict(format!(
                    "table {TABLE_NAME} already exists in {}",
                    self.target
                ))),
                SchemaMode::CreateIfMissing => {
                    debug!(table = TABLE_NAME, "table present, skipping create");
                    Ok(())
                }
            };
        }
        self.conn.execute_batch(CREATE_TABLE)?;
        debug!(table = TABLE_NAME, "table created");
        Ok(())
    }

    fn table_exists(&self) -> Result<bool, StoreError> {
        let mut stmt = self.conn.prepare(TABLE_EXISTS)?;
        Ok(stmt.exists([TABLE_NAME])?)
    }

    #[must_use]
    pub fn target(&self) -> &StorageTarget {
        &self.target
    }

    /// Append one row. Duplicates are accepted.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if the insert fails; the transaction is rolled back.
    pub fn insert(&mut self, emp: &Employee) -> Result<(), StoreError> {
        let params = NamedParams::for_insert(emp);
        with_transaction(&mut self.conn, "insert", |tx| {
            debug!(first = %emp.first, last = %emp.last, "insert");
            tx.execute(INSERT, &params.as_refs()[..])?;
            Ok(())
        })
    }

    /// Insert every record in one transaction; any failure discards the whole batch.
    ///
    /// # Errors
    /// Returns the first `StoreError` raised; no row of the batch is kept.
    pub fn insert_many(&mut self, emps: &[Employee]) -> Result<usize, StoreError> {
        with_transaction(&mut self.conn, "insert_many", |tx| {
            let mut stmt = tx.prepare(INSERT)?;
            for emp in emps {
                let params = NamedParams::for_insert(emp);
                stmt.execute(&params.as_refs()[..])?;
            }
            debug!(rows = emps.len(), "insert_many");
            Ok(emps.len())
        })
    }

    /// All rows whose `last` equals `last`, in storage order. Empty when none match.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if the query fails.
    pub fn query_by_last_name(&self, last: &str) -> Result<Vec<Employee>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_BY_LAST)?;
        let rows = collect_employees(&mut stmt, &NamedParams::last_name(last))?;
        debug!(last, rows = rows.len(), "query_by_last_name");
        Ok(rows)
    }

    /// # Errors
    /// Returns `StoreError::Sqlite` if the query fails.
    pub fn find_one_by_last_name(&self, last: &str) -> Result<Option<Employee>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_BY_LAST)?;
        first_employee(&mut stmt, &NamedParams::last_name(last))
    }

    /// Set `pay` on every row matching `emp`'s first and last name.
    ///
    /// `emp.pay` is ignored. Zero matches is not an error.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if the update fails; the transaction is rolled back.
    pub fn update_pay(&mut self, emp: &Employee, pay: i64) -> Result<usize, StoreError> {
        let params = NamedParams::for_pay_update(emp, pay);
        with_transaction(&mut self.conn, "update_pay", |tx| {
            let changed = tx.execute(UPDATE_PAY, &params.as_refs()[..])?;
            debug!(first = %emp.first, last = %emp.last, pay, changed, "update_pay");
            Ok(changed)
        })
    }

    /// Remove every row matching `emp`'s first and last name. Safe to repeat.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if the delete fails; the transaction is rolled back.
    pub fn delete(&mut self, emp: &Employee) -> Result<usize, StoreError> {
        let params = NamedParams::identity(emp);
        with_transaction(&mut self.conn, "delete", |tx| {
            let removed = tx.execute(DELETE, &params.as_refs()[..])?;
            debug!(first = %emp.first, last = %emp.last, removed, "delete");
            Ok(removed)
        })
    }

    /// Alias for [`EmployeeStore::delete`].
    ///
    /// # Errors
    /// See [`EmployeeStore::delete`].
    pub fn remove(&mut self, emp: &Employee) -> Result<usize, StoreError> {
        self.delete(emp)
    }

    /// # Errors
    /// Returns `StoreError::Sqlite` if the count query fails.
    pub fn count(&self) -> Result<usize, StoreError> {
        let n: i64 = self.conn.query_row(COUNT, [], |row| row.get(0))?;
        Ok(usize::try_from(n).unwrap_or_default())
    }

    /// Run raw SQL against the connection, outside any scoped transaction.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` unchanged from the engine.
    pub fn execute_batch(&self, sql: &str) -> Result<(), StoreError> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Close the connection, surfacing any error instead of dropping it silently.
    ///
    /// # Errors
    /// Returns `StoreError::Close` if SQLite refuses to close the connection.
    pub fn close(self) -> Result<(), StoreError> {
        let target = self.target;
        self.conn
            .close()
            .map_err(|(_, err)| StoreError::Close(err))?;
        info!(db = %target, "employee store closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_empty() {
        let store = EmployeeStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.target().is_in_memory());
    }

    #[test]
    fn in_memory_stores_are_isolated() {
        let mut a = EmployeeStore::open_in_memory().unwrap();
        let b = EmployeeStore::open_in_memory().unwrap();
        a.insert(&Employee::new("John", "Doe", 80_000)).unwrap();
        assert_eq!(a.count().unwrap(), 1);
        assert_eq!(b.count().unwrap(), 0);
    }

    #[test]
    fn find_one_returns_first_match_or_none() {
        let mut store = EmployeeStore::open_in_memory().unwrap();
        assert_eq!(store.find_one_by_last_name("Doe").unwrap(), None);
        store.insert(&Employee::new("John", "Doe", 80_000)).unwrap();
        let found = store.find_one_by_last_name("Doe").unwrap().unwrap();
        assert_eq!(found.last, "Doe");
    }

    #[test]
    fn close_succeeds_after_use() {
        let mut store = EmployeeStore::open_in_memory().unwrap();
        store.insert(&Employee::new("Jane", "Doe", 90_000)).unwrap();
        store.close().unwrap();
    }
}
