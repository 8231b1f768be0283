//! Employee record store over an embedded SQLite database.
//!
//! Four intent-level operations (insert, query by last name, update pay,
//! delete) each translate to one bound-parameter statement against a single
//! `employees` table. Mutations are wrapped in a scoped transaction.
//!
//! ```no_run
//! use employee_store::prelude::*;
//!
//! # fn main() -> Result<(), StoreError> {
//! let mut store = EmployeeStore::open_in_memory()?;
//! store.insert(&Employee::new("John", "Doe", 80_000))?;
//! let does = store.query_by_last_name("Doe")?;
//! assert_eq!(does.len(), 1);
//! store.close()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod prelude;
pub mod sqlite;
pub mod store;

pub use error::StoreError;
pub use model::Employee;
pub use sqlite::{SchemaMode, StorageTarget, StoreOptions, StoreOptionsBuilder};
pub use store::EmployeeStore;
