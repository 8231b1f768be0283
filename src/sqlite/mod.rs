// SQLite module - backing engine for the employee store
//
// - config: storage target and open options
// - params: named parameter binding for employee fields
// - query: row extraction
// - transaction: scoped commit/rollback

pub mod config;
pub mod params;
pub mod query;
pub mod transaction;

pub use config::{SchemaMode, StorageTarget, StoreOptions, StoreOptionsBuilder};
pub use params::NamedParams;
pub use query::{collect_employees, employee_from_row, first_employee};
pub use transaction::with_transaction;
