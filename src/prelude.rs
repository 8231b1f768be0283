//! Convenient imports for common functionality.

pub use crate::error::StoreError;
pub use crate::model::Employee;
pub use crate::sqlite::{SchemaMode, StorageTarget, StoreOptions, StoreOptionsBuilder};
pub use crate::store::EmployeeStore;
