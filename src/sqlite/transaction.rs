use rusqlite::{Connection, Transaction};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Run `func` inside a transaction that commits on `Ok` and rolls back on `Err`.
///
/// If `func` panics the transaction is dropped, and rusqlite rolls it back.
/// A failed rollback is logged; the error from `func` is what the caller sees.
///
/// # Errors
/// Returns the error from `func`, or `StoreError::Sqlite` if `BEGIN`/`COMMIT` fails.
pub fn with_transaction<F, R>(conn: &mut Connection, label: &str, func: F) -> Result<R, StoreError>
where
    F: FnOnce(&Transaction<'_>) -> Result<R, StoreError>,
{
    let tx = conn.transaction()?;
    match func(&tx) {
        Ok(value) => {
            tx.commit()?;
            debug!(op = label, "transaction committed");
            Ok(value)
        }
        Err(err) => {
            warn!(op = label, error = %err, "rolling back transaction");
            if let Err(rollback_err) = tx.rollback() {
                warn!(op = label, error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
