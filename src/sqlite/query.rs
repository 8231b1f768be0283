use rusqlite::{OptionalExtension, Row, Statement};

use crate::error::StoreError;
use crate::model::Employee;

use super::params::NamedParams;

/// Map one `(first, last, pay)` row to an [`Employee`].
///
/// # Errors
/// Returns the rusqlite error if a column is missing or has the wrong type.
pub fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        first: row.get(0)?,
        last: row.get(1)?,
        pay: row.get(2)?,
    })
}

/// Run a prepared select and collect every row in storage order.
///
/// # Errors
/// Returns `StoreError::Sqlite` if execution or row extraction fails.
pub fn collect_employees(
    stmt: &mut Statement<'_>,
    params: &NamedParams,
) -> Result<Vec<Employee>, StoreError> {
    let rows = stmt.query_map(&params.as_refs()[..], employee_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// First row of a prepared select, if any.
///
/// # Errors
/// Returns `StoreError::Sqlite` if execution or row extraction fails.
pub fn first_employee(
    stmt: &mut Statement<'_>,
    params: &NamedParams,
) -> Result<Option<Employee>, StoreError> {
    Ok(stmt
        .query_row(&params.as_refs()[..], employee_from_row)
        .optional()?)
}
