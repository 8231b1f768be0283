use employee_store::prelude::*;

const NEGATIVE_PAY_TRIGGER: &str = "
    CREATE TRIGGER reject_negative_pay BEFORE INSERT ON employees
    WHEN NEW.pay < 0
    BEGIN
        SELECT RAISE(ABORT, 'negative pay');
    END;
    CREATE TRIGGER reject_pay_cut BEFORE UPDATE OF pay ON employees
    WHEN NEW.pay < OLD.pay
    BEGIN
        SELECT RAISE(ABORT, 'pay cut');
    END;";

fn guarded_store() -> Result<EmployeeStore, StoreError> {
    let store = EmployeeStore::open_in_memory()?;
    store.execute_batch(NEGATIVE_PAY_TRIGGER)?;
    Ok(store)
}

#[test]
fn failing_batch_leaves_no_rows() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = guarded_store()?;
    let batch = [
        Employee::new("John", "Doe", 80_000),
        Employee::new("Jane", "Doe", -1),
        Employee::new("Mary", "Doe", 70_000),
    ];
    let err = store.insert_many(&batch).unwrap_err();
    assert!(err.is_sqlite());
    assert!(err.to_string().contains("negative pay"));
    assert_eq!(store.count()?, 0);

    // connection is usable again after the rollback
    store.insert(&Employee::new("John", "Doe", 80_000))?;
    assert_eq!(store.count()?, 1);
    Ok(())
}

#[test]
fn aborted_update_statement_reports_engine_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = guarded_store()?;
    let low = Employee::new("Sam", "Lee", 10);
    let high = Employee::new("Sam", "Lee", 100);
    store.insert(&low)?;
    store.insert(&high)?;

    // 50 raises the first row but cuts the second; RAISE(ABORT) undoes the statement
    let err = store.update_pay(&low, 50).unwrap_err();
    assert!(matches!(err, StoreError::Sqlite(_)));

    let mut pays: Vec<i64> = store.query_by_last_name("Lee")?.iter().map(|e| e.pay).collect();
    pays.sort_unstable();
    assert_eq!(pays, vec![10, 100]);
    Ok(())
}

#[test]
fn engine_errors_propagate_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = EmployeeStore::open_in_memory()?;
    store.execute_batch("DROP TABLE employees")?;

    let err = store.insert(&Employee::new("John", "Doe", 1)).unwrap_err();
    match err {
        StoreError::Sqlite(inner) => assert!(inner.to_string().contains("no such table")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.query_by_last_name("Doe").unwrap_err().is_sqlite());
    assert!(store.delete(&Employee::new("John", "Doe", 1)).unwrap_err().is_sqlite());
    Ok(())
}
