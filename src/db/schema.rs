//! DDL for the record store.

/// `employee` rows are provisioned outside this service; `application` rows
/// are only ever inserted.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    date_of_birth TEXT NOT NULL, -- YYYY-MM-DD
    secret TEXT NULL
);

CREATE TABLE IF NOT EXISTS application (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    leave_start_date TEXT NOT NULL,
    leave_end_date TEXT NOT NULL,
    employee_id INTEGER NOT NULL REFERENCES employee(id),
    CHECK (leave_end_date >= leave_start_date)
);

CREATE INDEX IF NOT EXISTS idx_application_employee_id ON application(employee_id);
"#;
