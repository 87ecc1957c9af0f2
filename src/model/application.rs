use chrono::NaiveDate;
use sqlx::SqliteConnection;

/// Validated leave application, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub leave_start_date: NaiveDate,
    pub leave_end_date: NaiveDate,
    pub employee_id: i64,
}

/// Stored application joined with its applicant's first name.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ApplicationWithEmployee {
    pub id: i64,
    pub leave_start_date: NaiveDate,
    pub leave_end_date: NaiveDate,
    pub employee_first_name: String,
}

pub struct Application;

impl Application {
    pub async fn insert(conn: &mut SqliteConnection, new: &NewApplication) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO application (leave_start_date, leave_end_date, employee_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(new.leave_start_date)
        .bind(new.leave_end_date)
        .bind(new.employee_id)
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_with_employee(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<ApplicationWithEmployee>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationWithEmployee>(
            r#"
            SELECT
                a.id,
                a.leave_start_date,
                a.leave_end_date,
                e.first_name AS employee_first_name
            FROM application a
            JOIN employee e ON e.id = a.employee_id
            WHERE a.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }}
