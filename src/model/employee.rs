use chrono::NaiveDate;
use sqlx::SqliteConnection;

/// Public projection of an employee row. `secret` is never selected.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EmployeeProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

pub struct Employee;

impl Employee {
    pub async fn find_profile(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<EmployeeProfile>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeProfile>(
            r#"
            SELECT id, first_name, last_name, date_of_birth
            FROM employee
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM employee WHERE id = ?)")
            .bind(id)
            .fetch_one(conn)
            .await?;

        Ok(found != 0)
    }

    /// Returns the number of rows touched; zero means no such employee.
    pub async fn rename(
        conn: &mut SqliteConnection,
        id: i64,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE employee SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(first_name)
            .bind(last_name)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }}
