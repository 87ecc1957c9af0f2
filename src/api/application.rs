use crate::{
    db,
    error::ApiError,
    model::{
        application::{Application, ApplicationWithEmployee},
        employee::Employee,
    },
    validation,
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{error, info};
use utoipa::ToSchema;

/// Fields stay raw JSON so blank and mistyped values get our own messages.
/// `employee_id` may also be sent as a numeric string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateApplication {
    #[schema(example = "2026-01-05", value_type = String)]
    pub leave_start_date: Option<Value>,
    #[schema(example = "2026-01-09", value_type = String)]
    pub leave_end_date: Option<Value>,
    #[schema(example = 1, value_type = i64)]
    pub employee_id: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct ApplicantResponse {
    #[schema(example = "John")]
    pub first_name: String,
}

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct ApplicationResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub leave_start_date: NaiveDate,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub leave_end_date: NaiveDate,
    pub employee: ApplicantResponse,
}

impl From<ApplicationWithEmployee> for ApplicationResponse {
    fn from(row: ApplicationWithEmployee) -> Self {
        Self {
            id: row.id,
            leave_start_date: row.leave_start_date,
            leave_end_date: row.leave_end_date,
            employee: ApplicantResponse {
                first_name: row.employee_first_name,
            },
        }
    }
}

/// Create leave application
#[utoipa::path(
    post,
    path = "/api/application",
    request_body(
        content = CreateApplication,
        description = "Leave application payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Application stored", body = ApplicationResponse),
        (status = 400, description = "Missing or invalid field", body = Object, example = json!({
            "message": "leave_end_date cannot be before leave_start_date"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "No such employee"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Application"
)]
pub async fn post_application(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateApplication>,
) -> Result<HttpResponse, ApiError> {
    let new_application = validation::leave_application(
        payload.leave_start_date.as_ref(),
        payload.leave_end_date.as_ref(),
        payload.employee_id.as_ref(),
    )?;
    let employee_id = new_application.employee_id;

    let mut session = db::begin(pool.get_ref()).await?;

    if !Employee::exists(&mut *session, employee_id).await? {
        return Err(ApiError::no_such_employee());
    }

    let id = Application::insert(&mut *session, &new_application)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to create leave application");
            ApiError::from(e)
        })?;

    let stored = Application::find_with_employee(&mut *session, id)
        .await?
        .ok_or(ApiError::Store(sqlx::Error::RowNotFound))?;
    session.commit().await?;

    info!(application_id = id, employee_id, "Leave application created");

    Ok(HttpResponse::Ok().json(ApplicationResponse::from(stored)))
}
