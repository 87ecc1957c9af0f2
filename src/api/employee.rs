use crate::{
    db,
    error::ApiError,
    model::employee::{Employee, EmployeeProfile},
    validation,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "1990-04-12", format = "date", value_type = String)]
    pub date_of_birth: chrono::NaiveDate,
}

impl From<EmployeeProfile> for EmployeeResponse {
    fn from(profile: EmployeeProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            date_of_birth: profile.date_of_birth,
        }
    }
}

/// Both names are required; blank values are rejected with 400.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchEmployee {
    #[schema(example = "Jane", value_type = String)]
    pub first_name: Option<Value>,
    #[schema(example = "Smith", value_type = String)]
    pub last_name: Option<Value>,
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "No such employee"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let mut session = db::begin(pool.get_ref()).await?;
    let profile = Employee::find_profile(&mut *session, employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to fetch employee");
            ApiError::from(e)
        })?;
    session.commit().await?;

    match profile {
        Some(profile) => Ok(HttpResponse::Ok().json(EmployeeResponse::from(profile))),
        None => Err(ApiError::no_such_employee()),
    }
}

/// Rename Employee
///
/// Success answers 204 and still carries a confirmation text.
#[utoipa::path(
    patch,
    path = "/api/employee/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = PatchEmployee,
    responses(
        (status = 204, description = "Successfully updated employee"),
        (status = 400, description = "A name is blank", body = Object, example = json!({
            "message": "last_name cannot be blank"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "No such employee"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn patch_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<PatchEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let (first_name, last_name) =
        validation::employee_names(body.first_name.as_ref(), body.last_name.as_ref())?;

    let mut session = db::begin(pool.get_ref()).await?;
    let affected = Employee::rename(&mut *session, employee_id, &first_name, &last_name)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to update employee");
            ApiError::from(e)
        })?;
    // committed even when nothing matched
    session.commit().await?;
    debug!(employee_id, affected, "Employee rename applied");

    if affected == 0 {
        return Err(ApiError::no_such_employee());
    }

    Ok(HttpResponse::NoContent().body("Successfully updated employee"))
}
