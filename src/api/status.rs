use crate::{db, error::ApiError};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;

/// Liveness check
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Store reachable", body = Object, example = json!({
            "status": "up"
        })),
        (status = 500, description = "Store unreachable")
    ),
    tag = "Status"
)]
pub async fn status(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    db::ping(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Status probe failed");
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "up" })))
}
