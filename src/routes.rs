use crate::api::{application, employee, status};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, web};
use anyhow::{Result, anyhow};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.app_data(json_config());

    cfg.service(web::resource("/status").route(web::get().to(status::status)));

    cfg.service(
        web::scope(api_prefix)
            .service(
                web::scope("/employee")
                    // /employee/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::patch().to(employee::patch_employee)),
                    ),
            )
            // /application
            .service(
                web::resource("/application")
                    .route(web::post().to(application::post_application)),
            ),
    );
}

/// Malformed bodies answer 400 with the same `{"message": ...}` shape as
/// validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
        InternalError::from_response(err, resp).into()
    })
}

pub fn build_limiter(requests_per_min: u32) -> Result<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} per minute"))?;
    Ok(Governor::new(&cfg))
}
