use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use hrm_leave::config::Config;
use hrm_leave::db::init_db;
use hrm_leave::docs;
use hrm_leave::routes;

use tracing::info;
use tracing_appender::rolling;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(server_addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config).await?;
    let limiter = Arc::new(routes::build_limiter(config.rate_per_min)?);

    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();
    let api_doc = docs::openapi_for_prefix(&api_prefix);

    HttpServer::new(move || {
        App::new()
            .wrap(limiter.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets match
                    .url("/api-doc/openapi.json", api_doc.clone()),
            )
            .app_data(Data::new(pool.clone()))
            .configure(|cfg| routes::configure(cfg, &api_prefix))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
