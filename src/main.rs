//! # Cat API
//!
//! REST service managing cat records.
//!
//! ## Features
//!
//! - Create, read, list and delete cats
//! - Field validation and duplicate prevention
//! - In-memory or Redis storage
//! - Prometheus metrics on a separate port
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cat_api::{
    api, bootstrap::initialize_app_state, config::ServerConfig, logging::setup_logging,
    metrics::middleware::MetricsMiddleware, openapi::ApiDoc,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging()?;

    let config = Arc::new(ServerConfig::from_env());
    let app_state = initialize_app_state(Arc::clone(&config)).await?;

    let rate_limit_config = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit_requests_per_second)
        .burst_size(config.rate_limit_burst_size)
        .finish()
        .ok_or_else(|| {
            eyre::eyre!("Rate limit requests per second and burst size must be greater than zero")
        })?;

    let enable_swagger = config.enable_swagger;
    if enable_swagger {
        info!("Swagger UI available at /swagger-ui/index.html");
    }

    info!("Starting server on {}:{}", config.host, config.port);
    let app_server = HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&rate_limit_config))
            .wrap(MetricsMiddleware)
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(|cfg| {
                if enable_swagger {
                    cfg.service(
                        SwaggerUi::new("/swagger-ui/{_:.*}")
                            .url("/api-docs/openapi.json", ApiDoc::openapi()),
                    );
                }
            })
            .service(web::scope("/api").configure(api::routes::configure_routes))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run();

    info!(
        "Starting metrics server on {}:{}",
        config.host, config.metrics_port
    );
    let metrics_server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .configure(api::routes::metrics::init)
    })
    .workers(1)
    .bind((config.host.as_str(), config.metrics_port))
    .wrap_err_with(|| {
        format!(
            "Failed to bind metrics server to {}:{}",
            config.host, config.metrics_port
        )
    })?
    .shutdown_timeout(5)
    .run();

    futures::try_join!(app_server, metrics_server).wrap_err("Server runtime error")?;
    Ok(())
}
