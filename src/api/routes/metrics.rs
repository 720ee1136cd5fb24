//! Metrics endpoints, served on the dedicated metrics port.
use crate::metrics::{gather_metrics, REGISTRY};
use actix_web::{get, web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};

/// Names of every registered metric family.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Metric names", body = Vec<String>)
    )
)]
#[get("/metrics")]
async fn list_metrics() -> impl Responder {
    let metric_names: Vec<String> = REGISTRY
        .gather()
        .iter()
        .map(|mf| mf.get_name().to_string())
        .collect();
    HttpResponse::Ok().json(metric_names)
}

/// A single metric family in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/metrics/{metric_name}",
    tag = "Metrics",
    params(
        ("metric_name" = String, Path, description = "Name of the metric family")
    ),
    responses(
        (status = 200, description = "Metric family in Prometheus text format", body = String),
        (status = 404, description = "Metric not found", body = String)
    )
)]
#[get("/metrics/{metric_name}")]
async fn metric_detail(path: web::Path<String>) -> impl Responder {
    let metric_name = path.into_inner();

    match REGISTRY
        .gather()
        .into_iter()
        .find(|mf| mf.get_name() == metric_name)
    {
        Some(mf) => {
            let encoder = TextEncoder::new();
            let mut buffer = Vec::new();
            if let Err(e) = encoder.encode(&[mf], &mut buffer) {
                return HttpResponse::InternalServerError().body(format!("Encoding error: {}", e));
            }
            HttpResponse::Ok()
                .content_type(encoder.format_type())
                .body(buffer)
        }
        None => HttpResponse::NotFound().body("Metric not found"),
    }
}

/// Every metric family in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/debug/metrics/scrape",
    tag = "Metrics",
    responses(
        (status = 200, description = "All metrics in Prometheus text format", body = String)
    )
)]
#[get("/debug/metrics/scrape")]
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok().content_type("text/plain;").body(body),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_metrics);
    cfg.service(metric_detail);
    cfg.service(scrape_metrics);
}
