use crate::{
    api::routes::{docs::cat_docs, health, metrics},
    models,
};
use utoipa::OpenApi;

/// # OpenAPI Specification
///
/// Collects the route annotations of the cat service into one document.
/// Served through Swagger UI when enabled and written to disk by the
/// `generate_openapi` helper.
#[derive(OpenApi)]
#[openapi(
    tags(
      (name = "Cats", description = "Create, read, list and delete cat records. Each combination of name, birth date, owner and favorite food may be stored only once."),
      (name = "Metrics", description = "Prometheus metrics, served on the metrics port."),
      (name = "Health", description = "Liveness of the service.")
    ),
    info(description = "Cat record management API", version = "0.1.0", title = "Cat API", license(
        name = "MIT"
    )),
    paths(
        cat_docs::doc_get_cat,
        cat_docs::doc_create_cat,
        cat_docs::doc_delete_cat,
        cat_docs::doc_list_cats,
        health::health,
        metrics::list_metrics,
        metrics::metric_detail,
        metrics::scrape_metrics,
    ),
    components(schemas(
        models::CatResponse,
        models::CatCreateRequest,
        models::FieldViolation
    ))
)]
pub struct ApiDoc;
