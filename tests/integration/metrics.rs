//! Integration tests for request metrics collected on the API.
use actix_web::{http::StatusCode, test, web, App};
use cat_api::{
    api::routes::{configure_routes, metrics},
    metrics::middleware::MetricsMiddleware,
    models::AppState,
    repositories::CatRepositoryStorage,
};
use serde_json::json;
use std::sync::Arc;

#[actix_web::test]
async fn test_api_requests_are_counted() {
    let state = AppState::new(Arc::new(CatRepositoryStorage::new_in_memory()));
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .app_data(web::ThinData(state))
            .service(web::scope("/api").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/cat/new")
        .set_json(json!({ "name": "Mustache", "birthDate": "2021-04-01" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/cat/single/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let metrics_app = test::init_service(App::new().configure(metrics::init)).await;
    let req = test::TestRequest::get()
        .uri("/debug/metrics/scrape")
        .to_request();
    let body = test::call_and_read_body(&metrics_app, req).await;
    let output = String::from_utf8(body.to_vec()).unwrap();

    // Route patterns, not concrete ids, label the request counter.
    assert!(output.contains("endpoint=\"/api/cat/single/{cat_id}\""));
    assert!(output.contains("cat_operations_total"));
    assert!(output.contains("operation=\"create\""));
    assert!(output.contains("request_latency_seconds"));
}

#[actix_web::test]
async fn test_metric_names_are_listed() {
    let state = AppState::new(Arc::new(CatRepositoryStorage::new_in_memory()));
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .app_data(web::ThinData(state))
            .service(web::scope("/api").configure(configure_routes)),
    )
    .await;
    let req = test::TestRequest::get().uri("/api/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let metrics_app = test::init_service(App::new().configure(metrics::init)).await;
    let req = test::TestRequest::get().uri("/metrics").to_request();
    let names: Vec<String> = test::call_and_read_body_json(&metrics_app, req).await;

    assert!(names.iter().any(|n| n == "requests_total"));
    assert!(names.iter().any(|n| n == "raw_requests_total"));
}

#[actix_web::test]
async fn test_status_label_is_numeric_code() {
    let state = AppState::new(Arc::new(CatRepositoryStorage::new_in_memory()));
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .app_data(web::ThinData(state))
            .service(web::scope("/api").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/cat/single/424242")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let metrics_app = test::init_service(App::new().configure(metrics::init)).await;
    let req = test::TestRequest::get()
        .uri("/metrics/requests_total")
        .to_request();
    let body = test::call_and_read_body(&metrics_app, req).await;
    let output = String::from_utf8(body.to_vec()).unwrap();

    assert!(output.contains(
        "requests_total{endpoint=\"/api/cat/single/{cat_id}\",method=\"GET\",status=\"404\"}"
    ));
    assert!(!output.contains("Not Found"));
}
