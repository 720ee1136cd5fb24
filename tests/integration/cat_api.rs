//! End-to-end tests of the cat HTTP API over the in-memory store.
use actix_web::{http::StatusCode, middleware::NormalizePath, test, web, App};
use cat_api::{
    api::routes::configure_routes,
    models::{ApiResponse, AppState, CatResponse},
    repositories::CatRepositoryStorage,
};
use serde_json::{json, Value};
use std::sync::Arc;

// Same wiring as the server, minus rate limiting.
macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(web::ThinData(AppState::new(Arc::new(
                    CatRepositoryStorage::new_in_memory(),
                ))))
                .service(web::scope("/api").configure(configure_routes)),
        )
    };
}

fn mustache() -> Value {
    json!({
        "name": "Mustache",
        "birthDate": "2021-04-01T17:24:06.667",
        "favoriteFood": "Chicken",
        "owner": "Amir"
    })
}

#[actix_web::test]
async fn test_create_get_delete_scenario() {
    let app = init_app!().await;

    let req = test::TestRequest::post()
        .uri("/api/cat/new/")
        .set_json(mustache())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: CatResponse = test::read_body_json(resp).await;
    assert_eq!(created.name, "Mustache");
    assert!(created.id > 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/cat/single/{}", created.id))
        .to_request();
    let fetched: CatResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cat/delete/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/cat/single/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.data.is_none());
    assert!(body.error.is_some());
}

#[actix_web::test]
async fn test_duplicate_create_conflicts() {
    let app = init_app!().await;

    let req = test::TestRequest::post()
        .uri("/api/cat/new")
        .set_json(mustache())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/cat/new")
        .set_json(mustache())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/cat/list/").to_request();
    let cats: Vec<CatResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cats.len(), 1);
}

#[actix_web::test]
async fn test_list_returns_all_created_in_id_order() {
    let app = init_app!().await;

    for name in ["Tom", "Felix", "Salem"] {
        let mut body = mustache();
        body["name"] = json!(name);
        let req = test::TestRequest::post()
            .uri("/api/cat/new")
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/cat/list").to_request();
    let cats: Vec<CatResponse> = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tom", "Felix", "Salem"]);
    assert!(cats.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[actix_web::test]
async fn test_empty_list() {
    let app = init_app!().await;

    let req = test::TestRequest::get().uri("/api/cat/list").to_request();
    let cats: Vec<CatResponse> = test::call_and_read_body_json(&app, req).await;

    assert!(cats.is_empty());
}

#[actix_web::test]
async fn test_invalid_payloads_are_bad_requests() {
    let app = init_app!().await;

    let cases = vec![
        json!({ "name": "", "birthDate": "2021-04-01" }),
        json!({ "name": "Mustache" }),
        json!({ "birthDate": "2021-04-01" }),
        json!({ "name": "<script>alert(1)</script>", "birthDate": "2021-04-01" }),
        json!({ "name": "$$$", "birthDate": "2021-04-01" }),
        json!({ "name": "a".repeat(31), "birthDate": "2021-04-01" }),
        json!({ "name": "Mustache", "birthDate": "2021-04-01", "owner": "o".repeat(31) }),
        json!({ "name": "Mustache", "birthDate": "2021-04-01", "favoriteFood": "<b>fish</b>" }),
        json!({ "name": "Mustache", "birthDate": "yesterday" }),
        json!({ "id": 5, "name": "Mustache", "birthDate": "2021-04-01" }),
    ];

    for case in cases {
        let req = test::TestRequest::post()
            .uri("/api/cat/new")
            .set_json(&case)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {}",
            case
        );
    }

    let req = test::TestRequest::get().uri("/api/cat/list").to_request();
    let cats: Vec<CatResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(cats.is_empty());
}

#[actix_web::test]
async fn test_malformed_ids() {
    let app = init_app!().await;

    let req = test::TestRequest::get()
        .uri("/api/cat/single/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri("/api/cat/delete/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/cat/single/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_absent_is_ok() {
    let app = init_app!().await;

    let req = test::TestRequest::delete()
        .uri("/api/cat/delete/12345")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_record_json_shape() {
    let app = init_app!().await;

    let req = test::TestRequest::post()
        .uri("/api/cat/new")
        .set_json(json!({ "name": "Mustache", "birthDate": "2021-04-01T17:24:06Z" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Mustache"));
    assert_eq!(body["birthDate"], json!("2021-04-01T17:24:06Z"));
    assert_eq!(body["favoriteFood"], Value::Null);
    assert_eq!(body["owner"], Value::Null);
}
