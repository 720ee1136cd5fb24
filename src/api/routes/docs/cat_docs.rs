//! OpenAPI documentation for the cat endpoints.
//!
//! The `doc_*` functions only carry `#[utoipa::path]` metadata; the real
//! handlers live in `api::routes::cat`.
use crate::models::{ApiResponse, CatCreateRequest, CatResponse};

/// Retrieves a single cat by id.
#[utoipa::path(
    get,
    path = "/api/cat/single/{cat_id}",
    tag = "Cats",
    operation_id = "getCat",
    params(
        ("cat_id" = i64, Path, description = "Cat ID"),
        ("Authorization" = Option<String>, Header, description = "Authorization token (not enforced)")
    ),
    responses(
        (status = 200, description = "Cat retrieved successfully", body = CatResponse),
        (
            status = 400,
            description = "Cat ID is not a number",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid path parameter: invalid digit found in string"
            })
        ),
        (
            status = 404,
            description = "Cat not found",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Cat with ID 1 not found"
            })
        ),
        (status = 500, description = "Internal Server Error", body = ApiResponse<String>)
    )
)]
#[allow(dead_code)]
fn doc_get_cat() {}

/// Creates a new cat. The id is assigned by the server.
#[utoipa::path(
    post,
    path = "/api/cat/new",
    tag = "Cats",
    operation_id = "createCat",
    params(
        ("Authorization" = Option<String>, Header, description = "Authorization token (not enforced)")
    ),
    request_body = CatCreateRequest,
    responses(
        (status = 200, description = "Cat created successfully", body = CatResponse),
        (
            status = 400,
            description = "Malformed body or invalid cat",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid cat record: name is required"
            })
        ),
        (
            status = 409,
            description = "An identical cat already exists",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "A cat with the same name, birth date, owner and favorite food already exists"
            })
        ),
        (status = 500, description = "Internal Server Error", body = ApiResponse<String>)
    )
)]
#[allow(dead_code)]
fn doc_create_cat() {}

/// Deletes a cat. Absent or malformed ids succeed without effect.
#[utoipa::path(
    delete,
    path = "/api/cat/delete/{cat_id}",
    tag = "Cats",
    operation_id = "deleteCat",
    params(
        ("cat_id" = String, Path, description = "Cat ID"),
        ("Authorization" = Option<String>, Header, description = "Authorization token (not enforced)")
    ),
    responses(
        (status = 200, description = "Cat deleted or already absent"),
        (status = 500, description = "Internal Server Error", body = ApiResponse<String>)
    )
)]
#[allow(dead_code)]
fn doc_delete_cat() {}

/// Lists all cats ordered by id.
#[utoipa::path(
    get,
    path = "/api/cat/list",
    tag = "Cats",
    operation_id = "listCats",
    params(
        ("Authorization" = Option<String>, Header, description = "Authorization token (not enforced)")
    ),
    responses(
        (status = 200, description = "Cats retrieved successfully", body = Vec<CatResponse>),
        (status = 500, description = "Internal Server Error", body = ApiResponse<String>)
    )
)]
#[allow(dead_code)]
fn doc_list_cats() {}
