//! Handler tests for Products domain
//!
//! These drive the products router with `oneshot()` and check:
//! - envelope shape and HTTP status codes
//! - field rule messages in declaration order
//! - pagination resolution and metadata
//! - store failures surfacing as 500 envelopes
//!
//! Auth is exercised separately in `auth_pipeline_test.rs`.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn app_with(repository: InMemoryProductRepository) -> Router {
    Router::new().nest(
        "/products",
        handlers::router(ProductService::new(repository)),
    )
}

fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn messages(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect()
}

async fn seed(repository: &InMemoryProductRepository, count: usize) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let id = repository
            .create(ProductInput {
                name: format!("product-{i}"),
                description: String::new(),
                price: (i + 1) as f64,
            })
            .await
            .unwrap();
        ids.push(id);
    }
    ids
}

#[tokio::test]
async fn test_create_returns_201_with_single_item() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Desk lamp", "description": "LED", "price": 24.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], 201);
    assert!(body.get("errors").is_none());
    assert!(body.get("pagination").is_none());

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Desk lamp");
    assert_eq!(data[0]["price"], 24.5);
    assert!(Uuid::parse_str(data[0]["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_reports_every_violation_in_order() {
    let app = app();

    let (status, body) = send(&app, "POST", "/products", Some(json!({ "price": 0 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body.get("data").is_none());
    assert_eq!(messages(&body), ["name is required", "price is required"]);
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Lamp", "price": -3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), ["price must be greater than 0"]);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_without_content_type_still_decodes() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .body(Body::from(r#"{"name":"Kettle","price":35}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"][0]["name"], "Kettle");
}

#[tokio::test]
async fn test_get_returns_stored_product() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository);

    let (status, body) = send(&app, "GET", &format!("/products/{}", ids[0]), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": 200,
            "data": [{ "id": ids[0], "name": "product-0", "description": "", "price": 1.0 }]
        })
    );
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let app = app();

    let (status, body) = send(&app, "GET", &format!("/products/{}", Uuid::now_v7()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status": 404, "errors": [{ "message": "product not found" }] })
    );
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let app = app();

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/products/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(messages(&body), ["invalid product id"]);
    }
}

#[tokio::test]
async fn test_list_defaults_and_metadata() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, 3).await;
    let app = app_with(repository);

    let (status, body) = send(&app, "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["pagination"],
        json!({ "limit": 10, "offset": 0, "total": 3, "count": 3 })
    );
}

#[tokio::test]
async fn test_list_pages_through_products() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, 5).await;
    let app = app_with(repository);

    let (status, body) = send(&app, "GET", "/products?limit=2&offset=3", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["product-3", "product-4"]);
    assert_eq!(
        body["pagination"],
        json!({ "limit": 2, "offset": 3, "total": 5, "count": 2 })
    );
}

#[tokio::test]
async fn test_list_of_empty_store_has_empty_data() {
    let app = app();

    let (status, body) = send(&app, "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_list_rejects_bad_pagination() {
    let app = app();

    let (status, body) = send(&app, "GET", "/products?limit=101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        ["invalid limit parameter, limit must be in the range of [1, 100]"]
    );

    let (status, body) = send(&app, "GET", "/products?offset=-5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        ["invalid offset parameter, offset must be a non-negative integer"]
    );
}

#[tokio::test]
async fn test_put_replaces_product() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository.clone());

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/products/{}", ids[0]),
        Some(json!({ "name": "Lantern", "price": 40 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Lantern");
    assert_eq!(body["data"][0]["description"], "");
    assert_eq!(repository.get_by_id(ids[0]).await.unwrap().price, 40.0);
}

#[tokio::test]
async fn test_put_validates_before_lookup() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/products/{}", Uuid::now_v7()),
        Some(json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), ["name is required", "price is required"]);
}

#[tokio::test]
async fn test_patch_updates_only_given_fields() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/products/{}", ids[0]),
        Some(json!({ "price": 9.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "product-0");
    assert_eq!(body["data"][0]["price"], 9.5);
}

#[tokio::test]
async fn test_patch_without_fields_is_400() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository);

    let (status, body) = send(&app, "PATCH", &format!("/products/{}", ids[0]), Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), ["no fields to update"]);
}

#[tokio::test]
async fn test_patch_rejects_non_positive_price() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/products/{}", ids[0]),
        Some(json!({ "price": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(messages(&body), ["price must be greater than 0"]);
}

#[tokio::test]
async fn test_delete_returns_204_without_body() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 2).await;
    let app = app_with(repository);

    let (status, body) = send(&app, "DELETE", &format!("/products/{}", ids[0]), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/products/{}", ids[0]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let repository = InMemoryProductRepository::new();
    let ids = seed(&repository, 1).await;
    let app = app_with(repository);
    let uri = format!("/products/{}", ids[0]);

    assert_eq!(send(&app, "DELETE", &uri, None).await.0, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, "DELETE", &uri, None).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_is_405_envelope() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/products", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], 405);
    assert_eq!(
        messages(&body),
        ["the HTTP method is not allowed for this resource"]
    );
}

struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn list(&self, _: u32, _: u64) -> ProductResult<(Vec<Product>, u64)> {
        Err(ProductError::Store("connection refused".into()))
    }
    async fn get_by_id(&self, _: Uuid) -> ProductResult<Product> {
        Err(ProductError::Store("connection refused".into()))
    }
    async fn create(&self, _: ProductInput) -> ProductResult<Uuid> {
        Err(ProductError::Store("connection refused".into()))
    }
    async fn update(&self, _: Uuid, _: ProductInput) -> ProductResult<Product> {
        Err(ProductError::Store("connection refused".into()))
    }
    async fn delete(&self, _: Uuid) -> ProductResult<()> {
        Err(ProductError::Store("connection refused".into()))
    }
}

#[tokio::test]
async fn test_store_failure_is_500_with_store_message() {
    let app = Router::new().nest(
        "/products",
        handlers::router(ProductService::new(FailingRepository)),
    );

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": 500, "errors": [{ "message": "connection refused" }] })
    );

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Lamp", "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(messages(&body), ["connection refused"]);
}
