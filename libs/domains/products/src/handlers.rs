//! HTTP handlers for Products API
//!
//! Every handler answers through [`Outcome`], so success and failure share
//! the same envelope. Single-product responses carry `data` as a
//! one-element array.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use axum_helpers::{
    errors::handlers::method_not_allowed,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    pagination::PaginationQuery,
    JsonBody, Outcome, Pagination, PaginationMeta,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::ProductError;
use crate::models::{Product, ProductInput, ProductPatch};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Success envelope for product endpoints (documentation only).
#[derive(Serialize, ToSchema)]
pub struct ProductsEnvelope {
    #[schema(example = 200)]
    pub status: u16,
    pub data: Vec<Product>,
    /// Present on list responses only
    pub pagination: Option<PaginationMeta>,
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, ProductPatch, PaginationMeta, ProductsEnvelope),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

fn parse_id(raw: String) -> Result<Uuid, ProductError> {
    Uuid::parse_str(&raw).map_err(|_| ProductError::InvalidId(raw))
}

/// List products, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductsEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Pagination(page): Pagination,
) -> Outcome<Vec<Product>> {
    match service.list_products(page).await {
        Ok((products, meta)) => Outcome::data(products).with_pagination(meta),
        Err(e) => e.into(),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductsEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(payload): JsonBody,
) -> Outcome<Vec<Product>> {
    let input = match service.schemas().input(&payload) {
        Ok(input) => input,
        Err(e) => return e.into(),
    };

    service.create_product(input).await.map_or_else(Outcome::from, |product| {
        Outcome::data(vec![product]).with_status(StatusCode::CREATED)
    })
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductsEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Outcome<Vec<Product>> {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    service
        .get_product(id)
        .await
        .map_or_else(Outcome::from, |product| Outcome::data(vec![product]))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductsEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Outcome<Vec<Product>> {
    let parsed = parse_id(id).and_then(|id| Ok((id, service.schemas().input(&payload)?)));
    let (id, input) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return e.into(),
    };

    service
        .update_product(id, input)
        .await
        .map_or_else(Outcome::from, |product| Outcome::data(vec![product]))
}

/// Update only the provided fields of a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = ProductsEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Outcome<Vec<Product>> {
    let parsed = parse_id(id).and_then(|id| Ok((id, service.schemas().patch(&payload)?)));
    let (id, patch) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return e.into(),
    };

    service
        .patch_product(id, patch)
        .await
        .map_or_else(Outcome::from, |product| Outcome::data(vec![product]))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Outcome<()> {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    service
        .delete_product(id)
        .await
        .map_or_else(Outcome::from, |()| Outcome::no_content())
}
