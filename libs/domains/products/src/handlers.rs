use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{errors::ErrorResponse, PagedResponse, ValidatedJson};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, ListProductsQuery, Product, ProductCategory, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_product_by_sku,
        update_product,
        delete_product,
        update_stock,
    ),
    components(schemas(
        Product,
        CreateProduct,
        UpdateProduct,
        ProductCategory,
        PagedResponse<Product>,
        ErrorResponse,
    )),
    tags(
        (name = "Products", description = "Product management endpoints (PostgreSQL)")
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
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/stock", patch(update_stock))
        .route("/sku/{sku}", get(get_product_by_sku))
        .with_state(shared_service)
}

/// List products with pagination, sorting and optional filters
///
/// A non-blank `name` or a `category` filter short-circuits pagination:
/// the filtered list becomes the page content and its length the total.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Page of products", body = PagedResponse<Product>),
        (status = 400, description = "Invalid filter input", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ListProductsQuery>,
) -> ProductResult<Json<PagedResponse<Product>>> {
    let (products, total_elements) = match (&query.name, query.category) {
        (Some(name), _) if !name.trim().is_empty() => {
            let products = service.find_by_name(name).await?;
            let total = products.len() as u64;
            (products, total)
        }
        (_, Some(category)) => {
            let products = service.find_by_category(category).await?;
            let total = products.len() as u64;
            (products, total)
        }
        _ => {
            let products = service
                .list(query.page, query.size, query.sort, query.asc)
                .await?;
            let total = service.count().await?;
            (products, total)
        }
    };

    Ok(Json(PagedResponse::of(
        products,
        total_elements,
        query.page,
        query.size,
    )))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Get a product by SKU
#[utoipa::path(
    get,
    path = "/sku/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Product SKU")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product_by_sku<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(sku): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service
        .find_by_sku(&sku)
        .await?
        .ok_or(crate::error::ProductError::SkuNotFound(sku))?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Validation failed or duplicate SKU", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Validation failed or duplicate SKU", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deactivated"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stock adjustment query parameter
#[derive(Debug, Deserialize, IntoParams)]
pub struct StockQuery {
    /// Units to add (positive) or remove (negative)
    pub quantity: i32,
}

/// Adjust a product's stock
#[utoipa::path(
    patch,
    path = "/{id}/stock",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id"),
        StockQuery
    ),
    responses(
        (status = 200, description = "Stock updated", body = Product),
        (status = 400, description = "Stock would become negative", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    Query(query): Query<StockQuery>,
) -> ProductResult<Json<Product>> {
    let product = service.update_stock(id, query.quantity).await?;
    Ok(Json(product))
}
