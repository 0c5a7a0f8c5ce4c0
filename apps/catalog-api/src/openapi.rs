//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Demonstration REST backend: persons (in-memory) and products (PostgreSQL)",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/persons", api = domain_persons::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/performance", api = crate::api::performance::ApiDoc)
    ),
    tags(
        (name = "Persons", description = "Person management endpoints"),
        (name = "Products", description = "Product management endpoints"),
        (name = "Performance", description = "Synthetic load-generation endpoints")
    )
)]
pub struct ApiDoc;
