//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the catalog HTTP services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with a uniform JSON shape
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`pagination`]**: Paged response envelope for list endpoints
//! - **[`server`]**: Router bootstrap, OpenAPI documentation, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod health;
pub mod pagination;
pub mod server;
pub mod shutdown;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export pagination envelope
pub use pagination::PagedResponse;

// Re-export server helpers
pub use server::{create_app, create_router};
pub use shutdown::shutdown_signal;
