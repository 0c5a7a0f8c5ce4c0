//! API routes module

pub mod greeting;
pub mod health;
pub mod performance;

use axum::Router;
use domain_persons::{PersonRepository, PersonService};
use domain_products::{ProductRepository, ProductService};

use crate::state::AppState;

/// Create all API routes nested under `/api`
pub fn routes<PR, DR>(
    state: &AppState,
    persons: PersonService<PR>,
    products: ProductService<DR>,
) -> Router
where
    PR: PersonRepository + 'static,
    DR: ProductRepository + 'static,
{
    Router::new()
        .nest("/persons", domain_persons::handlers::router(persons))
        .nest("/products", domain_products::handlers::router(products))
        .nest("/performance", performance::router())
        .merge(health::router(state.clone()))
}
