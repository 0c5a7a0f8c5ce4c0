//! Plain-text greeting endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

async fn hello() -> &'static str {
    "Hello from Catalog API"
}

async fn custom_hello(State(greeting): State<String>, Path(name): Path<String>) -> String {
    format!("{} {}, welcome to the Catalog API", greeting, name)
}

pub fn router(greeting: String) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/hello/{name}", get(custom_hello))
        .with_state(greeting)
}
