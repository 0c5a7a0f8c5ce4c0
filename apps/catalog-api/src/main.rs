//! Catalog API - demonstration REST backend

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_persons::{InMemoryPersonRepository, PersonService};
use domain_products::{PgProductRepository, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db =
        database::postgres::connect_from_config_with_retry(config.postgres.clone(), None).await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, "catalog-api").await?;

    // Persons live in memory; seed a couple of sample records
    let person_service = PersonService::new(InMemoryPersonRepository::new());
    person_service.seed_sample_data().await?;

    // Products are backed by the relational store
    let product_service = ProductService::new(PgProductRepository::new(db.clone()));

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state, person_service, product_service);
    let router = create_router::<openapi::ApiDoc>(api_routes)
        .merge(api::greeting::router(config.greeting.clone()));

    info!("Starting Catalog API on port {}", config.server.port);
    create_app(router, &config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
