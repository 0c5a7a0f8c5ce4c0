//! Persons Domain
//!
//! This module provides a complete domain implementation for managing persons
//! held in an in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_persons::{handlers, InMemoryPersonRepository, PersonService};
//!
//! # async fn example() {
//! let repository = InMemoryPersonRepository::new();
//! let service = PersonService::new(repository);
//! service.seed_sample_data().await.ok();
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{PersonError, PersonResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryPersonRepository;
pub use models::{CreatePerson, Person, UpdatePerson};
pub use repository::PersonRepository;
pub use service::PersonService;
