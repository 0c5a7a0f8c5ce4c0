//! Synthetic load-generation endpoints
//!
//! These fabricate large in-memory payloads for serialization and
//! throughput experiments; nothing here touches a store.

use axum::{extract::Query, routing::get, Json, Router};
use chrono::Utc;
use domain_persons::Person;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi};

const DEFAULT_PERSON_COUNT: usize = 10_000;
const LARGE_OBJECT_INTS: usize = 2_500_000;

const FIRST_NAMES: [&str; 10] = [
    "Juan", "María", "Pedro", "Ana", "Luis", "Sofía", "Carlos", "Laura", "Miguel", "Elena",
];
const LAST_NAMES: [&str; 10] = [
    "García",
    "Rodríguez",
    "López",
    "Martínez",
    "González",
    "Pérez",
    "Sánchez",
    "Fernández",
    "Ramírez",
    "Torres",
];

/// OpenAPI documentation for the load-generation endpoints
#[derive(OpenApi)]
#[openapi(
    paths(generate_persons, large_object),
    components(schemas(Person, LargeObject)),
    tags(
        (name = "Performance", description = "Synthetic load-generation endpoints")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router {
    Router::new()
        .route("/persons", get(generate_persons))
        .route("/large-object", get(large_object))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CountQuery {
    /// Number of persons to fabricate (default 10000)
    pub count: Option<usize>,
}

/// Fabricate a list of random persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "Performance",
    params(CountQuery),
    responses(
        (status = 200, description = "Fabricated persons", body = Vec<Person>)
    )
)]
pub async fn generate_persons(Query(query): Query<CountQuery>) -> Json<Vec<Person>> {
    let size = query
        .count
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_PERSON_COUNT);

    let mut rng = rand::rng();
    let mut persons = Vec::with_capacity(size);

    for _ in 0..size {
        let age: i32 = rng.random_range(18..98);
        persons.push(Person {
            id: None,
            name: FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())].to_string(),
            last_name: LAST_NAMES[rng.random_range(0..LAST_NAMES.len())].to_string(),
            age,
            height_m: 1.50 + rng.random::<f64>() * 0.50,
            weight_kg: 50.0 + rng.random::<f64>() * 50.0,
            birth_date: Utc::now() - chrono::Duration::days(age as i64 * 365),
        });
    }

    Json(persons)
}

/// A deliberately oversized payload
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LargeObject {
    pub id: i64,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub data: Vec<i32>,
}

/// Fabricate a single large object (~2.5M integers)
#[utoipa::path(
    get,
    path = "/large-object",
    tag = "Performance",
    responses(
        (status = 200, description = "Large fabricated object", body = LargeObject)
    )
)]
pub async fn large_object() -> Json<LargeObject> {
    let mut rng = rand::rng();
    let data: Vec<i32> = (0..LARGE_OBJECT_INTS).map(|_| rng.random()).collect();

    Json(LargeObject {
        id: rng.random(),
        timestamp: Utc::now().timestamp_millis(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_persons_respects_count() {
        let Json(persons) = generate_persons(Query(CountQuery { count: Some(5) })).await;
        assert_eq!(persons.len(), 5);
        for person in &persons {
            assert!(person.age >= 18 && person.age < 98);
            assert!(person.height_m >= 1.50 && person.height_m < 2.01);
        }
    }

    #[tokio::test]
    async fn test_generate_persons_zero_falls_back_to_default() {
        let Json(persons) = generate_persons(Query(CountQuery { count: Some(0) })).await;
        assert_eq!(persons.len(), DEFAULT_PERSON_COUNT);
    }
}
