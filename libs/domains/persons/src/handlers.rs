use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{errors::ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PersonResult;
use crate::models::{CreatePerson, Person, UpdatePerson};
use crate::repository::PersonRepository;
use crate::service::PersonService;

/// OpenAPI documentation for the Persons API
#[derive(OpenApi)]
#[openapi(
    paths(list_persons, create_person, get_person, update_person, delete_person),
    components(schemas(Person, CreatePerson, UpdatePerson, ErrorResponse)),
    tags(
        (name = "Persons", description = "Person management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the persons router with all HTTP endpoints
pub fn router<R: PersonRepository + 'static>(service: PersonService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_persons).post(create_person))
        .route(
            "/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(shared_service)
}

/// List all persons
#[utoipa::path(
    get,
    path = "",
    tag = "Persons",
    responses(
        (status = 200, description = "List of persons", body = Vec<Person>)
    )
)]
async fn list_persons<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
) -> PersonResult<Json<Vec<Person>>> {
    let persons = service.find_all().await?;
    Ok(Json(persons))
}

/// Get a person by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Persons",
    params(
        ("id" = i64, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "Person not found", body = ErrorResponse)
    )
)]
async fn get_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<i64>,
) -> PersonResult<Json<Person>> {
    let person = service.get_person(id).await?;
    Ok(Json(person))
}

/// Create a new person
#[utoipa::path(
    post,
    path = "",
    tag = "Persons",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created successfully", body = Person),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
async fn create_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePerson>,
) -> PersonResult<impl IntoResponse> {
    let person = service.create_person(input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Update an existing person
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Persons",
    params(
        ("id" = i64, Path, description = "Person id")
    ),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated successfully", body = Person),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse)
    )
)]
async fn update_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UpdatePerson>,
) -> PersonResult<Json<Person>> {
    let person = service.update_person(id, input).await?;
    Ok(Json(person))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Persons",
    params(
        ("id" = i64, Path, description = "Person id")
    ),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found", body = ErrorResponse)
    )
)]
async fn delete_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<i64>,
) -> PersonResult<StatusCode> {
    service.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
