//! CRUD handlers shared by every catalog entity

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, put},
};
use serde::de::DeserializeOwned;

use crate::domain::{
    CatalogRepository, DomainError, Entity, ErrorCode, ErrorName, ErrorSignal, WriteOutcome,
};

type Repo<E> = Arc<dyn CatalogRepository<E>>;

fn invalid_format(message: String) -> DomainError {
    ErrorSignal::new(ErrorName::InvalidDataFormat, ErrorCode::BadRequest, message).into()
}

fn query_key<K>(key: Result<Query<K>, QueryRejection>) -> Result<K, DomainError> {
    key.map(|Query(key)| key)
        .map_err(|rejection| invalid_format(rejection.body_text()))
}

pub async fn list<E: Entity>(State(repo): State<Repo<E>>) -> Result<Json<Vec<E>>, DomainError> {
    Ok(Json(repo.find().await?))
}

pub async fn get_one<E>(
    State(repo): State<Repo<E>>,
    key: Result<Query<E::Key>, QueryRejection>,
) -> Result<Json<E>, DomainError>
where
    E: Entity,
    E::Key: DeserializeOwned,
{
    Ok(Json(repo.find_one(query_key(key)?).await?))
}

pub async fn create<E>(
    State(repo): State<Repo<E>>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteOutcome>), DomainError>
where
    E: Entity,
    E::Input: DeserializeOwned,
{
    let Json(input) = payload.map_err(|rejection| invalid_format(rejection.body_text()))?;
    let outcome = repo.create(input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

// A request without a JSON body reaches the repository as `None`.
pub async fn update<E>(
    State(repo): State<Repo<E>>,
    Path(id): Path<i32>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<Json<WriteOutcome>, DomainError>
where
    E: Entity,
    E::Input: DeserializeOwned,
{
    let patch = match payload {
        Ok(Json(input)) => Some(input),
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(invalid_format(rejection.body_text())),
    };
    Ok(Json(repo.update(id, patch).await?))
}

pub async fn delete<E>(
    State(repo): State<Repo<E>>,
    key: Result<Query<E::Key>, QueryRejection>,
) -> Result<Json<WriteOutcome>, DomainError>
where
    E: Entity,
    E::Key: DeserializeOwned,
{
    Ok(Json(repo.delete(query_key(key)?).await?))
}

/// Routes for one entity, meant to be nested under its collection path.
pub fn routes<E>(repo: Repo<E>) -> Router
where
    E: Entity,
    E::Input: DeserializeOwned,
    E::Key: DeserializeOwned,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>).delete(delete::<E>))
        .route("/one", get(get_one::<E>))
        .route("/:id", put(update::<E>))
        .with_state(repo)
}
