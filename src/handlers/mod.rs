use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tokio::task; // Import tokio::task for spawn_blocking
use tracing::{debug, error};

use crate::db::models::Entity;
use crate::db::repositories::Repository;
use crate::events::common::{convert_address_to_hex_string, parse_address};

pub mod positions;
pub mod repayments;

pub type ApiError = (StatusCode, String);

/// Looks up one entity by id. Ids are matched in lowercase hex.
pub(crate) async fn fetch_by_id<E: Entity + Serialize>(
    repo: Arc<dyn Repository<E>>,
    id: String,
) -> Result<Json<E>, ApiError> {
    debug!("Fetching {} {}", E::NAME, id);
    let key = id.to_lowercase();

    let result = task::spawn_blocking(move || repo.find(&key)).await;

    match result {
        Ok(Ok(Some(entity))) => Ok(Json(entity)),
        Ok(Ok(None)) => Err((StatusCode::NOT_FOUND, format!("{} {} not found", E::NAME, id))),
        Ok(Err(db_err)) => {
            error!("Database error fetching {} {}: {}", E::NAME, id, db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
        Err(join_err) => {
            error!("Task join error fetching {} {}: {}", E::NAME, id, join_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to execute database query".to_string()))
        }
    }
}

/// Lists every entity recorded for `user`, oldest block first.
pub(crate) async fn fetch_by_user<E: Entity + Serialize>(
    repo: Arc<dyn Repository<E>>,
    user: String,
) -> Result<Json<Vec<E>>, ApiError> {
    let address = parse_address(&user)
        .map(convert_address_to_hex_string)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid user address {}: {}", user, e)))?;
    debug!("Fetching {} entities for user {}", E::NAME, address);

    let result = task::spawn_blocking(move || repo.find_by_user(&address)).await;

    match result {
        Ok(Ok(entities)) => Ok(Json(entities)),
        Ok(Err(db_err)) => {
            error!("Database error fetching {} for {}: {}", E::NAME, user, db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
        Err(join_err) => {
            error!("Task join error fetching {} for {}: {}", E::NAME, user, join_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to execute database query".to_string()))
        }
    }
}
