use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::{fetch_by_id, fetch_by_user, ApiError};
use crate::router::AppState;

// Handler for GET /v0/position-created/:id
pub async fn get_position_created(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_id(state.repos.position_created.clone(), id).await
}

// Handler for GET /v0/position-closed/:id
pub async fn get_position_closed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_id(state.repos.position_closed.clone(), id).await
}

// Handler for GET /v0/users/:user/position-created
pub async fn get_user_positions_created(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_user(state.repos.position_created.clone(), user).await
}

// Handler for GET /v0/users/:user/position-closed
pub async fn get_user_positions_closed(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_user(state.repos.position_closed.clone(), user).await
}
