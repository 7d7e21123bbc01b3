use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::{fetch_by_id, fetch_by_user, ApiError};
use crate::router::AppState;

// Handler for GET /v0/repaid/:id
pub async fn get_repaid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_id(state.repos.repaid.clone(), id).await
}

// Handler for GET /v0/users/:user/repaid
pub async fn get_user_repayments(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    fetch_by_user(state.repos.repaid.clone(), user).await
}
