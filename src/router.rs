use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::db::Repositories;
use crate::handlers::positions::{
    get_position_closed, get_position_created, get_user_positions_closed,
    get_user_positions_created,
};
use crate::handlers::repayments::{get_repaid, get_user_repayments};

// Define the application state struct
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
}

// Function to create the Axum router
pub fn create_router(repos: Repositories) -> Router {
    let app_state = AppState { repos };

    Router::new()
        .route("/v0/position-created/:id", get(get_position_created))
        .route("/v0/position-closed/:id", get(get_position_closed))
        .route("/v0/repaid/:id", get(get_repaid))
        .route("/v0/users/:user/position-created", get(get_user_positions_created))
        .route("/v0/users/:user/position-closed", get(get_user_positions_closed))
        .route("/v0/users/:user/repaid", get(get_user_repayments))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
