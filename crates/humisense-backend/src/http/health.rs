use axum::{extract::State, Json};

use humisense_core::Health;

use crate::app_state::AppState;

/// `GET /health`: unconditional liveness answer.
pub async fn health(State(app): State<AppState>) -> Json<Health> {
    Json(Health::now(app.cfg().server.service_name.as_str()))
}
