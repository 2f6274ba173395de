use axum::{extract::State, Json};

use humisense_core::Reading;

use crate::app_state::AppState;
use crate::http::ApiError;

/// `GET /latest`: most recent reading from the configured source.
pub async fn latest(State(app): State<AppState>) -> Result<Json<Reading>, ApiError> {
    let source = app.source();
    match source.latest().await {
        Ok(reading) => Ok(Json(reading)),
        Err(e) => {
            let code = e.client_code().as_str();
            app.metrics()
                .source_errors
                .inc(&[("source", source.kind()), ("code", code)]);
            tracing::warn!(source = source.kind(), code, error = %e, "reading source failed");
            Err(e.into())
        }
    }
}
