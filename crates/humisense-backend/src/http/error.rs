use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use humisense_core::SensorError;

/// `SensorError` rendered as `{ ok: false, code, msg }` with a mapped status.
#[derive(Debug)]
pub struct ApiError(pub SensorError);

impl From<SensorError> for ApiError {
    fn from(e: SensorError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({
            "ok": false,
            "code": code.as_str(),
            "msg": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
