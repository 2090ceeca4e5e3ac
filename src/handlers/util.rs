use crate::models::PingResponse;

use axum::Json;

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::default())
}
