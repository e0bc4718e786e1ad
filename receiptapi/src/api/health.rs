use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct Heartbeat {
    pub status: String,
}

/// Liveness endpoint, always reports `ok` while the server is accepting
/// requests.
///
pub async fn endpoint() -> Json<Heartbeat> {
    Json(Heartbeat {
        status: "ok".to_string(),
    })
}
