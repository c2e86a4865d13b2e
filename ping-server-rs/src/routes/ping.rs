use crate::elapsed::format_elapsed;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(ping))
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// GET /api/ping - records a check-in and reports the time since the last one.
///
/// The store is read first, then the current check-in is appended as a
/// separate best-effort step. Neither store failure changes the 200 response;
/// a failed read only degrades the message to the cold-start empty string.
async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let now = Utc::now();

    let message = match state.store.latest().await {
        Ok(Some(event)) => format_elapsed(now.signed_duration_since(event.occurred_at)),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!("Couldn't read the latest ping: {e}");
            String::new()
        }
    };

    if let Err(e) = state.store.append(now).await {
        tracing::warn!("Couldn't insert the ping: {e}");
    }

    Json(PingResponse { message })
}
