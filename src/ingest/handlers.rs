use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument};

use crate::state::AppState;

use super::{
    dto::{IngestResponse, UserDataRequest},
    services::ingest_user_data,
};

pub fn ingest_routes() -> Router<AppState> {
    Router::new().route("/ingest", post(ingest))
}

/// POST /ingest
/// Storage failures come back as a `status: "error"` body with HTTP 200.
#[instrument(skip(state, payload))]
pub async fn ingest(
    State(state): State<AppState>,
    Json(payload): Json<UserDataRequest>,
) -> Json<IngestResponse> {
    match ingest_user_data(&state, &payload).await {
        Ok(saved) => {
            info!(id = saved.id, "user data stored");
            Json(IngestResponse::Success { data: saved })
        }
        Err(e) => {
            error!(error = %e, stage = e.stage(), "ingest failed");
            Json(IngestResponse::Error {
                message: e.to_string(),
            })
        }
    }
}
