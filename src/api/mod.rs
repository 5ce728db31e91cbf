use axum::Json;
use axum::extract::{Path, State};
use axum::{Router, http::StatusCode, routing::get};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{ScheduleGrid, TimetableSlot, VirtualSession};
use crate::services::ScheduleService;
use crate::state::AppState;

/// Envelope for the composed schedule. The stamp is response metadata; the
/// grid itself is a pure function of the upstream collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub fetched_at: String,
    pub grid: ScheduleGrid,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classes/{class_id}/schedule", get(class_schedule))
        .route("/classes/{class_id}/timetable", get(class_timetable))
        .route(
            "/classes/{class_id}/virtual-sessions",
            get(class_virtual_sessions),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Composed weekly grid. Fails soft: upstream trouble renders as empty cells,
/// never as an error status.
async fn class_schedule(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Json<ScheduleResponse> {
    let service = ScheduleService::new(state.platform.clone());
    let grid = service.class_schedule(&class_id).await;

    Json(ScheduleResponse {
        fetched_at: chrono::Utc::now().to_rfc3339(),
        grid,
    })
}

/// Raw timetable passthrough. Unlike the composed grid this surfaces upstream
/// failure to the caller.
async fn class_timetable(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<TimetableSlot>>, AppError> {
    let slots = state.platform.fetch_timetable(&class_id).await?;
    Ok(Json(slots))
}

async fn class_virtual_sessions(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<VirtualSession>>, AppError> {
    let sessions = state.platform.fetch_virtual_sessions(&class_id).await?;
    Ok(Json(sessions))
}
