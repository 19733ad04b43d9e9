use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::conflict::{entities::RoutineConflictReport, ports::ConflictService};
use utoipa::ToSchema;

use crate::application::http::{
    conflict::validators::DetectRoutineConflictsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DetectRoutineConflictsResponse {
    pub data: RoutineConflictReport,
}

#[utoipa::path(
    post,
    path = "/conflicts/all",
    tag = "conflict",
    summary = "Detect conflicts across a routine",
    description = "Runs conflict detection on the morning, evening and weekly slots independently.",
    responses(
        (status = 200, body = DetectRoutineConflictsResponse),
        (status = 400, body = ErrorResponse)
    ),
    request_body = DetectRoutineConflictsRequest
)]
pub async fn detect_routine_conflicts(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DetectRoutineConflictsRequest>,
) -> Result<Response<DetectRoutineConflictsResponse>, ApiError> {
    let report = state.service.detect_routine_conflicts(&payload.routine);

    Ok(Response::OK(DetectRoutineConflictsResponse {
        data: report,
    }))
}
