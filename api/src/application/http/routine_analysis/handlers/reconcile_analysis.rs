use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::AnalysisResult, helpers::resolve_model_output, ports::RoutineAnalysisService,
    value_objects::ReconcileAnalysisInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    routine_analysis::validators::ReconcileAnalysisRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReconcileAnalysisResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/reconcile",
    tag = "routine-analysis",
    summary = "Reconcile a routine analysis",
    description = "Fills every section of a model's routine analysis with defaults and merges the per-product scores, ratings and issues into the user's products by id.",
    responses(
        (status = 200, body = ReconcileAnalysisResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ReconcileAnalysisRequest
)]
pub async fn reconcile_analysis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReconcileAnalysisRequest>,
) -> Result<Response<ReconcileAnalysisResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;

    let result = state
        .service
        .reconcile_analysis(ReconcileAnalysisInput {
            raw,
            routine: payload.routine,
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReconcileAnalysisResponse { data: result }))
}
