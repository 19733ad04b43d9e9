use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::AssessmentResult, helpers::resolve_model_output, ports::RoutineAnalysisService,
};
use utoipa::ToSchema;

use crate::application::http::{
    routine_analysis::validators::ModelOutputRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReconcileAssessmentResponse {
    pub data: AssessmentResult,
}

#[utoipa::path(
    post,
    path = "/assessment",
    tag = "routine-analysis",
    summary = "Reconcile an assessment analysis",
    description = "Fills every section of an analysis built from a skin assessment and returns the products the model proposed, grouped into a routine.",
    responses(
        (status = 200, body = ReconcileAssessmentResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ModelOutputRequest
)]
pub async fn reconcile_assessment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ModelOutputRequest>,
) -> Result<Response<ReconcileAssessmentResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;
    let result = state
        .service
        .reconcile_assessment(raw)
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReconcileAssessmentResponse { data: result }))
}
