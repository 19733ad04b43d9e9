use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::OptimizationPlan, helpers::resolve_model_output, ports::RoutineAnalysisService,
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
pub struct ReconcileOptimizationResponse {
    pub data: OptimizationPlan,
}

#[utoipa::path(
    post,
    path = "/optimization",
    tag = "routine-analysis",
    summary = "Reconcile routine optimization suggestions",
    responses(
        (status = 200, body = ReconcileOptimizationResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ModelOutputRequest
)]
pub async fn reconcile_optimization(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ModelOutputRequest>,
) -> Result<Response<ReconcileOptimizationResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;
    let plan = state
        .service
        .reconcile_optimization(raw)
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReconcileOptimizationResponse { data: plan }))
}
