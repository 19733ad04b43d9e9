use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::DermaScanResult, helpers::resolve_model_output, ports::RoutineAnalysisService,
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
pub struct ReconcileDermaScanResponse {
    pub data: DermaScanResult,
}

#[utoipa::path(
    post,
    path = "/derma-scan",
    tag = "routine-analysis",
    summary = "Reconcile a face photo analysis",
    responses(
        (status = 200, body = ReconcileDermaScanResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ModelOutputRequest
)]
pub async fn reconcile_derma_scan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ModelOutputRequest>,
) -> Result<Response<ReconcileDermaScanResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;
    let scan = state
        .service
        .reconcile_derma_scan(raw)
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReconcileDermaScanResponse { data: scan }))
}
