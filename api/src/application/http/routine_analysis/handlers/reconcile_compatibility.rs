use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::CompatibilityVerdict, helpers::resolve_model_output, ports::RoutineAnalysisService,
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
pub struct ReconcileCompatibilityResponse {
    pub data: CompatibilityVerdict,
}

#[utoipa::path(
    post,
    path = "/compatibility",
    tag = "routine-analysis",
    summary = "Reconcile an ingredient compatibility verdict",
    responses(
        (status = 200, body = ReconcileCompatibilityResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ModelOutputRequest
)]
pub async fn reconcile_compatibility(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ModelOutputRequest>,
) -> Result<Response<ReconcileCompatibilityResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;
    let verdict = state
        .service
        .reconcile_compatibility(raw)
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReconcileCompatibilityResponse {
        data: verdict,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use skinsafe_core::domain::routine_analysis::entities::CompatibilityLevel;

    use crate::application::http::test_support::test_server;

    use super::*;

    #[tokio::test]
    async fn test_defaults_missing_fields() {
        let response = test_server()
            .post("/analysis/compatibility")
            .json(&json!({"raw": {"compatibility": "caution"}}))
            .await;

        response.assert_status_ok();
        let verdict = response.json::<ReconcileCompatibilityResponse>().data;
        assert_eq!(verdict.compatibility, CompatibilityLevel::Caution);
        assert_eq!(verdict.message, "No analysis message was provided.");
        assert!(verdict.recommendations.is_empty());
    }
}
