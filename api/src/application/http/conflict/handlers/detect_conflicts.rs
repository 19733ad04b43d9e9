use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::conflict::{
    entities::ConflictReport, ports::ConflictService, value_objects::DetectConflictsInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    conflict::validators::DetectConflictsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DetectConflictsResponse {
    pub data: ConflictReport,
}

#[utoipa::path(
    post,
    path = "/conflicts",
    tag = "conflict",
    summary = "Detect ingredient conflicts",
    description = "Pairs every two products of one routine slot against the conflict rule table. Uses the configured table unless the request carries its own.",
    responses(
        (status = 200, body = DetectConflictsResponse),
        (status = 400, body = ErrorResponse)
    ),
    request_body = DetectConflictsRequest
)]
pub async fn detect_conflicts(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DetectConflictsRequest>,
) -> Result<Response<DetectConflictsResponse>, ApiError> {
    if let Some(rules) = &payload.rules {
        rules
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let report = state.service.detect_conflicts(DetectConflictsInput {
        products: payload.products,
        rules: payload.rules,
    });

    Ok(Response::OK(DetectConflictsResponse { data: report }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::application::http::test_support::test_server;

    use super::*;

    #[tokio::test]
    async fn test_detects_conflict_with_configured_rules() {
        let response = test_server()
            .post("/routines/conflicts")
            .json(&json!({
                "products": [
                    {"id": 1, "name": "Serum A", "ingredients": "Vitamin C, Hyaluronic Acid"},
                    {"id": 2, "name": "Serum B", "ingredients": ["Retinol"]}
                ]
            }))
            .await;

        response.assert_status_ok();
        let body: DetectConflictsResponse = response.json();
        assert_eq!(body.data.count, 1);
        assert_eq!(body.data.pairs[0].first.ingredient, "Vitamin C");
        assert_eq!(body.data.pairs[0].second.ingredient, "Retinol");
    }

    #[tokio::test]
    async fn test_request_rules_replace_configured_table() {
        let response = test_server()
            .post("/routines/conflicts")
            .json(&json!({
                "products": [
                    {"id": 1, "name": "Serum A", "ingredients": "Vitamin C"},
                    {"id": 2, "name": "Serum B", "ingredients": "Retinol"}
                ],
                "rules": {"rules": [{"a": "Copper Peptides", "b": "Vitamin C"}]}
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<DetectConflictsResponse>().data.count, 0);
    }

    #[tokio::test]
    async fn test_invalid_request_rules_are_rejected() {
        let response = test_server()
            .post("/routines/conflicts")
            .json(&json!({
                "products": [],
                "rules": {"rules": [{"a": "", "b": "AHA"}]}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
