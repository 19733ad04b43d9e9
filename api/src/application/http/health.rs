use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(live))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn live() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "UP".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health/live"), get(live))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::test_support::test_server;

    #[tokio::test]
    async fn test_live_reports_up() {
        let response = test_server().get("/health/live").await;

        response.assert_status_ok();
        assert_eq!(response.json::<HealthResponse>().status, "UP");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = test_server().get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let document: serde_json::Value = response.json();
        assert!(document["paths"]["/routines/conflicts"].is_object());
        assert!(document["paths"]["/analysis/reconcile"].is_object());
        assert!(document["paths"]["/analysis/assessment"].is_object());
    }
}
