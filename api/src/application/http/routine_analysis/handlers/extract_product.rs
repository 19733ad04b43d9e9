use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinsafe_core::domain::routine_analysis::{
    entities::ExtractedProduct, helpers::resolve_model_output, ports::RoutineAnalysisService,
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
pub struct ExtractProductResponse {
    pub data: ExtractedProduct,
}

#[utoipa::path(
    post,
    path = "/product-extraction",
    tag = "routine-analysis",
    summary = "Reconcile a product label extraction",
    description = "Turns a model's reading of a product label into the product form shape, joining the key ingredients with commas.",
    responses(
        (status = 200, body = ExtractProductResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = ModelOutputRequest
)]
pub async fn extract_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ModelOutputRequest>,
) -> Result<Response<ExtractProductResponse>, ApiError> {
    let raw = resolve_model_output(payload.raw).map_err(ApiError::from)?;
    let product = state.service.extract_product(raw).map_err(ApiError::from)?;

    Ok(Response::OK(ExtractProductResponse { data: product }))
}
