use serde::{Deserialize, Serialize};
use serde_json::Value;
use skinsafe_core::domain::product::entities::RoutineProducts;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::conflict::validators::validate_routine_size;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReconcileAnalysisRequest {
    /// The model output, parsed or as the raw text it returned
    #[schema(value_type = Object)]
    pub raw: Value,

    #[serde(default)]
    #[validate(custom(function = "validate_routine_size"))]
    pub routine: RoutineProducts,
}

/// Model output for the single-object reconcilers, parsed or as raw text.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ModelOutputRequest {
    #[schema(value_type = Object)]
    pub raw: Value,
}
