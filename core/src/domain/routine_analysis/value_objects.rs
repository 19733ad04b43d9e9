use serde_json::Value;

use crate::domain::product::entities::RoutineProducts;

#[derive(Debug, Clone)]
pub struct ReconcileAnalysisInput {
    /// The model's parsed analysis object
    pub raw: Value,
    /// The user's products the analysis was requested for
    pub routine: RoutineProducts,
}
