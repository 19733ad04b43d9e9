use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    routine_analysis::{
        entities::{
            AnalysisResult, AssessmentResult, CompatibilityVerdict, DermaScanResult,
            ExtractedProduct, OptimizationPlan,
        },
        value_objects::ReconcileAnalysisInput,
    },
};

/// Service trait for turning model output into display-ready values
#[cfg_attr(test, mockall::automock)]
pub trait RoutineAnalysisService: Send + Sync {
    /// Defaults the analysis tree and merges per-product results into the user's products
    fn reconcile_analysis(
        &self,
        input: ReconcileAnalysisInput,
    ) -> Result<AnalysisResult, CoreError>;

    /// Defaults an assessment analysis, keeping the products the model proposed
    fn reconcile_assessment(&self, raw: Value) -> Result<AssessmentResult, CoreError>;

    fn reconcile_compatibility(&self, raw: Value) -> Result<CompatibilityVerdict, CoreError>;

    fn reconcile_optimization(&self, raw: Value) -> Result<OptimizationPlan, CoreError>;

    /// Reads a product-label extraction into the product form shape
    fn extract_product(&self, raw: Value) -> Result<ExtractedProduct, CoreError>;

    fn reconcile_derma_scan(&self, raw: Value) -> Result<DermaScanResult, CoreError>;
}
