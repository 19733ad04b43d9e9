use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    product::entities::{Product, RoutineProducts, RoutineSlot},
    routine_analysis::{
        defaults::{Defaulted, field},
        entities::{
            AnalysisResult, AssessmentResult, CompatibilityVerdict, DermaScanResult,
            ExtractedProduct, OptimizationPlan, OverallScore, RoutineAnalysis,
            recommended_product,
        },
        helpers::merge_products,
        ports::RoutineAnalysisService,
        value_objects::ReconcileAnalysisInput,
    },
};

fn require_object(raw: &Value, what: &str) -> Result<(), CoreError> {
    if raw.is_object() {
        Ok(())
    } else {
        Err(CoreError::MalformedInput(format!(
            "expected {what} to be a JSON object, got {}",
            kind_of(raw)
        )))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Defaults the analysis tree. `products` turns a section's raw `products`
/// array into the product list shown for that slot.
fn defaulted_analysis(
    raw: &Value,
    products: impl Fn(RoutineSlot, &Value) -> Vec<Product>,
) -> AnalysisResult {
    let section = |slot: RoutineSlot, key: &str| {
        let section = field(raw, key);
        RoutineAnalysis {
            score: f64::defaulted(field(section, "score")),
            analysis: String::defaulted(field(section, "analysis")),
            products: products(slot, field(section, "products")),
            insights: Vec::defaulted(field(section, "insights")),
        }
    };

    AnalysisResult {
        overall_score: OverallScore::defaulted(field(raw, "overallScore")),
        metrics: IndexMap::defaulted(field(raw, "metrics")),
        morning_routine: section(RoutineSlot::Morning, "morningRoutine"),
        evening_routine: section(RoutineSlot::Evening, "eveningRoutine"),
        weekly_routine: section(RoutineSlot::Weekly, "weeklyRoutine"),
        detailed_ingredient_analysis: Vec::defaulted(field(raw, "detailedIngredientAnalysis")),
        ingredient_compatibility: Vec::defaulted(field(raw, "ingredientCompatibility")),
        product_recommendations: Vec::defaulted(field(raw, "productRecommendations")),
    }
}

/// Fills every section of a model's analysis and merges its per-product
/// results into the user's products.
///
/// Only a non-object `raw` is rejected. Missing or wrong-typed branches below
/// the root become their defaults, so reconciling a previous result again
/// returns it unchanged.
pub fn reconcile(raw: &Value, routine: &RoutineProducts) -> Result<AnalysisResult, CoreError> {
    require_object(raw, "the analysis")?;

    let result = defaulted_analysis(raw, |slot, entries| {
        merge_products(routine.slot(slot), entries)
    });

    debug!(
        metrics = result.metrics.len(),
        ingredients = result.detailed_ingredient_analysis.len(),
        "analysis reconciled"
    );

    Ok(result)
}

/// Reconciles the analysis of an assessment, where there is no user routine
/// to merge into.
///
/// Each section keeps the products the model proposed, minus entries without
/// a usable id, and `routine` collects them per slot.
pub fn reconcile_assessment(raw: &Value) -> Result<AssessmentResult, CoreError> {
    require_object(raw, "the assessment analysis")?;

    let analysis = defaulted_analysis(raw, |_, entries| {
        entries
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(recommended_product)
            .collect()
    });
    let routine = RoutineProducts {
        morning: analysis.morning_routine.products.clone(),
        evening: analysis.evening_routine.products.clone(),
        weekly: analysis.weekly_routine.products.clone(),
    };

    debug!(products = routine.len(), "assessment reconciled");

    Ok(AssessmentResult { analysis, routine })
}

pub fn reconcile_compatibility(raw: &Value) -> Result<CompatibilityVerdict, CoreError> {
    require_object(raw, "the compatibility verdict")?;
    Ok(CompatibilityVerdict::defaulted(raw))
}

pub fn reconcile_optimization(raw: &Value) -> Result<OptimizationPlan, CoreError> {
    require_object(raw, "the optimization plan")?;
    Ok(OptimizationPlan::defaulted(raw))
}

pub fn reconcile_product_extraction(raw: &Value) -> Result<ExtractedProduct, CoreError> {
    require_object(raw, "the extracted product")?;
    Ok(ExtractedProduct::defaulted(raw))
}

pub fn reconcile_derma_scan(raw: &Value) -> Result<DermaScanResult, CoreError> {
    require_object(raw, "the derma scan")?;
    Ok(DermaScanResult::defaulted(raw))
}

impl RoutineAnalysisService for Service {
    #[instrument(skip_all, fields(products = input.routine.len()))]
    fn reconcile_analysis(
        &self,
        input: ReconcileAnalysisInput,
    ) -> Result<AnalysisResult, CoreError> {
        reconcile(&input.raw, &input.routine)
    }

    #[instrument(skip_all)]
    fn reconcile_assessment(&self, raw: Value) -> Result<AssessmentResult, CoreError> {
        reconcile_assessment(&raw)
    }

    #[instrument(skip_all)]
    fn reconcile_compatibility(&self, raw: Value) -> Result<CompatibilityVerdict, CoreError> {
        reconcile_compatibility(&raw)
    }

    #[instrument(skip_all)]
    fn reconcile_optimization(&self, raw: Value) -> Result<OptimizationPlan, CoreError> {
        reconcile_optimization(&raw)
    }

    #[instrument(skip_all)]
    fn extract_product(&self, raw: Value) -> Result<ExtractedProduct, CoreError> {
        reconcile_product_extraction(&raw)
    }

    #[instrument(skip_all)]
    fn reconcile_derma_scan(&self, raw: Value) -> Result<DermaScanResult, CoreError> {
        reconcile_derma_scan(&raw)
    }
}
