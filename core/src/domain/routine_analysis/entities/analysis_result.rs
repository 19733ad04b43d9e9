use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{
    product::entities::{Product, RoutineProducts},
    routine_analysis::defaults::{Defaulted, field, text_or},
};

pub const UNRATED: &str = "N/A";

/// Reconciled routine analysis. Every section is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: OverallScore,
    /// Keyed by metric name, e.g. "Effectiveness" or "Safety", in the model's order.
    pub metrics: IndexMap<String, Metric>,
    pub morning_routine: RoutineAnalysis,
    pub evening_routine: RoutineAnalysis,
    pub weekly_routine: RoutineAnalysis,
    pub detailed_ingredient_analysis: Vec<IngredientAnalysis>,
    pub ingredient_compatibility: Vec<IngredientCompatibility>,
    #[schema(value_type = Vec<Object>)]
    pub product_recommendations: Vec<Map<String, Value>>,
}

/// Analysis of an assessment, where the model chose the products itself.
///
/// `routine` lists the products of the three sections, grouped the way the
/// app stores a routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResult {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub routine: RoutineProducts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    /// 0-100
    pub score: f64,
    pub rating: String,
    pub improvement: String,
    pub insights: Vec<Insight>,
}

impl Default for OverallScore {
    fn default() -> Self {
        Self::defaulted(&Value::Null)
    }
}

impl Defaulted for OverallScore {
    fn defaulted(value: &Value) -> Self {
        Self {
            score: f64::defaulted(field(value, "score")),
            rating: text_or(field(value, "rating"), UNRATED),
            improvement: String::defaulted(field(value, "improvement")),
            insights: Vec::defaulted(field(value, "insights")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Insight {
    pub text: String,
    /// Icon name understood by the display layer.
    pub icon: String,
    /// "pro", "suggestion" or "warning".
    #[serde(rename = "type")]
    pub kind: String,
}

impl Defaulted for Insight {
    fn defaulted(value: &Value) -> Self {
        Self {
            text: String::defaulted(field(value, "text")),
            icon: String::defaulted(field(value, "icon")),
            kind: String::defaulted(field(value, "type")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Metric {
    pub score: f64,
    pub rating: String,
    pub explanation: String,
}

impl Default for Metric {
    fn default() -> Self {
        Self::defaulted(&Value::Null)
    }
}

impl Defaulted for Metric {
    fn defaulted(value: &Value) -> Self {
        Self {
            score: f64::defaulted(field(value, "score")),
            rating: text_or(field(value, "rating"), UNRATED),
            explanation: String::defaulted(field(value, "explanation")),
        }
    }
}

/// One routine slot as analysed. `products` holds the user's records with the
/// model's per-product overlay applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoutineAnalysis {
    pub score: f64,
    pub analysis: String,
    pub products: Vec<Product>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub name: String,
    pub purpose: String,
    pub strength: String,
    /// Names of the products containing this ingredient.
    pub products: Vec<String>,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    pub evidence: Evidence,
}

impl Defaulted for IngredientAnalysis {
    fn defaulted(value: &Value) -> Self {
        Self {
            name: String::defaulted(field(value, "name")),
            purpose: String::defaulted(field(value, "purpose")),
            strength: String::defaulted(field(value, "strength")),
            products: Vec::defaulted(field(value, "products")),
            suggestions: Vec::defaulted(field(value, "suggestions")),
            warnings: Vec::defaulted(field(value, "warnings")),
            evidence: Evidence::defaulted(field(value, "evidence")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Evidence {
    pub summary: String,
    pub url: String,
}

impl Defaulted for Evidence {
    fn defaulted(value: &Value) -> Self {
        Self {
            summary: String::defaulted(field(value, "summary")),
            url: String::defaulted(field(value, "url")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCompatibility {
    pub ingredient_a: String,
    pub ingredient_b: String,
    pub compatible: bool,
    pub reason: String,
}

impl Defaulted for IngredientCompatibility {
    fn defaulted(value: &Value) -> Self {
        Self {
            ingredient_a: String::defaulted(field(value, "ingredientA")),
            ingredient_b: String::defaulted(field(value, "ingredientB")),
            compatible: bool::defaulted(field(value, "compatible")),
            reason: String::defaulted(field(value, "reason")),
        }
    }
}
