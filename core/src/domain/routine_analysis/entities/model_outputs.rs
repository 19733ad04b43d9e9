use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{
    product::{
        entities::{Product, ProductId},
        value_objects::normalize_value,
    },
    routine_analysis::{
        defaults::{Defaulted, field, text_or},
        entities::Insight,
    },
};

pub const NO_COMPATIBILITY_MESSAGE: &str = "No analysis message was provided.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Caution,
    Avoid,
    #[default]
    Unknown,
}

impl Defaulted for CompatibilityLevel {
    fn defaulted(value: &Value) -> Self {
        match value.as_str().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("excellent") => Self::Excellent,
            Some("good") => Self::Good,
            Some("caution") => Self::Caution,
            Some("avoid") => Self::Avoid,
            _ => Self::Unknown,
        }
    }
}

/// Verdict on whether two ingredients can be used together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityVerdict {
    pub compatibility: CompatibilityLevel,
    pub message: String,
    pub recommendations: Vec<String>,
}

impl Defaulted for CompatibilityVerdict {
    fn defaulted(value: &Value) -> Self {
        Self {
            compatibility: CompatibilityLevel::defaulted(field(value, "compatibility")),
            message: match field(value, "message").as_str() {
                Some(message) if !message.trim().is_empty() => message.to_string(),
                _ => NO_COMPATIBILITY_MESSAGE.to_string(),
            },
            recommendations: Vec::defaulted(field(value, "recommendations")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptimizationPlan {
    pub suggestions: Vec<Suggestion>,
}

impl Defaulted for OptimizationPlan {
    fn defaulted(value: &Value) -> Self {
        Self {
            suggestions: Vec::defaulted(field(value, "suggestions")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Suggestion {
    pub icon: String,
    pub title: String,
    /// e.g. "Product Addition", "Routine Timing"
    pub category: String,
    pub description: String,
    pub details: String,
}

impl Defaulted for Suggestion {
    fn defaulted(value: &Value) -> Self {
        Self {
            icon: String::defaulted(field(value, "icon")),
            title: String::defaulted(field(value, "title")),
            category: String::defaulted(field(value, "category")),
            description: String::defaulted(field(value, "description")),
            details: String::defaulted(field(value, "details")),
        }
    }
}

/// Product details read off a label photo, shaped like a product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedProduct {
    pub brand: String,
    pub name: String,
    pub category: String,
    /// Comma separated, as typed into the product form.
    pub ingredients: String,
}

impl ExtractedProduct {
    pub fn into_product(self, id: impl Into<ProductId>) -> Product {
        Product::new(id, self.name)
            .with_brand(self.brand)
            .with_category(self.category)
            .with_ingredients(self.ingredients.as_str())
    }
}

impl Defaulted for ExtractedProduct {
    fn defaulted(value: &Value) -> Self {
        Self {
            brand: text_or(field(value, "brand"), ""),
            name: text_or(field(value, "name"), ""),
            category: text_or(field(value, "category"), ""),
            ingredients: normalize_value(field(value, "keyIngredients")).join(", "),
        }
    }
}

const DERMA_SCAN_KEYS: [&str; 4] = [
    "keyInsights",
    "analysis",
    "recommendations",
    "concernAreas",
];

/// Visual skin analysis of a face photo.
///
/// The four list and section fields are always present. Everything else the
/// model reports (`skinHealth`, `skinAge`, ...) is kept in `extra` as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DermaScanResult {
    pub key_insights: Vec<Insight>,
    /// Named sections such as "Hydration & Texture" or "skinType", each shaped differently.
    #[schema(value_type = Object)]
    pub analysis: Map<String, Value>,
    pub recommendations: Vec<ScanRecommendation>,
    pub concern_areas: Vec<ConcernArea>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Defaulted for DermaScanResult {
    fn defaulted(value: &Value) -> Self {
        Self {
            key_insights: Vec::defaulted(field(value, "keyInsights")),
            analysis: Map::defaulted(field(value, "analysis")),
            recommendations: Vec::defaulted(field(value, "recommendations")),
            concern_areas: Vec::defaulted(field(value, "concernAreas")),
            extra: value
                .as_object()
                .into_iter()
                .flatten()
                .filter(|(key, _)| !DERMA_SCAN_KEYS.contains(&key.as_str()))
                .map(|(key, member)| (key.clone(), member.clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecommendation {
    pub title: String,
    pub description: String,
}

impl Defaulted for ScanRecommendation {
    fn defaulted(value: &Value) -> Self {
        Self {
            title: String::defaulted(field(value, "title")),
            description: String::defaulted(field(value, "description")),
        }
    }
}

/// A concern located on the face, as percentages of its width and height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConcernArea {
    pub x: f64,
    pub y: f64,
    pub concern: String,
}

impl Defaulted for ConcernArea {
    fn defaulted(value: &Value) -> Self {
        Self {
            x: f64::defaulted(field(value, "x")),
            y: f64::defaulted(field(value, "y")),
            concern: String::defaulted(field(value, "concern")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compatibility_level_is_lenient_about_case() {
        assert_eq!(
            CompatibilityLevel::defaulted(&json!(" Caution ")),
            CompatibilityLevel::Caution
        );
        assert_eq!(
            CompatibilityLevel::defaulted(&json!("risky")),
            CompatibilityLevel::Unknown
        );
        assert_eq!(
            CompatibilityLevel::defaulted(&json!(null)),
            CompatibilityLevel::Unknown
        );
    }

    #[test]
    fn test_verdict_defaults_message_and_recommendations() {
        let verdict =
            CompatibilityVerdict::defaulted(&json!({"compatibility": "avoid", "message": ""}));

        assert_eq!(verdict.compatibility, CompatibilityLevel::Avoid);
        assert_eq!(verdict.message, NO_COMPATIBILITY_MESSAGE);
        assert!(verdict.recommendations.is_empty());
    }

    #[test]
    fn test_extracted_product_joins_key_ingredients() {
        let extracted = ExtractedProduct::defaulted(&json!({
            "brand": "CeraVe",
            "name": "PM Lotion",
            "keyIngredients": ["Niacinamide", " Ceramides ", ""]
        }));

        assert_eq!(extracted.category, "");
        assert_eq!(extracted.ingredients, "Niacinamide, Ceramides");

        let product = extracted.into_product("new");
        assert_eq!(product.name, "PM Lotion");
        assert_eq!(product.normalized_ingredients().len(), 2);
    }

    #[test]
    fn test_derma_scan_defaults_sections_and_keeps_other_keys() {
        let scan = DermaScanResult::defaulted(&json!({
            "skinHealth": 78,
            "skinAge": 31,
            "concernAreas": [{"x": 42, "y": "18", "concern": "Forehead Wrinkle"}, "cheek"]
        }));

        assert!(scan.key_insights.is_empty());
        assert!(scan.analysis.is_empty());
        assert!(scan.recommendations.is_empty());
        assert_eq!(scan.concern_areas.len(), 1);
        assert_eq!(scan.concern_areas[0].y, 18.0);
        assert_eq!(
            serde_json::to_value(&scan).unwrap(),
            json!({
                "keyInsights": [],
                "analysis": {},
                "recommendations": [],
                "concernAreas": [{"x": 42.0, "y": 18.0, "concern": "Forehead Wrinkle"}],
                "skinHealth": 78,
                "skinAge": 31
            })
        );
    }
}
