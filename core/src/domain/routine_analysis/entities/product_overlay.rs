use serde_json::Value;

use crate::domain::{
    product::entities::{Product, ProductId},
    routine_analysis::defaults::{Defaulted, field},
};

const PRODUCT_KEYS: [&str; 11] = [
    "id",
    "name",
    "brand",
    "category",
    "ingredients",
    "frequency",
    "order",
    "notes",
    "score",
    "rating",
    "issues",
];

/// The per-product fields a model entry may contribute. Anything else it sends is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOverlay {
    pub id: ProductId,
    pub score: Option<f64>,
    pub rating: Option<String>,
    pub issues: Option<Vec<String>>,
}

impl ProductOverlay {
    /// Reads one entry of a model's `products` array. Entries without a usable id are skipped.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        if !entry.is_object() {
            return None;
        }
        let id = ProductId::from_value(field(entry, "id"))?;

        Some(Self {
            id,
            score: f64::element(field(entry, "score")),
            rating: String::element(field(entry, "rating")),
            issues: Vec::<String>::element(field(entry, "issues")),
        })
    }

    /// A copy of `original` with the overlay fields this entry supplies.
    pub fn apply(&self, original: &Product) -> Product {
        let mut merged = original.clone();
        if let Some(score) = self.score {
            merged.score = Some(score);
        }
        if let Some(rating) = &self.rating {
            merged.rating = Some(rating.clone());
        }
        if let Some(issues) = &self.issues {
            merged.issues = Some(issues.clone());
        }
        merged
    }
}

/// Reads a product the model proposes rather than one the user owns.
///
/// Display fields come from the entry itself and its other keys (`usage`,
/// `tips`, ...) are carried in `extra`. Entries without a usable id are skipped.
pub fn recommended_product(entry: &Value) -> Option<Product> {
    let overlay = ProductOverlay::from_entry(entry)?;
    let present = |key: &str| Some(field(entry, key)).filter(|v| !v.is_null()).cloned();

    let mut product = Product::new(overlay.id.clone(), String::defaulted(field(entry, "name")))
        .with_brand(String::defaulted(field(entry, "brand")))
        .with_category(String::defaulted(field(entry, "category")))
        .with_ingredients(field(entry, "ingredients").clone());
    product.frequency = present("frequency");
    product.order = present("order");
    product.notes = present("notes");
    product.extra = entry
        .as_object()
        .into_iter()
        .flatten()
        .filter(|(key, _)| !PRODUCT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(overlay.apply(&product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_entry_keeps_only_overlay_keys() {
        let overlay = ProductOverlay::from_entry(&json!({
            "id": "7",
            "score": 8,
            "rating": "Good",
            "issues": ["Drying"],
            "name": "Renamed by model"
        }))
        .unwrap();

        assert_eq!(overlay.id, ProductId::from("7"));
        assert_eq!(overlay.score, Some(8.0));
        assert_eq!(overlay.rating.as_deref(), Some("Good"));
        assert_eq!(overlay.issues, Some(vec!["Drying".to_string()]));
    }

    #[test]
    fn test_from_entry_requires_an_id() {
        assert!(ProductOverlay::from_entry(&json!({"score": 5})).is_none());
        assert!(ProductOverlay::from_entry(&json!({"id": "  "})).is_none());
        assert!(ProductOverlay::from_entry(&json!("p1")).is_none());
    }

    #[test]
    fn test_apply_preserves_display_fields() {
        let original = Product::new(1, "X").with_brand("B");
        let overlay = ProductOverlay::from_entry(&json!({"id": 1, "score": 8})).unwrap();

        let merged = overlay.apply(&original);

        assert_eq!(merged.name, "X");
        assert_eq!(merged.brand, "B");
        assert_eq!(merged.score, Some(8.0));
        assert!(merged.rating.is_none());
        assert!(original.score.is_none());
    }

    #[test]
    fn test_wrong_typed_overlay_values_are_not_applied() {
        let overlay = ProductOverlay::from_entry(
            &json!({"id": 1, "score": "great", "rating": 4, "issues": "none"}),
        )
        .unwrap();

        assert!(!overlay.apply(&Product::new(1, "X")).has_overlay());
    }

    #[test]
    fn test_recommended_product_keeps_the_models_fields() {
        let product = recommended_product(&json!({
            "id": "rec-1",
            "name": "Gentle Cleanser",
            "category": "Cleanser",
            "ingredients": ["Glycerin", "Ceramides"],
            "usage": "AM/PM",
            "tips": "Massage for 60 seconds",
            "score": 9,
            "rating": "Excellent",
            "issues": []
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::from("rec-1"));
        assert_eq!(product.name, "Gentle Cleanser");
        assert_eq!(product.brand, "");
        assert_eq!(product.normalized_ingredients().len(), 2);
        assert_eq!(product.score, Some(9.0));
        assert_eq!(product.issues, Some(vec![]));
        assert_eq!(product.extra.get("usage"), Some(&json!("AM/PM")));
        assert!(!product.extra.contains_key("score"));
    }

    #[test]
    fn test_recommended_product_requires_an_id() {
        let without_id = json!({"name": "Gentle Cleanser", "score": 9});

        assert!(recommended_product(&without_id).is_none());
        assert!(recommended_product(&json!("Gentle Cleanser")).is_none());
    }
}
