use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError, product::entities::Product,
    routine_analysis::entities::ProductOverlay,
};

/// Joins a model's per-product entries onto the user's products by id.
///
/// The user's list decides which products exist and in what order. Entries
/// for unknown ids are dropped; products the model skipped come back as they
/// were. When the model repeats an id, its first entry is used.
pub fn merge_products(originals: &[Product], entries: &Value) -> Vec<Product> {
    let mut overlays: HashMap<String, ProductOverlay> = HashMap::new();
    for overlay in entries
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(ProductOverlay::from_entry)
    {
        overlays.entry(overlay.id.key()).or_insert(overlay);
    }

    let known: HashSet<String> = originals.iter().map(|product| product.id.key()).collect();
    let unknown = overlays.keys().filter(|key| !known.contains(*key)).count();
    if unknown > 0 {
        warn!(unknown, "ignoring model entries for unknown product ids");
    }

    originals
        .iter()
        .map(|product| match overlays.get(&product.id.key()) {
            Some(overlay) => overlay.apply(product),
            None => product.clone(),
        })
        .collect()
}

/// Removes a leading ```` ```json ```` (or bare ```` ``` ````) fence and a trailing ```` ``` ````.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parses the text a model returned into a JSON value.
pub fn parse_model_response(text: &str) -> Result<Value, CoreError> {
    serde_json::from_str(strip_code_fences(text)).map_err(|e| {
        error!("Failed to parse model response: {}", e);
        CoreError::UnparseableResponse(e.to_string())
    })
}

/// Accepts model output either already parsed or still as text.
pub fn resolve_model_output(raw: Value) -> Result<Value, CoreError> {
    match raw {
        Value::String(text) => parse_model_response(&text),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::entities::ProductId;
    use serde_json::json;

    fn originals() -> Vec<Product> {
        vec![
            Product::new(1, "X").with_brand("B"),
            Product::new("p2", "Y"),
        ]
    }

    #[test]
    fn test_merge_overlays_by_id_and_keeps_order() {
        let merged = merge_products(
            &originals(),
            &json!([{"id": "p2", "rating": "Fair"}, {"id": 1, "score": 8}]),
        );

        assert_eq!(merged[0].id, ProductId::from(1));
        assert_eq!(merged[0].brand, "B");
        assert_eq!(merged[0].score, Some(8.0));
        assert_eq!(merged[1].rating.as_deref(), Some("Fair"));
    }

    #[test]
    fn test_merge_matches_numeric_and_string_ids() {
        let merged = merge_products(&originals(), &json!([{"id": "1", "score": 6}]));

        assert_eq!(merged[0].score, Some(6.0));
    }

    #[test]
    fn test_merge_drops_unknown_ids_and_passes_through_skipped_products() {
        let merged = merge_products(&originals(), &json!([{"id": 99, "score": 1}]));

        assert_eq!(merged, originals());
        assert!(merged.iter().all(|product| !product.has_overlay()));
    }

    #[test]
    fn test_merge_uses_first_entry_for_repeated_id() {
        let merged = merge_products(
            &originals(),
            &json!([{"id": 1, "score": 3}, {"id": 1, "score": 9}]),
        );

        assert_eq!(merged[0].score, Some(3.0));
    }

    #[test]
    fn test_merge_without_entries_returns_originals() {
        assert_eq!(merge_products(&originals(), &Value::Null), originals());
        assert_eq!(merge_products(&originals(), &json!("none")), originals());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n[1]\n```  "), "[1]");
        assert_eq!(strip_code_fences("{}"), "{}");
    }

    #[test]
    fn test_parse_model_response() {
        assert_eq!(
            parse_model_response("```json\n{\"score\": 5}\n```").unwrap(),
            json!({"score": 5})
        );
        assert!(matches!(
            parse_model_response("Sorry, I cannot help with that."),
            Err(CoreError::UnparseableResponse(_))
        ));
    }

    #[test]
    fn test_resolve_model_output_only_parses_text() {
        assert_eq!(
            resolve_model_output(json!({"a": 1})).unwrap(),
            json!({"a": 1})
        );
        assert_eq!(
            resolve_model_output(json!("{\"a\": 1}")).unwrap(),
            json!({"a": 1})
        );
        assert_eq!(resolve_model_output(Value::Null).unwrap(), Value::Null);
    }
}
