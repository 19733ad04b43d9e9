use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::product::entities::IngredientField;

/// Canonical ingredient list: trimmed, non-empty names in their original order and case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<IngredientList> for IngredientField {
    fn from(list: IngredientList) -> Self {
        IngredientField::List(list.0)
    }
}

/// Turns a stored ingredient field into the canonical list.
///
/// Text is split on `,`; list elements are taken as-is. Either way pieces are
/// trimmed and empty ones dropped. Case is left alone.
pub fn normalize(field: &IngredientField) -> IngredientList {
    match field {
        IngredientField::Absent | IngredientField::Unrecognized(_) => IngredientList::default(),
        IngredientField::Delimited(raw) => collect_trimmed(raw.split(',')),
        IngredientField::List(items) => collect_trimmed(items.iter().map(String::as_str)),
    }
}

/// Normalizes a raw JSON value, for callers holding model output rather than a product record.
pub fn normalize_value(value: &Value) -> IngredientList {
    normalize(&IngredientField::from(value.clone()))
}

fn collect_trimmed<'a>(pieces: impl Iterator<Item = &'a str>) -> IngredientList {
    IngredientList(
        pieces
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(list: &IngredientList) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_normalize_splits_and_trims_delimited_text() {
        let raw = " Vitamin C (L-Ascorbic Acid) ,, Hyaluronic Acid , ";

        let list = normalize(&IngredientField::from(raw));

        assert_eq!(
            names(&list),
            vec!["Vitamin C (L-Ascorbic Acid)", "Hyaluronic Acid"]
        );
    }

    #[test]
    fn test_normalize_trims_list_elements_without_splitting() {
        let items = vec!["  Retinol 0.5% ", "", "Water, Glycerin"];

        let list = normalize(&IngredientField::from(items));

        assert_eq!(names(&list), vec!["Retinol 0.5%", "Water, Glycerin"]);
    }

    #[test]
    fn test_normalize_keeps_case() {
        let list = normalize(&IngredientField::from("niacinamide, ZINC PCA"));

        assert_eq!(names(&list), vec!["niacinamide", "ZINC PCA"]);
    }

    #[test]
    fn test_normalize_empty_and_absent_inputs() {
        assert!(normalize(&IngredientField::Absent).is_empty());
        assert!(normalize(&IngredientField::from("")).is_empty());
        assert!(normalize(&IngredientField::from("  , ,")).is_empty());
        assert!(normalize(&IngredientField::List(vec![])).is_empty());
    }

    #[test]
    fn test_normalize_value_coerces_other_shapes_to_empty() {
        for value in [json!(null), json!(42), json!(true), json!({"a": "Retinol"})] {
            assert!(normalize_value(&value).is_empty());
        }
    }

    #[test]
    fn test_normalize_value_skips_non_string_list_elements() {
        let list = normalize_value(&json!(["Retinol", 5, null, " Squalane "]));

        assert_eq!(names(&list), vec!["Retinol", "Squalane"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            IngredientField::from("a , b,,c"),
            IngredientField::from(vec![" x ", "", "y, z"]),
            IngredientField::Absent,
            IngredientField::Unrecognized(json!(3)),
        ];

        for input in inputs {
            let once = normalize(&input);
            let twice = normalize(&IngredientField::from(once.clone()));
            assert_eq!(once, twice);
        }
    }
}
