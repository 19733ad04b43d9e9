use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Reads a value of the expected schema out of loosely-typed model output.
///
/// Implementations never fail: a missing or wrong-shaped branch turns into the
/// type's default, recursively, so the result always has every declared field.
pub trait Defaulted: Sized {
    fn defaulted(value: &Value) -> Self;

    /// Array element form. Returning `None` drops an element of the wrong shape
    /// instead of padding the array with an all-default entry.
    fn element(value: &Value) -> Option<Self> {
        value.is_object().then(|| Self::defaulted(value))
    }
}

/// Member `key` of `value`, or `Null` when `value` is not an object or lacks it.
pub fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    static NULL: Value = Value::Null;
    value.get(key).unwrap_or(&NULL)
}

/// String leaf with a non-empty default, e.g. `"N/A"` for ratings.
pub fn text_or(value: &Value, default: &str) -> String {
    value.as_str().unwrap_or(default).to_string()
}

impl Defaulted for String {
    fn defaulted(value: &Value) -> Self {
        value.as_str().map(str::to_string).unwrap_or_default()
    }

    fn element(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Defaulted for f64 {
    fn defaulted(value: &Value) -> Self {
        Self::element(value).unwrap_or_default()
    }

    /// Numbers, or strings holding one (`"85"`); models quote scores now and then.
    fn element(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}

impl Defaulted for bool {
    fn defaulted(value: &Value) -> Self {
        value.as_bool().unwrap_or_default()
    }

    fn element(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<T: Defaulted> Defaulted for Vec<T> {
    fn defaulted(value: &Value) -> Self {
        value
            .as_array()
            .map(|items| items.iter().filter_map(T::element).collect())
            .unwrap_or_default()
    }

    fn element(value: &Value) -> Option<Self> {
        value.is_array().then(|| Self::defaulted(value))
    }
}

/// Keyed sections such as metrics. Members keep the order the model wrote them in.
impl<T: Defaulted> Defaulted for IndexMap<String, T> {
    fn defaulted(value: &Value) -> Self {
        value
            .as_object()
            .map(|members| {
                members
                    .iter()
                    .filter_map(|(key, member)| {
                        T::element(member).map(|parsed| (key.clone(), parsed))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Opaque objects the core passes through without interpreting.
impl Defaulted for Map<String, Value> {
    fn defaulted(value: &Value) -> Self {
        value.as_object().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaves_fall_back_to_defaults() {
        assert_eq!(String::defaulted(&json!(12)), "");
        assert_eq!(f64::defaulted(&json!("high")), 0.0);
        assert_eq!(f64::defaulted(&json!(" 72 ")), 72.0);
        assert!(!bool::defaulted(&json!("yes")));
        assert_eq!(text_or(&json!(null), "N/A"), "N/A");
    }

    #[test]
    fn test_arrays_drop_wrong_shaped_elements() {
        let names: Vec<String> = Vec::defaulted(&json!(["Retinol", 4, null, "Niacinamide"]));
        let objects: Vec<Map<String, Value>> = Vec::defaulted(&json!([{"a": 1}, "text", [1]]));
        let not_a_list: Vec<String> = Vec::defaulted(&json!({"not": "a list"}));

        assert_eq!(names, vec!["Retinol", "Niacinamide"]);
        assert_eq!(objects.len(), 1);
        assert!(not_a_list.is_empty());
    }

    #[test]
    fn test_field_reads_through_non_objects() {
        assert_eq!(field(&json!({"a": 1}), "a"), &json!(1));
        assert_eq!(field(&json!({"a": 1}), "b"), &Value::Null);
        assert_eq!(field(&json!("text"), "a"), &Value::Null);
    }

    #[test]
    fn test_keyed_members_keep_input_order() {
        let ranks: IndexMap<String, f64> =
            IndexMap::defaulted(&json!({"zeta": 1, "alpha": "2", "mid": null, "beta": 3}));

        assert_eq!(
            ranks.keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "beta"]
        );
    }
}
