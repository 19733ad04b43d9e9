use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::product::value_objects::{IngredientList, normalize};

/// Identifier assigned to a product when it is added to a routine.
///
/// The app stores either timestamps or strings here, and model output echoes
/// them back in either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Join key between user records and model output, so `7` and `"7"` name the same product.
    pub fn key(&self) -> String {
        match self {
            ProductId::Number(n) => n.to_string(),
            ProductId::Text(s) => s.trim().to_string(),
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_i64))
                .map(ProductId::Number),
            Value::String(s) if !s.trim().is_empty() => Some(ProductId::Text(s.clone())),
            _ => None,
        }
    }
}

/// Whole floats that fit in an `i64`. Larger ones would saturate on conversion.
fn whole_i64(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&f)).then_some(f as i64)
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// Ingredient field as stored on a product record.
///
/// Only [`normalize`] reads it; everything downstream works on [`IngredientList`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IngredientField {
    #[default]
    Absent,
    /// Comma-delimited text, as typed by the user or returned by product extraction.
    Delimited(String),
    List(Vec<String>),
    /// Any other JSON value. Kept so the record serializes back unchanged.
    Unrecognized(Value),
}

impl IngredientField {
    pub fn is_absent(&self) -> bool {
        matches!(self, IngredientField::Absent)
    }
}

impl From<Value> for IngredientField {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => IngredientField::Absent,
            Value::String(s) => IngredientField::Delimited(s),
            Value::Array(items) => IngredientField::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => IngredientField::Unrecognized(other),
        }
    }
}

impl From<&str> for IngredientField {
    fn from(value: &str) -> Self {
        IngredientField::Delimited(value.to_string())
    }
}

impl From<Vec<&str>> for IngredientField {
    fn from(value: Vec<&str>) -> Self {
        IngredientField::List(value.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for IngredientField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IngredientField::Absent => serializer.serialize_none(),
            IngredientField::Delimited(raw) => raw.serialize(serializer),
            IngredientField::List(items) => items.serialize(serializer),
            IngredientField::Unrecognized(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IngredientField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(IngredientField::from)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A user-owned skincare item.
///
/// `score`, `rating` and `issues` are overlay fields written by analysis
/// reconciliation; they are left out of the serialized form until set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "IngredientField::is_absent")]
    #[schema(value_type = Object)]
    pub ingredients: IngredientField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    /// Any other field on the record (`usage`, `image`, ...), carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            ingredients: IngredientField::Absent,
            frequency: None,
            order: None,
            notes: None,
            score: None,
            rating: None,
            issues: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<IngredientField>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn normalized_ingredients(&self) -> IngredientList {
        normalize(&self.ingredients)
    }

    pub fn has_overlay(&self) -> bool {
        self.score.is_some() || self.rating.is_some() || self.issues.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoutineSlot {
    Morning,
    Evening,
    Weekly,
}

impl RoutineSlot {
    pub const ALL: [RoutineSlot; 3] = [
        RoutineSlot::Morning,
        RoutineSlot::Evening,
        RoutineSlot::Weekly,
    ];
}

impl fmt::Display for RoutineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoutineSlot::Morning => "morning",
            RoutineSlot::Evening => "evening",
            RoutineSlot::Weekly => "weekly",
        };
        f.write_str(label)
    }
}

/// The user's products, grouped by the slot they are used in.
///
/// Serialized under the app's field names; the short slot names are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoutineProducts {
    #[serde(default, rename = "morningProducts", alias = "morning")]
    pub morning: Vec<Product>,
    #[serde(default, rename = "eveningProducts", alias = "evening")]
    pub evening: Vec<Product>,
    #[serde(default, rename = "weeklyTreatments", alias = "weekly")]
    pub weekly: Vec<Product>,
}

impl RoutineProducts {
    pub fn slot(&self, slot: RoutineSlot) -> &[Product] {
        match slot {
            RoutineSlot::Morning => &self.morning,
            RoutineSlot::Evening => &self.evening,
            RoutineSlot::Weekly => &self.weekly,
        }
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.evening.len() + self.weekly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
