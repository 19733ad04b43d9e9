use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::entities::ProductId;

/// An unordered pair of ingredient-name fragments that are risky to combine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConflictRule {
    pub a: String,
    pub b: String,
    /// Message shown instead of the generic warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConflictRule {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn message(&self, first: &str, second: &str) -> String {
        match &self.reason {
            Some(reason) => reason.clone(),
            None => format!("{first} and {second} may cause irritation or reduce effectiveness."),
        }
    }
}

/// One side of a conflicting pair: the product and the rule term it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictParty {
    pub product_id: ProductId,
    pub product_name: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPair {
    pub first: ConflictParty,
    pub second: ConflictParty,
    /// Position of the matching rule in the rule table.
    pub rule_index: usize,
    pub message: String,
}

impl ConflictPair {
    pub fn involves(&self, id: &ProductId) -> bool {
        let key = id.key();
        self.first.product_id.key() == key || self.second.product_id.key() == key
    }
}

/// Conflicts found among the products of one routine slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConflictReport {
    pub count: usize,
    pub pairs: Vec<ConflictPair>,
}

impl ConflictReport {
    pub fn new(pairs: Vec<ConflictPair>) -> Self {
        Self {
            count: pairs.len(),
            pairs,
        }
    }

    pub fn has_conflicts(&self) -> bool {
        self.count > 0
    }

    pub fn for_product(&self, id: &ProductId) -> Vec<&ConflictPair> {
        self.pairs.iter().filter(|pair| pair.involves(id)).collect()
    }

    /// First warning to show on a product's card, if it conflicts with anything.
    pub fn warning_for(&self, id: &ProductId) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.involves(id))
            .map(|pair| pair.message.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoutineConflictReport {
    pub morning: ConflictReport,
    pub evening: ConflictReport,
    pub weekly: ConflictReport,
    pub total: usize,
}

impl RoutineConflictReport {
    pub fn new(morning: ConflictReport, evening: ConflictReport, weekly: ConflictReport) -> Self {
        let total = morning.count + evening.count + weekly.count;
        Self {
            morning,
            evening,
            weekly,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: i64, ingredient: &str) -> ConflictParty {
        ConflictParty {
            product_id: ProductId::from(id),
            product_name: format!("Product {id}"),
            ingredient: ingredient.to_string(),
        }
    }

    #[test]
    fn test_rule_message_defaults_to_generic_warning() {
        let rule = ConflictRule::new("Vitamin C", "Retinol");

        assert_eq!(
            rule.message("Vitamin C", "Retinol"),
            "Vitamin C and Retinol may cause irritation or reduce effectiveness."
        );
    }

    #[test]
    fn test_rule_message_prefers_reason() {
        let rule = ConflictRule::new("Retinol", "AHA").with_reason("Alternate nights.");

        assert_eq!(rule.message("Retinol", "AHA"), "Alternate nights.");
    }

    #[test]
    fn test_report_lookups_by_product() {
        let report = ConflictReport::new(vec![ConflictPair {
            first: party(1, "Vitamin C"),
            second: party(2, "Retinol"),
            rule_index: 0,
            message: "warning".to_string(),
        }]);

        assert_eq!(report.count, 1);
        assert_eq!(report.for_product(&ProductId::from("2")).len(), 1);
        assert_eq!(report.warning_for(&ProductId::from(1)), Some("warning"));
        assert_eq!(report.warning_for(&ProductId::from(3)), None);
    }
}
