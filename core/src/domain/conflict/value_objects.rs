use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, conflict::entities::ConflictRule,
    product::entities::Product,
};

/// Fragments shorter than this only match an ingredient name exactly.
pub const DEFAULT_MIN_FRAGMENT_LEN: usize = 3;

/// Extra spellings that should count as a rule term, e.g. "Ascorbic Acid" for "Vitamin C".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAlias {
    pub canonical: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl IngredientAlias {
    pub fn new(canonical: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.into(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The conflict vocabulary handed to the detector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConflictRuleSet {
    #[serde(default)]
    pub rules: Vec<ConflictRule>,
    #[serde(default)]
    pub aliases: Vec<IngredientAlias>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleEntry {
    Pair([String; 2]),
    Rule(ConflictRule),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleTableDocument {
    Rules(Vec<RuleEntry>),
    Table(ConflictRuleSet),
}

impl ConflictRuleSet {
    pub fn new(rules: Vec<ConflictRule>) -> Self {
        Self {
            rules,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<IngredientAlias>) -> Self {
        self.aliases = aliases;
        self
    }

    /// The table the routine editor has always warned with.
    pub fn builtin() -> Self {
        let pairs = [
            ("Vitamin C", "Retinol"),
            ("Vitamin C", "AHA"),
            ("Vitamin C", "BHA"),
            ("Vitamin C", "Niacinamide"),
            ("Retinol", "AHA"),
            ("Retinol", "BHA"),
            ("Retinol", "Benzoyl Peroxide"),
            ("AHA", "BHA"),
            ("Benzoyl Peroxide", "AHA"),
            ("Benzoyl Peroxide", "BHA"),
        ];

        let rules = pairs
            .iter()
            .map(|(a, b)| ConflictRule::new(*a, *b))
            .collect();
        let aliases = vec![
            IngredientAlias::new("Vitamin C", &["Ascorbic Acid"]),
            IngredientAlias::new("Retinol", &["Retinoid", "Retinal", "Retinyl"]),
            IngredientAlias::new("AHA", &["Glycolic Acid", "Lactic Acid", "Mandelic Acid"]),
            IngredientAlias::new("BHA", &["Salicylic Acid"]),
            IngredientAlias::new("Benzoyl Peroxide", &["Benzoyl"]),
        ];

        Self::new(rules).with_aliases(aliases)
    }

    /// Parses a rule table. Accepts the full `{ "rules": [...], "aliases": [...] }`
    /// document, or a bare list whose entries are rule objects or `[a, b]` pairs.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let document: RuleTableDocument = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidRuleTable(format!("unreadable rule table: {e}")))?;

        let table = match document {
            RuleTableDocument::Table(table) => table,
            RuleTableDocument::Rules(entries) => Self::new(
                entries
                    .into_iter()
                    .map(|entry| match entry {
                        RuleEntry::Rule(rule) => rule,
                        RuleEntry::Pair([a, b]) => ConflictRule::new(a, b),
                    })
                    .collect(),
            ),
        };

        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(index) = self
            .rules
            .iter()
            .position(|rule| rule.a.trim().is_empty() || rule.b.trim().is_empty())
        {
            return Err(CoreError::InvalidRuleTable(format!(
                "rule {index} has an empty ingredient term"
            )));
        }

        if let Some(alias) = self
            .aliases
            .iter()
            .find(|alias| alias.canonical.trim().is_empty())
        {
            return Err(CoreError::InvalidRuleTable(format!(
                "alias with synonyms {:?} has no canonical term",
                alias.synonyms
            )));
        }

        Ok(())
    }

    /// Synonyms registered for `term`, compared case-insensitively.
    pub fn synonyms_for<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.aliases
            .iter()
            .filter(move |alias| alias.canonical.trim().eq_ignore_ascii_case(term.trim()))
            .flat_map(|alias| alias.synonyms.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Containment only counts when the shorter side has at least this many characters.
    /// `0` reproduces plain two-way substring matching.
    pub min_fragment_len: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_fragment_len: DEFAULT_MIN_FRAGMENT_LEN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetectConflictsInput {
    pub products: Vec<Product>,
    /// Overrides the configured rule table for this call.
    pub rules: Option<ConflictRuleSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_matches_routine_editor_pairs() {
        let table = ConflictRuleSet::builtin();

        assert_eq!(table.rules.len(), 10);
        assert!(table.validate().is_ok());
        assert_eq!(
            table.synonyms_for("vitamin c").collect::<Vec<_>>(),
            vec!["Ascorbic Acid"]
        );
    }

    #[test]
    fn test_from_json_str_reads_full_document() {
        let table = ConflictRuleSet::from_json_str(
            r#"{
                "rules": [{
                    "a": "Copper Peptides",
                    "b": "Vitamin C",
                    "reason": "Copper oxidises ascorbic acid."
                }],
                "aliases": [{"canonical": "Vitamin C", "synonyms": ["Ascorbyl"]}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            table.rules[0].reason.as_deref(),
            Some("Copper oxidises ascorbic acid.")
        );
        assert_eq!(table.aliases[0].synonyms, vec!["Ascorbyl".to_string()]);
    }

    #[test]
    fn test_from_json_str_reads_bare_pair_list() {
        let raw = r#"[["Retinol", "AHA"], {"a": "AHA", "b": "BHA"}]"#;

        let table = ConflictRuleSet::from_json_str(raw).unwrap();

        assert_eq!(
            table.rules,
            vec![
                ConflictRule::new("Retinol", "AHA"),
                ConflictRule::new("AHA", "BHA"),
            ]
        );
        assert!(table.aliases.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_empty_terms_and_garbage() {
        assert!(matches!(
            ConflictRuleSet::from_json_str(r#"[["Retinol", " "]]"#),
            Err(CoreError::InvalidRuleTable(_))
        ));
        assert!(matches!(
            ConflictRuleSet::from_json_str("not json"),
            Err(CoreError::InvalidRuleTable(_))
        ));
    }
}
