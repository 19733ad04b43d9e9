use std::sync::Arc;

use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conflict::{
        ports::ConflictRuleRepository,
        value_objects::{ConflictRuleSet, MatchOptions},
    },
};

/// Entry point of the core: holds the conflict vocabulary loaded at startup and
/// implements every service port.
#[derive(Debug, Clone)]
pub struct Service {
    pub(crate) rules: Arc<ConflictRuleSet>,
    pub(crate) match_options: MatchOptions,
}

impl Service {
    pub fn new<R: ConflictRuleRepository>(
        rule_repository: &R,
        match_options: MatchOptions,
    ) -> Result<Self, CoreError> {
        let rules = rule_repository.load_rules()?;

        info!(
            rules = rules.rules.len(),
            aliases = rules.aliases.len(),
            min_fragment_len = match_options.min_fragment_len,
            "conflict rule table loaded"
        );

        Ok(Self::with_rules(rules, match_options))
    }

    pub fn with_rules(rules: ConflictRuleSet, match_options: MatchOptions) -> Self {
        Self {
            rules: Arc::new(rules),
            match_options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conflict::{entities::ConflictRule, ports::MockConflictRuleRepository};

    #[test]
    fn test_service_loads_rules_once_from_repository() {
        let rules = ConflictRuleSet::new(vec![ConflictRule::new("Retinol", "AHA")]);
        let mut repository = MockConflictRuleRepository::new();
        repository
            .expect_load_rules()
            .times(1)
            .returning(move || Ok(rules.clone()));

        let service = Service::new(&repository, MatchOptions::default()).expect("service");

        assert_eq!(service.rules.rules.len(), 1);
        assert_eq!(service.rules.rules[0].a, "Retinol");
    }

    #[test]
    fn test_service_propagates_rule_table_errors() {
        let mut repository = MockConflictRuleRepository::new();
        repository
            .expect_load_rules()
            .returning(|| Err(CoreError::InvalidRuleTable("missing file".to_string())));

        let result = Service::new(&repository, MatchOptions::default());

        assert_eq!(
            result.err(),
            Some(CoreError::InvalidRuleTable("missing file".to_string()))
        );
    }
}
