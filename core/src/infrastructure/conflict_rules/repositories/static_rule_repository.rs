use crate::domain::{
    common::entities::app_errors::CoreError,
    conflict::{ports::ConflictRuleRepository, value_objects::ConflictRuleSet},
};

/// Serves a rule table held in memory, the built-in one unless told otherwise.
#[derive(Debug, Clone)]
pub struct StaticConflictRuleRepository {
    rules: ConflictRuleSet,
}

impl StaticConflictRuleRepository {
    pub fn new(rules: ConflictRuleSet) -> Self {
        Self { rules }
    }
}

impl Default for StaticConflictRuleRepository {
    fn default() -> Self {
        Self::new(ConflictRuleSet::builtin())
    }
}

impl ConflictRuleRepository for StaticConflictRuleRepository {
    fn load_rules(&self) -> Result<ConflictRuleSet, CoreError> {
        self.rules.validate()?;
        Ok(self.rules.clone())
    }
}
