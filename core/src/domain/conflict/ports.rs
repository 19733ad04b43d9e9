use crate::domain::{
    common::entities::app_errors::CoreError,
    conflict::{
        entities::{ConflictReport, RoutineConflictReport},
        value_objects::{ConflictRuleSet, DetectConflictsInput},
    },
    product::entities::RoutineProducts,
};

/// Source of the conflict rule table
#[cfg_attr(test, mockall::automock)]
pub trait ConflictRuleRepository: Send + Sync {
    fn load_rules(&self) -> Result<ConflictRuleSet, CoreError>;
}

/// Service trait for routine conflict warnings
#[cfg_attr(test, mockall::automock)]
pub trait ConflictService: Send + Sync {
    /// Conflicts between distinct products of one routine slot
    fn detect_conflicts(&self, input: DetectConflictsInput) -> ConflictReport;

    /// Runs detection on each slot of a routine independently
    fn detect_routine_conflicts(&self, routine: &RoutineProducts) -> RoutineConflictReport;

    fn conflict_rules(&self) -> &ConflictRuleSet;
}
