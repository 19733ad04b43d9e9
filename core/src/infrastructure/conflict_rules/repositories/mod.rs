pub mod file_rule_repository;
pub mod static_rule_repository;

pub use file_rule_repository::FileConflictRuleRepository;
pub use static_rule_repository::StaticConflictRuleRepository;
