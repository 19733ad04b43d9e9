pub mod conflict_rules;
