pub mod detect_conflicts;
pub mod detect_routine_conflicts;
