pub mod common;
pub mod conflict;
pub mod product;
pub mod routine_analysis;
