pub mod extract_product;
pub mod reconcile_analysis;
pub mod reconcile_assessment;
pub mod reconcile_compatibility;
pub mod reconcile_derma_scan;
pub mod reconcile_optimization;
