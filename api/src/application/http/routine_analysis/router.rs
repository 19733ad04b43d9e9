use super::handlers::extract_product::{__path_extract_product, extract_product};
use super::handlers::reconcile_analysis::{__path_reconcile_analysis, reconcile_analysis};
use super::handlers::reconcile_assessment::{__path_reconcile_assessment, reconcile_assessment};
use super::handlers::reconcile_compatibility::{
    __path_reconcile_compatibility, reconcile_compatibility,
};
use super::handlers::reconcile_derma_scan::{__path_reconcile_derma_scan, reconcile_derma_scan};
use super::handlers::reconcile_optimization::{
    __path_reconcile_optimization, reconcile_optimization,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    reconcile_analysis,
    reconcile_assessment,
    reconcile_compatibility,
    reconcile_optimization,
    extract_product,
    reconcile_derma_scan
))]
pub struct RoutineAnalysisApiDoc;

pub fn routine_analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/analysis/reconcile"),
            post(reconcile_analysis),
        )
        .route(
            &format!("{root_path}/analysis/assessment"),
            post(reconcile_assessment),
        )
        .route(
            &format!("{root_path}/analysis/compatibility"),
            post(reconcile_compatibility),
        )
        .route(
            &format!("{root_path}/analysis/optimization"),
            post(reconcile_optimization),
        )
        .route(
            &format!("{root_path}/analysis/product-extraction"),
            post(extract_product),
        )
        .route(
            &format!("{root_path}/analysis/derma-scan"),
            post(reconcile_derma_scan),
        )
}
