use super::handlers::detect_conflicts::{__path_detect_conflicts, detect_conflicts};
use super::handlers::detect_routine_conflicts::{
    __path_detect_routine_conflicts, detect_routine_conflicts,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(detect_conflicts, detect_routine_conflicts))]
pub struct ConflictApiDoc;

pub fn conflict_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/routines/conflicts", state.args.server.root_path),
            post(detect_conflicts),
        )
        .route(
            &format!("{}/routines/conflicts/all", state.args.server.root_path),
            post(detect_routine_conflicts),
        )
}
