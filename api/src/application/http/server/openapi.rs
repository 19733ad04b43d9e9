use crate::application::http::{
    conflict::router::ConflictApiDoc, health::HealthApiDoc,
    routine_analysis::router::RoutineAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkinSafe API"
    ),
    nest(
        (path = "/routines", api = ConflictApiDoc),
        (path = "/analysis", api = RoutineAnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
