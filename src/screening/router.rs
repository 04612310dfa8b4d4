use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::engine::{RuleView, ScreeningEngine};
use super::features::FeatureRecord;

/// Router builder exposing the screening endpoints. The engine is shared
/// read-only state; evaluations need no coordination between requests.
pub fn screening_router(engine: Arc<ScreeningEngine>) -> Router {
    Router::new()
        .route("/api/v1/screening/report", post(report_handler))
        .route("/api/v1/screening/rules", get(rules_handler))
        .with_state(engine)
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<ScreeningEngine>>,
    Json(record): Json<FeatureRecord>,
) -> Response {
    let report = engine.screen(&record);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn rules_handler(
    State(engine): State<Arc<ScreeningEngine>>,
) -> Json<Vec<RuleView>> {
    Json(engine.rule_views())
}
