use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::{AssessmentError, AssessmentRequest, AssessmentService};
use crate::compliance::{
    analyze_legal_defense, analyze_status_strategy, validate_work_experience, LegalInput,
    StatusInput, WorkExperienceInput,
};
use crate::eligibility::CandidateProfile;

/// Router builder exposing the assessment and compliance endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/crs", post(crs_handler))
        .route(
            "/api/v1/compliance/work-experience",
            post(work_experience_handler),
        )
        .route("/api/v1/compliance/status", post(status_handler))
        .route("/api/v1/compliance/legal", post(legal_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    match service.assess(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn crs_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(profile): Json<CandidateProfile>,
) -> Response {
    match service.score(&profile) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn work_experience_handler(Json(input): Json<WorkExperienceInput>) -> Response {
    (StatusCode::OK, Json(validate_work_experience(&input))).into_response()
}

pub(crate) async fn status_handler(Json(input): Json<StatusInput>) -> Response {
    (StatusCode::OK, Json(analyze_status_strategy(&input))).into_response()
}

pub(crate) async fn legal_handler(Json(input): Json<LegalInput>) -> Response {
    (StatusCode::OK, Json(analyze_legal_defense(&input))).into_response()
}

fn rejection(error: AssessmentError) -> Response {
    match error {
        AssessmentError::Profile(violation) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
