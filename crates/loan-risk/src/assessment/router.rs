use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::classifier::RepaymentClassifier;
use super::domain::{AssessmentResult, EngineeredFeatures, LoanApplication};
use super::form::{FieldSpec, FIELDS};
use super::service::{Assessment, AssessmentError, AssessmentService};
use super::views::AssessmentView;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router<C>(service: Arc<AssessmentService<C>>) -> Router
where
    C: RepaymentClassifier + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<C>))
        .route("/api/v1/assessments/form", get(form_handler))
        .with_state(service)
}

/// Body returned for a scored application.
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub result: AssessmentResult,
    pub warnings: Vec<String>,
    pub features: EngineeredFeatures,
    pub view: AssessmentView,
}

impl From<Assessment> for AssessmentResponse {
    fn from(assessment: Assessment) -> Self {
        let view = AssessmentView::from_result(&assessment.result);
        Self {
            result: assessment.result,
            warnings: assessment.warnings,
            features: assessment.features,
            view,
        }
    }
}

pub(crate) async fn assess_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    Json(application): Json<LoanApplication>,
) -> Response
where
    C: RepaymentClassifier + 'static,
{
    match service.assess(&application) {
        Ok(assessment) => {
            (StatusCode::OK, Json(AssessmentResponse::from(assessment))).into_response()
        }
        Err(AssessmentError::Validation { errors }) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(err @ (AssessmentError::Computation(_) | AssessmentError::Probability(_))) => {
            let payload = json!({
                "error": err.to_string(),
                "hint": "check the inputs and try again",
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn form_handler() -> Json<&'static [FieldSpec]> {
    Json(&FIELDS[..])
}
