use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use super::classifier::{ClassifierError, RepaymentClassifier};
use super::domain::{AssessmentResult, EngineeredFeatures, LoanApplication};
use super::features::{self, ClassifierRecord, ComputationError};
use super::scoring::{self, ProbabilityOutOfRange};
use super::validation;

/// Service composing validation, feature engineering, the classifier, and scoring.
///
/// The classifier is loaded once by the caller and shared read-only.
pub struct AssessmentService<C> {
    classifier: Arc<C>,
}

impl<C> AssessmentService<C>
where
    C: RepaymentClassifier + 'static,
{
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Assess one application, stamping the result with the current time.
    pub fn assess(&self, application: &LoanApplication) -> Result<Assessment, AssessmentError> {
        self.assess_at(application, Utc::now())
    }

    pub fn assess_at(
        &self,
        application: &LoanApplication,
        assessed_at: DateTime<Utc>,
    ) -> Result<Assessment, AssessmentError> {
        let report = validation::validate(application);
        if report.is_blocking() {
            warn!(errors = ?report.errors, "application rejected by validation");
            return Err(AssessmentError::Validation {
                errors: report.errors,
            });
        }

        let features = features::engineer(application).map_err(|err| {
            warn!(%err, "feature engineering failed");
            err
        })?;
        let record = ClassifierRecord::new(application, &features);

        let proba_good = self.classifier.estimate(&record).map_err(|err| {
            error!(%err, model = self.classifier.name(), "classifier failed");
            err
        })?;

        let result = scoring::score(proba_good, application, &features, assessed_at).map_err(
            |err| {
                let model = self.classifier.name();
                warn!(%err, model, "classifier broke probability contract");
                err
            },
        )?;

        info!(
            credit_score = result.credit_score,
            tier = result.risk_tier.label(),
            classification = result.classification.label(),
            warnings = report.warnings.len(),
            "assessment completed"
        );

        Ok(Assessment {
            result,
            features,
            warnings: report.warnings,
        })
    }
}

/// Successful assessment plus the advisory warnings raised on intake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub result: AssessmentResult,
    pub features: EngineeredFeatures,
    pub warnings: Vec<String>,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("input validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },
    #[error(transparent)]
    Computation(#[from] ComputationError),
    #[error(transparent)]
    Probability(#[from] ProbabilityOutOfRange),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
