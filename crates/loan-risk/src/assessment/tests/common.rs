use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::classifier::{ClassifierError, RepaymentClassifier};
use crate::assessment::domain::{BankAccountType, EmploymentStatus, LoanApplication};
use crate::assessment::features::{ClassifierRecord, FeatureValue};
use crate::assessment::{assessment_router, AssessmentService};

/// Deterministic stand-in for the trained model.
pub(super) struct StaticClassifier {
    probability: f64,
    seen: Mutex<Vec<Vec<(&'static str, FeatureValue)>>>,
}

impl StaticClassifier {
    pub(super) fn new(probability: f64) -> Self {
        Self {
            probability,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.seen.lock().expect("classifier mutex poisoned").len()
    }

    pub(super) fn last_record(&self) -> Option<Vec<(&'static str, FeatureValue)>> {
        self.seen
            .lock()
            .expect("classifier mutex poisoned")
            .last()
            .cloned()
    }
}

impl RepaymentClassifier for StaticClassifier {
    fn name(&self) -> &str {
        "static"
    }

    fn estimate(&self, record: &ClassifierRecord) -> Result<f64, ClassifierError> {
        self.seen
            .lock()
            .expect("classifier mutex poisoned")
            .push(record.fields().collect());
        Ok(self.probability)
    }
}

pub(super) struct FailingClassifier;

impl RepaymentClassifier for FailingClassifier {
    fn name(&self) -> &str {
        "failing"
    }

    fn estimate(&self, _record: &ClassifierRecord) -> Result<f64, ClassifierError> {
        Err(ClassifierError::SchemaMismatch {
            field: "loanamount".to_string(),
        })
    }
}

pub(super) fn application() -> LoanApplication {
    LoanApplication {
        loanamount: 120_000.0,
        termdays: 180.0,
        repayment_curr_ratio: 0.8,
        num_prev_loans: 4.0,
        avg_repay_delay_days: 3.0,
        total_firstrepaid_late: 1.0,
        avg_prev_repayment_ratio: 0.9,
        avg_duration_days: 150.0,
        avg_prev_interest: 7_200.0,
        age: 41,
        bank_account_type: BankAccountType::Savings,
        employment_status_clients: EmploymentStatus::Contract,
    }
}

pub(super) fn first_time_borrower() -> LoanApplication {
    LoanApplication {
        num_prev_loans: 0.0,
        total_firstrepaid_late: 4.0,
        avg_prev_repayment_ratio: 0.0,
        avg_duration_days: 0.0,
        avg_prev_interest: 0.0,
        ..application()
    }
}

pub(super) fn assessed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, 5, 9)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service(
    probability: f64,
) -> (AssessmentService<StaticClassifier>, Arc<StaticClassifier>) {
    let classifier = Arc::new(StaticClassifier::new(probability));
    (AssessmentService::new(classifier.clone()), classifier)
}

pub(super) fn router_with_probability(probability: f64) -> axum::Router {
    let (service, _) = build_service(probability);
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
