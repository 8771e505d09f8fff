use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{Classification, LoanApplication, RiskTier};
use crate::assessment::features::{FeatureValue, RECORD_FIELDS};
use crate::assessment::service::{AssessmentError, AssessmentService};
use crate::assessment::validation::{HIGH_REPAY_DELAY, NON_POSITIVE_LOAN_AMOUNT};

#[test]
fn blocking_errors_skip_the_classifier() {
    let (service, classifier) = build_service(0.9);
    let application = LoanApplication {
        loanamount: 0.0,
        ..application()
    };

    let err = service
        .assess_at(&application, assessed_at())
        .expect_err("zero loan must be rejected");

    match err {
        AssessmentError::Validation { errors } => {
            assert_eq!(errors, vec![NON_POSITIVE_LOAN_AMOUNT.to_string()])
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn warnings_travel_with_a_successful_assessment() {
    let (service, classifier) = build_service(0.8);
    let application = LoanApplication {
        avg_repay_delay_days: 45.0,
        ..application()
    };

    let assessment = service
        .assess_at(&application, assessed_at())
        .expect("assessment");

    assert_eq!(assessment.warnings, vec![HIGH_REPAY_DELAY.to_string()]);
    assert_close(assessment.result.credit_score, 740.0);
    assert_eq!(assessment.result.risk_tier, RiskTier::Good);
    assert_eq!(assessment.result.classification, Classification::Good);
    assert_eq!(assessment.result.assessed_at, assessed_at());
    assert_eq!(classifier.calls(), 1);
}

#[test]
fn classifier_receives_the_full_record_in_order() {
    let (service, classifier) = build_service(0.5);
    let application = application();

    let assessment = service
        .assess_at(&application, assessed_at())
        .expect("assessment");

    let record = classifier.last_record().expect("classifier was called");
    let names: Vec<_> = record.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, RECORD_FIELDS.to_vec());

    assert_eq!(record[0].1, FeatureValue::Numeric(120_000.0));
    assert_eq!(record[9].1, FeatureValue::Numeric(41.0));
    assert_eq!(record[10].1, FeatureValue::Categorical("Savings"));
    assert_eq!(record[11].1, FeatureValue::Categorical("Contract"));
    assert_eq!(
        record[12].1,
        FeatureValue::Numeric(assessment.features.repayment_efficiency)
    );
    assert_eq!(
        record[18].1,
        FeatureValue::Numeric(assessment.features.sqrt_late_payment_rate)
    );
}

#[test]
fn classifier_failures_surface_unchanged() {
    let service = AssessmentService::new(Arc::new(FailingClassifier));

    let err = service
        .assess_at(&application(), assessed_at())
        .expect_err("classifier failure");

    assert!(matches!(err, AssessmentError::Classifier(_)), "{err:?}");
}

#[test]
fn out_of_range_probability_is_not_clamped() {
    let (service, _) = build_service(1.5);

    let err = service
        .assess_at(&application(), assessed_at())
        .expect_err("probability above one");

    match err {
        AssessmentError::Probability(inner) => assert_eq!(inner.value, 1.5),
        other => panic!("expected probability error, got {other:?}"),
    }
}

#[test]
fn non_finite_inputs_fail_before_the_classifier() {
    let (service, classifier) = build_service(0.5);
    let application = LoanApplication {
        avg_prev_interest: f64::INFINITY,
        ..application()
    };

    let err = service
        .assess_at(&application, assessed_at())
        .expect_err("infinite input");

    assert!(matches!(err, AssessmentError::Computation(_)), "{err:?}");
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn repeated_assessments_are_identical() {
    let (service, _) = build_service(0.63);
    let application = application();

    let first = service.assess_at(&application, assessed_at()).expect("first");
    let second = service.assess_at(&application, assessed_at()).expect("second");

    assert_eq!(first, second);
}

#[test]
fn validation_error_message_joins_all_errors() {
    let err = AssessmentError::Validation {
        errors: vec!["first".to_string(), "second".to_string()],
    };
    assert_eq!(err.to_string(), "input validation failed: first; second");
}
