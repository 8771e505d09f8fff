use super::common::*;
use crate::assessment::domain::LoanApplication;
use crate::assessment::validation::{
    validate, HIGH_LATE_FIRST_PAYMENT_RATE, HIGH_REPAY_DELAY, LOW_REPAYMENT_RATIO,
    NON_POSITIVE_LOAN_AMOUNT, VERY_LOW_REPAYMENT_RATIO,
};

#[test]
fn clean_application_has_no_findings() {
    let report = validate(&application());

    assert!(!report.is_blocking());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn non_positive_loan_amount_blocks() {
    for loanamount in [-1.0, 0.0] {
        let report = validate(&LoanApplication {
            loanamount,
            ..application()
        });

        assert!(report.is_blocking());
        assert_eq!(report.errors, vec![NON_POSITIVE_LOAN_AMOUNT.to_string()]);
        assert_eq!(report.errors[0], "Loan amount must be positive");
    }
}

#[test]
fn only_the_more_severe_repayment_ratio_warning_is_emitted() {
    let severe = validate(&LoanApplication {
        repayment_curr_ratio: 0.05,
        ..application()
    });
    assert_eq!(severe.warnings, vec![VERY_LOW_REPAYMENT_RATIO.to_string()]);

    let mild = validate(&LoanApplication {
        repayment_curr_ratio: 0.3,
        ..application()
    });
    assert_eq!(mild.warnings, vec![LOW_REPAYMENT_RATIO.to_string()]);

    let boundary = validate(&LoanApplication {
        repayment_curr_ratio: 0.5,
        ..application()
    });
    assert!(boundary.warnings.is_empty());
}

#[test]
fn long_repay_delay_warns_above_thirty_days() {
    let at_limit = validate(&LoanApplication {
        avg_repay_delay_days: 30.0,
        ..application()
    });
    assert!(at_limit.warnings.is_empty());

    let above = validate(&LoanApplication {
        avg_repay_delay_days: 30.5,
        ..application()
    });
    assert_eq!(above.warnings, vec![HIGH_REPAY_DELAY.to_string()]);
}

#[test]
fn high_late_first_payment_rate_warns() {
    let report = validate(&LoanApplication {
        num_prev_loans: 3.0,
        total_firstrepaid_late: 2.0,
        ..application()
    });
    assert_eq!(
        report.warnings,
        vec![HIGH_LATE_FIRST_PAYMENT_RATE.to_string()]
    );

    let half = validate(&LoanApplication {
        num_prev_loans: 4.0,
        total_firstrepaid_late: 2.0,
        ..application()
    });
    assert!(half.warnings.is_empty());
}

#[test]
fn late_rate_warning_needs_previous_loans() {
    let report = validate(&first_time_borrower());
    assert!(report.warnings.is_empty());
}

#[test]
fn warnings_do_not_block_and_accumulate_in_order() {
    let report = validate(&LoanApplication {
        repayment_curr_ratio: 0.0,
        avg_repay_delay_days: 90.0,
        num_prev_loans: 2.0,
        total_firstrepaid_late: 2.0,
        ..application()
    });

    assert!(!report.is_blocking());
    assert_eq!(
        report.warnings,
        vec![
            VERY_LOW_REPAYMENT_RATIO.to_string(),
            HIGH_REPAY_DELAY.to_string(),
            HIGH_LATE_FIRST_PAYMENT_RATE.to_string(),
        ]
    );
}
