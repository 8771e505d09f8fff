use serde::{Deserialize, Serialize};

use super::domain::LoanApplication;

pub const NON_POSITIVE_LOAN_AMOUNT: &str = "Loan amount must be positive";
pub const VERY_LOW_REPAYMENT_RATIO: &str = "Very low repayment ratio may indicate high risk";
pub const LOW_REPAYMENT_RATIO: &str = "Low repayment ratio detected";
pub const HIGH_REPAY_DELAY: &str = "High average payment delay may affect approval";
pub const HIGH_LATE_FIRST_PAYMENT_RATE: &str = "High rate of late first payments detected";

/// Blocking errors and advisory warnings raised for one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_blocking(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn validate(application: &LoanApplication) -> ValidationReport {
    let mut report = ValidationReport::default();

    if application.loanamount <= 0.0 {
        report.errors.push(NON_POSITIVE_LOAN_AMOUNT.to_string());
    }

    if application.repayment_curr_ratio < 0.1 {
        report.warnings.push(VERY_LOW_REPAYMENT_RATIO.to_string());
    } else if application.repayment_curr_ratio < 0.5 {
        report.warnings.push(LOW_REPAYMENT_RATIO.to_string());
    }

    if application.avg_repay_delay_days > 30.0 {
        report.warnings.push(HIGH_REPAY_DELAY.to_string());
    }

    if application.num_prev_loans > 0.0
        && application.total_firstrepaid_late / application.num_prev_loans > 0.5
    {
        report.warnings.push(HIGH_LATE_FIRST_PAYMENT_RATE.to_string());
    }

    report
}
