use crate::assessment::domain::{
    EmploymentStatus, EngineeredFeatures, FactorContribution, LoanApplication, RiskFactor,
};

fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

fn bounded(factor: RiskFactor, raw: f64) -> FactorContribution {
    let (lo, hi) = factor.bounds();
    FactorContribution {
        factor,
        contribution: clamp(raw, lo, hi),
    }
}

/// Explanatory breakdown derived from the raw inputs only.
///
/// This is a fixed heuristic and does not reflect the classifier's weights.
pub(crate) fn contributions(
    application: &LoanApplication,
    features: &EngineeredFeatures,
) -> Vec<FactorContribution> {
    let payment_history = 20.0
        + application.avg_repay_delay_days * 2.0
        + application.total_firstrepaid_late * 5.0;
    let repayment_capacity = (2.0 - application.repayment_curr_ratio) * 15.0;
    let loan_characteristics = application.loanamount / 10_000.0 + application.termdays / 50.0;
    let employment = if application.employment_status_clients == EmploymentStatus::Permanent {
        15.0
    } else {
        25.0
    };
    let previous_performance = features.late_payment_rate * 30.0;

    vec![
        bounded(RiskFactor::PaymentHistory, payment_history),
        bounded(RiskFactor::RepaymentCapacity, repayment_capacity),
        bounded(RiskFactor::LoanCharacteristics, loan_characteristics),
        FactorContribution {
            factor: RiskFactor::EmploymentStatus,
            contribution: employment,
        },
        bounded(RiskFactor::PreviousPerformance, previous_performance),
    ]
}
