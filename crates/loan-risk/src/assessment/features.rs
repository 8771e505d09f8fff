use super::domain::{EngineeredFeatures, LoanApplication};

/// Added to denominators so a zero historical value cannot divide by zero.
pub const EPSILON: f64 = 1e-6;

/// Feature engineering produced a value the classifier cannot consume.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationError {
    #[error("feature '{field}' is not a finite number ({value})")]
    NonFinite { field: &'static str, value: f64 },
}

pub fn engineer(application: &LoanApplication) -> Result<EngineeredFeatures, ComputationError> {
    for (field, value) in raw_numeric_fields(application) {
        ensure_finite(field, value)?;
    }

    let repayment_efficiency =
        application.repayment_curr_ratio / (application.avg_prev_repayment_ratio + EPSILON);
    let late_payment_rate = late_payment_rate(application);

    let features = EngineeredFeatures {
        repayment_efficiency,
        late_payment_rate,
        sqrt_loanamount: application.loanamount.sqrt(),
        sqrt_termdays: application.termdays.sqrt(),
        sqrt_avg_prev_interest: application.avg_prev_interest.sqrt(),
        sqrt_repayment_efficiency: repayment_efficiency.abs().sqrt(),
        sqrt_late_payment_rate: late_payment_rate.sqrt(),
    };

    for (field, value) in derived_numeric_fields(&features) {
        ensure_finite(field, value)?;
    }

    Ok(features)
}

/// Share of previous loans whose first installment was late; zero without history.
pub fn late_payment_rate(application: &LoanApplication) -> f64 {
    if application.num_prev_loans > 0.0 {
        application.total_firstrepaid_late / (application.num_prev_loans + EPSILON)
    } else {
        0.0
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ComputationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ComputationError::NonFinite { field, value })
    }
}

fn raw_numeric_fields(application: &LoanApplication) -> [(&'static str, f64); 10] {
    [
        ("loanamount", application.loanamount),
        ("termdays", application.termdays),
        ("repayment_curr_ratio", application.repayment_curr_ratio),
        ("num_prev_loans", application.num_prev_loans),
        ("avg_repay_delay_days", application.avg_repay_delay_days),
        ("total_firstrepaid_late", application.total_firstrepaid_late),
        ("avg_prev_repayment_ratio", application.avg_prev_repayment_ratio),
        ("avg_duration_days", application.avg_duration_days),
        ("avg_prev_interest", application.avg_prev_interest),
        ("age", f64::from(application.age)),
    ]
}

fn derived_numeric_fields(features: &EngineeredFeatures) -> [(&'static str, f64); 7] {
    [
        ("repayment_efficiency", features.repayment_efficiency),
        ("late_payment_rate", features.late_payment_rate),
        ("sqrt_loanamount", features.sqrt_loanamount),
        ("sqrt_termdays", features.sqrt_termdays),
        ("sqrt_avg_prev_interest", features.sqrt_avg_prev_interest),
        ("sqrt_repayment_efficiency", features.sqrt_repayment_efficiency),
        ("sqrt_late_payment_rate", features.sqrt_late_payment_rate),
    ]
}

/// Field names of the classifier input, in the order the model was fitted on.
pub const RECORD_FIELDS: [&str; 19] = [
    "loanamount",
    "termdays",
    "repayment_curr_ratio",
    "num_prev_loans",
    "avg_repay_delay_days",
    "total_firstrepaid_late",
    "avg_prev_repayment_ratio",
    "avg_duration_days",
    "avg_prev_interest",
    "age",
    "bank_account_type",
    "employment_status_clients",
    "repayment_efficiency",
    "late_payment_rate",
    "sqrt_loanamount",
    "sqrt_termdays",
    "sqrt_avg_prev_interest",
    "sqrt_repayment_efficiency",
    "sqrt_late_payment_rate",
];

pub const CATEGORICAL_FIELDS: [&str; 2] = ["bank_account_type", "employment_status_clients"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(&'static str),
}

impl FeatureValue {
    pub fn as_numeric(self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(value) => Some(value),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_category(self) -> Option<&'static str> {
        match self {
            FeatureValue::Categorical(label) => Some(label),
            FeatureValue::Numeric(_) => None,
        }
    }
}

/// The twelve raw fields followed by the seven derived ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierRecord {
    values: [FeatureValue; 19],
}

impl ClassifierRecord {
    pub fn new(application: &LoanApplication, features: &EngineeredFeatures) -> Self {
        let numeric = FeatureValue::Numeric;
        let values = [
            numeric(application.loanamount),
            numeric(application.termdays),
            numeric(application.repayment_curr_ratio),
            numeric(application.num_prev_loans),
            numeric(application.avg_repay_delay_days),
            numeric(application.total_firstrepaid_late),
            numeric(application.avg_prev_repayment_ratio),
            numeric(application.avg_duration_days),
            numeric(application.avg_prev_interest),
            numeric(f64::from(application.age)),
            FeatureValue::Categorical(application.bank_account_type.label()),
            FeatureValue::Categorical(application.employment_status_clients.label()),
            numeric(features.repayment_efficiency),
            numeric(features.late_payment_rate),
            numeric(features.sqrt_loanamount),
            numeric(features.sqrt_termdays),
            numeric(features.sqrt_avg_prev_interest),
            numeric(features.sqrt_repayment_efficiency),
            numeric(features.sqrt_late_payment_rate),
        ];
        Self { values }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> + '_ {
        RECORD_FIELDS.iter().copied().zip(self.values.iter().copied())
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        RECORD_FIELDS
            .iter()
            .position(|field| *field == name)
            .map(|index| self.values[index])
    }
}
