use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Applicant and loan attributes captured for a single assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub loanamount: f64,
    pub termdays: f64,
    pub repayment_curr_ratio: f64,
    pub num_prev_loans: f64,
    pub avg_repay_delay_days: f64,
    pub total_firstrepaid_late: f64,
    pub avg_prev_repayment_ratio: f64,
    pub avg_duration_days: f64,
    pub avg_prev_interest: f64,
    pub age: u8,
    pub bank_account_type: BankAccountType,
    pub employment_status_clients: EmploymentStatus,
}

impl Default for LoanApplication {
    /// Values the intake form starts from (and returns to on reset).
    fn default() -> Self {
        Self {
            loanamount: 50_000.0,
            termdays: 90.0,
            repayment_curr_ratio: 1.0,
            num_prev_loans: 3.0,
            avg_repay_delay_days: 10.0,
            total_firstrepaid_late: 2.0,
            avg_prev_repayment_ratio: 1.0,
            avg_duration_days: 180.0,
            avg_prev_interest: 5_000.0,
            age: 30,
            bank_account_type: BankAccountType::Other,
            employment_status_clients: EmploymentStatus::Permanent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankAccountType {
    Other,
    Savings,
    Current,
}

impl BankAccountType {
    pub const ALL: [BankAccountType; 3] = [Self::Other, Self::Savings, Self::Current];

    pub const fn label(self) -> &'static str {
        match self {
            BankAccountType::Other => "Other",
            BankAccountType::Savings => "Savings",
            BankAccountType::Current => "Current",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Permanent,
    Unknown,
    Unemployed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Student,
    Retired,
    Contract,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 7] = [
        Self::Permanent,
        Self::Unknown,
        Self::Unemployed,
        Self::SelfEmployed,
        Self::Student,
        Self::Retired,
        Self::Contract,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "Permanent",
            EmploymentStatus::Unknown => "Unknown",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Retired => "Retired",
            EmploymentStatus::Contract => "Contract",
        }
    }
}

/// Raised when a categorical label does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub value: String,
}

/// Exact label match, the same rule the serde renames apply on the wire.
fn parse_label<T: Copy>(
    options: &[T],
    label: fn(T) -> &'static str,
    kind: &'static str,
    raw: &str,
) -> Result<T, UnknownCategory> {
    options
        .iter()
        .copied()
        .find(|option| label(*option) == raw)
        .ok_or_else(|| UnknownCategory {
            kind,
            value: raw.to_string(),
        })
}

impl FromStr for BankAccountType {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "bank account type", raw)
    }
}

impl FromStr for EmploymentStatus {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "employment status", raw)
    }
}

impl fmt::Display for BankAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived inputs recomputed for every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeredFeatures {
    pub repayment_efficiency: f64,
    pub late_payment_rate: f64,
    pub sqrt_loanamount: f64,
    pub sqrt_termdays: f64,
    pub sqrt_avg_prev_interest: f64,
    pub sqrt_repayment_efficiency: f64,
    pub sqrt_late_payment_rate: f64,
}

/// Five ordered buckets of credit score, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Excellent => "Excellent",
            RiskTier::Good => "Good",
            RiskTier::Fair => "Fair",
            RiskTier::Poor => "Poor",
            RiskTier::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary approve/decline decision derived from the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Good,
    Bad,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Good => "Good",
            Classification::Bad => "Bad",
        }
    }

    pub const fn is_approved(self) -> bool {
        matches!(self, Classification::Good)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named contributors of the explanatory risk breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Payment History")]
    PaymentHistory,
    #[serde(rename = "Repayment Capacity")]
    RepaymentCapacity,
    #[serde(rename = "Loan Characteristics")]
    LoanCharacteristics,
    #[serde(rename = "Employment Status")]
    EmploymentStatus,
    #[serde(rename = "Previous Performance")]
    PreviousPerformance,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 5] = [
        Self::PaymentHistory,
        Self::RepaymentCapacity,
        Self::LoanCharacteristics,
        Self::EmploymentStatus,
        Self::PreviousPerformance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RiskFactor::PaymentHistory => "Payment History",
            RiskFactor::RepaymentCapacity => "Repayment Capacity",
            RiskFactor::LoanCharacteristics => "Loan Characteristics",
            RiskFactor::EmploymentStatus => "Employment Status",
            RiskFactor::PreviousPerformance => "Previous Performance",
        }
    }

    /// Inclusive range every contribution of this factor falls in.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            RiskFactor::PaymentHistory => (5.0, 45.0),
            RiskFactor::RepaymentCapacity => (5.0, 35.0),
            RiskFactor::LoanCharacteristics => (5.0, 25.0),
            RiskFactor::EmploymentStatus => (15.0, 25.0),
            RiskFactor::PreviousPerformance => (5.0, 30.0),
        }
    }
}

/// Discrete contribution to the risk breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: RiskFactor,
    pub contribution: f64,
}

/// Scored outcome of one assessment. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub proba_good: f64,
    pub proba_bad: f64,
    pub credit_score: f64,
    pub risk_tier: RiskTier,
    pub classification: Classification,
    pub risk_factors: Vec<FactorContribution>,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn contribution(&self, factor: RiskFactor) -> Option<f64> {
        self.risk_factors
            .iter()
            .find(|entry| entry.factor == factor)
            .map(|entry| entry.contribution)
    }
}
