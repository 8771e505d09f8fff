//! Intake form layout: one descriptor per raw input with its bounds and reset value.

use serde::Serialize;

use super::domain::{BankAccountType, EmploymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormSection {
    #[serde(rename = "Loan Details")]
    LoanDetails,
    #[serde(rename = "Payment History")]
    PaymentHistory,
    #[serde(rename = "Financial History")]
    FinancialHistory,
    #[serde(rename = "Banking & Employment Profile")]
    BankingAndEmployment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Number { min: f64, max: f64, default: f64 },
    Integer { min: i64, max: i64, default: i64 },
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: FormSection,
    #[serde(flatten)]
    pub kind: FieldKind,
}

const BANK_ACCOUNT_OPTIONS: [&str; 3] = [
    BankAccountType::Other.label(),
    BankAccountType::Savings.label(),
    BankAccountType::Current.label(),
];

const EMPLOYMENT_OPTIONS: [&str; 7] = [
    EmploymentStatus::Permanent.label(),
    EmploymentStatus::Unknown.label(),
    EmploymentStatus::Unemployed.label(),
    EmploymentStatus::SelfEmployed.label(),
    EmploymentStatus::Student.label(),
    EmploymentStatus::Retired.label(),
    EmploymentStatus::Contract.label(),
];

const fn number(
    name: &'static str,
    label: &'static str,
    section: FormSection,
    min: f64,
    max: f64,
    default: f64,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        section,
        kind: FieldKind::Number { min, max, default },
    }
}

pub static FIELDS: [FieldSpec; 12] = [
    FieldSpec {
        name: "loanamount",
        label: "Loan Amount",
        section: FormSection::LoanDetails,
        kind: FieldKind::Integer {
            min: 100,
            max: 1_000_000,
            default: 50_000,
        },
    },
    FieldSpec {
        name: "termdays",
        label: "Loan Term (days)",
        section: FormSection::LoanDetails,
        kind: FieldKind::Integer {
            min: 10,
            max: 720,
            default: 90,
        },
    },
    number(
        "repayment_curr_ratio",
        "Repayment Current Ratio",
        FormSection::LoanDetails,
        0.0,
        2.0,
        1.0,
    ),
    number(
        "num_prev_loans",
        "Number of Previous Loans",
        FormSection::PaymentHistory,
        0.0,
        50.0,
        3.0,
    ),
    number(
        "avg_repay_delay_days",
        "Average Repay Delay (days)",
        FormSection::PaymentHistory,
        -50.0,
        365.0,
        10.0,
    ),
    number(
        "total_firstrepaid_late",
        "Total First Repaid Late",
        FormSection::PaymentHistory,
        0.0,
        50.0,
        2.0,
    ),
    number(
        "avg_prev_repayment_ratio",
        "Avg Previous Repayment Ratio",
        FormSection::FinancialHistory,
        0.0,
        2.0,
        1.0,
    ),
    number(
        "avg_duration_days",
        "Avg Duration of Previous Loans (days)",
        FormSection::FinancialHistory,
        0.0,
        720.0,
        180.0,
    ),
    number(
        "avg_prev_interest",
        "Avg Previous Interest",
        FormSection::FinancialHistory,
        0.0,
        100_000.0,
        5_000.0,
    ),
    FieldSpec {
        name: "age",
        label: "Client Age",
        section: FormSection::FinancialHistory,
        kind: FieldKind::Integer {
            min: 18,
            max: 100,
            default: 30,
        },
    },
    FieldSpec {
        name: "bank_account_type",
        label: "Bank Account Type",
        section: FormSection::BankingAndEmployment,
        kind: FieldKind::Choice {
            options: &BANK_ACCOUNT_OPTIONS,
            default: "Other",
        },
    },
    FieldSpec {
        name: "employment_status_clients",
        label: "Employment Status",
        section: FormSection::BankingAndEmployment,
        kind: FieldKind::Choice {
            options: &EMPLOYMENT_OPTIONS,
            default: "Permanent",
        },
    },
];

pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}
