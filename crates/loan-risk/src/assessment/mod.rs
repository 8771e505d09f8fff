//! Loan application assessment: validation, feature engineering, classifier
//! integration, and credit score mapping.
//!
//! Every assessment runs start to finish on the calling thread. The only
//! shared state is the classifier, which is loaded once and never mutated.

pub mod batch;
pub mod classifier;
pub mod domain;
pub mod features;
pub mod form;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchRow, BatchRowError, BatchSummary};
pub use classifier::{ClassifierError, LogisticClassifier, RepaymentClassifier};
pub use domain::{
    AssessmentResult, BankAccountType, Classification, EmploymentStatus, EngineeredFeatures,
    FactorContribution, LoanApplication, RiskFactor, RiskTier, UnknownCategory,
};
pub use features::{ClassifierRecord, ComputationError, FeatureValue};
pub use router::{assessment_router, AssessmentResponse};
pub use scoring::ProbabilityOutOfRange;
pub use service::{Assessment, AssessmentError, AssessmentService};
pub use validation::ValidationReport;
pub use views::AssessmentView;
