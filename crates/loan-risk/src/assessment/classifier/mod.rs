mod logistic;

pub use logistic::{CategoricalTerm, LogisticArtifact, LogisticClassifier, NumericTerm};

use super::features::ClassifierRecord;
use std::path::PathBuf;

/// Pre-trained estimator of the probability that a loan is repaid.
///
/// Implementations are loaded once and shared read-only across requests.
pub trait RepaymentClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Probability of the "good" (repaid) class for one record.
    fn estimate(&self, record: &ClassifierRecord) -> Result<f64, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("model artifact '{}' not found", .path.display())]
    ArtifactMissing { path: PathBuf },
    #[error("failed to read model artifact '{}': {source}", .path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    ArtifactFormat(#[from] serde_json::Error),
    #[error("model artifact is inconsistent: {0}")]
    InvalidArtifact(String),
    #[error("record field '{field}' does not match the model schema")]
    SchemaMismatch { field: String },
}
