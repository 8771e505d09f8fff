use loan_risk::assessment::{AssessmentService, LogisticClassifier};
use loan_risk::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Flag value wins over the configured artifact path.
pub(crate) fn resolve_model_path(flag: Option<PathBuf>, configured: &Path) -> PathBuf {
    flag.unwrap_or_else(|| configured.to_path_buf())
}

/// Load the classifier once; any artifact problem aborts startup.
pub(crate) fn load_service(path: &Path) -> Result<AssessmentService<LogisticClassifier>, AppError> {
    let classifier = LogisticClassifier::load(path)?;
    info!(
        model = classifier.artifact().name.as_str(),
        path = %path.display(),
        "classifier loaded"
    );
    Ok(AssessmentService::new(Arc::new(classifier)))
}
