use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierError, RepaymentClassifier};
use crate::assessment::features::{ClassifierRecord, CATEGORICAL_FIELDS, RECORD_FIELDS};

/// Persisted form of a fitted logistic regression with its preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub name: String,
    pub intercept: f64,
    pub numeric: Vec<NumericTerm>,
    pub categorical: Vec<CategoricalTerm>,
}

/// Standardized numeric input: `weight * (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTerm {
    pub feature: String,
    pub mean: f64,
    pub scale: f64,
    pub weight: f64,
}

/// One-hot encoded categorical input. Unlisted categories contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalTerm {
    pub feature: String,
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    artifact: LogisticArtifact,
}

impl LogisticClassifier {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ClassifierError::ArtifactMissing {
                    path: path.to_path_buf(),
                }
            } else {
                ClassifierError::ArtifactUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ClassifierError> {
        let artifact: LogisticArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, ClassifierError> {
        check_artifact(&artifact)?;
        Ok(Self { artifact })
    }

    pub fn artifact(&self) -> &LogisticArtifact {
        &self.artifact
    }

    pub fn linear_predictor(&self, record: &ClassifierRecord) -> Result<f64, ClassifierError> {
        let mut z = self.artifact.intercept;

        for term in &self.artifact.numeric {
            let x = record
                .get(&term.feature)
                .and_then(|value| value.as_numeric())
                .ok_or_else(|| ClassifierError::SchemaMismatch {
                    field: term.feature.clone(),
                })?;
            z += term.weight * (x - term.mean) / term.scale;
        }

        for term in &self.artifact.categorical {
            let category = record
                .get(&term.feature)
                .and_then(|value| value.as_category())
                .ok_or_else(|| ClassifierError::SchemaMismatch {
                    field: term.feature.clone(),
                })?;
            z += term.weights.get(category).copied().unwrap_or(0.0);
        }

        Ok(z)
    }
}

impl RepaymentClassifier for LogisticClassifier {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn estimate(&self, record: &ClassifierRecord) -> Result<f64, ClassifierError> {
        self.linear_predictor(record).map(sigmoid)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn check_artifact(artifact: &LogisticArtifact) -> Result<(), ClassifierError> {
    let invalid = ClassifierError::InvalidArtifact;

    if !artifact.intercept.is_finite() {
        return Err(invalid("intercept must be finite".to_string()));
    }

    let mut covered = BTreeSet::new();

    for term in &artifact.numeric {
        let name = term.feature.as_str();
        if !RECORD_FIELDS.contains(&name) || CATEGORICAL_FIELDS.contains(&name) {
            return Err(invalid(format!("'{name}' is not a numeric record field")));
        }
        if !(term.scale.is_finite() && term.scale > 0.0) {
            return Err(invalid(format!("'{name}' scale must be positive")));
        }
        if !(term.mean.is_finite() && term.weight.is_finite()) {
            return Err(invalid(format!("'{name}' has a non-finite coefficient")));
        }
        if !covered.insert(name) {
            return Err(invalid(format!("'{name}' appears more than once")));
        }
    }

    for term in &artifact.categorical {
        let name = term.feature.as_str();
        if !CATEGORICAL_FIELDS.contains(&name) {
            return Err(invalid(format!("'{name}' is not a categorical record field")));
        }
        if term.weights.values().any(|weight| !weight.is_finite()) {
            return Err(invalid(format!("'{name}' has a non-finite coefficient")));
        }
        if !covered.insert(name) {
            return Err(invalid(format!("'{name}' appears more than once")));
        }
    }

    if let Some(missing) = RECORD_FIELDS.iter().find(|field| !covered.contains(*field)) {
        return Err(invalid(format!("no term for record field '{missing}'")));
    }

    Ok(())
}
