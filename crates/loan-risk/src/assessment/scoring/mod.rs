mod factors;
mod tiers;

pub use tiers::{
    classify, credit_score, risk_tier, tier_range, GOOD_THRESHOLD, MAX_SCORE, MIN_SCORE,
    RISK_TIER_BANDS,
};

use chrono::{DateTime, Utc};

use super::domain::{AssessmentResult, EngineeredFeatures, LoanApplication};

/// The classifier handed back something that is not a probability.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("classifier returned probability {value} outside [0, 1]")]
pub struct ProbabilityOutOfRange {
    pub value: f64,
}

/// Map a repayment probability onto the credit scale and risk breakdown.
///
/// `proba_good` must lie in `[0, 1]`; NaN and out-of-range values are
/// rejected rather than clamped.
pub fn score(
    proba_good: f64,
    application: &LoanApplication,
    features: &EngineeredFeatures,
    assessed_at: DateTime<Utc>,
) -> Result<AssessmentResult, ProbabilityOutOfRange> {
    if !(0.0..=1.0).contains(&proba_good) {
        return Err(ProbabilityOutOfRange { value: proba_good });
    }

    let credit_score = credit_score(proba_good);

    Ok(AssessmentResult {
        proba_good,
        proba_bad: 1.0 - proba_good,
        credit_score,
        risk_tier: risk_tier(credit_score),
        classification: classify(credit_score),
        risk_factors: factors::contributions(application, features),
        assessed_at,
    })
}
