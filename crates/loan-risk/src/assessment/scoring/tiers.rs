use crate::assessment::domain::{Classification, RiskTier};

pub const MIN_SCORE: f64 = 300.0;
pub const MAX_SCORE: f64 = 850.0;

/// Scores at or above this line are classified as good credit.
pub const GOOD_THRESHOLD: f64 = 575.0;

/// Lower bound of each tier, evaluated top-down.
pub const RISK_TIER_BANDS: [(f64, RiskTier); 5] = [
    (750.0, RiskTier::Excellent),
    (700.0, RiskTier::Good),
    (650.0, RiskTier::Fair),
    (GOOD_THRESHOLD, RiskTier::Poor),
    (MIN_SCORE, RiskTier::VeryPoor),
];

pub fn credit_score(proba_good: f64) -> f64 {
    MIN_SCORE + (MAX_SCORE - MIN_SCORE) * proba_good
}

pub fn risk_tier(credit_score: f64) -> RiskTier {
    RISK_TIER_BANDS
        .iter()
        .find(|(lower_bound, _)| credit_score >= *lower_bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(RiskTier::VeryPoor)
}

pub fn classify(credit_score: f64) -> Classification {
    if credit_score >= GOOD_THRESHOLD {
        Classification::Good
    } else {
        Classification::Bad
    }
}

/// Score range `[lower, upper)` covered by a tier; the top tier includes 850.
pub fn tier_range(tier: RiskTier) -> (f64, f64) {
    let index = RISK_TIER_BANDS
        .iter()
        .position(|(_, candidate)| *candidate == tier)
        .unwrap_or(RISK_TIER_BANDS.len() - 1);
    let lower = RISK_TIER_BANDS[index].0;
    let upper = if index == 0 {
        MAX_SCORE
    } else {
        RISK_TIER_BANDS[index - 1].0
    };
    (lower, upper)
}
