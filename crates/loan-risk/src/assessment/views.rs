use chrono::Local;
use serde::Serialize;

use super::domain::{AssessmentResult, Classification, RiskTier};
use super::scoring::{tier_range, GOOD_THRESHOLD, MAX_SCORE, MIN_SCORE};

const FACTOR_HIGH_LINE: f64 = 25.0;
const FACTOR_MEDIUM_LINE: f64 = 15.0;
const FACTOR_MEDIUM_COLOR: &str = "#f59e0b";
const FACTOR_LOW_COLOR: &str = "#10b981";

/// Display color and icon per tier.
pub const fn tier_style(tier: RiskTier) -> (&'static str, &'static str) {
    match tier {
        RiskTier::Excellent => ("#10b981", "🟢"),
        RiskTier::Good => ("#22c55e", "🟢"),
        RiskTier::Fair => ("#f59e0b", "🟡"),
        RiskTier::Poor => ("#f97316", "🟠"),
        RiskTier::VeryPoor => ("#ef4444", "🔴"),
    }
}

/// Gauge band fills, best band last. Fair and Good share one band.
const GAUGE_FILLS: [(RiskTier, RiskTier, &str); 4] = [
    (RiskTier::VeryPoor, RiskTier::VeryPoor, "rgba(239, 68, 68, 0.3)"),
    (RiskTier::Poor, RiskTier::Poor, "rgba(245, 158, 11, 0.3)"),
    (RiskTier::Fair, RiskTier::Good, "rgba(34, 197, 94, 0.3)"),
    (RiskTier::Excellent, RiskTier::Excellent, "rgba(16, 185, 129, 0.5)"),
];

/// Everything a presentation layer needs to render one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub summary: SummaryMetrics,
    pub gauge: GaugeView,
    pub factors: Vec<FactorBar>,
    pub recommendation: RecommendationView,
    pub assessed_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub credit_score: String,
    pub risk_tier: &'static str,
    pub tier_color: &'static str,
    pub tier_icon: &'static str,
    pub default_probability: String,
    pub repayment_probability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub value: f64,
    pub axis: (f64, f64),
    pub bar_color: &'static str,
    pub bands: Vec<GaugeBand>,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorBar {
    pub label: &'static str,
    pub value: f64,
    pub text: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub approved: bool,
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub credit_score_line: String,
    pub default_probability: String,
    pub action: &'static str,
}

impl AssessmentView {
    pub fn from_result(result: &AssessmentResult) -> Self {
        let (tier_color, tier_icon) = tier_style(result.risk_tier);
        let tier = result.risk_tier.label();

        let summary = SummaryMetrics {
            credit_score: format!("{:.0}", result.credit_score),
            risk_tier: tier,
            tier_color,
            tier_icon,
            default_probability: percent(result.proba_bad),
            repayment_probability: percent(result.proba_good),
        };

        let gauge = GaugeView {
            value: result.credit_score,
            axis: (MIN_SCORE, MAX_SCORE),
            bar_color: tier_color,
            bands: gauge_bands(),
            threshold: GOOD_THRESHOLD,
        };

        let factors = result
            .risk_factors
            .iter()
            .map(|entry| FactorBar {
                label: entry.factor.label(),
                value: entry.contribution,
                text: format!("{:.1}%", entry.contribution),
                color: factor_color(entry.contribution, tier_color),
            })
            .collect();

        let (headline, subtitle, action) = match result.classification {
            Classification::Good => (
                "LOAN APPROVED",
                "Low Default Risk",
                "Approve with standard terms",
            ),
            Classification::Bad => (
                "LOAN DECLINED",
                "High Default Risk",
                "Decline or require additional collateral",
            ),
        };

        let recommendation = RecommendationView {
            approved: result.classification.is_approved(),
            headline,
            subtitle,
            credit_score_line: format!("{:.0}/850 ({})", result.credit_score, tier),
            default_probability: percent(result.proba_bad),
            action,
        };

        Self {
            summary,
            gauge,
            factors,
            recommendation,
            assessed_at: result
                .assessed_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

fn factor_color(value: f64, tier_color: &'static str) -> &'static str {
    if value > FACTOR_HIGH_LINE {
        tier_color
    } else if value > FACTOR_MEDIUM_LINE {
        FACTOR_MEDIUM_COLOR
    } else {
        FACTOR_LOW_COLOR
    }
}

fn gauge_bands() -> Vec<GaugeBand> {
    GAUGE_FILLS
        .iter()
        .map(|(lowest, highest, color)| GaugeBand {
            from: tier_range(*lowest).0,
            to: tier_range(*highest).1,
            color: *color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{FactorContribution, RiskFactor};
    use chrono::{TimeZone, Utc};

    fn result(proba_good: f64, tier: RiskTier, classification: Classification) -> AssessmentResult {
        AssessmentResult {
            proba_good,
            proba_bad: 1.0 - proba_good,
            credit_score: 300.0 + 550.0 * proba_good,
            risk_tier: tier,
            classification,
            risk_factors: vec![
                FactorContribution {
                    factor: RiskFactor::PaymentHistory,
                    contribution: 45.0,
                },
                FactorContribution {
                    factor: RiskFactor::EmploymentStatus,
                    contribution: 25.0,
                },
                FactorContribution {
                    factor: RiskFactor::PreviousPerformance,
                    contribution: 5.0,
                },
            ],
            assessed_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn summary_formats_score_and_percentages() {
        let view = AssessmentView::from_result(&result(0.5, RiskTier::Poor, Classification::Good));

        assert_eq!(view.summary.credit_score, "575");
        assert_eq!(view.summary.risk_tier, "Poor");
        assert_eq!(view.summary.tier_color, "#f97316");
        assert_eq!(view.summary.default_probability, "50.0%");
        assert_eq!(view.summary.repayment_probability, "50.0%");
    }

    #[test]
    fn factor_colors_follow_thresholds() {
        let view =
            AssessmentView::from_result(&result(0.2, RiskTier::VeryPoor, Classification::Bad));

        let colors: Vec<_> = view.factors.iter().map(|bar| bar.color).collect();
        assert_eq!(colors, vec!["#ef4444", "#f59e0b", "#10b981"]);
        assert_eq!(view.factors[0].text, "45.0%");
    }

    #[test]
    fn gauge_bands_cover_the_scale() {
        let view =
            AssessmentView::from_result(&result(1.0, RiskTier::Excellent, Classification::Good));

        let ranges: Vec<_> = view.gauge.bands.iter().map(|band| (band.from, band.to)).collect();
        assert_eq!(
            ranges,
            vec![(300.0, 575.0), (575.0, 650.0), (650.0, 750.0), (750.0, 850.0)]
        );
        assert_eq!(view.gauge.threshold, 575.0);
        assert_eq!(view.gauge.bar_color, "#10b981");
    }

    #[test]
    fn recommendation_matches_classification() {
        let approved =
            AssessmentView::from_result(&result(0.9, RiskTier::Excellent, Classification::Good));
        assert!(approved.recommendation.approved);
        assert_eq!(approved.recommendation.headline, "LOAN APPROVED");
        assert_eq!(approved.recommendation.credit_score_line, "795/850 (Excellent)");

        let declined =
            AssessmentView::from_result(&result(0.1, RiskTier::VeryPoor, Classification::Bad));
        assert!(!declined.recommendation.approved);
        assert_eq!(
            declined.recommendation.action,
            "Decline or require additional collateral"
        );
        assert_eq!(declined.recommendation.default_probability, "90.0%");
    }
}
