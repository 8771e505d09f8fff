use loan_risk::assessment::{Assessment, AssessmentError, AssessmentView, BatchRow, BatchSummary};

/// Plain-text rendering of a single assessment for terminal output.
pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let view = AssessmentView::from_result(&assessment.result);
    let summary = &view.summary;
    let recommendation = &view.recommendation;

    let mut lines = vec![
        format!("Loan risk assessment ({})", view.assessed_at),
        format!(
            "- Credit score: {} | {} {}",
            summary.credit_score, summary.tier_icon, summary.risk_tier
        ),
        format!(
            "- Default probability: {} | Repayment probability: {}",
            summary.default_probability, summary.repayment_probability
        ),
    ];

    if !assessment.warnings.is_empty() {
        lines.push("Warnings:".to_string());
        lines.extend(assessment.warnings.iter().map(|warning| format!("  - {warning}")));
    }

    lines.push("Risk factors:".to_string());
    lines.extend(
        view.factors
            .iter()
            .map(|bar| format!("  - {:<22} {:>6}", bar.label, bar.text)),
    );

    lines.push(format!(
        "Recommendation: {} ({})",
        recommendation.headline, recommendation.subtitle
    ));
    lines.push(format!("- Credit score: {}", recommendation.credit_score_line));
    lines.push(format!(
        "- Default probability: {}",
        recommendation.default_probability
    ));
    lines.push(format!("- Action: {}", recommendation.action));

    lines.join("\n")
}

/// Blocking errors listed one per line, as shown when an assessment is refused.
pub(crate) fn render_rejection(err: &AssessmentError) -> String {
    match err {
        AssessmentError::Validation { errors } => std::iter::once("Assessment blocked:".to_string())
            .chain(errors.iter().map(|error| format!("  - {error}")))
            .collect::<Vec<_>>()
            .join("\n"),
        other => format!("Assessment failed: {other}. Check the inputs and try again."),
    }
}

pub(crate) fn render_batch_row(row: &BatchRow) -> String {
    match &row.outcome {
        Ok(assessment) => {
            let result = &assessment.result;
            let line = format!(
                "row {}: score {:.0} | {} | {}",
                row.row, result.credit_score, result.risk_tier, result.classification
            );
            match assessment.warnings.len() {
                0 => line,
                count => format!("{line} | {count} warning(s)"),
            }
        }
        Err(err) => format!("row {}: rejected ({err})", row.row),
    }
}

pub(crate) fn render_batch_summary(summary: &BatchSummary) -> String {
    format!(
        "{} approved | {} declined | {} rejected",
        summary.approved, summary.declined, summary.rejected
    )
}
