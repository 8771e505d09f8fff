use std::io::Read;
use std::path::Path;

use super::classifier::RepaymentClassifier;
use super::domain::LoanApplication;
use super::service::{Assessment, AssessmentError, AssessmentService};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read applications file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applications CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single row produced no assessment.
#[derive(Debug, thiserror::Error)]
pub enum BatchRowError {
    #[error("unreadable row: {0}")]
    Parse(#[source] csv::Error),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Outcome for one CSV row; `row` is 1-based and excludes the header.
#[derive(Debug)]
pub struct BatchRow {
    pub row: usize,
    pub outcome: Result<Assessment, BatchRowError>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub approved: usize,
    pub declined: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            match &row.outcome {
                Ok(assessment) if assessment.result.classification.is_approved() => {
                    summary.approved += 1
                }
                Ok(_) => summary.declined += 1,
                Err(_) => summary.rejected += 1,
            }
            summary
        })
    }
}

/// Header problems fail the whole file; a bad record only fails its own row.
pub fn parse_applications<R: Read>(
    reader: R,
) -> Result<Vec<Result<LoanApplication, csv::Error>>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.headers()?;
    Ok(csv_reader.deserialize::<LoanApplication>().collect())
}

pub fn assess_reader<R, C>(
    reader: R,
    service: &AssessmentService<C>,
) -> Result<Vec<BatchRow>, BatchError>
where
    R: Read,
    C: RepaymentClassifier + 'static,
{
    let parsed = parse_applications(reader)?;

    Ok(parsed
        .into_iter()
        .enumerate()
        .map(|(index, application)| BatchRow {
            row: index + 1,
            outcome: match application {
                Ok(application) => service.assess(&application).map_err(BatchRowError::from),
                Err(err) => Err(BatchRowError::Parse(err)),
            },
        })
        .collect())
}

pub fn assess_path<P, C>(
    path: P,
    service: &AssessmentService<C>,
) -> Result<Vec<BatchRow>, BatchError>
where
    P: AsRef<Path>,
    C: RepaymentClassifier + 'static,
{
    let file = std::fs::File::open(path)?;
    assess_reader(file, service)
}
