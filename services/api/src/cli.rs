use crate::infra::{load_service, resolve_model_path};
use crate::report::{render_assessment, render_batch_row, render_batch_summary, render_rejection};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_risk::assessment::{
    batch, AssessmentError, AssessmentResponse, BankAccountType, BatchRow, BatchRowError,
    BatchSummary, EmploymentStatus, LoanApplication,
};
use loan_risk::config::AppConfig;
use loan_risk::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Risk Assessment",
    about = "Score loan applications for default risk over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a single application given on the command line
    Assess(AssessArgs),
    /// Assess every application in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured classifier artifact
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

/// Unset fields take the intake form defaults.
#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Classifier artifact to score with
    #[arg(long)]
    model: Option<PathBuf>,
    /// Print the full response as JSON instead of the text report
    #[arg(long)]
    json: bool,
    #[arg(long, default_value_t = LoanApplication::default().loanamount)]
    loanamount: f64,
    #[arg(long, default_value_t = LoanApplication::default().termdays)]
    termdays: f64,
    #[arg(long, default_value_t = LoanApplication::default().repayment_curr_ratio)]
    repayment_curr_ratio: f64,
    #[arg(long, default_value_t = LoanApplication::default().num_prev_loans)]
    num_prev_loans: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = LoanApplication::default().avg_repay_delay_days
    )]
    avg_repay_delay_days: f64,
    #[arg(long, default_value_t = LoanApplication::default().total_firstrepaid_late)]
    total_firstrepaid_late: f64,
    #[arg(long, default_value_t = LoanApplication::default().avg_prev_repayment_ratio)]
    avg_prev_repayment_ratio: f64,
    #[arg(long, default_value_t = LoanApplication::default().avg_duration_days)]
    avg_duration_days: f64,
    #[arg(long, default_value_t = LoanApplication::default().avg_prev_interest)]
    avg_prev_interest: f64,
    #[arg(long, default_value_t = LoanApplication::default().age)]
    age: u8,
    /// Other, Savings, or Current
    #[arg(long, default_value_t = LoanApplication::default().bank_account_type)]
    bank_account_type: BankAccountType,
    /// Permanent, Unknown, Unemployed, Self-Employed, Student, Retired, or Contract
    #[arg(long, default_value_t = LoanApplication::default().employment_status_clients)]
    employment_status_clients: EmploymentStatus,
}

impl AssessArgs {
    fn application(&self) -> LoanApplication {
        LoanApplication {
            loanamount: self.loanamount,
            termdays: self.termdays,
            repayment_curr_ratio: self.repayment_curr_ratio,
            num_prev_loans: self.num_prev_loans,
            avg_repay_delay_days: self.avg_repay_delay_days,
            total_firstrepaid_late: self.total_firstrepaid_late,
            avg_prev_repayment_ratio: self.avg_prev_repayment_ratio,
            avg_duration_days: self.avg_duration_days,
            avg_prev_interest: self.avg_prev_interest,
            age: self.age,
            bank_account_type: self.bank_account_type,
            employment_status_clients: self.employment_status_clients,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one application per row, headed by the raw field names
    #[arg(long)]
    csv: PathBuf,
    /// Classifier artifact to score with
    #[arg(long)]
    model: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let model = resolve_model_path(args.model.clone(), &config.model.artifact_path);
    let service = load_service(&model)?;

    match service.assess(&args.application()) {
        Ok(assessment) if args.json => {
            let body = serde_json::to_string_pretty(&AssessmentResponse::from(assessment))
                .map_err(std::io::Error::from)?;
            println!("{body}");
            Ok(())
        }
        Ok(assessment) => {
            println!("{}", render_assessment(&assessment));
            Ok(())
        }
        Err(err @ AssessmentError::Classifier(_)) => Err(err.into()),
        Err(err) => {
            eprintln!("{}", render_rejection(&err));
            Ok(())
        }
    }
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let model = resolve_model_path(args.model, &config.model.artifact_path);
    let service = load_service(&model)?;

    let rows = batch::assess_path(&args.csv, &service)?;
    println!("Assessed {} application(s) from {}", rows.len(), args.csv.display());
    for row in &rows {
        println!("{}", render_batch_row(row));
    }
    println!("{}", render_batch_summary(&BatchSummary::from_rows(&rows)));

    first_classifier_failure(rows)
}

/// A broken model fails the whole run, as it does for `assess`.
fn first_classifier_failure(rows: Vec<BatchRow>) -> Result<(), AppError> {
    let failure = rows.into_iter().find_map(|row| match row.outcome {
        Err(BatchRowError::Assessment(err @ AssessmentError::Classifier(_))) => Some(err),
        _ => None,
    });
    failure.map_or(Ok(()), |err| Err(err.into()))
}
