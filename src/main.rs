use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use stroke_risk::{
    Error,
    api::HttpPredictionClient,
    config,
    presentation::AssessmentReport,
    schema::{self, FieldValue, FormInput},
    submission::{Notification, Submission},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_FAILED: i32 = 1;
const EXIT_INVALID: i32 = 2;

#[derive(Parser)]
#[command(name = "stroke-risk")]
#[command(about = "Assess stroke risk by submitting health inputs to the prediction service")]
struct Args {
    /// YAML or JSON file with the form fields
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    fields: FieldArgs,

    /// Prediction service base URL (overrides config and environment)
    #[arg(long)]
    api_url: Option<String>,

    /// Output format for the result
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// List the options of every selectable field and exit
    #[arg(long)]
    list_options: bool,
}

/// Individual form fields; each overrides the same field from `--input`.
#[derive(clap::Args)]
struct FieldArgs {
    #[arg(long)]
    gender: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    age: Option<f64>,

    /// 0 or 1
    #[arg(long, allow_negative_numbers = true)]
    hypertension: Option<i64>,

    /// 0 or 1
    #[arg(long, allow_negative_numbers = true)]
    heart_disease: Option<i64>,

    #[arg(long)]
    ever_married: Option<String>,

    #[arg(long)]
    work_type: Option<String>,

    #[arg(long)]
    residence_type: Option<String>,

    /// mg/dL
    #[arg(long, allow_negative_numbers = true)]
    avg_glucose_level: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    bmi: Option<f64>,

    /// "formerly smoked", "never smoked", "smokes" or "unknown"
    #[arg(long)]
    smoking_status: Option<String>,

    /// Decision threshold between 0 and 1 (default 0.5)
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<f64>,
}

impl From<FieldArgs> for FormInput {
    fn from(args: FieldArgs) -> Self {
        Self {
            gender: args.gender.map(FieldValue::from),
            age: args.age.map(FieldValue::from),
            hypertension: args.hypertension.map(FieldValue::from),
            heart_disease: args.heart_disease.map(FieldValue::from),
            ever_married: args.ever_married.map(FieldValue::from),
            work_type: args.work_type.map(FieldValue::from),
            residence_type: args.residence_type.map(FieldValue::from),
            avg_glucose_level: args.avg_glucose_level.map(FieldValue::from),
            bmi: args.bmi.map(FieldValue::from),
            smoking_status: args.smoking_status.map(FieldValue::from),
            threshold: args.threshold.map(FieldValue::from),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

async fn read_form(path: Option<&PathBuf>) -> Result<FormInput> {
    let Some(path) = path else {
        return Ok(FormInput::default());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read form file {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse form file {}", path.display()))
}

fn print_options() {
    for field in schema::field_options() {
        println!("{}:", field.field);
        for (value, label) in field.options {
            println!("  {value:<16} {label}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_options {
        print_options();
        return Ok(());
    }

    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(EXIT_FAILED);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(EXIT_FAILED);
    }

    init_tracing(&log_level, args.json_logs)?;

    let form = read_form(args.input.as_ref())
        .await?
        .merge(args.fields.into());

    let config = config::apply_env_override(config, args.api_url);
    if let Err(e) = config::validate(&config) {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(EXIT_FAILED);
    }
    info!("Using prediction service at {}", config.api.base_url);

    let mut submission = Submission::new(HttpPredictionClient::new(&config.api));

    match submission.submit(&form).await.into_result() {
        Ok(response) => {
            let report = AssessmentReport::from_response(&response, chrono::Local::now().date_naive());
            match args.format {
                OutputFormat::Text => println!("{report}"),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }
            Ok(())
        }
        Err(Error::Validation(errors)) => {
            eprintln!("The form has {} invalid field(s):", errors.len());
            for (path, message) in errors.iter() {
                eprintln!("  {path}: {message}");
            }
            std::process::exit(EXIT_INVALID);
        }
        Err(Error::Api(api_error)) => {
            let notification = Notification::from_error(&api_error);
            eprintln!("{}: {}", notification.title, notification.description);
            std::process::exit(EXIT_FAILED);
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            std::process::exit(EXIT_FAILED);
        }
    }
}
