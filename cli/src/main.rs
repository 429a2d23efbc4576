//! CLI entrypoint for verity
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use verity_application::{
    AnswerGenerator, AnswerVerifier, DraftAndVerifyInput, DraftAndVerifyUseCase,
};
use verity_domain::{ApiKey, Document, OutputFormat};
use verity_infrastructure::{ConfigLoader, FileConfig, LocalDocumentLoader, OpenAiGateway};
use verity_presentation::{Cli, ConsoleFormatter, ProgressMode};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting verity");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.models.generator = Some(model.clone());
    }
    if let Some(model) = &cli.verifier_model {
        config.models.verifier = Some(model.clone());
    }

    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    // A missing key is reported by check_config; the blank key is rejected
    // again when the agents are built.
    let api_key = config
        .providers
        .openai
        .resolve_api_key()
        .unwrap_or_else(|| ApiKey::new(""));

    let gateway = Arc::new(OpenAiGateway::from_config(&config.providers.openai)?);
    info!("Using endpoint {}", gateway.endpoint());

    let generator = AnswerGenerator::new(
        gateway.clone(),
        config.models.generator_config(api_key.clone()),
    )?;
    let verifier = AnswerVerifier::new(gateway, config.models.verifier_config(api_key))?;

    // === Inputs ===
    let documents = load_documents(&cli)?;
    if documents.is_empty() {
        warn!("No documents supplied; the answer will be drafted from an empty context");
    }

    let question = match cli.question {
        Some(q) => q,
        None => read_question_from_stdin()?,
    };

    let mut input = DraftAndVerifyInput::new(question, documents);
    if cli.no_verify {
        input = input.without_verification();
    }

    // === Run ===
    let use_case = DraftAndVerifyUseCase::new(generator, verifier);

    let show_progress = !cli.quiet && format != OutputFormat::Json;
    let progress = ProgressMode::select(show_progress, std::io::stderr().is_terminal()).notifier();
    let report = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format(&report),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&report),
        OutputFormat::Json => format!("{}\n", ConsoleFormatter::format_json(&report)),
    };

    print!("{}", output);

    Ok(())
}

/// Install the subscriber: stderr always, plus `log_file` when given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print every configuration issue; fail if any is an error.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();

    for issue in &issues {
        if issue.is_error() {
            eprintln!("{} {}", "error:".red().bold(), issue.message);
        } else {
            eprintln!("{} {}", "warning:".yellow().bold(), issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

/// Documents from `--doc` files first, then from the `--documents` JSON file.
fn load_documents(cli: &Cli) -> Result<Vec<Document>> {
    let loader = LocalDocumentLoader::new();

    let mut documents = loader.load_files(&cli.docs)?;
    if let Some(path) = &cli.documents {
        documents.extend(loader.load_json(path)?);
    }

    info!("Loaded {} document(s)", documents.len());
    Ok(documents)
}

fn read_question_from_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("Question is required. Pass it as an argument or pipe it on stdin.");
    }

    let mut question = String::new();
    stdin
        .read_to_string(&mut question)
        .context("Failed to read question from stdin")?;

    let question = question.trim();
    if question.is_empty() {
        bail!("Question read from stdin is empty");
    }
    Ok(question.to_string())
}
