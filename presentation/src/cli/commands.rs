//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Draft answer, verification report and parsed verdict
    Text,
    /// Only the draft answer
    Answer,
    /// Both result records as JSON
    Json,
}

impl From<OutputFormat> for verity_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => verity_domain::OutputFormat::Text,
            OutputFormat::Answer => verity_domain::OutputFormat::Answer,
            OutputFormat::Json => verity_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for verity
#[derive(Parser, Debug)]
#[command(name = "verity")]
#[command(author, version, about = "Draft an answer from documents, then verify it against them")]
#[command(long_about = r#"
Verity answers a question using only the documents you give it, then asks a
second model call to check that answer against the same documents.

The run has two steps:
1. Draft: the question and the joined documents go to the generator model
2. Verify: the draft and the same documents go to the verifier model, which
   reports Supported / Unsupported Claims / Contradictions / Relevant

Configuration files are loaded from (in priority order):
1. VERITY_* environment variables (nested keys separated by "__")
2. --config <path>     Explicit config file
3. ./verity.toml       Project-level config (or ./.verity.toml)
4. ~/.config/verity/config.toml   Global config

The API key is read from OPENAI_API_KEY unless configured otherwise.

Example:
  verity "What is the capital of France?" --doc notes/france.txt
  verity --documents retrieved.json --output json < question.txt
  verity --no-verify --model gpt-4o "Summarize the incident" -d report.md
"#)]
pub struct Cli {
    /// The question to answer (read from stdin when omitted)
    pub question: Option<String>,

    /// Document file to use as context (can be specified multiple times)
    #[arg(short, long = "doc", value_name = "PATH")]
    pub docs: Vec<PathBuf>,

    /// JSON file with an array of {"content": ..., "metadata": {...}} documents
    #[arg(long, value_name = "PATH")]
    pub documents: Option<PathBuf>,

    /// Skip the verification step
    #[arg(long)]
    pub no_verify: bool,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Model used to draft the answer
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model used to verify the answer
    #[arg(long, value_name = "MODEL")]
    pub verifier_model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
