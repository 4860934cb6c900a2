use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum, builder::styling};
use shabecal_provider_vertexai::contracts::{DEFAULT_MODEL, DEFAULT_REGION};
use tracing_subscriber::EnvFilter;

mod commands;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "shabecal: SOAP notes from consultation recordings",
    long_about = "Summarizes a recorded consultation into a SOAP-format medical record with Gemini on Vertex AI, using your own service-account key.",
    styles = STYLES
)]
struct Cli {
    #[arg(short, long, global = true, default_value_t = false, help = "Log progress to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a recording into a SOAP note
    Summarize(SummarizeArgs),
    /// Print an OAuth2 access token for the key
    Token(TokenArgs),
}

#[derive(clap::Args, Debug)]
pub struct SummarizeArgs {
    #[arg(short, long, env = "SHABECAL_KEY_FILE", help = "Service-account key JSON")]
    pub key: PathBuf,

    #[arg(short, long, help = "Recorded consultation")]
    pub audio: PathBuf,

    #[arg(long, help = "Audio MIME type (inferred from the file extension when omitted)")]
    pub mime: Option<String>,

    #[arg(long, env = "VERTEXAI_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    #[arg(short, long, env = "VERTEXAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(short, long, help = "File with a custom summary prompt")]
    pub prompt_file: Option<PathBuf>,

    #[arg(short, long, help = "Also write the note to this file")]
    pub output: Option<PathBuf>,

    #[arg(long, env = "VERTEXAI_API_URL", hide = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct TokenArgs {
    #[arg(short, long, env = "SHABECAL_KEY_FILE", help = "Service-account key JSON")]
    pub key: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Scope::Vertex)]
    pub scope: Scope,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Vertex,
    Storage,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Command::Summarize(args) => commands::summarize(args).await,
        Command::Token(args) => commands::token(args).await,
    }
}
