use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use shabecal_auth::{
    BrokerConfig, CredentialBroker, FileCredentialSource, ReqwestTokenTransport, SystemClock, load_credential,
};
use shabecal_provider_vertexai::contracts::mime_type_for_extension;
use shabecal_provider_vertexai::{AudioClip, SummarySettings, VertexAiClient};
use tracing::info;

use crate::{Scope, SummarizeArgs, TokenArgs};

pub async fn summarize(args: SummarizeArgs) -> Result<()> {
    let credential = load_credential(&FileCredentialSource::new(args.key.clone()))
        .with_context(|| format!("loading key {}", args.key.display()))?;

    let data = fs::read(&args.audio).with_context(|| format!("reading audio {}", args.audio.display()))?;
    let mime_type = args.mime.clone().or_else(|| guess_mime_type(&args.audio));
    let audio = AudioClip::new(data, mime_type);

    let prompt = match &args.prompt_file {
        Some(path) => Some(fs::read_to_string(path).with_context(|| format!("reading prompt {}", path.display()))?),
        None => None,
    };
    let settings = SummarySettings {
        region: args.region.clone(),
        model: args.model.clone(),
        prompt,
        ..Default::default()
    };

    let mut client = VertexAiClient::new(Arc::new(CredentialBroker::vertex_ai()));
    if let Some(api_url) = &args.api_url {
        client = client.with_api_url(api_url.clone());
    }

    info!(audio = %args.audio.display(), mime_type = audio.mime_type(), "Summarizing recording");
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.green} {msg}")?);
    pb.set_message("Summarizing...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let note = client.transcribe_and_summarize(&credential, &audio, &settings).await;
    pb.finish_and_clear();
    let note = note?;

    println!("{}", note);
    if let Some(output) = &args.output {
        fs::write(output, &note).with_context(|| format!("writing {}", output.display()))?;
        eprintln!("{} {}", "Saved to".green(), output.display());
    }
    Ok(())
}

pub async fn token(args: TokenArgs) -> Result<()> {
    let config = match args.scope {
        Scope::Vertex => BrokerConfig::vertex_ai(),
        Scope::Storage => BrokerConfig::object_storage(),
    };
    let broker = CredentialBroker::new(config, Arc::new(ReqwestTokenTransport::new()), Arc::new(SystemClock))
        .with_source(Arc::new(FileCredentialSource::new(args.key.clone())));

    let token = broker.access_token().await?;
    println!("{}", token);
    Ok(())
}

fn guess_mime_type(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    mime_type_for_extension(extension).map(str::to_string)
}
