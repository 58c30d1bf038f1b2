use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use golden::config::{Config, LlmConfig};
use golden::enhancement::Enhancer;
use golden::errors::AppError;
use golden::llm_client::build_generator;
use golden::pipeline::{load_sources, Pipeline, SourceSpec};

/// Merge CV, GitHub and LinkedIn records into one profile and print it as JSON.
#[derive(Debug, Parser)]
#[command(name = "golden", version, about)]
struct Cli {
    /// Source record as <kind>=<path>, kind one of cv, github, linkedin.
    /// Repeatable; sources are merged in the order given.
    #[arg(long = "source", value_name = "KIND=PATH")]
    sources: Vec<SourceSpec>,

    /// Use this profile id instead of a generated UUID.
    #[arg(long)]
    profile_id: Option<String>,

    /// Skip the LLM enhancement pass. LLM_* variables are then not read.
    #[arg(long)]
    skip_enhance: bool,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr; stdout carries the profile JSON only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting golden v{}", env!("CARGO_PKG_VERSION"));

    let enhancer = if cli.skip_enhance {
        None
    } else {
        let llm = LlmConfig::from_env()?;
        let generator = build_generator(llm.provider, llm.settings()?).map_err(AppError::from)?;
        info!(
            "LLM client initialized (provider: {}, model: {})",
            llm.provider,
            generator.model()
        );
        Some(Enhancer::new(generator))
    };

    let sources = load_sources(&cli.sources).await?;
    let pipeline = Pipeline::new(enhancer);
    let profile = match cli.profile_id {
        Some(id) => pipeline.run_with_id(id, &sources).await?,
        None => pipeline.run(&sources).await?,
    };

    let output = if cli.compact {
        serde_json::to_string(&profile)
    } else {
        serde_json::to_string_pretty(&profile)
    }
    .map_err(AppError::Output)?;
    println!("{output}");

    Ok(())
}
