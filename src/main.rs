use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ink_insights::config::Config;
use ink_insights::output::terminal;
use ink_insights::pipeline::{Analyzer, Document};

/// Ink Insights: keywords, themes, sentiment and sensory language for a
/// single text document.
#[derive(Parser)]
#[command(name = "ink-insights", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text file and print the report
    Analyze {
        /// Path to the document (UTF-8 text)
        path: PathBuf,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Number of keywords to return (overrides INK_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,

        /// Seed for theme clustering (overrides INK_CLUSTER_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Serve the analysis API over HTTP
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides INK_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides INK_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ink_insights=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            json,
            top_n,
            seed,
        } => {
            let mut config = Config::load()?;
            if let Some(top_n) = top_n {
                config.top_n = top_n;
            }
            if let Some(seed) = seed {
                config.cluster_seed = seed;
            }
            config.validate()?;

            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let doc = Document::from_bytes(filename, &bytes, config.max_input_bytes)
                .with_context(|| format!("Cannot analyze {}", path.display()))?;
            info!(filename = %doc.filename, bytes = bytes.len(), "Analyzing document");

            let analyzer = Analyzer::new(config.analysis_settings());
            let report = analyzer.analyze_document(&doc);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            config.validate()?;

            ink_insights::web::run_server(config).await?;
        }
    }

    Ok(())
}
