//! Gharkhoj binary — serves the search endpoint or runs one-shot queries.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gharkhoj::config::GharkhojConfig;
use gharkhoj::generation::huggingface::HuggingFaceGenerator;
use gharkhoj::generation::TextGenerator;
use gharkhoj::pipeline::{Pipeline, SearchService};
use gharkhoj::retrieval::huggingface::HuggingFaceEmbedder;
use gharkhoj::retrieval::qdrant::QdrantRetriever;
use gharkhoj::retrieval::{Embedder, Retriever};
use gharkhoj::{logging, server};

#[derive(Debug, Parser)]
#[command(name = "gharkhoj", about = "Property-search assistant")]
struct Cli {
    /// Explicit config file path (default: ./gharkhoj.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve {
        /// Override the bind address from config.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run a single query and print the response.
    Query {
        /// Free-text query.
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GharkhojConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Query { text } => {
            logging::init_cli();
            let service = build_service(&config);
            let outcome = service.search(&text).await?;
            println!("{}", outcome.llm_response);
            Ok(())
        }
    }
}

async fn serve(config: GharkhojConfig, bind: Option<String>) -> Result<()> {
    let _guard = logging::init_production(
        std::path::Path::new(&config.server.logs_dir),
        &config.server.log_level,
    )?;

    let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
    let service = build_service(&config);
    let app = server::router(service);

    info!(%bind_addr, collection = %config.qdrant.collection, "gharkhoj starting");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server error")?;
    Ok(())
}

/// Construct the collaborator graph explicitly — no process-wide globals.
fn build_service(config: &GharkhojConfig) -> Arc<SearchService> {
    let embedder: Arc<dyn Embedder> = Arc::new(HuggingFaceEmbedder::new(
        config.huggingface.embed_model.clone(),
        config.huggingface.api_key.clone(),
    ));
    let retriever: Arc<dyn Retriever> =
        Arc::new(QdrantRetriever::new(config.qdrant.clone(), embedder));
    let generator: Arc<dyn TextGenerator> = Arc::new(HuggingFaceGenerator::new(
        config.huggingface.model.clone(),
        config.huggingface.api_key.clone(),
    ));
    let pipeline = Pipeline::new(generator, config.generation.params());
    Arc::new(SearchService::new(retriever, pipeline))
}
