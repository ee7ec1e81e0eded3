//! # pagelens CLI
//!
//! Command-line entry point for the pagelens service.
//!
//! ## Subcommands
//!
//! - `serve`: run the HTTP API (`POST /api/extract`)
//! - `extract`: process a single URL and print the result
//! - `taxonomy`: print the classification rules
//!
//! Every command that runs the pipeline needs a summarization API key, passed
//! with `--api-key` or the `MISTRAL_API_KEY` environment variable.

mod telemetry;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use pagelens::config::AppConfig;
use pagelens::pipeline::{Pipeline, PipelineResult};
use pagelens::taxonomy::Taxonomy;
use tracing::instrument;

#[derive(Parser)]
#[command(author, version, about = "Extract, classify and summarize web pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the extraction API over HTTP
    Serve(ServeArgs),

    /// Extract, classify and summarize a single URL
    Extract(ExtractArgs),

    /// Print the classification taxonomy
    Taxonomy(TaxonomyArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, env = "PAGELENS_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    #[command(flatten)]
    config: AppConfig,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// URL of the page to process
    #[arg(required = true)]
    url: String,

    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(flatten)]
    config: AppConfig,
}

#[derive(Args, Debug)]
struct TaxonomyArgs {
    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _otel = telemetry::init_tracing_subscriber()?;

    match cli.command {
        Some(Commands::Serve(args)) => serve_command(args).await?,
        Some(Commands::Extract(args)) => extract_command(args).await?,
        Some(Commands::Taxonomy(args)) => taxonomy_command(args)?,
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["pagelens", "--help"]);
        }
    }

    Ok(())
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<Pipeline> {
    let pipeline_config = config.pipeline_config()?;
    Ok(Pipeline::from_config(
        &pipeline_config,
        Arc::new(Taxonomy::builtin()),
    )?)
}

#[instrument]
async fn serve_command(args: ServeArgs) -> anyhow::Result<()> {
    let pipeline = build_pipeline(&args.config)?;
    pagelens::server::run_server(&args.bind, pipeline).await
}

#[instrument]
async fn extract_command(args: ExtractArgs) -> anyhow::Result<()> {
    let pipeline = build_pipeline(&args.config)?;
    let result = pipeline.run(Some(&args.url)).await?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_result(&result),
    }

    Ok(())
}

fn print_result(result: &PipelineResult) {
    let metadata = &result.metadata;
    println!("Title:       {}", metadata.title);
    println!("URL:         {}", result.url);
    if !metadata.description.is_empty() {
        println!("Description: {}", metadata.description);
    }
    if let Some(image) = &metadata.image {
        println!("Image:       {}", image);
    }
    println!(
        "Category:    {} / {}",
        result.classification.category, result.classification.subcategory
    );
    if !metadata.keywords.is_empty() {
        println!("Keywords:    {}", metadata.keywords.join(", "));
    }
    println!("Extracted:   {}", result.extracted_at.to_rfc3339());
    println!("\nSummary:\n{}", result.summary);
}

fn taxonomy_command(args: TaxonomyArgs) -> anyhow::Result<()> {
    let taxonomy = Taxonomy::builtin();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&taxonomy)?),
        _ => {
            println!("{} rules", taxonomy.len());
            for (i, rule) in taxonomy.rules().iter().enumerate() {
                println!("{:>2}. {} / {}", i + 1, rule.category, rule.subcategory);
                println!("    keywords: {}", rule.keywords.join(", "));
                if !rule.domains.is_empty() {
                    println!("    domains:  {}", rule.domains.join(", "));
                }
            }
        }
    }

    Ok(())
}
