//! TrustLens CLI - product-URL trust verdicts from the terminal.
//!
//! Runs the full tiered resolution pipeline: Gemini primary tier,
//! Gemini secondary tier, offline estimator. Without a `GEMINI_API_KEY`
//! the verdict comes from the offline estimator alone.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trustlens_core::AnalysisResult;
use trustlens_runtime::{ApiCredential, ResolverConfig, TrustResolver, GEMINI_API_KEY_ENV};

#[derive(Parser)]
#[command(name = "trustlens", version, about = "Is this product URL trustworthy?")]
struct Cli {
    /// The e-commerce product URL to analyze
    url: String,

    /// Emit the raw result record as JSON
    #[arg(long)]
    json: bool,

    /// Override the primary tier model
    #[arg(long)]
    primary_model: Option<String>,

    /// Override the secondary tier model
    #[arg(long)]
    secondary_model: Option<String>,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "trustlens=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_text(result: &AnalysisResult) {
    println!("{}  (score {}/100)", result.verdict, result.trust_score);
    println!("URL: {}", result.url);

    println!("\nReasons:");
    for reason in &result.reasons {
        println!("  - {}", reason);
    }

    println!("\nAdvice: {}", result.advice);

    let sections = [
        ("Reviews", &result.breakdown.reviews),
        ("Sentiment", &result.breakdown.sentiment),
        ("Price", &result.breakdown.price),
        ("Seller", &result.breakdown.seller),
        ("Description", &result.breakdown.description),
    ];
    println!("\nBreakdown:");
    for (label, entries) in sections {
        println!("  {}:", label);
        for entry in entries {
            println!("    - {}", entry);
        }
    }

    if !result.sources.is_empty() {
        println!("\nSources:");
        for source in &result.sources {
            println!("  - {}", source);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = ResolverConfig::default();
    if let Some(model) = cli.primary_model {
        config.primary_model = model;
    }
    if let Some(model) = cli.secondary_model {
        config.secondary_model = model;
    }

    let credential = ApiCredential::from_env(GEMINI_API_KEY_ENV).ok();
    if credential.is_none() {
        tracing::info!(
            "{} not set, verdict will come from the offline estimator",
            GEMINI_API_KEY_ENV
        );
    }

    let resolver = TrustResolver::new(credential, config);
    let result = resolver.analyze(&cli.url).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_text(&result);
    }

    Ok(())
}
