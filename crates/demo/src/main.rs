//! Labkit Demo - Main entry point.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod showcase;

use config::{DemoConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging; stdout is reserved for the walkthrough itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labkit_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::from_env().context("Failed to load demo configuration")?;
    tracing::info!(format = ?config.format, brand = %config.auto_brand, "Starting Labkit demo");

    let walk = showcase::run(&config).context("Walkthrough failed")?;
    tracing::info!(steps = walk.steps().len(), "Walkthrough complete");
    let steps = walk.into_steps();

    match config.format {
        OutputFormat::Text => {
            for step in &steps {
                println!("{}: {}", step.label, step.text);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&steps)
                .context("Failed to serialize walkthrough")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
