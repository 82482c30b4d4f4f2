//! Form preview binary - replays a field set definition and prints the result
//!
//! Usage:
//!   cargo run --bin form-preview                       # Uses FORM_DEFINITION
//!   cargo run --bin form-preview -- data/dish.json     # Explicit definition file
//!
//! Optional environment variables:
//! - FORM_LANGUAGES (defaults to kor,eng,jpn,rus)
//! - FORM_DEFINITION (defaults to data/form_preview.json)
//! - FORM_TODAY (YYYY-MM-DD, defaults to the local date)

use anyhow::Result;
use pantry_forms::{config::Config, preview::PreviewDefinition};
use std::collections::BTreeMap;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("form_preview=info".parse()?)
                .add_directive("pantry_forms=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let registry = config.language_registry()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.form_definition.clone());
    info!("Loading preview definition from {}", path);

    let definition = PreviewDefinition::load(&path)?;
    let preview = definition.replay(&registry)?;

    println!("{}", preview.html());

    if !preview.notices.is_empty() {
        println!("Notices:");
        for notice in &preview.notices {
            println!("  - {}", notice);
        }
        println!();
    }

    if let Some(stock) = &definition.stock {
        let view = stock.view(config.today());
        println!("Stock form:");
        println!("{}", serde_json::to_string_pretty(&view)?);
        println!();
    }

    let summaries: BTreeMap<_, _> = preview.summaries().into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    info!("Preview complete");
    Ok(())
}
