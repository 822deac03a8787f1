use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::classifier::ClassificationEngine;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::ingest;
use crate::types::ClassificationResult;

#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to a JSON classification request ({"transaction": ..., "receipt": ...}),
    /// or "-" to read from stdin
    input: PathBuf,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Run the detector set on scoped threads (overrides config.toml)
    #[arg(long)]
    parallel: bool,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                info!("Using default configuration");
                AppConfig::get_defaults()
            }
        };

        let registries = super::super::build_registries(&app_config)?;
        let engine = ClassificationEngine::standard(registries);

        let text = if self.input.to_str() == Some("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(&self.input)?
        };

        let (tx, receipt) = ingest::request_from_json(&text)?;
        let result = if self.parallel || app_config.classification.parallel {
            engine.classify_parallel(&tx, &receipt)
        } else {
            engine.classify(&tx, &receipt)
        };

        print_result(&tx.hash, &result, self.json)?;
        Ok(())
    }
}

fn print_result(hash: &str, result: &ClassificationResult, as_json: bool) -> AppResult<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("Transaction: {}", hash);
        println!("  Label:      {}", result.label);
        println!("  Type:       {}", result.tx_type);
        println!("  Confidence: {:.2}", result.confidence);
        match &result.detector_id {
            Some(id) => println!("  Detector:   {}", id),
            None => println!("  Detector:   (no match)"),
        }
    }
    Ok(())
}
