use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::{error, info, warn};

use crate::classifier::ClassificationEngine;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::ingest;
use crate::types::BatchSummary;

#[derive(Args)]
pub struct BatchCommand {
    /// Path to a JSON Lines file, one classification request per line
    input: PathBuf,

    /// Optional path for per-record JSON results (one result per line)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run the detector set on scoped threads (overrides config.toml)
    #[arg(long)]
    parallel: bool,
}

impl BatchCommand {
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
        let parallel = self.parallel || app_config.classification.parallel;

        info!("=== Starting Batch Classification ===");
        info!("Input: {}", self.input.display());

        let reader = BufReader::new(File::open(&self.input)?);
        let mut output = match &self.output {
            Some(path) => Some(File::create(path)?),
            None => None,
        };

        let summary = process_batch(&engine, parallel, reader, output.as_mut())?;
        print_summary(&summary);
        Ok(())
    }
}

/// Classify every JSON Lines record in the reader.
///
/// Individual malformed records are logged and counted, and processing
/// continues - one broken line must never abort the batch, mirroring the
/// per-detector isolation inside the engine.
pub fn process_batch<R: BufRead, W: Write>(
    engine: &ClassificationEngine,
    parallel: bool,
    reader: R,
    mut output: Option<&mut W>,
) -> AppResult<BatchSummary> {
    let mut summary = BatchSummary::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (tx, receipt) = match ingest::request_from_json(&line) {
            Ok(pair) => pair,
            Err(e) => {
                error!("Skipping record at line {}: {}", index + 1, e);
                summary.record_error();
                continue;
            }
        };

        let result = if parallel {
            engine.classify_parallel(&tx, &receipt)
        } else {
            engine.classify(&tx, &receipt)
        };

        if let Some(writer) = output.as_deref_mut() {
            writeln!(writer, "{}", serde_json::to_string(&result)?)?;
        }
        summary.record(&result);
    }

    Ok(summary)
}

fn print_summary(summary: &BatchSummary) {
    info!("=== Batch Classification Complete ===");
    info!("Records processed: {}", summary.records_processed);
    if summary.errors_encountered > 0 {
        info!("Errors encountered: {}", summary.errors_encountered);
    }
    info!("Classification Breakdown:");
    for (tx_type, count) in &summary.by_type {
        info!(
            "  {:<20} {} ({:.1}%)",
            tx_type.to_string(),
            count,
            summary.percentage(*tx_type)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registries;
    use crate::types::TransactionType;
    use std::io::Cursor;
    use std::sync::Arc;

    fn engine() -> ClassificationEngine {
        ClassificationEngine::standard(Arc::new(Registries::builtin().unwrap()))
    }

    fn swap_line() -> String {
        serde_json::json!({
            "transaction": {
                "hash": format!("0x{}", "aa".repeat(32)),
                "to": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
                "from": format!("0x{}", "11".repeat(20)),
                "input": "0x38ed17390000",
                "value": "0x0",
                "chainId": 1
            },
            "receipt": { "status": "0x1", "logs": [] }
        })
        .to_string()
    }

    #[test]
    fn test_malformed_lines_are_counted_and_skipped() {
        let input = format!("{}\nnot json\n\n{}\n", swap_line(), swap_line());
        let mut out: Vec<u8> = Vec::new();
        let summary = process_batch(
            &engine(),
            false,
            Cursor::new(input),
            Some(&mut Cursor::new(&mut out)),
        )
        .unwrap();

        assert_eq!(summary.records_processed, 2);
        assert_eq!(summary.errors_encountered, 1);
        assert_eq!(summary.by_type[&TransactionType::Swap], 2);

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.lines().count(), 2);
    }
}
