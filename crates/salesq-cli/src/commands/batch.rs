//! Batch command - extract data from multiple quotation HTML files.
//!
//! Failures are isolated per file: one bad quotation page never prevents the
//! others from producing output, matching the pipeline's propagation policy.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error};

use salesq_core::{QuotationParser, QuotationRecord};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input HTML files, in quotation order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file for the JSON report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Abort on the first failing file instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

/// Result of processing a single file.
#[derive(Serialize)]
struct FileResult {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<QuotationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    let parser = QuotationParser::new();

    println!(
        "{} Found {} files to process",
        style("i").blue(),
        args.inputs.len()
    );

    let progress = ProgressBar::new(args.inputs.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(args.inputs.len());
    for (i, path) in args.inputs.iter().enumerate() {
        let file_start = Instant::now();
        // Quotation indices are 1-based by contract.
        let outcome = process_file(&parser, path, i + 1);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(record) => {
                debug!(path = %path.display(), "parsed quotation");
                FileResult {
                    path: path.clone(),
                    record: Some(record),
                    error: None,
                    processing_time_ms,
                }
            }
            Err(err) => {
                error!(path = %path.display(), %err, "failed to parse quotation");
                if args.fail_fast {
                    progress.finish_and_clear();
                    return Err(err.context(format!("while processing {}", path.display())));
                }
                FileResult {
                    path: path.clone(),
                    record: None,
                    error: Some(err.to_string()),
                    processing_time_ms,
                }
            }
        };

        results.push(result);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let succeeded = results.iter().filter(|r| r.record.is_some()).count();
    let failed = results.len() - succeeded;

    let report = serde_json::to_string_pretty(&results)?;
    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            println!(
                "{} Wrote {} records to {}",
                style("✓").green(),
                succeeded,
                path.display()
            );
        }
        None => println!("{report}"),
    }

    println!(
        "{} {} succeeded, {} failed in {:.1}s",
        if failed == 0 {
            style("✓").green()
        } else {
            style("!").yellow()
        },
        succeeded,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn process_file(
    parser: &QuotationParser,
    path: &PathBuf,
    index: usize,
) -> anyhow::Result<QuotationRecord> {
    let html = fs::read_to_string(path)?;
    let url = format!("file://{}", path.display());
    let result = parser.parse(&html, &url, index)?;

    for warning in &result.warnings {
        eprintln!(
            "{} {}: {}",
            style("warning:").yellow().bold(),
            path.display(),
            warning
        );
    }

    Ok(result.record)
}
