//! Parse command - extract data from a single quotation HTML file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use salesq_core::{QuotationParser, QuotationRecord};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input HTML file
    #[arg(required = true)]
    input: PathBuf,

    /// Source URL to embed as the record's call-to-action link
    /// (default: a file:// URL for the input)
    #[arg(short, long)]
    url: Option<String>,

    /// 1-based ordinal of this quotation (used for placeholder titles)
    #[arg(short, long, default_value = "1")]
    index: usize,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let html = fs::read_to_string(&args.input)?;
    let url = args
        .url
        .unwrap_or_else(|| format!("file://{}", args.input.display()));

    let parser = QuotationParser::new();
    let result = parser.parse(&html, &url, args.index)?;
    debug!(ms = result.processing_time_ms, "parse finished");

    for warning in &result.warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.record)?,
        OutputFormat::Text => render_text(&result.record),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!(
                "{} Wrote record to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(record: &QuotationRecord) -> String {
    let mut lines = vec![format!("{}", style(&record.title).bold())];

    if let Some(subtitle) = &record.subtitle {
        lines.push(subtitle.clone());
    }
    if let Some(duration) = &record.duration {
        lines.push(format!("Duration:  {duration}"));
    }
    if let Some(total) = &record.total_amount_text {
        lines.push(format!("Total:     {total}"));
    }
    if let Some(summary) = &record.summary_line {
        lines.push(format!("Main line: {summary}"));
    }
    if let Some(savings) = &record.total_savings_text {
        lines.push(format!("Savings:   {savings}"));
        for entry in &record.savings_breakdown {
            lines.push(format!("  - {}: {}", entry.label, entry.amount_text));
        }
    }
    lines.push(format!("Terms:     {}", record.payment_terms));
    lines.push(format!("Link:      {}", record.cta_url));

    lines.join("\n")
}
