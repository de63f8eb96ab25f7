use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod evaluation;
mod expr_parser;

use evaluation::{EvaluationResult, Pipeline};

/// Evaluates division expressions through `Maybe` combinators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one `x / y` expression per line
    #[arg(short, long)]
    input: PathBuf,

    /// Value reported when a quotient is absent
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    fallback: i64,

    /// Drop quotients smaller than this
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Show only rows whose quotient ended up absent
    #[arg(short, long)]
    absent_only: bool,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();

    println!("{}", "Maybe Evaluation Tool v0.1.0".bold().blue());
    println!("{}", "=====================================".blue());
    println!();

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", args.input);
    }
    if args.format != "text" && args.format != "json" {
        anyhow::bail!("Unknown output format: {}", args.format);
    }

    let pipeline = Pipeline { fallback: args.fallback, min: args.min.into() };
    info!(input = %args.input.display(), ?pipeline, "starting evaluation");

    println!("{} {}", "📖".bold(), "Reading expressions...".cyan());
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file {}", args.input.display()))?;

    let parsed = expr_parser::parse_expressions(&content)?;
    println!("  Found {} expression(s)", parsed.expressions.len());
    for skipped in &parsed.skipped {
        println!("  ⚠️  Skipped line {}: {} ({})", skipped.line, skipped.text, skipped.reason);
    }

    let result = evaluation::evaluate(&parsed.expressions, &pipeline);
    print_rows(&result, args.absent_only);
    print_overall_summary(&result);

    if args.format == "json" {
        let json_output = serde_json::to_string_pretty(&result)?;
        let output_path = args.input.with_extension("eval.json");
        fs::write(&output_path, json_output)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        println!();
        println!("📝 Results exported to: {}", output_path.display());
    } else {
        info!("{}", evaluation::generate_summary_report(&result, &pipeline));
    }

    Ok(())
}

fn print_rows(result: &EvaluationResult, absent_only: bool) {
    println!();
    println!("  {}", "Rows:".bold());
    for row in &result.rows {
        if absent_only && row.kept.is_present() {
            continue;
        }
        let shown = row.kept.map_or_else(
            || format!("absent -> {}", row.value).red(),
            |q| q.to_string().green(),
        );
        let doubled = row.doubled.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!("    line {:>3}: {:<24} {}  (x2: {})", row.line, row.expression, shown, doubled);
    }
}

fn print_overall_summary(result: &EvaluationResult) {
    println!();
    println!("{}", "=====================================".blue());
    println!("{}", "Overall Summary".bold().green());
    println!("{}", "=====================================".blue());

    let total = result.rows.len();
    let rate = if total == 0 { 0.0 } else { (result.present as f64 / total as f64) * 100.0 };

    println!("    Expressions evaluated: {}", total);
    println!("    Present: {} ({:.1}%)", result.present.to_string().green(), rate);
    println!("    Absent: {}", result.absent.to_string().red());
    if result.filtered_out > 0 {
        println!("    Filtered out by minimum: {}", result.filtered_out.to_string().yellow());
    }
}
