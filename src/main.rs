use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

// Use library instead of local modules
use receipt_processor::{init_logging, score_breakdown, validate, LogFormat, ScoreBreakdown};

#[derive(Parser, Debug)]
#[command(name = "receipt-processor", about = "Validate and score receipt files", version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print points and the per-rule breakdown for each receipt
    Score {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Print whether each receipt is valid
    Validate {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, "warn")?;

    let rejected = match cli.command {
        Commands::Score { files } => run_score(&files)?,
        Commands::Validate { files } => run_validate(&files)?,
    };

    if rejected > 0 {
        eprintln!("❌ {} receipt(s) rejected", rejected);
        std::process::exit(1);
    }

    Ok(())
}

fn load_receipt(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse receipt JSON: {:?}", path))
}

/// Score every file, returning how many were rejected
fn run_score(files: &[PathBuf]) -> Result<usize> {
    let mut rejected = 0;

    for path in files {
        let raw = load_receipt(path)?;
        match validate(&raw) {
            Ok(receipt) => {
                let breakdown = score_breakdown(&receipt);
                println!("📄 {} ({})", path.display(), receipt.retailer);
                print!("{}", format_breakdown(&breakdown));
            }
            Err(reason) => {
                println!("📄 {}: {}", path.display(), reason);
                rejected += 1;
            }
        }
    }

    Ok(rejected)
}

fn run_validate(files: &[PathBuf]) -> Result<usize> {
    let mut rejected = 0;

    for path in files {
        let raw = load_receipt(path)?;
        match validate(&raw) {
            Ok(_) => println!("✓ {}: valid", path.display()),
            Err(reason) => {
                println!("✗ {}: {}", path.display(), reason);
                rejected += 1;
            }
        }
    }

    Ok(rejected)
}

fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::new();
    for contribution in breakdown.awarded() {
        out.push_str(&format!(
            "   {:<20} {:>6}  {}\n",
            contribution.rule.name(),
            contribution.points,
            contribution.detail
        ));
    }
    out.push_str(&format!("   {:<20} {:>6}\n", "Total", breakdown.points));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("demos/receipts")
            .join(name)
    }

    #[test]
    fn test_demo_receipts_load_and_score() {
        let raw = load_receipt(&demo("target.json")).unwrap();
        let receipt = validate(&raw).unwrap();
        assert_eq!(score_breakdown(&receipt).points, 28);

        let raw = load_receipt(&demo("corner-market.json")).unwrap();
        let receipt = validate(&raw).unwrap();
        assert_eq!(score_breakdown(&receipt).points, 109);
    }

    #[test]
    fn test_rejected_files_are_counted() {
        let files = vec![demo("target.json"), demo("invalid-total.json")];
        assert_eq!(run_validate(&files).unwrap(), 1);
        assert_eq!(run_score(&files).unwrap(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_receipt(&demo("does-not-exist.json")).is_err());
    }

    #[test]
    fn test_format_breakdown_lists_awarded_rules() {
        let raw = load_receipt(&demo("corner-market.json")).unwrap();
        let text = format_breakdown(&score_breakdown(&validate(&raw).unwrap()));

        assert!(text.contains("Round total"));
        assert!(text.contains("total 9.00 has no cents"));
        assert!(text.contains("hour 14 in 14:00-16:00"));
        assert!(text.contains("109"));
        assert!(!text.contains("Odd purchase day"));
    }
}
