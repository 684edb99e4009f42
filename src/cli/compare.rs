use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::Algorithm;
use crate::similarity::{ScoringConfig, SimilarityReport, SimilarityScorer};
use crate::utils::validation::read_document;

#[derive(Args)]
pub struct CompareArgs {
    /// Document whose phrases are checked
    #[arg(required = true)]
    pub source: PathBuf,

    /// Document the phrases are searched in
    #[arg(required = true)]
    pub comparison: PathBuf,

    /// Words per phrase
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
    pub window: u32,

    /// Matching algorithm
    #[arg(short, long, default_value = "kmp")]
    pub algorithm: Algorithm,

    /// Also score the comparison document against the source
    #[arg(long)]
    pub symmetric: bool,
}

/// Execute the compare command
///
/// # Errors
///
/// Returns an error if either document cannot be read.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let source = read_document(&args.source)?;
    let comparison = read_document(&args.comparison)?;

    if verbose {
        eprintln!(
            "Source: {} words, comparison: {} words, {}-word phrases, {}",
            source.split_whitespace().count(),
            comparison.split_whitespace().count(),
            args.window,
            args.algorithm
        );
    }

    let scorer = SimilarityScorer::with_config(ScoringConfig {
        window_size: args.window as usize,
        algorithm: args.algorithm,
    });

    let forward = scorer.score(&source, &comparison)?;
    let reverse = if args.symmetric {
        Some(scorer.score(&comparison, &source)?)
    } else {
        None
    };

    match format {
        OutputFormat::Text => {
            print_text_report(&args, &forward, "");
            if let Some(ref reverse) = reverse {
                println!("\n{}", "─".repeat(60));
                print_text_report(&args, reverse, " (reverse)");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": args.source.display().to_string(),
                "comparison": args.comparison.display().to_string(),
                "forward": forward,
                "reverse": reverse,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("direction\ttotal_phrases\tmatched_phrases\tpercentage\tlevel");
            print_tsv_row("forward", &forward);
            if let Some(ref reverse) = reverse {
                print_tsv_row("reverse", reverse);
            }
        }
    }

    Ok(())
}

fn print_text_report(args: &CompareArgs, report: &SimilarityReport, suffix: &str) {
    let (from, to) = if suffix.is_empty() {
        (&args.source, &args.comparison)
    } else {
        (&args.comparison, &args.source)
    };

    println!("Similarity{}: {} vs {}", suffix, from.display(), to.display());
    println!("{}", "=".repeat(60));
    println!("  Algorithm: {}", report.algorithm);
    println!("  Phrase Length: {} words", report.window_size);
    println!("  Phrases Checked: {}", report.total_phrases);
    println!("  Phrases Matched: {}", report.matched_phrases);
    println!(
        "  Similarity: {:.2}% ({})",
        report.percentage, report.level
    );

    if report.matches.is_empty() {
        println!("\nNo matching phrases found.");
        return;
    }

    println!("\nMatching Phrases:");
    for m in &report.matches {
        let positions: Vec<String> = m.positions.iter().map(|p| p.to_string()).collect();
        println!("  '{}' found at positions [{}]", m.phrase, positions.join(", "));
    }
}

fn print_tsv_row(direction: &str, report: &SimilarityReport) {
    println!(
        "{}\t{}\t{}\t{:.4}\t{}",
        direction, report.total_phrases, report.matched_phrases, report.percentage, report.level
    );
}
