use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::{Algorithm, MatchResult};
use crate::utils::validation::read_document;

#[derive(Args)]
pub struct SearchArgs {
    /// Document to search
    #[arg(required = true)]
    pub document: PathBuf,

    /// Word or phrase to look for (matched verbatim, case-sensitive)
    #[arg(required = true)]
    pub pattern: String,

    /// Matching algorithm
    #[arg(short, long, default_value = "kmp")]
    pub algorithm: Algorithm,

    /// Match regardless of letter case (offsets still refer to the document)
    #[arg(short, long)]
    pub ignore_case: bool,
}

/// Execute the search command
///
/// # Errors
///
/// Returns an error if the document cannot be read or the pattern is empty.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_document(&args.document)?;

    if verbose {
        eprintln!(
            "Searching {} ({} symbols) with {}",
            args.document.display(),
            text.chars().count(),
            args.algorithm
        );
    }

    let result = if args.ignore_case {
        args.algorithm.search_ignore_case(&text, &args.pattern)?
    } else {
        args.algorithm.search(&text, &args.pattern)?
    };

    match format {
        OutputFormat::Text => print_text_result(&args, &result),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "document": args.document.display().to_string(),
                "pattern": args.pattern,
                "algorithm": args.algorithm,
                "ignore_case": args.ignore_case,
                "occurrences": result.len(),
                "positions": result,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("position");
            for position in result.iter() {
                println!("{position}");
            }
        }
    }

    Ok(())
}

fn print_text_result(args: &SearchArgs, result: &MatchResult) {
    println!(
        "{} match for {:?} in {}{}",
        args.algorithm,
        args.pattern,
        args.document.display(),
        if args.ignore_case { " (ignoring case)" } else { "" }
    );
    println!("Occurrences Found: {}", result.len());
    if !result.is_empty() {
        let positions: Vec<String> = result.iter().map(|p| p.to_string()).collect();
        println!("Positions: {}", positions.join(", "));
    }
}
