use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::sidecar::CodesSidecar;
use crate::cli::OutputFormat;
use crate::compression::{CompressedDocument, CompressionStats, HuffmanCodec};
use crate::utils::validation::read_non_empty_document;

#[derive(Args)]
pub struct CompressArgs {
    /// Text file to compress
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output blob (defaults to the input path with a `.bin` extension).
    /// The code table is written next to it as `<output>.codes.json`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the code assigned to every symbol
    #[arg(long)]
    pub show_codes: bool,
}

/// Execute the compress command
///
/// # Errors
///
/// Returns an error if the input cannot be read or the outputs written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CompressArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_non_empty_document(&args.input)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("bin"));
    let sidecar_path = CodesSidecar::path_for(&output);

    if verbose {
        eprintln!(
            "Input: {} ({} bytes, {} symbols)",
            args.input.display(),
            text.len(),
            text.chars().count()
        );
    }

    let document = HuffmanCodec::compress(&text)?;
    std::fs::write(&output, &document.packed.bytes)?;
    CodesSidecar::from_document(&document).save(&sidecar_path)?;

    let stats = document.stats(text.len());

    match format {
        OutputFormat::Text => print_text_result(&args, &output, &sidecar_path, &document, &stats),
        OutputFormat::Json => print_json_result(&args, &output, &sidecar_path, &document, &stats)?,
        OutputFormat::Tsv => print_tsv_result(&document, &stats),
    }

    Ok(())
}

fn print_text_result(
    args: &CompressArgs,
    output: &Path,
    sidecar_path: &Path,
    document: &CompressedDocument,
    stats: &CompressionStats,
) {
    println!("Compression Results");
    println!("{}", "=".repeat(60));

    println!("\nInput: {}", args.input.display());
    println!("  Original Size: {} bytes", stats.original_bytes);
    println!("  Distinct Symbols: {}", document.codes.len());

    println!("\nOutput: {}", output.display());
    println!("  Compressed Size: {} bytes", stats.compressed_bytes);
    println!("  Padding Bits: {}", document.packed.padding_bits);
    println!("  Code Table: {}", sidecar_path.display());
    println!("  Compression Ratio: {:.2}%", stats.saving_percent);

    if args.show_codes {
        println!("\nHuffman Codes:");
        for (symbol, code) in document.codes.listing() {
            println!("  {symbol}: {code}");
        }
    }
}

fn print_json_result(
    args: &CompressArgs,
    output: &Path,
    sidecar_path: &Path,
    document: &CompressedDocument,
    stats: &CompressionStats,
) -> anyhow::Result<()> {
    let mut result = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": output.display().to_string(),
        "codes_path": sidecar_path.display().to_string(),
        "symbol_count": document.symbol_count,
        "distinct_symbols": document.codes.len(),
        "padding_bits": document.packed.padding_bits,
        "stats": stats,
    });

    if args.show_codes {
        let codes: Vec<serde_json::Value> = document
            .codes
            .listing()
            .into_iter()
            .map(|(symbol, code)| serde_json::json!({ "symbol": symbol, "code": code }))
            .collect();
        result["codes"] = serde_json::Value::Array(codes);
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_tsv_result(document: &CompressedDocument, stats: &CompressionStats) {
    println!("original_bytes\tcompressed_bytes\tsaving_percent\tpadding_bits\tdistinct_symbols");
    println!(
        "{}\t{}\t{:.4}\t{}\t{}",
        stats.original_bytes,
        stats.compressed_bytes,
        stats.saving_percent,
        document.packed.padding_bits,
        document.codes.len(),
    );
}
