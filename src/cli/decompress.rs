use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use tracing::warn;

use crate::cli::sidecar::CodesSidecar;
use crate::cli::OutputFormat;
use crate::compression::HuffmanCodec;
use crate::utils::validation::{check_document_size, read_document};

#[derive(Args)]
pub struct DecompressArgs {
    /// Compressed blob written by `compress`
    #[arg(required = true)]
    pub input: PathBuf,

    /// Code table sidecar (defaults to `<input>.codes.json`)
    #[arg(long)]
    pub codes: Option<PathBuf>,

    /// Where to write the restored text (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Original text file to compare the restored text against
    #[arg(long)]
    pub verify: Option<PathBuf>,
}

/// Execute the decompress command
///
/// # Errors
///
/// Returns an error if the blob or sidecar cannot be read, the stream is
/// corrupt, or verification finds a mismatch.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: DecompressArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sidecar_path = args
        .codes
        .clone()
        .unwrap_or_else(|| CodesSidecar::path_for(&args.input));

    check_document_size(std::fs::metadata(&args.input)?.len())?;
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let sidecar = CodesSidecar::load(&sidecar_path)
        .with_context(|| format!("failed to load code table {}", sidecar_path.display()))?;

    if verbose {
        eprintln!(
            "Input: {} ({} bytes, {} padding bits, {} codes)",
            args.input.display(),
            bytes.len(),
            sidecar.padding_bits,
            sidecar.codes.len()
        );
    }

    let document = sidecar.into_document(bytes);
    let text = HuffmanCodec::decompress(&document)?;

    if let Some(original_path) = &args.verify {
        let original = read_document(original_path)?;
        if original != text {
            warn!(path = %original_path.display(), "restored text differs from original");
            bail!(
                "Decompressed text does not match {}",
                original_path.display()
            );
        }
    }
    let verified = args.verify.is_some();

    let Some(path) = &args.output else {
        print!("{text}");
        return Ok(());
    };
    std::fs::write(path, &text)?;

    match format {
        OutputFormat::Text => {
            println!("Restored {} symbols to {}", document.symbol_count, path.display());
            if verified {
                println!("Verified: matches original");
            }
        }
        OutputFormat::Json => {
            let result = serde_json::json!({
                "input": args.input.display().to_string(),
                "output": path.display().to_string(),
                "symbol_count": document.symbol_count,
                "verified": verified,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Tsv => {
            println!("output\tsymbol_count\tverified");
            println!(
                "{}\t{}\t{}",
                path.display(),
                document.symbol_count,
                verified
            );
        }
    }

    Ok(())
}
