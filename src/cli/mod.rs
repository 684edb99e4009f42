//! Command-line interface for doc-analyzer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compress**: Huffman-compress a text file into a blob plus code sidecar
//! - **decompress**: Restore a text file from a blob and its sidecar
//! - **search**: Find every occurrence of a phrase in a document
//! - **compare**: Score phrase-level similarity between two documents
//!
//! ## Usage
//!
//! ```text
//! # Compress, printing the code book
//! doc-analyzer compress essay.txt -o essay.bin --show-codes
//!
//! # Decompress and check against the original
//! doc-analyzer decompress essay.bin -o restored.txt --verify essay.txt
//!
//! # Search with Rabin-Karp
//! doc-analyzer search essay.txt "computer science" -a rabin-karp
//!
//! # Plagiarism check with 5-word phrases, JSON output
//! doc-analyzer compare essay.txt source.txt -w 5 --format json
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod compress;
pub mod decompress;
pub mod search;
pub mod sidecar;

#[derive(Parser)]
#[command(name = "doc-analyzer")]
#[command(version)]
#[command(about = "Compare documents for shared phrases and compress them with Huffman coding")]
#[command(
    long_about = "doc-analyzer runs a small document analysis engine over text files.\n\nIt provides:\n- Huffman compression with a JSON code table sidecar\n- Naive, KMP and Rabin-Karp phrase search\n- Phrase-window similarity scoring between two documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a text file
    Compress(compress::CompressArgs),

    /// Decompress a blob produced by `compress`
    Decompress(decompress::DecompressArgs),

    /// Search a document for a word or phrase
    Search(search::SearchArgs),

    /// Score how much of one document appears in another
    Compare(compare::CompareArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
