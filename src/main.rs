use clap::Parser;
use tracing_subscriber::EnvFilter;

use doc_analyzer::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("doc_analyzer=debug,info")
    } else {
        EnvFilter::new("doc_analyzer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Compress(args) => {
            cli::compress::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Decompress(args) => {
            cli::decompress::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
