use anyhow::Result;
use clap::Parser;
use ensembl_hgnc::{cli, pipeline};
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    // Exits with a usage error before any I/O when zero or both header flags are given.
    let args = cli::Args::parse();

    // Initialize tracing subscriber
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            if args.quiet {
                EnvFilter::new("warn")
            } else {
                EnvFilter::new("info")
            }
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.run_config()?;
    tracing::debug!(?config, "resolved run configuration");
    let stats = pipeline::run(&config)?;
    tracing::info!(
        rows = stats.rows,
        resolved = stats.resolved,
        unknown = stats.unknown,
        output = %config.output.display(),
        "ensembl-hgnc: annotation complete"
    );
    Ok(())
}
