use abp_splitter::cli::Args;
use abp_splitter::{SplitProcessor, SplitterError};
use anyhow::Context;
use clap::Parser;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args);

    let result = tokio::select! {
        result = run(&args) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nReceived CTRL+C, shutting down...");
            Err(anyhow::Error::from(SplitterError::processing_interrupted(
                "Processing interrupted by user",
            )))
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let output_dir = args.get_output_dir();

    let processor = SplitProcessor::new(args.archive_path.clone(), output_dir)
        .with_context(|| format!("Cannot open archive {}", args.archive_path.display()))?
        .with_config(args.to_config());

    processor
        .process()
        .await
        .context("Failed to split AddressBase archive")?;

    Ok(())
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
