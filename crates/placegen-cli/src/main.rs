mod collect;
mod output;
mod prompt;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placegen")]
#[command(version, about = "Collect nearby places for a location and keyword into a CSV file")]
struct Cli {
    /// Directory to write the CSV into (overrides PLACEGEN_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = placegen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    tracing::debug!(?config, "configuration loaded");

    let started = Instant::now();
    let mut prompter = prompt::TerminalPrompter::default();
    let summary = collect::run_collection(&config, &mut prompter).await?;
    let elapsed = started.elapsed();

    tracing::info!(
        location = %summary.location,
        keyword = %summary.keyword,
        area_results = summary.area_results,
        tile_results = summary.tile_results,
        unique_places = summary.unique_places,
        rejected_details = summary.rejected_details,
        elapsed_secs = elapsed.as_secs_f64(),
        "collection complete"
    );

    println!(
        "Wrote {} places to {}",
        summary.places_written,
        summary.output_path.display()
    );
    if summary.rejected_details > 0 {
        println!(
            "{} places were skipped because their details could not be fetched",
            summary.rejected_details
        );
    }
    println!("Elapsed time: {:.2} seconds", elapsed.as_secs_f64());

    Ok(())
}
