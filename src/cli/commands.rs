use std::time::Instant;

use tracing::info;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::ParallelProcessor;
use crate::utils::progress::ProgressReporter;
use crate::writers::render_report;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Summarize { input, max_workers } => {
            let progress = ProgressReporter::new(
                max_workers as u64,
                "Aggregating measurement chunks...",
                cli.quiet,
            );

            let clock = Instant::now();
            let processor = ParallelProcessor::new(max_workers);
            let summary = processor.summarize_file(&input, Some(&progress))?;
            progress.finish_with_message(&format!("Aggregated {} stations", summary.len()));

            info!(
                stations = summary.len(),
                elapsed_ms = clock.elapsed().as_millis() as u64,
                "aggregation complete"
            );

            // The report is the only thing written to stdout.
            println!("{}", render_report(&summary));
        }

        Commands::Validate { input, max_workers } => {
            let progress = ProgressReporter::new_spinner("Validating measurement file...", cli.quiet);

            let clock = Instant::now();
            let processor = ParallelProcessor::new(max_workers);
            let summary = processor.summarize_file(&input, None)?;

            let records: u64 = summary.values().map(|s| s.count).sum();
            progress.finish_with_message(&format!(
                "Validated {} records across {} stations",
                records,
                summary.len()
            ));

            info!(
                stations = summary.len(),
                records,
                elapsed_ms = clock.elapsed().as_millis() as u64,
                "validation complete"
            );

            println!(
                "OK: {} records, {} stations",
                records,
                summary.len()
            );
        }
    }

    Ok(())
}
