use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brc-processor")]
#[command(about = "High-performance per-station temperature aggregator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a measurement file and print the sorted summary line
    Summarize {
        #[arg(short, long, help = "Input measurement file (name;temperature lines)")]
        input: PathBuf,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Check that a measurement file is well-formed without printing a summary
    Validate {
        #[arg(short, long, help = "Input measurement file (name;temperature lines)")]
        input: PathBuf,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },
}
