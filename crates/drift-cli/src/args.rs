//! Command-line argument definitions for the Drift CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Graph-shape and canvas flags override the corresponding
//! values from the configuration file.

use clap::Parser;

/// Command-line arguments for the Drift layout tool
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of vertices in the generated graph
    #[arg(short = 'n', long)]
    pub vertices: Option<usize>,

    /// Number of edges in the generated graph
    #[arg(short, long)]
    pub edges: Option<usize>,

    /// Canvas width
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height
    #[arg(long)]
    pub height: Option<f64>,

    /// Seed for reproducible graphs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
