use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Suitegrid - execution-plan generator for browser e2e test suites
#[derive(Parser, Debug)]
#[command(name = "suitegrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Composite project key: tenant-environment-geography
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// User alias whose captured session the suite signs in with
    #[arg(long, global = true)]
    pub alias: Option<String>,

    /// Machine-readable output for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the execution plan and emit it as JSON
    Generate {
        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check parameters and plan construction without emitting a plan
    Validate,

    /// List built-in device profiles
    Devices,
}
