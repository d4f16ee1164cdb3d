use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an hourly load series for one month
    Generate {
        /// Path to schedule params YAML
        #[arg(short, long)]
        params: String,
        /// Output YAML file for the generated series
        #[arg(short, long)]
        output: String,
        /// Year of the month to generate
        #[arg(short, long, default_value_t = default_year())]
        year: i32,
        /// Month to generate (1-12)
        #[arg(short, long, default_value_t = default_month())]
        month: u32,
        /// Random seed for reproducible noise
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Plot a load series from YAML into a PNG chart
    Plot {
        /// Load series YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Export a load series from YAML to a CSV table
    ExportCsv {
        /// Load series YAML file
        #[arg(short, long)]
        input: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
    },
    /// Write a starter schedule params YAML
    InitParams {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_year() -> i32 {
    Local::now().year()
}

fn default_month() -> u32 {
    Local::now().month()
}
