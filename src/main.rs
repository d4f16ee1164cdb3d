mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::io;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::export_csv_cmd::export_csv_command;
use crate::commands::generate_cmd::generate_command;
use crate::commands::init_params_cmd::init_params_command;
use crate::commands::plot_cmd::plot_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Generate { .. } => generate_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        cmd @ Commands::ExportCsv { .. } => export_csv_command(cmd),
        cmd @ Commands::InitParams { .. } => init_params_command(cmd),
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            clap_complete::generate(shell, &mut cmd, "loadmodel", &mut io::stdout());
        }
    }
}
